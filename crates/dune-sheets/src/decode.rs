//! Decoding validated sheets into survey entities.
//!
//! Rows are keyed by `(sitename, date, transect)`. A row whose key cannot be
//! formed is skipped and counted; it never aborts decoding.

use dune_config::SheetsConfig;
use dune_core::entities::{Boundaries, Observation, ReferenceEntry, SurveyTables, Transect};
use dune_core::keys::{TransectKey, normalize_text};
use tracing::{debug, warn};

use crate::error::SheetError;
use crate::layout::{SheetRole, SheetSpec, layout};
use crate::sheet::{Row, Sheet};
use crate::workbook::Workbook;

/// Decode a workbook into the three survey tables.
///
/// # Errors
///
/// Returns [`SheetError::MissingSheet`] or [`SheetError::MissingColumn`] when
/// the workbook does not match the survey layout.
pub fn decode(workbook: &Workbook, config: &SheetsConfig) -> Result<SurveyTables, SheetError> {
    let layout = layout();
    layout.validate(workbook, config)?;

    let positional = workbook.require(&config.positional)?;
    let transects = workbook.require(&config.transects)?;
    let readme = workbook.require(&config.readme)?;

    let (transects_out, skipped_positional_rows) =
        decode_transects(positional, layout.spec(SheetRole::Positional));
    let (observations, skipped_observation_rows) =
        decode_observations(transects, layout.spec(SheetRole::Transects));
    let references = decode_references(readme, layout.spec(SheetRole::ReadMe));
    let has_elevation = workbook.sheet(&config.elevation).is_some();

    debug!(
        transects = transects_out.len(),
        observations = observations.len(),
        references = references.len(),
        has_elevation,
        "decoded survey workbook"
    );

    Ok(SurveyTables {
        transects: transects_out,
        observations,
        references,
        skipped_positional_rows,
        skipped_observation_rows,
        has_elevation,
    })
}

/// Column indices of the composite key.
struct KeyColumns {
    site: Option<usize>,
    date: Option<usize>,
    transect: Option<usize>,
}

impl KeyColumns {
    fn resolve(spec: &SheetSpec, sheet: &Sheet) -> Self {
        Self {
            site: spec.resolve(sheet, "sitename"),
            date: spec.resolve(sheet, "date"),
            transect: spec.resolve(sheet, "transect"),
        }
    }

    fn key(&self, row: &Row<'_>) -> Option<TransectKey> {
        let site = row.get(self.site).as_text()?;
        let date = row.get(self.date).as_date_text()?;
        let transect = row.get(self.transect).as_text()?;
        TransectKey::from_parts(&site, &date, &transect)
    }
}

fn decode_transects(sheet: &Sheet, spec: &SheetSpec) -> (Vec<Transect>, usize) {
    let key = KeyColumns::resolve(spec, sheet);
    let hts = spec.resolve(sheet, "HTS");
    let eastend = spec.resolve(sheet, "eastend");
    let toe_sea = spec.resolve(sheet, "toe_sea");
    let toe_in = spec.resolve(sheet, "toe_in");
    let lowest_veg = spec.resolve(sheet, "lowest_veg");

    let mut transects = Vec::with_capacity(sheet.len());
    let mut skipped = 0;
    for row in sheet.rows() {
        let Some(key) = key.key(&row) else {
            warn!(
                sheet = sheet.name(),
                row = row.number(),
                "skipping positional row without site/date/transect"
            );
            skipped += 1;
            continue;
        };

        transects.push(Transect {
            key,
            boundaries: Boundaries {
                eastend: row.get(eastend).as_f64(),
                hts: row.get(hts).as_f64(),
                toe_sea: row.get(toe_sea).as_f64(),
                toe_in: row.get(toe_in).as_f64(),
                lowest_veg: row.get(lowest_veg).as_f64(),
            },
        });
    }

    (transects, skipped)
}

fn decode_observations(sheet: &Sheet, spec: &SheetSpec) -> (Vec<Observation>, usize) {
    let key = KeyColumns::resolve(spec, sheet);
    let code_col = spec.resolve(sheet, "type");
    let start = spec.resolve(sheet, "start");
    let end = spec.resolve(sheet, "end");
    let length_col = spec.resolve(sheet, "cor_length");

    let mut observations = Vec::with_capacity(sheet.len());
    let mut skipped = 0;
    for row in sheet.rows() {
        let (Some(key), Some(code)) = (key.key(&row), row.get(code_col).as_text()) else {
            warn!(
                sheet = sheet.name(),
                row = row.number(),
                "skipping observation row without site/date/transect/type"
            );
            skipped += 1;
            continue;
        };

        let cor_length = row.get(length_col).as_f64().unwrap_or_else(|| {
            debug!(sheet = sheet.name(), row = row.number(), "blank cor_length counted as 0");
            0.0
        });

        observations.push(Observation {
            key,
            code,
            start: row.get(start).as_f64(),
            end: row.get(end).as_f64(),
            cor_length,
        });
    }

    (observations, skipped)
}

fn decode_references(sheet: &Sheet, spec: &SheetSpec) -> Vec<ReferenceEntry> {
    let code_col = spec.resolve(sheet, "name");
    let native = spec.resolve(sheet, "native");
    let cover_type = spec.resolve(sheet, "codetype");
    let common_name = spec.resolve(sheet, "common_name");

    sheet
        .rows()
        .filter_map(|row| {
            let Some(code) = row.get(code_col).as_text() else {
                debug!(sheet = sheet.name(), row = row.number(), "reference row without a code");
                return None;
            };
            Some(ReferenceEntry {
                code,
                name: row.get(common_name).as_text(),
                native: row.get(native).as_flag(),
                cover_type: row
                    .get(cover_type)
                    .as_text()
                    .and_then(|text| normalize_text(&text)),
            })
        })
        .collect()
}
