//! CSV export of the cover table.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use dune_config::OutputConfig;
use dune_core::table::CoverTable;
use tracing::debug;

use crate::error::CoverError;

/// File name used when the export target is a directory.
pub const DEFAULT_EXPORT_NAME: &str = "processed_transect_data.csv";

/// How numeric cells are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Text written for undefined (NaN) values.
    pub na_rep: String,
    /// Fixed decimal places; `None` writes the shortest exact representation.
    pub precision: Option<u32>,
}

impl From<&OutputConfig> for ExportOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            na_rep: config.na_rep.clone(),
            precision: config.precision,
        }
    }
}

impl ExportOptions {
    #[must_use]
    pub fn format_number(&self, value: f64) -> String {
        if !value.is_finite() {
            return self.na_rep.clone();
        }
        match self.precision {
            Some(precision) => format!("{value:.*}", precision as usize),
            None => value.to_string(),
        }
    }
}

/// Write `table` as CSV, header row first.
///
/// # Errors
///
/// Returns [`CoverError::Csv`] if a record cannot be written.
pub fn write_csv<W: Write>(
    table: &CoverTable,
    writer: W,
    options: &ExportOptions,
) -> Result<(), CoverError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(table.headers())?;
    for record in table.records(|value| options.format_number(value)) {
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Render `table` as a CSV string.
///
/// # Errors
///
/// Returns [`CoverError`] if serialization fails.
pub fn to_csv_string(table: &CoverTable, options: &ExportOptions) -> Result<String, CoverError> {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer, options)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write `table` to `path`. A directory target gets [`DEFAULT_EXPORT_NAME`].
///
/// Returns the path actually written.
///
/// # Errors
///
/// Returns [`CoverError::Io`] if the file cannot be created and
/// [`CoverError::Csv`] if writing fails.
pub fn write_csv_file(
    table: &CoverTable,
    path: &Path,
    options: &ExportOptions,
) -> Result<PathBuf, CoverError> {
    let target = if path.is_dir() {
        path.join(DEFAULT_EXPORT_NAME)
    } else {
        path.to_path_buf()
    };
    let file = File::create(&target)?;
    write_csv(table, file, options)?;
    debug!(path = %target.display(), rows = table.rows().len(), "wrote csv export");
    Ok(target)
}
