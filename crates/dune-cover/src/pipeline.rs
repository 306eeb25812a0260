//! The pipeline orchestrator.
//!
//! Stages run in a fixed order: deduplicate transects, resolve reference
//! codes, classify zones, declare axes, then compute one column per
//! `(axis, zone)` pair. Output rows follow positional-sheet order and
//! generated columns follow first-seen order of cover types and codes, so
//! the result is a pure function of the input tables.

use std::collections::{HashMap, HashSet};

use dune_config::CoverConfig;
use dune_core::axes::Axis;
use dune_core::diagnostics::RunDiagnostics;
use dune_core::entities::{SurveyTables, Transect};
use dune_core::keys::TransectKey;
use dune_core::table::{CoverTable, CoverTableBuilder};
use dune_core::zones::Zone;
use tracing::{debug, warn};

use crate::aggregate::{ClassifiedObservation, axis_sums, percent_cover};
use crate::reference::ReferenceResolver;
use crate::zones::classify;

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverRun {
    pub table: CoverTable,
    pub diagnostics: RunDiagnostics,
}

/// Code and cover type of one resolved observation, used to declare axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCode {
    pub code: String,
    pub cover_type: String,
}

/// Compute the cover table for a decoded survey.
///
/// When two axes generate the same column name, the axis declared first
/// keeps the column and the later one is dropped from the table. Each
/// dropped name is logged and listed in `column_collisions`.
#[must_use]
pub fn run(tables: &SurveyTables, config: &CoverConfig) -> CoverRun {
    let mut diagnostics = RunDiagnostics {
        positional_rows: tables.transects.len() + tables.skipped_positional_rows,
        observation_rows: tables.observations.len() + tables.skipped_observation_rows,
        reference_rows: tables.references.len(),
        skipped_positional_rows: tables.skipped_positional_rows,
        skipped_observation_rows: tables.skipped_observation_rows,
        ..RunDiagnostics::default()
    };

    let transects = unique_transects(&tables.transects, &mut diagnostics);
    let by_key: HashMap<&TransectKey, &Transect> =
        transects.iter().map(|t| (&t.key, *t)).collect();

    let resolver = ReferenceResolver::new(&tables.references, config);
    debug!(codes = resolver.len(), "built reference lookup");

    let mut resolved_codes = Vec::with_capacity(tables.observations.len());
    let mut classified = Vec::with_capacity(tables.observations.len());
    let mut unresolved = HashSet::new();
    for observation in &tables.observations {
        let code = resolver.normalize(&observation.code);
        let resolution = resolver.resolve(&code);
        if !resolution.resolved && unresolved.insert(code.clone()) {
            diagnostics.unresolved_codes.push(code.clone());
        }
        resolved_codes.push(ResolvedCode {
            code: code.clone(),
            cover_type: resolution.cover_type.clone(),
        });

        let Some(transect) = by_key.get(&observation.key) else {
            diagnostics.orphan_observations += 1;
            continue;
        };
        classified.push(ClassifiedObservation {
            key: observation.key.clone(),
            code,
            native: resolution.native,
            cover_type: resolution.cover_type,
            zones: classify(&transect.boundaries, observation.start, observation.end),
            cor_length: observation.cor_length,
        });
    }
    debug!(
        classified = classified.len(),
        orphans = diagnostics.orphan_observations,
        "classified observations"
    );
    if diagnostics.orphan_observations > 0 {
        warn!(
            count = diagnostics.orphan_observations,
            "observations reference transects missing from the positional sheet"
        );
    }
    if !diagnostics.unresolved_codes.is_empty() {
        warn!(
            codes = ?diagnostics.unresolved_codes,
            "codes missing from the reference sheet"
        );
    }

    let axes = declare_axes(&resolved_codes, config);
    let owned: Vec<Transect> = transects.iter().map(|t| (*t).clone()).collect();
    let mut builder = CoverTableBuilder::new(&owned);
    for axis in axes {
        for zone in Zone::ALL {
            let sums = axis_sums(&classified, &axis, zone);
            let name = axis.column_name(zone);
            let pushed = builder.push_column(axis.clone(), zone, |row| {
                let sum = sums.get(&row.key).copied().unwrap_or(0.0);
                percent_cover(sum, row.zone_length(zone))
            });
            if !pushed {
                warn!(column = %name, axis = axis.kind(), "generated column name collides");
                diagnostics.column_collisions.push(name);
            }
        }
    }

    for row in builder.rows() {
        if !is_defined(row.dune_length) {
            diagnostics.undefined_dune_zones.push(row.key.id());
        }
        if !is_defined(row.veg_length) {
            diagnostics.undefined_veg_zones.push(row.key.id());
        }
    }

    let table = builder.build();
    debug!(
        rows = table.rows().len(),
        columns = table.columns().len(),
        "assembled cover table"
    );

    CoverRun { table, diagnostics }
}

/// Aggregation axes in column order.
///
/// `all` comes first, then each cover type, then the native and non-native
/// subsets of the plant cover type, then each species code. Cover types and
/// codes appear in first-seen order.
///
/// Labels are not disambiguated: a species code spelled like a cover type
/// (`WRACK` as both) yields the same column name, and the cover type wins
/// because it is declared first.
#[must_use]
pub fn declare_axes(resolved: &[ResolvedCode], config: &CoverConfig) -> Vec<Axis> {
    let mut axes = vec![Axis::All];

    if config.include_cover_types {
        let mut seen = HashSet::new();
        axes.extend(
            resolved
                .iter()
                .filter(|r| seen.insert(r.cover_type.as_str()))
                .map(|r| Axis::CoverType {
                    cover_type: r.cover_type.clone(),
                }),
        );
    }

    axes.extend([true, false].map(|native| Axis::NativeStatus {
        cover_type: config.plant_cover_type.clone(),
        native,
    }));

    if config.include_species {
        let mut seen = HashSet::new();
        axes.extend(
            resolved
                .iter()
                .filter(|r| seen.insert(r.code.as_str()))
                .map(|r| Axis::Species {
                    code: r.code.clone(),
                }),
        );
    }

    axes
}

/// Keep the first transect per key, recording later duplicates.
fn unique_transects<'a>(
    transects: &'a [Transect],
    diagnostics: &mut RunDiagnostics,
) -> Vec<&'a Transect> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(transects.len());
    for transect in transects {
        if seen.insert(&transect.key) {
            unique.push(transect);
        } else {
            warn!(transect = %transect.key, "duplicate transect key; keeping the first row");
            diagnostics.duplicate_transects.push(transect.key.id());
        }
    }
    unique
}

fn is_defined(length: f64) -> bool {
    length.is_finite() && length != 0.0
}
