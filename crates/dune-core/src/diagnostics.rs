//! Run diagnostics: every recovered condition the pipeline absorbed.
//!
//! The pipeline never fails once the required sheets are present. Instead
//! of surfacing recoverable problems as errors it counts them here so the
//! caller can report them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RunDiagnostics {
    pub positional_rows: usize,
    pub observation_rows: usize,
    pub reference_rows: usize,
    /// Positional rows without a complete (site, date, transect) key.
    pub skipped_positional_rows: usize,
    /// Observation rows without a complete (site, date, transect) key.
    pub skipped_observation_rows: usize,
    /// Transect keys that appeared more than once on the positional sheet.
    /// Only the first occurrence is kept.
    pub duplicate_transects: Vec<String>,
    /// Observations whose transect is absent from the positional sheet.
    pub orphan_observations: usize,
    /// Distinct observation codes with no reference entry, first-seen order.
    pub unresolved_codes: Vec<String>,
    /// Transects whose dune length is zero or undefined.
    pub undefined_dune_zones: Vec<String>,
    /// Transects whose vegetated length is zero or undefined.
    pub undefined_veg_zones: Vec<String>,
    /// Generated column names dropped because an earlier axis produced the same name.
    pub column_collisions: Vec<String>,
}

impl RunDiagnostics {
    /// Whether the run absorbed any recoverable condition.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped_positional_rows == 0
            && self.skipped_observation_rows == 0
            && self.duplicate_transects.is_empty()
            && self.orphan_observations == 0
            && self.unresolved_codes.is_empty()
            && self.undefined_dune_zones.is_empty()
            && self.undefined_veg_zones.is_empty()
            && self.column_collisions.is_empty()
    }
}
