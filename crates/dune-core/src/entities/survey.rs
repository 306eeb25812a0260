use serde::{Deserialize, Serialize};

use super::{Observation, ReferenceEntry, Transect};

/// The decoded contents of one survey workbook.
///
/// Produced by the ingestion layer and consumed read-only by the cover
/// pipeline. Row counts that could not be keyed are carried along so the
/// pipeline can report them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SurveyTables {
    pub transects: Vec<Transect>,
    pub observations: Vec<Observation>,
    pub references: Vec<ReferenceEntry>,
    /// Positional rows skipped because their composite key could not be formed.
    pub skipped_positional_rows: usize,
    /// Observation rows skipped because their composite key could not be formed.
    pub skipped_observation_rows: usize,
    /// Whether the workbook carried an elevation sheet.
    pub has_elevation: bool,
}
