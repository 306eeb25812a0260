use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::keys::TransectKey;

/// One measured interval along a transect.
///
/// `cor_length` is the overlap-corrected length attributed to `code`; it is
/// recorded in the workbook and never recomputed from `start`/`end`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Observation {
    pub key: TransectKey,
    pub code: String,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub cor_length: f64,
}
