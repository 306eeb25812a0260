use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One row of the species/cover reference ("ReadMe") sheet.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReferenceEntry {
    /// Code as recorded in the observation sheet's `type` column.
    pub code: String,
    /// Human-readable species or cover name, when the sheet has one.
    pub name: Option<String>,
    /// `None` when the native status is blank or unrecognized.
    pub native: Option<bool>,
    pub cover_type: Option<String>,
}
