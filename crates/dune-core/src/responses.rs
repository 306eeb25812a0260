//! CLI response types returned as JSON by `dune` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::diagnostics::RunDiagnostics;
use crate::table::{CoverColumn, CoverTable};

/// Response from `dune process`.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq)]
pub struct ProcessResponse {
    pub source: String,
    pub table: CoverTable,
    pub diagnostics: RunDiagnostics,
}

/// Response from `dune columns`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ColumnsResponse {
    pub source: String,
    pub base_columns: Vec<String>,
    pub columns: Vec<CoverColumn>,
}

/// Presence and size of one workbook sheet.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SheetSummary {
    pub role: String,
    pub name: String,
    pub present: bool,
    pub required: bool,
    pub rows: usize,
    pub missing_columns: Vec<String>,
}

/// Response from `dune check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckResponse {
    pub source: String,
    pub valid: bool,
    pub sheets: Vec<SheetSummary>,
    /// Present only when every required sheet and column was found.
    pub diagnostics: Option<RunDiagnostics>,
}
