//! Output rendering settings.

use serde::{Deserialize, Serialize};

/// Default rendering for command output.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormatSetting {
    #[default]
    Json,
    Table,
    Csv,
    Raw,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormatSetting,

    /// Text written for undefined (NaN) values in CSV and table output.
    #[serde(default)]
    pub na_rep: String,

    /// Decimal places for rendered numbers; full precision when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
}
