//! Workbook sheet names.

use serde::{Deserialize, Serialize};

fn default_positional() -> String {
    String::from("PositionalCharacteristics")
}

fn default_transects() -> String {
    String::from("Transects")
}

fn default_readme() -> String {
    String::from("ReadMe")
}

fn default_elevation() -> String {
    String::from("Elevation")
}

/// Names of the sheets read from a survey workbook.
///
/// Matching against the workbook is case-insensitive and ignores
/// surrounding whitespace.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SheetsConfig {
    /// One row per transect with boundary positions.
    #[serde(default = "default_positional")]
    pub positional: String,

    /// One row per observed interval.
    #[serde(default = "default_transects")]
    pub transects: String,

    /// Species/cover reference table.
    #[serde(default = "default_readme")]
    pub readme: String,

    /// Optional elevation profile; not used by the cover pipeline.
    #[serde(default = "default_elevation")]
    pub elevation: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            positional: default_positional(),
            transects: default_transects(),
            readme: default_readme(),
            elevation: default_elevation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_template_sheet_names() {
        let config = SheetsConfig::default();
        assert_eq!(config.positional, "PositionalCharacteristics");
        assert_eq!(config.transects, "Transects");
        assert_eq!(config.readme, "ReadMe");
        assert_eq!(config.elevation, "Elevation");
    }
}
