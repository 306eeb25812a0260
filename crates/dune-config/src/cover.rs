//! Cover pipeline settings: category names and axis toggles.

use serde::{Deserialize, Serialize};

fn default_dead_marker() -> String {
    String::from("-D")
}

fn default_dead_cover_type() -> String {
    String::from("Dead Terrestrial Plant")
}

fn default_unknown_cover_type() -> String {
    String::from("Unknown")
}

fn default_plant_cover_type() -> String {
    String::from("Terrestrial Plant")
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CoverConfig {
    /// Substring marking a dead-plant code (e.g. `AMAR-D`).
    #[serde(default = "default_dead_marker")]
    pub dead_marker: String,

    /// Cover type forced onto codes carrying the dead marker.
    #[serde(default = "default_dead_cover_type")]
    pub dead_cover_type: String,

    /// Cover type assigned to codes missing from the reference sheet.
    #[serde(default = "default_unknown_cover_type")]
    pub unknown_cover_type: String,

    /// Cover type split into native and non-native columns.
    #[serde(default = "default_plant_cover_type")]
    pub plant_cover_type: String,

    /// Upper-case codes before lookup so `abma` and `ABMA` are one species.
    #[serde(default = "default_true")]
    pub uppercase_codes: bool,

    /// Emit one column set per distinct cover type.
    #[serde(default = "default_true")]
    pub include_cover_types: bool,

    /// Emit one column set per distinct species code.
    #[serde(default = "default_true")]
    pub include_species: bool,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            dead_marker: default_dead_marker(),
            dead_cover_type: default_dead_cover_type(),
            unknown_cover_type: default_unknown_cover_type(),
            plant_cover_type: default_plant_cover_type(),
            uppercase_codes: true,
            include_cover_types: true,
            include_species: true,
        }
    }
}
