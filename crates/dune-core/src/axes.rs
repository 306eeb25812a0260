//! Aggregation axes and generated column naming.
//!
//! An axis selects the subset of observations whose corrected length is
//! summed into the numerator of a percent-cover value. Each axis is paired
//! with every [`Zone`] to produce one output column named
//! `pctcov_<label>_<zone>`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::zones::Zone;

/// Prefix shared by every generated percent-cover column.
pub const PCTCOV_PREFIX: &str = "pctcov_";

/// One aggregation axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Axis {
    /// Every observation.
    All,
    /// Observations whose resolved cover type equals `cover_type`.
    CoverType { cover_type: String },
    /// Observations of `cover_type` with the given native status.
    NativeStatus { cover_type: String, native: bool },
    /// Observations of one species/cover code.
    Species { code: String },
}

impl Axis {
    /// Label used between the prefix and the zone suffix.
    ///
    /// Whitespace is stripped, so "Terrestrial Plant" becomes
    /// "TerrestrialPlant" and its native subset "TerrestrialPlantNative".
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::All => String::from("all"),
            Self::CoverType { cover_type } => strip_whitespace(cover_type),
            Self::NativeStatus { cover_type, native } => {
                let status = if *native { "Native" } else { "Nonnative" };
                format!("{}{status}", strip_whitespace(cover_type))
            }
            Self::Species { code } => strip_whitespace(code),
        }
    }

    /// Generated column name for this axis over `zone`.
    #[must_use]
    pub fn column_name(&self, zone: Zone) -> String {
        format!("{PCTCOV_PREFIX}{}_{}", self.label(), zone.as_str())
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::CoverType { .. } => "cover_type",
            Self::NativeStatus { .. } => "native_status",
            Self::Species { .. } => "species",
        }
    }
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Axis::All, Zone::Whole, "pctcov_all_whole")]
    #[case(
        Axis::CoverType { cover_type: "Terrestrial Plant".into() },
        Zone::Dune,
        "pctcov_TerrestrialPlant_dune"
    )]
    #[case(
        Axis::NativeStatus { cover_type: "Terrestrial Plant".into(), native: true },
        Zone::Veg,
        "pctcov_TerrestrialPlantNative_veg"
    )]
    #[case(
        Axis::NativeStatus { cover_type: "Terrestrial Plant".into(), native: false },
        Zone::Whole,
        "pctcov_TerrestrialPlantNonnative_whole"
    )]
    #[case(Axis::Species { code: "ABMA".into() }, Zone::Whole, "pctcov_ABMA_whole")]
    fn column_names_follow_convention(#[case] axis: Axis, #[case] zone: Zone, #[case] name: &str) {
        assert_eq!(axis.column_name(zone), name);
    }

    #[test]
    fn axis_serializes_with_kind_tag() {
        let json = serde_json::to_value(Axis::Species { code: "ABMA".into() }).expect("json");
        assert_eq!(json["kind"], "species");
        assert_eq!(json["code"], "ABMA");
    }
}
