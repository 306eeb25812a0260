//! Spatial zones of a transect.
//!
//! Every transect is aggregated over three zones: the whole transect, the
//! dune band between the inward and seaward dune toes, and the vegetated
//! portion landward of the lowest vegetation line.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Zone over which percent cover is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Whole,
    Dune,
    Veg,
}

impl Zone {
    /// All zones, in output column order.
    pub const ALL: [Self; 3] = [Self::Whole, Self::Dune, Self::Veg];

    /// Suffix used in generated column names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Whole => "whole",
            Self::Dune => "dune",
            Self::Veg => "veg",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zone membership of one observation.
///
/// Every observation belongs to [`Zone::Whole`]; the dune and vegetation
/// flags are computed by the zone classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ZoneFlags {
    pub in_dune: bool,
    pub in_veg: bool,
}

impl ZoneFlags {
    #[must_use]
    pub const fn contains(self, zone: Zone) -> bool {
        match zone {
            Zone::Whole => true,
            Zone::Dune => self.in_dune,
            Zone::Veg => self.in_veg,
        }
    }
}
