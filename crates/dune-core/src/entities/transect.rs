use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::keys::TransectKey;

/// Boundary positions recorded on the positional sheet.
///
/// Positions are distances along the transect line. Any of them may be blank
/// in the workbook.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Boundaries {
    /// Landward start of the transect (`eastend`). Treated as 0 when blank.
    pub eastend: Option<f64>,
    /// Seaward end of the transect (`HTS`).
    pub hts: Option<f64>,
    /// Seaward dune toe (`toe_sea`).
    pub toe_sea: Option<f64>,
    /// Inward dune toe (`toe_in`).
    pub toe_in: Option<f64>,
    /// Position of the lowest vegetation (`lowest_veg`).
    pub lowest_veg: Option<f64>,
}

/// One surveyed transect: its key plus boundary positions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Transect {
    pub key: TransectKey,
    pub boundaries: Boundaries,
}

impl Transect {
    /// Whole transect length, `|HTS - eastend|`. NaN when `HTS` is blank.
    #[must_use]
    pub fn tran_length(&self) -> f64 {
        span(self.origin(), self.boundaries.hts)
    }

    /// Dune band width, `|toe_sea - toe_in|`. NaN when either toe is blank.
    #[must_use]
    pub fn dune_length(&self) -> f64 {
        span(self.boundaries.toe_in, self.boundaries.toe_sea)
    }

    /// Vegetated length, `|lowest_veg - eastend|`. NaN when `lowest_veg` is blank.
    #[must_use]
    pub fn veg_length(&self) -> f64 {
        span(self.origin(), self.boundaries.lowest_veg)
    }

    fn origin(&self) -> Option<f64> {
        Some(self.boundaries.eastend.unwrap_or(0.0))
    }
}

fn span(from: Option<f64>, to: Option<f64>) -> f64 {
    match (from, to) {
        (Some(from), Some(to)) => (to - from).abs(),
        _ => f64::NAN,
    }
}
