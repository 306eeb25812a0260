//! Zone classification of observation intervals.
//!
//! The dune test is "any overlap": an interval is in the dune zone when
//! either endpoint lies in `[toe_in, toe_sea]`. The vegetation test looks at
//! the start position only. The two tests are intentionally asymmetric and an
//! interval straddling a boundary is attributed on these rules alone.
//!
//! A blank boundary or position never matches.

use dune_core::entities::Boundaries;
use dune_core::zones::ZoneFlags;

/// Zone membership of the interval `start..end` on a transect.
#[must_use]
pub fn classify(boundaries: &Boundaries, start: Option<f64>, end: Option<f64>) -> ZoneFlags {
    ZoneFlags {
        in_dune: in_dune(boundaries, start, end),
        in_veg: in_veg(boundaries, start),
    }
}

/// Whether either endpoint lies in the dune band, bounds inclusive.
#[must_use]
pub fn in_dune(boundaries: &Boundaries, start: Option<f64>, end: Option<f64>) -> bool {
    let (Some(toe_in), Some(toe_sea)) = (boundaries.toe_in, boundaries.toe_sea) else {
        return false;
    };
    let within = |position: Option<f64>| position.is_some_and(|p| toe_in <= p && p <= toe_sea);
    within(start) || within(end)
}

/// Whether the interval starts at or before the lowest vegetation line.
#[must_use]
pub fn in_veg(boundaries: &Boundaries, start: Option<f64>) -> bool {
    match (start, boundaries.lowest_veg) {
        (Some(start), Some(lowest_veg)) => start <= lowest_veg,
        _ => false,
    }
}
