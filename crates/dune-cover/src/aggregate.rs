//! Per-transect length sums and percent cover.

use std::collections::HashMap;

use dune_core::axes::Axis;
use dune_core::keys::TransectKey;
use dune_core::zones::{Zone, ZoneFlags};

/// An observation after reference resolution and zone classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedObservation {
    pub key: TransectKey,
    /// Normalized code.
    pub code: String,
    pub native: Option<bool>,
    pub cover_type: String,
    pub zones: ZoneFlags,
    pub cor_length: f64,
}

impl ClassifiedObservation {
    /// Whether this observation counts toward `axis`.
    ///
    /// An observation with unknown native status matches neither
    /// native-status axis.
    #[must_use]
    pub fn matches(&self, axis: &Axis) -> bool {
        match axis {
            Axis::All => true,
            Axis::CoverType { cover_type } => &self.cover_type == cover_type,
            Axis::NativeStatus { cover_type, native } => {
                &self.cover_type == cover_type && self.native == Some(*native)
            }
            Axis::Species { code } => &self.code == code,
        }
    }
}

/// Sum `cor_length` per transect over the observations matching `predicate`.
///
/// Transects with no matching observation are absent from the map; callers
/// read them as 0.
pub fn aggregate<'a>(
    observations: impl IntoIterator<Item = &'a ClassifiedObservation>,
    predicate: impl Fn(&ClassifiedObservation) -> bool,
) -> HashMap<&'a TransectKey, f64> {
    let mut sums = HashMap::new();
    for observation in observations {
        if predicate(observation) {
            *sums.entry(&observation.key).or_insert(0.0) += observation.cor_length;
        }
    }
    sums
}

/// Sums for one `(axis, zone)` column.
pub fn axis_sums<'a>(
    observations: &'a [ClassifiedObservation],
    axis: &Axis,
    zone: Zone,
) -> HashMap<&'a TransectKey, f64> {
    aggregate(observations, |o| o.zones.contains(zone) && o.matches(axis))
}

/// `sum / denominator`, or NaN when the denominator is zero or undefined.
#[must_use]
pub fn percent_cover(sum: f64, denominator: f64) -> f64 {
    if denominator.is_finite() && denominator != 0.0 {
        sum / denominator
    } else {
        f64::NAN
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(transect: &str) -> TransectKey {
        TransectKey::from_parts("North", "2023-06-01", transect).expect("key")
    }

    fn observation(
        transect: &str,
        code: &str,
        cover_type: &str,
        native: Option<bool>,
        length: f64,
    ) -> ClassifiedObservation {
        ClassifiedObservation {
            key: key(transect),
            code: code.to_string(),
            native,
            cover_type: cover_type.to_string(),
            zones: ZoneFlags {
                in_dune: code == "ABMA",
                in_veg: false,
            },
            cor_length: length,
        }
    }

    fn sample() -> Vec<ClassifiedObservation> {
        vec![
            observation("1", "ABMA", "Terrestrial Plant", Some(true), 2.0),
            observation("1", "ABMA", "Terrestrial Plant", Some(true), 3.0),
            observation("1", "CAED", "Terrestrial Plant", Some(false), 1.5),
            observation("2", "SAND", "Sand", None, 4.0),
        ]
    }

    #[test]
    fn sums_group_by_transect() {
        let observations = sample();
        let sums = aggregate(&observations, |o| o.code == "ABMA");
        assert_eq!(sums.get(&key("1")).copied(), Some(5.0));
        assert_eq!(sums.get(&key("2")), None);
    }

    #[test]
    fn axis_sums_respect_zone() {
        let observations = sample();
        let whole = axis_sums(&observations, &Axis::All, Zone::Whole);
        assert_eq!(whole.get(&key("1")).copied(), Some(6.5));
        let dune = axis_sums(&observations, &Axis::All, Zone::Dune);
        assert_eq!(dune.get(&key("1")).copied(), Some(5.0));
        assert!(axis_sums(&observations, &Axis::All, Zone::Veg).is_empty());
    }

    #[test]
    fn native_axis_skips_unknown_status() {
        let observations = sample();
        let plant = String::from("Terrestrial Plant");
        let native = Axis::NativeStatus {
            cover_type: plant.clone(),
            native: true,
        };
        let nonnative = Axis::NativeStatus {
            cover_type: plant,
            native: false,
        };
        assert!(observations[0].matches(&native));
        assert!(observations[2].matches(&nonnative));
        assert!(!observations[3].matches(&native));
        assert!(!observations[3].matches(&nonnative));
    }

    #[test]
    fn percent_cover_handles_degenerate_denominators() {
        assert!((percent_cover(5.0, 10.0) - 0.5).abs() < f64::EPSILON);
        assert!(percent_cover(0.0, 0.0).is_nan());
        assert!(percent_cover(1.0, f64::NAN).is_nan());
        assert_eq!(percent_cover(0.0, 4.0), 0.0);
    }
}
