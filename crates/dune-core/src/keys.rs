//! Transect composite keys and key-part normalization.
//!
//! A transect is identified by `(site, date, transect)`. All three parts are
//! trimmed text; dates are rendered as ISO `YYYY-MM-DD` by the ingestion layer
//! whenever the source value can be read as a date.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Composite key joining the positional, observation, and output tables.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct TransectKey {
    pub site: String,
    pub date: String,
    pub transect: String,
}

impl TransectKey {
    /// Build a key from raw parts, trimming each one.
    ///
    /// Returns `None` when any part is empty after trimming: such rows cannot
    /// be joined and are skipped by the caller.
    #[must_use]
    pub fn from_parts(site: &str, date: &str, transect: &str) -> Option<Self> {
        Some(Self {
            site: normalize_text(site)?,
            date: normalize_text(date)?,
            transect: normalize_text(transect)?,
        })
    }

    /// Flat identifier used as the `transect_key` output column.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}_{}_{}", self.site, self.date, self.transect)
    }
}

impl fmt::Display for TransectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.site, self.date, self.transect)
    }
}

/// Trim surrounding whitespace; empty results become `None`.
#[must_use]
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize a species/cover code so that case and whitespace variants
/// collapse onto one code.
///
/// Interior whitespace runs are collapsed to a single space.
#[must_use]
pub fn normalize_code(raw: &str, uppercase: bool) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if uppercase {
        collapsed.to_uppercase()
    } else {
        collapsed
    }
}
