//! Reference resolution: species/cover code → native flag and cover type.
//!
//! Codes missing from the reference sheet are common in field data and are
//! tolerated: they resolve to an unknown native status and the configured
//! unknown cover type. Codes carrying the dead-plant marker are forced to the
//! dead cover type after the lookup, whatever the reference says.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use dune_config::CoverConfig;
use dune_core::entities::ReferenceEntry;
use dune_core::keys::normalize_code;
use tracing::debug;

/// Outcome of resolving one code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub native: Option<bool>,
    pub cover_type: String,
    /// Whether the code has a reference entry.
    pub resolved: bool,
}

#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    native: HashMap<String, Option<bool>>,
    cover_types: HashMap<String, String>,
    dead_marker: String,
    dead_cover_type: String,
    unknown_cover_type: String,
    uppercase: bool,
}

impl ReferenceResolver {
    /// Build the lookup maps from reference entries.
    ///
    /// Codes are normalized the same way as observation codes. When a code
    /// appears more than once, the first entry wins.
    #[must_use]
    pub fn new(entries: &[ReferenceEntry], config: &CoverConfig) -> Self {
        let uppercase = config.uppercase_codes;
        let mut native = HashMap::with_capacity(entries.len());
        let mut cover_types = HashMap::with_capacity(entries.len());

        for entry in entries {
            let code = normalize_code(&entry.code, uppercase);
            if code.is_empty() {
                continue;
            }
            match native.entry(code.clone()) {
                Entry::Occupied(_) => {
                    debug!(code, "duplicate reference entry ignored");
                    continue;
                }
                Entry::Vacant(slot) => {
                    slot.insert(entry.native);
                }
            }
            if let Some(cover_type) = &entry.cover_type {
                cover_types.insert(code, normalize_code(cover_type, false));
            }
        }

        Self {
            native,
            cover_types,
            dead_marker: normalize_code(&config.dead_marker, uppercase),
            dead_cover_type: config.dead_cover_type.clone(),
            unknown_cover_type: config.unknown_cover_type.clone(),
            uppercase,
        }
    }

    /// Normalize a raw observation code the way reference codes were.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        normalize_code(raw, self.uppercase)
    }

    /// Resolve a normalized code.
    #[must_use]
    pub fn resolve(&self, code: &str) -> Resolution {
        let resolved = self.native.contains_key(code);
        let native = self.native.get(code).copied().flatten();

        let cover_type = if self.is_dead(code) {
            self.dead_cover_type.clone()
        } else {
            self.cover_types
                .get(code)
                .cloned()
                .unwrap_or_else(|| self.unknown_cover_type.clone())
        };

        Resolution {
            native,
            cover_type,
            resolved,
        }
    }

    /// Whether `code` carries the dead-plant marker.
    #[must_use]
    pub fn is_dead(&self, code: &str) -> bool {
        code.contains(&self.dead_marker)
    }

    /// Number of distinct reference codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.native.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.native.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(code: &str, native: Option<bool>, cover_type: Option<&str>) -> ReferenceEntry {
        ReferenceEntry {
            code: code.to_string(),
            name: None,
            native,
            cover_type: cover_type.map(ToString::to_string),
        }
    }

    fn resolver() -> ReferenceResolver {
        ReferenceResolver::new(
            &[
                entry("ABMA ", Some(true), Some("Terrestrial Plant")),
                entry("CAED", Some(false), Some("Terrestrial Plant")),
                entry("CAED-D", Some(false), Some("Terrestrial Plant")),
                entry("SAND", None, Some("Sand")),
                entry("abma", Some(false), Some("Sand")),
                entry("WRACK", None, None),
            ],
            &CoverConfig::default(),
        )
    }

    #[test]
    fn known_code_resolves() {
        let resolution = resolver().resolve("ABMA");
        assert_eq!(
            resolution,
            Resolution {
                native: Some(true),
                cover_type: "Terrestrial Plant".into(),
                resolved: true,
            }
        );
    }

    #[test]
    fn first_duplicate_wins_after_normalization() {
        let resolver = resolver();
        assert_eq!(resolver.len(), 5);
        assert_eq!(resolver.resolve("ABMA").native, Some(true));
    }

    #[test]
    fn unknown_code_is_tolerated() {
        let resolution = resolver().resolve("XXXX");
        assert_eq!(resolution.native, None);
        assert_eq!(resolution.cover_type, "Unknown");
        assert!(!resolution.resolved);
    }

    #[test]
    fn dead_marker_overrides_reference_cover_type() {
        let resolver = resolver();
        let listed = resolver.resolve("CAED-D");
        assert_eq!(listed.cover_type, "Dead Terrestrial Plant");
        assert_eq!(listed.native, Some(false));
        assert!(listed.resolved);

        let unlisted = resolver.resolve("ABMA-D");
        assert_eq!(unlisted.cover_type, "Dead Terrestrial Plant");
        assert!(!unlisted.resolved);
    }

    #[test]
    fn entry_without_cover_type_is_unknown() {
        let resolution = resolver().resolve("WRACK");
        assert!(resolution.resolved);
        assert_eq!(resolution.cover_type, "Unknown");
    }

    #[test]
    fn observation_codes_normalize_like_reference_codes() {
        let resolver = resolver();
        let code = resolver.normalize(" abma ");
        assert_eq!(code, "ABMA");
        assert!(resolver.resolve(&code).resolved);
    }
}
