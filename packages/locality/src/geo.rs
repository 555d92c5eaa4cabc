//! Static neighborhood → coordinates table.
//!
//! The table lives in `data/geo.toml`, embedded at compile time and parsed
//! once on first use.

use std::sync::LazyLock;

use dreizeer_locality_models::GeoEntry;
use serde::Deserialize;

use crate::LocalityError;
use crate::text::lookup_key;

const GEO_TOML: &str = include_str!("../data/geo.toml");

/// Parsed form of `data/geo.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoTable {
    /// City-center entry used when no key matches.
    pub fallback: GeoEntry,
    /// Known neighborhoods.
    pub entries: Vec<GeoEntry>,
}

impl GeoTable {
    /// Finds the entry with exactly this key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&GeoEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Looks up a raw neighborhood: exact lowercase key, then the key with
    /// its first space turned into a hyphen, then the fallback.
    #[must_use]
    pub fn lookup(&self, neighborhood: &str) -> &GeoEntry {
        let key = lookup_key(neighborhood);

        if let Some(entry) = self.get(&key) {
            return entry;
        }

        let hyphenated = key.replacen(' ', "-", 1);
        if let Some(entry) = self.get(&hyphenated) {
            return entry;
        }

        log::debug!("No coordinates for '{neighborhood}', using city center");
        &self.fallback
    }
}

/// Parses a geo table from TOML.
///
/// # Errors
///
/// Returns [`LocalityError::Table`] if the TOML is malformed.
pub fn parse_geo_table(toml_str: &str) -> Result<GeoTable, LocalityError> {
    toml::de::from_str(toml_str).map_err(|source| LocalityError::Table {
        table: "geo",
        source,
    })
}

static GEO_TABLE: LazyLock<GeoTable> = LazyLock::new(|| {
    parse_geo_table(GEO_TOML).unwrap_or_else(|e| panic!("Embedded geo table is invalid: {e}"))
});

/// Returns the embedded geo table.
#[must_use]
pub fn geo_table() -> &'static GeoTable {
    &GEO_TABLE
}

/// Resolves approximate coordinates for a neighborhood. Never fails.
#[must_use]
pub fn lookup_geo(neighborhood: &str) -> GeoEntry {
    geo_table().lookup(neighborhood).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn accented_and_plain_chamberi_match() {
        let accented = lookup_geo("Chamberí");
        let plain = lookup_geo("chamberi");
        assert!((accented.latitude - plain.latitude).abs() < f64::EPSILON);
        assert!((accented.longitude - plain.longitude).abs() < f64::EPSILON);
        assert_eq!(accented.radius_meters, plain.radius_meters);
        assert_ne!(accented.key, geo_table().fallback.key);
    }

    #[test]
    fn space_is_retried_as_hyphen() {
        let entry = lookup_geo("Rivas Futura");
        assert_eq!(entry.key, "rivas-futura");
        assert_eq!(entry.radius_meters, 3000);
    }

    #[test]
    fn madrid_rio_resolves_with_accent_or_hyphen() {
        assert_eq!(lookup_geo("Madrid Río").key, "madrid río");
        assert_eq!(lookup_geo("MADRID-RIO").key, "madrid-rio");
    }

    #[test]
    fn unknown_key_falls_back_to_city_center() {
        let entry = lookup_geo("centro");
        assert!((entry.latitude - 40.4168).abs() < f64::EPSILON);
        assert!((entry.longitude - -3.7038).abs() < f64::EPSILON);
        assert_eq!(entry.radius_meters, 5000);
        assert_eq!(lookup_geo(""), entry);
    }

    #[test]
    fn keys_are_unique_and_lowercase() {
        let mut seen = BTreeSet::new();
        for entry in &geo_table().entries {
            assert!(seen.insert(&entry.key), "Duplicate geo key: {}", entry.key);
            assert_eq!(entry.key, entry.key.to_lowercase());
            assert!(entry.radius_meters > 0, "{} has zero radius", entry.key);
        }
    }

    #[test]
    fn malformed_table_is_an_error() {
        let err = parse_geo_table("entries = 3").unwrap_err();
        assert!(matches!(err, LocalityError::Table { table: "geo", .. }));
    }
}
