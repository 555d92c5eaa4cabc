//! Compile-time registry of published locality landing pages.
//!
//! The list lives in `data/localities.toml`. Adding a landing page to the
//! sitemap means adding an entry there.

use dreizeer_locality_models::Locality;
use serde::Deserialize;

use crate::LocalityError;

/// Number of published localities. Enforced by a test.
#[cfg(test)]
const EXPECTED_LOCALITY_COUNT: usize = 10;

const LOCALITIES_TOML: &str = include_str!("../data/localities.toml");

#[derive(Deserialize)]
struct LocalityFile {
    localities: Vec<Locality>,
}

/// Parses a locality list from TOML.
///
/// # Errors
///
/// Returns [`LocalityError::Table`] if the TOML is malformed.
pub fn parse_localities(toml_str: &str) -> Result<Vec<Locality>, LocalityError> {
    toml::de::from_str::<LocalityFile>(toml_str)
        .map(|file| file.localities)
        .map_err(|source| LocalityError::Table {
            table: "localities",
            source,
        })
}

/// Returns all published localities in sitemap order.
///
/// # Panics
///
/// Panics if the embedded TOML fails to parse. Since it is a compile-time
/// constant, a parse failure is a development error caught by tests.
#[must_use]
pub fn all_localities() -> Vec<Locality> {
    parse_localities(LOCALITIES_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse embedded localities: {e}"))
}
