#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Locality content profile and geographic lookup types.
//!
//! A locality page is driven by two URL segments (city and neighborhood).
//! The neighborhood resolves to a [`ContentProfile`] (copy and tone) and,
//! independently, to a [`GeoEntry`] (approximate service area). Both are
//! value objects rebuilt for every request from static tables.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Content style used for a locality page.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tone {
    /// Exclusive at-home training (Salamanca, Chamberí).
    Premium,
    /// Parks and open spaces (Retiro, Madrid Río).
    Outdoor,
    /// Price-conscious and group oriented (Vallecas, Rivas).
    Accessible,
}

/// Copy bundle shown for a locality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProfile {
    /// Short emphasis tags, joined into the hero subtitle.
    pub emphasis_tags: Vec<String>,
    /// Feature bullets for the services section.
    pub features: Vec<String>,
    /// Content style.
    pub tone: Tone,
    /// Call-to-action button label.
    pub cta_text: String,
}

/// Approximate coordinates and service radius for a neighborhood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoEntry {
    /// Lowercase neighborhood key (e.g. `"madrid-rio"`).
    pub key: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Service radius in meters.
    pub radius_meters: u32,
}

/// A configured city/neighborhood landing page, as URL slugs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    /// City slug (e.g. `"rivas-vaciamadrid"`).
    pub city: String,
    /// Neighborhood slug (e.g. `"futura"`).
    pub neighborhood: String,
}

impl Locality {
    /// Relative path of this locality's landing page.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}/{}", self.city, self.neighborhood)
    }
}

/// An image reference with its alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Public path of the image (e.g. `"/images/local/madrid/..."`).
    pub src: String,
    /// Alt text.
    pub alt: String,
}
