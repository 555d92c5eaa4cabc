#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Locality content resolution, geographic lookup, and display
//! normalization.
//!
//! Turns the free-form city/neighborhood URL segments of a landing page
//! into display names, a [`ContentProfile`](dreizeer_locality_models::ContentProfile),
//! a [`GeoEntry`](dreizeer_locality_models::GeoEntry), and hero imagery.
//! Static tables (coordinates, published localities) are TOML files
//! embedded at compile time.
//!
//! Every lookup here is total: unknown inputs fall back to defaults
//! instead of failing.

pub mod geo;
pub mod imagery;
pub mod profile;
pub mod registry;
pub mod text;

pub use geo::lookup_geo;
pub use profile::resolve_content_profile;
pub use text::{capitalize_display_name, lookup_key};

use thiserror::Error;

/// Errors that can occur in locality operations.
#[derive(Debug, Error)]
pub enum LocalityError {
    /// An embedded data table failed to parse.
    #[error("Failed to parse {table} table: {source}")]
    Table {
        /// Name of the table (e.g. `"geo"`).
        table: &'static str,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// A fixed-size image was requested without both dimensions.
    #[error("Image {src} requires width and height when not filling its container")]
    MissingDimensions {
        /// Image path.
        src: String,
    },
}
