#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Pricing catalog, featured-plan rules, and rotating monthly offers.
//!
//! The catalog is a TOML file embedded at compile time and validated when
//! first loaded. The monthly offer is a pure function of an injected date;
//! callers read the clock once per render and pass it in.

pub mod catalog;
pub mod display;
pub mod featured;
pub mod offer;

pub use catalog::{plan_by_id, pricing_plans};
pub use featured::resolve_featured_plan_id;
pub use offer::current_monthly_offer;

use thiserror::Error;

/// Errors that can occur while loading or validating pricing data.
#[derive(Debug, Error)]
pub enum PricingError {
    /// The catalog TOML failed to parse.
    #[error("Failed to parse pricing catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// Two plans share an id.
    #[error("Duplicate plan id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// A schema price is not a non-negative decimal with two fraction digits.
    #[error("Plan {id} has malformed schema price '{price}'")]
    MalformedPrice {
        /// Plan id.
        id: String,
        /// Offending value.
        price: String,
    },

    /// The display text disagrees with the schema price.
    #[error("Plan {id} displays '{display}' but schema price is '{schema}'")]
    PriceMismatch {
        /// Plan id.
        id: String,
        /// Display price text.
        display: String,
        /// Schema price.
        schema: String,
    },
}
