#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Pricing plan and promotional offer types.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Kind of training a plan sells.
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
pub enum PlanType {
    /// One-to-one sessions.
    Individual,
    /// Small groups of up to three people.
    Group,
    /// Online coaching.
    Online,
}

/// A priced plan from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    /// Unique plan id (e.g. `"group"`).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Human price text, e.g. `"Desde 25€/persona"`.
    pub display_price: String,
    /// Decimal price with two fraction digits, e.g. `"25.00"`.
    pub schema_price: String,
    /// Supporting detail line.
    pub detail: String,
    /// Kind of training.
    pub plan_type: PlanType,
}

/// The free-value promotion for the current month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyOffer {
    /// Offer title.
    pub title: String,
    /// Monetary value of what is given away (e.g. `"40€"`).
    pub value: String,
    /// Short description.
    pub description: String,
    /// Last day of the month, `YYYY-MM-DD`.
    pub valid_through: String,
}
