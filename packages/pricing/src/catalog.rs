//! The embedded pricing catalog.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use dreizeer_pricing_models::PricingPlan;
use serde::Deserialize;

use crate::PricingError;
use crate::display::{parse_schema_price, price_amount};

const PLANS_TOML: &str = include_str!("../data/plans.toml");

#[derive(Deserialize)]
struct CatalogFile {
    plans: Vec<PricingPlan>,
}

/// Parses and validates a pricing catalog.
///
/// # Errors
///
/// * [`PricingError::Toml`] if the TOML is malformed
/// * [`PricingError::DuplicateId`] if two plans share an id
/// * [`PricingError::MalformedPrice`] if a schema price is not a
///   two-decimal non-negative number
/// * [`PricingError::PriceMismatch`] if a display price's leading number
///   differs from the schema price
pub fn parse_catalog(toml_str: &str) -> Result<Vec<PricingPlan>, PricingError> {
    let file: CatalogFile = toml::de::from_str(toml_str)?;

    let mut seen = BTreeSet::new();
    for plan in &file.plans {
        if !seen.insert(plan.id.as_str()) {
            return Err(PricingError::DuplicateId {
                id: plan.id.clone(),
            });
        }
        validate_plan(plan)?;
    }

    Ok(file.plans)
}

fn validate_plan(plan: &PricingPlan) -> Result<(), PricingError> {
    let cents = parse_schema_price(&plan.schema_price).ok_or_else(|| {
        PricingError::MalformedPrice {
            id: plan.id.clone(),
            price: plan.schema_price.clone(),
        }
    })?;

    let displayed = price_amount(&plan.display_price)
        .and_then(|amount| amount.parse::<u64>().ok())
        .and_then(|amount| amount.checked_mul(100));

    if displayed != Some(cents) {
        return Err(PricingError::PriceMismatch {
            id: plan.id.clone(),
            display: plan.display_price.clone(),
            schema: plan.schema_price.clone(),
        });
    }

    Ok(())
}

static CATALOG: LazyLock<Vec<PricingPlan>> = LazyLock::new(|| {
    parse_catalog(PLANS_TOML).unwrap_or_else(|e| panic!("Embedded pricing catalog is invalid: {e}"))
});

/// All plans in display order.
#[must_use]
pub fn pricing_plans() -> &'static [PricingPlan] {
    &CATALOG
}

/// Looks up a plan by id.
#[must_use]
pub fn plan_by_id(id: &str) -> Option<&'static PricingPlan> {
    pricing_plans().iter().find(|plan| plan.id == id)
}
