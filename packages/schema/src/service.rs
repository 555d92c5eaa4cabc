//! `Service` and `Offer` documents: provider services, single pricing plans,
//! and the monthly promotion.

use dreizeer_pricing_models::{MonthlyOffer, PricingPlan};
use dreizeer_schema_models::nodes::{
    IN_STOCK, JsonLd, NamedPlace, Offer, PriceSpecification, SchemaType, Service, ServiceOffers,
    ServiceRef,
};
use dreizeer_schema_models::{DEFAULT_CURRENCY, DEFAULT_PRICE_RANGE, ServiceParams};

use crate::{SchemaError, or_default, to_pretty_json};

/// Price of a free promotion.
pub const FREE_PRICE: &str = "0.00";

/// Generates a `Service` JSON-LD document with a named provider.
///
/// # Errors
///
/// * [`SchemaError::Json`] if serialization fails
pub fn generate_service_schema(params: &ServiceParams) -> Result<String, SchemaError> {
    let offers: Vec<Offer> = params
        .offers
        .iter()
        .map(|offer| Offer {
            name: Some(offer.name.clone()),
            price: Some(offer.price.clone()),
            price_currency: Some(or_default(
                offer.price_currency.as_ref(),
                DEFAULT_CURRENCY,
            )),
            availability: Some(or_default(offer.availability.as_ref(), IN_STOCK)),
            ..Offer::empty()
        })
        .collect();

    let service = Service {
        kind: SchemaType::Service,
        name: params.name.clone(),
        description: params.description.clone(),
        provider: Some(NamedPlace::new(
            SchemaType::LocalBusiness,
            params.provider.clone(),
        )),
        price_range: Some(or_default(
            params.price_range.as_ref(),
            DEFAULT_PRICE_RANGE,
        )),
        area_served: params.area_served.clone().filter(|a| !a.is_empty()),
        offers: (!offers.is_empty()).then_some(ServiceOffers::Many(offers)),
    };

    to_pretty_json(&JsonLd::new(service))
}

/// Generates a `Service` document for one pricing plan, publishing the
/// plan's schema price as both price and `minPrice`.
///
/// # Errors
///
/// * [`SchemaError::Json`] if serialization fails
pub fn generate_plan_service_schema(plan: &PricingPlan) -> Result<String, SchemaError> {
    let offer = Offer {
        price: Some(plan.schema_price.clone()),
        price_currency: Some(DEFAULT_CURRENCY.to_string()),
        price_specification: Some(PriceSpecification {
            kind: SchemaType::UnitPriceSpecification,
            price: plan.schema_price.clone(),
            price_currency: DEFAULT_CURRENCY.to_string(),
            min_price: Some(plan.schema_price.clone()),
            unit_code: None,
            value_added_tax_included: true,
        }),
        availability: Some(IN_STOCK.to_string()),
        ..Offer::empty()
    };

    let service = Service {
        kind: SchemaType::Service,
        name: plan.title.clone(),
        description: plan.detail.clone(),
        provider: None,
        price_range: None,
        area_served: None,
        offers: Some(ServiceOffers::One(Box::new(offer))),
    };

    to_pretty_json(&JsonLd::new(service))
}

/// Builds the `Offer` node for the monthly promotion.
#[must_use]
pub fn monthly_offer(offer: &MonthlyOffer) -> Offer {
    Offer {
        name: Some(offer.title.clone()),
        description: Some(offer.description.clone()),
        price: Some(FREE_PRICE.to_string()),
        price_currency: Some(DEFAULT_CURRENCY.to_string()),
        availability: Some(IN_STOCK.to_string()),
        valid_through: Some(offer.valid_through.clone()),
        item_offered: Some(ServiceRef::new(
            offer.title.clone(),
            format!(
                "Servicio gratuito valorado en {}. {}",
                offer.value, offer.description
            ),
        )),
        price_specification: Some(PriceSpecification {
            kind: SchemaType::UnitPriceSpecification,
            price: FREE_PRICE.to_string(),
            price_currency: DEFAULT_CURRENCY.to_string(),
            min_price: None,
            unit_code: None,
            value_added_tax_included: true,
        }),
        ..Offer::empty()
    }
}

/// Generates an `Offer` JSON-LD document for the monthly promotion.
///
/// # Errors
///
/// * [`SchemaError::Json`] if serialization fails
pub fn generate_offer_schema(offer: &MonthlyOffer) -> Result<String, SchemaError> {
    to_pretty_json(&JsonLd::new(monthly_offer(offer)))
}
