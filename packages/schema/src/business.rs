//! `LocalBusiness` and `OnlineBusiness` documents.
//!
//! Both carry fixed opening hours and an offer catalog. The local catalog
//! prices its in-person offers from the pricing catalog so the structured
//! data never disagrees with the published prices.

use dreizeer_pricing::catalog::plan_by_id;
use dreizeer_pricing::display::{format_cents, parse_schema_price};
use dreizeer_pricing_models::PricingPlan;
use dreizeer_schema_models::nodes::{
    Business, Distance, GeoCircle, GeoCoordinates, IN_STOCK, JsonLd, NamedPlace, Offer,
    OfferCatalog, OpeningHours, PostalAddress, PriceSpecification, SchemaType, ServedArea,
    ServiceRef,
};
use dreizeer_schema_models::{
    AddressParams, AreaServed, DEFAULT_CURRENCY, DEFAULT_EMAIL, DEFAULT_PRICE_RANGE,
    DEFAULT_TELEPHONE, DEFAULT_URL, GeoParams, LocalBusinessParams, OnlineBusinessParams,
};

use crate::{SchemaError, non_empty, or_default, to_pretty_json};

/// Days the business takes bookings.
pub const OPENING_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Daily opening time.
pub const OPENS: &str = "07:00";

/// Daily closing time.
pub const CLOSES: &str = "22:00";

/// People in a small-group booking.
pub const GROUP_SIZE: u64 = 3;

/// UN/ECE code for "one unit" (here: one person).
const UNIT_CODE_PERSON: &str = "C62";

/// Meter unit code for distances.
const UNIT_CODE_METER: &str = "MTR";

fn opening_hours() -> OpeningHours {
    OpeningHours {
        kind: SchemaType::OpeningHoursSpecification,
        day_of_week: OPENING_DAYS.to_vec(),
        opens: OPENS,
        closes: CLOSES,
    }
}

fn plan(id: &str) -> Result<&'static PricingPlan, SchemaError> {
    plan_by_id(id).ok_or_else(|| SchemaError::UnknownPlan { id: id.to_string() })
}

fn priced_offer(name: &str, service: ServiceRef, price: String, unit_price: String) -> Offer {
    Offer {
        name: Some(name.to_string()),
        item_offered: Some(service),
        price: Some(price),
        price_currency: Some(DEFAULT_CURRENCY.to_string()),
        price_specification: Some(PriceSpecification {
            kind: SchemaType::UnitPriceSpecification,
            price: unit_price,
            price_currency: DEFAULT_CURRENCY.to_string(),
            min_price: None,
            unit_code: Some(UNIT_CODE_PERSON),
            value_added_tax_included: true,
        }),
        availability: Some(IN_STOCK.to_string()),
        ..Offer::empty()
    }
}

fn unpriced_offer(name: &str, description: &str) -> Offer {
    Offer {
        item_offered: Some(ServiceRef::new(name, description)),
        ..Offer::empty()
    }
}

/// Offer catalog for in-person training.
///
/// # Errors
///
/// * [`SchemaError::UnknownPlan`] if the `individual` or `group` plan is
///   missing from the pricing catalog
pub fn local_offer_catalog() -> Result<OfferCatalog, SchemaError> {
    let individual = plan("individual")?;
    let group = plan("group")?;

    let per_person = parse_schema_price(&group.schema_price).ok_or_else(|| {
        SchemaError::UnknownPlan {
            id: group.id.clone(),
        }
    })?;
    let group_total = format_cents(per_person.saturating_mul(GROUP_SIZE));

    Ok(OfferCatalog {
        kind: SchemaType::OfferCatalog,
        name: "Servicios de Entrenamiento Personal".to_string(),
        item_list_element: vec![
            priced_offer(
                "Entrenamiento Personal Individual",
                ServiceRef::new(
                    "Entrenamiento Personal a Domicilio",
                    "Entrenamiento personalizado en tu hogar o ubicación preferida",
                ),
                individual.schema_price.clone(),
                individual.schema_price.clone(),
            ),
            priced_offer(
                "Entrenamiento en Grupo Reducido (3 personas)",
                ServiceRef::new(
                    "Entrenamiento Personal en Grupo",
                    "Entrenamiento personalizado para grupos de hasta 3 personas",
                ),
                group_total,
                group.schema_price.clone(),
            ),
            unpriced_offer(
                "Entrenamiento Online",
                "Coaching online con videoanálisis y corrección de técnica",
            ),
            unpriced_offer(
                "Entrenamiento al Aire Libre",
                "Sesiones de entrenamiento en parques y espacios abiertos",
            ),
        ],
    })
}

/// Offer catalog for online coaching.
#[must_use]
pub fn online_offer_catalog() -> OfferCatalog {
    OfferCatalog {
        kind: SchemaType::OfferCatalog,
        name: "Servicios de Entrenamiento Online".to_string(),
        item_list_element: vec![
            unpriced_offer(
                "Coaching Online con Videoanálisis",
                "Planificación personalizada con corrección de técnica mediante videoanálisis",
            ),
            unpriced_offer(
                "Planificación Personalizada Online",
                "Rutinas adaptadas con seguimiento continuo por entrenador humano",
            ),
        ],
    }
}

/// Splits geo parameters into a service circle or plain coordinates.
fn geo_nodes(geo: Option<GeoParams>) -> (Option<ServedArea>, Option<GeoCoordinates>) {
    let Some(geo) = geo else {
        return (None, None);
    };
    let point = GeoCoordinates::new(geo.latitude, geo.longitude);

    match geo.radius_meters.filter(|r| *r > 0) {
        Some(radius) => (
            Some(ServedArea::Circle(GeoCircle {
                kind: SchemaType::GeoCircle,
                geo_midpoint: point,
                geo_radius: Distance {
                    kind: SchemaType::Distance,
                    value: radius,
                    unit_code: UNIT_CODE_METER,
                },
            })),
            None,
        ),
        None => (None, Some(point)),
    }
}

fn postal_address(address: Option<&AddressParams>) -> PostalAddress {
    address.map_or_else(
        || PostalAddress {
            kind: SchemaType::PostalAddress,
            address_locality: "Madrid".to_string(),
            address_region: Some("Comunidad de Madrid".to_string()),
            address_country: "ES".to_string(),
            street_address: None,
            postal_code: None,
        },
        |address| PostalAddress {
            kind: SchemaType::PostalAddress,
            address_locality: non_empty(address.address_locality.as_ref())
                .unwrap_or_else(|| "Madrid".to_string()),
            address_region: non_empty(address.address_region.as_ref()),
            address_country: non_empty(address.address_country.as_ref())
                .unwrap_or_else(|| "ES".to_string()),
            street_address: non_empty(address.street_address.as_ref()),
            postal_code: non_empty(address.postal_code.as_ref()),
        },
    )
}

/// Builds the `LocalBusiness` node without serializing it.
///
/// # Errors
///
/// * [`SchemaError::UnknownPlan`] if the offer catalog cannot be priced
pub fn local_business(params: &LocalBusinessParams) -> Result<Business, SchemaError> {
    let url = or_default(params.url.as_ref(), DEFAULT_URL);
    let (area_served, geo) = geo_nodes(params.geo);

    Ok(Business {
        kind: SchemaType::LocalBusiness,
        id: format!("{url}#business"),
        name: params.name.clone(),
        description: params.description.clone(),
        price_range: or_default(params.price_range.as_ref(), DEFAULT_PRICE_RANGE),
        telephone: or_default(params.telephone.as_ref(), DEFAULT_TELEPHONE),
        email: or_default(params.email.as_ref(), DEFAULT_EMAIL),
        url,
        image: non_empty(params.image.as_ref()),
        area_served,
        geo,
        address: Some(postal_address(params.address.as_ref())),
        opening_hours_specification: Some(vec![opening_hours()]),
        hours_available: None,
        has_offer_catalog: local_offer_catalog()?,
    })
}

/// Generates a `LocalBusiness` JSON-LD document.
///
/// A geo point with a radius becomes an `areaServed` circle; without a
/// radius it becomes plain `geo` coordinates. The address always falls
/// back to Madrid.
///
/// # Errors
///
/// * [`SchemaError::UnknownPlan`] if the offer catalog cannot be priced
/// * [`SchemaError::Json`] if serialization fails
pub fn generate_local_business_schema(params: &LocalBusinessParams) -> Result<String, SchemaError> {
    to_pretty_json(&JsonLd::new(local_business(params)?))
}

/// Builds the `OnlineBusiness` node without serializing it.
#[must_use]
pub fn online_business(params: &OnlineBusinessParams) -> Business {
    let url = or_default(params.url.as_ref(), DEFAULT_URL);

    let area_served = match params.area_served.clone().unwrap_or_default() {
        AreaServed::Global => ServedArea::Place(NamedPlace::new(SchemaType::Place, "Global")),
        AreaServed::Countries(countries) => ServedArea::Places(
            countries
                .into_iter()
                .map(|country| NamedPlace::new(SchemaType::Country, country))
                .collect(),
        ),
    };

    Business {
        kind: SchemaType::OnlineBusiness,
        id: format!("{url}#online-business"),
        name: params.name.clone(),
        description: params.description.clone(),
        price_range: or_default(params.price_range.as_ref(), DEFAULT_PRICE_RANGE),
        telephone: or_default(params.telephone.as_ref(), DEFAULT_TELEPHONE),
        email: or_default(params.email.as_ref(), DEFAULT_EMAIL),
        url,
        image: non_empty(params.image.as_ref()),
        area_served: Some(area_served),
        geo: None,
        address: None,
        opening_hours_specification: None,
        hours_available: Some(opening_hours()),
        has_offer_catalog: online_offer_catalog(),
    }
}

/// Generates an `OnlineBusiness` JSON-LD document.
///
/// # Errors
///
/// * [`SchemaError::Json`] if serialization fails
pub fn generate_online_business_schema(
    params: &OnlineBusinessParams,
) -> Result<String, SchemaError> {
    to_pretty_json(&JsonLd::new(online_business(params)))
}
