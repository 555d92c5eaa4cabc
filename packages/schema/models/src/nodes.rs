//! Serialized JSON-LD node shapes.
//!
//! Field order follows the order the documents are published in. Optional
//! fields are left out of the output entirely rather than emitted as
//! `null`.

use serde::Serialize;

/// The `@context` every top-level document carries.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Availability value for bookable offers.
pub const IN_STOCK: &str = "https://schema.org/InStock";

/// Schema.org type names used by the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchemaType {
    LocalBusiness,
    OnlineBusiness,
    Person,
    Service,
    Offer,
    OfferCatalog,
    UnitPriceSpecification,
    GeoCircle,
    GeoCoordinates,
    Distance,
    PostalAddress,
    OpeningHoursSpecification,
    Place,
    Country,
    BreadcrumbList,
    ListItem,
    #[serde(rename = "FAQPage")]
    FaqPage,
    Question,
    Answer,
    AggregateRating,
    Review,
    Rating,
}

/// A top-level document: `@context` followed by the node's own fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonLd<T> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(flatten)]
    pub node: T,
}

impl<T> JsonLd<T> {
    /// Wraps a node as a schema.org document.
    #[must_use]
    pub const fn new(node: T) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            node,
        }
    }
}

/// `LocalBusiness` or `OnlineBusiness`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_range: String,
    pub telephone: String,
    pub email: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_served: Option<ServedArea>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours_specification: Option<Vec<OpeningHours>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_available: Option<OpeningHours>,
    pub has_offer_catalog: OfferCatalog,
}

/// The `areaServed` property in its different shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServedArea {
    /// Circle around a midpoint.
    Circle(GeoCircle),
    /// A single named place.
    Place(NamedPlace),
    /// Several named places.
    Places(Vec<NamedPlace>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoCircle {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub geo_midpoint: GeoCoordinates,
    pub geo_radius: Distance,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            kind: SchemaType::GeoCoordinates,
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distance {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub value: u32,
    /// UN/CEFACT unit code; `MTR` for meters.
    pub unit_code: &'static str,
}

/// A `Place`, `Country`, or `Person` reference by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedPlace {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub name: String,
}

impl NamedPlace {
    #[must_use]
    pub fn new(kind: SchemaType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub address_locality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    pub address_country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub day_of_week: Vec<&'static str>,
    pub opens: &'static str,
    pub closes: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCatalog {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub name: String,
    pub item_list_element: Vec<Offer>,
}

/// An `Offer`. Catalog entries for unpriced services only carry
/// `itemOffered`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_offered: Option<ServiceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_specification: Option<PriceSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_through: Option<String>,
}

impl Offer {
    /// An offer with only a type; fill fields with struct update syntax.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            kind: SchemaType::Offer,
            name: None,
            description: None,
            item_offered: None,
            price: None,
            price_currency: None,
            price_specification: None,
            availability: None,
            valid_through: None,
        }
    }
}

/// An inline `Service` reference inside an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRef {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub name: String,
    pub description: String,
}

impl ServiceRef {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: SchemaType::Service,
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSpecification {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub price: String,
    pub price_currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    /// UN/ECE unit code; `C62` is "one" (per person / per unit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_code: Option<&'static str>,
    pub value_added_tax_included: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub job_title: String,
    pub email: String,
    pub telephone: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub same_as: Vec<&'static str>,
}

/// A standalone `Service` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<NamedPlace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_served: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<ServiceOffers>,
}

/// `offers` is a list on provider services and a single offer on plan
/// services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ServiceOffers {
    One(Box<Offer>),
    Many(Vec<Offer>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub position: usize,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub text: String,
}

/// A business reduced to its rating and reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedBusiness {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub aggregate_rating: Rating,
    pub review: Vec<Review>,
}

/// `AggregateRating` (with `reviewCount`) or a per-review `Rating`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub rating_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<String>,
    pub best_rating: &'static str,
    pub worst_rating: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub author: NamedPlace,
    pub date_published: String,
    pub review_body: String,
    pub review_rating: Rating,
    pub content_location: NamedPlace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_puts_context_first() {
        let doc = JsonLd::new(GeoCoordinates::new(40.0, -3.0));
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.starts_with(r#"{"@context":"https://schema.org","@type":"GeoCoordinates""#));
    }

    #[test]
    fn faq_page_type_name() {
        assert_eq!(
            serde_json::to_value(SchemaType::FaqPage).unwrap(),
            "FAQPage"
        );
    }

    #[test]
    fn empty_offer_serializes_type_only() {
        let json = serde_json::to_value(Offer::empty()).unwrap();
        assert_eq!(json, serde_json::json!({ "@type": "Offer" }));
    }
}
