#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Schema.org JSON-LD types.
//!
//! Generator inputs live at the crate root; the serialized node shapes live
//! in [`nodes`]. Inputs deserialize from camelCase JSON so a whole document
//! request can be read from a file.

pub mod nodes;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Default business phone number.
pub const DEFAULT_TELEPHONE: &str = "+34637453753";

/// Default business email.
pub const DEFAULT_EMAIL: &str = "dreizeer@gmail.com";

/// Default canonical business URL.
pub const DEFAULT_URL: &str = "https://dreizeer.com";

/// Default price range label.
pub const DEFAULT_PRICE_RANGE: &str = "€€";

/// Default currency.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// A point with an optional service radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoParams {
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Radius in meters. Without it the point is emitted as plain
    /// coordinates instead of a service circle.
    #[serde(default)]
    pub radius_meters: Option<u32>,
}

/// Caller-supplied postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressParams {
    /// Street and number.
    pub street_address: Option<String>,
    /// City. Falls back to Madrid.
    pub address_locality: Option<String>,
    /// Region.
    pub address_region: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// ISO country code. Falls back to `ES`.
    pub address_country: Option<String>,
}

/// Inputs for a `LocalBusiness` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusinessParams {
    /// Business name.
    pub name: String,
    /// Business description.
    pub description: String,
    /// Location and service radius.
    #[serde(default)]
    pub geo: Option<GeoParams>,
    /// Price range label.
    #[serde(default)]
    pub price_range: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub telephone: Option<String>,
    /// Email.
    #[serde(default)]
    pub email: Option<String>,
    /// Canonical URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<AddressParams>,
}

/// Where an online business operates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AreaServed {
    /// Worldwide.
    Global,
    /// A list of country codes.
    Countries(Vec<String>),
}

impl Default for AreaServed {
    fn default() -> Self {
        Self::Countries(vec!["ES".to_string()])
    }
}

/// Inputs for an `OnlineBusiness` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineBusinessParams {
    /// Business name.
    pub name: String,
    /// Business description.
    pub description: String,
    /// Served area; Spain when absent.
    #[serde(default)]
    pub area_served: Option<AreaServed>,
    /// Price range label.
    #[serde(default)]
    pub price_range: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub telephone: Option<String>,
    /// Email.
    #[serde(default)]
    pub email: Option<String>,
    /// Canonical URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// Inputs for a `Person` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonParams {
    /// Full name.
    pub name: String,
    /// Job title.
    pub job_title: String,
    /// Short bio.
    #[serde(default)]
    pub description: Option<String>,
    /// Profile URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Email.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub telephone: Option<String>,
    /// Portrait URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// One level of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// Visible label.
    pub name: String,
    /// Absolute URL, or a path resolved against the site base URL.
    pub url: String,
}

impl BreadcrumbItem {
    /// Creates a breadcrumb item.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A question and answer. Entries missing either side are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    /// Question text.
    pub question: Option<String>,
    /// Answer text.
    pub answer: Option<String>,
}

impl FaqItem {
    /// Creates a complete entry.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
    }

    /// Question and answer, if both are present and non-empty.
    #[must_use]
    pub fn complete(&self) -> Option<(&str, &str)> {
        let question = self.question.as_deref().filter(|q| !q.is_empty())?;
        let answer = self.answer.as_deref().filter(|a| !a.is_empty())?;
        Some((question, answer))
    }
}

/// A priced offer attached to a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffer {
    /// Offer name.
    pub name: String,
    /// Two-decimal price.
    pub price: String,
    /// Currency; EUR when absent.
    #[serde(default)]
    pub price_currency: Option<String>,
    /// Availability URL; in stock when absent.
    #[serde(default)]
    pub availability: Option<String>,
}

/// Inputs for a `Service` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceParams {
    /// Service name.
    pub name: String,
    /// Service description.
    pub description: String,
    /// Name of the providing business.
    pub provider: String,
    /// Free-text served area.
    #[serde(default)]
    pub area_served: Option<String>,
    /// Price range label.
    #[serde(default)]
    pub price_range: Option<String>,
    /// Offers; omitted from the output when empty.
    #[serde(default)]
    pub offers: Vec<ServiceOffer>,
}

/// A client review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Client display name.
    pub name: String,
    /// Where the client trains.
    pub location: String,
    /// Review body.
    pub text: String,
    /// Stars, 1 to 5.
    pub rating: u8,
    /// Client photo path.
    #[serde(default)]
    pub image: Option<String>,
}

/// Kind of JSON-LD document the generators can produce.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DocumentKind {
    /// Physical business with a service area.
    LocalBusiness,
    /// Online-only business.
    OnlineBusiness,
    /// The trainer.
    Person,
    /// Navigation trail.
    Breadcrumb,
    /// Questions and answers.
    Faq,
    /// A service with offers.
    Service,
    /// The monthly promotion.
    Offer,
    /// A single pricing plan.
    PlanService,
    /// Aggregate rating with reviews.
    Reviews,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn faq_item_requires_both_sides() {
        assert_eq!(FaqItem::new("Q", "A").complete(), Some(("Q", "A")));
        assert!(FaqItem::new("Q", "").complete().is_none());
        assert!(
            FaqItem {
                question: None,
                answer: Some("A".into()),
            }
            .complete()
            .is_none()
        );
    }

    #[test]
    fn area_served_defaults_to_spain() {
        assert_eq!(
            AreaServed::default(),
            AreaServed::Countries(vec!["ES".to_string()])
        );
    }

    #[test]
    fn params_deserialize_from_camel_case() {
        let params: LocalBusinessParams = serde_json::from_str(
            r#"{
                "name": "Test",
                "description": "Desc",
                "priceRange": "desde 25€",
                "geo": { "latitude": 40.4, "longitude": -3.7, "radiusMeters": 2000 },
                "address": { "addressLocality": "Getafe" }
            }"#,
        )
        .unwrap();

        assert_eq!(params.price_range.as_deref(), Some("desde 25€"));
        assert_eq!(params.geo.unwrap().radius_meters, Some(2000));
        assert_eq!(
            params.address.unwrap().address_locality.as_deref(),
            Some("Getafe")
        );
        assert!(params.url.is_none());
    }

    #[test]
    fn area_served_deserializes_both_forms() {
        let global: AreaServed = serde_json::from_str(r#""global""#).unwrap();
        assert_eq!(global, AreaServed::Global);

        let countries: AreaServed = serde_json::from_str(r#"{"countries":["ES","PT"]}"#).unwrap();
        assert_eq!(
            countries,
            AreaServed::Countries(vec!["ES".into(), "PT".into()])
        );
    }

    #[test]
    fn document_kind_names() {
        assert_eq!(DocumentKind::PlanService.to_string(), "plan-service");
        assert_eq!(
            DocumentKind::from_str("local-business").unwrap(),
            DocumentKind::LocalBusiness
        );
    }
}
