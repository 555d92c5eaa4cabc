#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Schema.org JSON-LD generators.
//!
//! Each generator takes plain parameters and returns a pretty-printed JSON
//! string ready to drop into a `<script type="application/ld+json">` tag.
//! List-shaped documents (breadcrumbs, FAQ, reviews) return an empty string
//! when there is nothing to list, so callers can skip the tag.
//!
//! [`SchemaDocument`] is the tagged entry point: one variant per document
//! kind, deserializable from JSON.

pub mod business;
pub mod navigation;
pub mod person;
pub mod reviews;
pub mod service;

pub use business::{generate_local_business_schema, generate_online_business_schema};
pub use navigation::{generate_breadcrumb_schema, generate_faq_schema};
pub use person::generate_person_schema;
pub use reviews::generate_reviews_schema;
pub use service::{generate_offer_schema, generate_plan_service_schema, generate_service_schema};

use dreizeer_pricing_models::{MonthlyOffer, PricingPlan};
use dreizeer_schema_models::{
    BreadcrumbItem, DocumentKind, FaqItem, LocalBusinessParams, OnlineBusinessParams, PersonParams,
    ServiceParams, Testimonial,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while generating JSON-LD.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Serializing the document failed.
    #[error("Failed to serialize JSON-LD: {0}")]
    Json(#[from] serde_json::Error),

    /// A pricing plan referenced by a document is missing from the catalog.
    #[error("Pricing plan not found: {id}")]
    UnknownPlan {
        /// The missing plan id.
        id: String,
    },

    /// A testimonial's rating is outside `1..=5`.
    #[error("Testimonial from {name} has rating {rating}, expected 1 to 5")]
    InvalidRating {
        /// Author of the testimonial.
        name: String,
        /// The rejected rating.
        rating: u8,
    },

    /// The embedded testimonial table failed to parse.
    #[error("Failed to parse testimonials: {0}")]
    Testimonials(#[from] toml::de::Error),
}

/// A request for one JSON-LD document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "kebab-case")]
pub enum SchemaDocument {
    /// Physical business with geo-targeting.
    LocalBusiness(LocalBusinessParams),
    /// Online-only business.
    OnlineBusiness(OnlineBusinessParams),
    /// The trainer.
    Person(PersonParams),
    /// Navigation trail; relative URLs are resolved against `base`.
    Breadcrumb {
        /// Trail, outermost first.
        items: Vec<BreadcrumbItem>,
        /// Site base URL.
        base: String,
    },
    /// Questions and answers.
    Faq(Vec<FaqItem>),
    /// A service with a provider and offers.
    Service(ServiceParams),
    /// The monthly promotion.
    Offer(MonthlyOffer),
    /// A single pricing plan.
    PlanService(PricingPlan),
    /// Aggregate rating with one review per testimonial.
    Reviews {
        /// Reviews to publish.
        testimonials: Vec<Testimonial>,
        /// Representative image URL.
        #[serde(default)]
        image: Option<String>,
    },
}

impl SchemaDocument {
    /// Which kind of document this is.
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        match self {
            Self::LocalBusiness(_) => DocumentKind::LocalBusiness,
            Self::OnlineBusiness(_) => DocumentKind::OnlineBusiness,
            Self::Person(_) => DocumentKind::Person,
            Self::Breadcrumb { .. } => DocumentKind::Breadcrumb,
            Self::Faq(_) => DocumentKind::Faq,
            Self::Service(_) => DocumentKind::Service,
            Self::Offer(_) => DocumentKind::Offer,
            Self::PlanService(_) => DocumentKind::PlanService,
            Self::Reviews { .. } => DocumentKind::Reviews,
        }
    }

    /// Renders the document as pretty-printed JSON-LD.
    ///
    /// # Errors
    ///
    /// * [`SchemaError::Json`] if serialization fails
    /// * [`SchemaError::UnknownPlan`] if a local business catalog references
    ///   a plan missing from the pricing catalog
    /// * [`SchemaError::InvalidRating`] if a review rating is outside `1..=5`
    pub fn render(&self) -> Result<String, SchemaError> {
        log::debug!("Rendering {} JSON-LD", self.kind());

        match self {
            Self::LocalBusiness(params) => generate_local_business_schema(params),
            Self::OnlineBusiness(params) => generate_online_business_schema(params),
            Self::Person(params) => generate_person_schema(params),
            Self::Breadcrumb { items, base } => generate_breadcrumb_schema(items, base),
            Self::Faq(items) => generate_faq_schema(items),
            Self::Service(params) => generate_service_schema(params),
            Self::Offer(offer) => generate_offer_schema(offer),
            Self::PlanService(plan) => generate_plan_service_schema(plan),
            Self::Reviews {
                testimonials,
                image,
            } => generate_reviews_schema(testimonials, image.as_deref()),
        }
    }
}

/// Serializes a document with two-space indentation.
pub(crate) fn to_pretty_json<T: Serialize>(doc: &T) -> Result<String, SchemaError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// An optional parameter with empty strings treated as absent.
pub(crate) fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// An optional parameter, falling back to `default` when absent or empty.
pub(crate) fn or_default(value: Option<&String>, default: &str) -> String {
    non_empty(value).unwrap_or_else(|| default.to_string())
}
