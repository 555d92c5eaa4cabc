#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Site assembly for the Dreizeer training site.
//!
//! Combines locality resolution, pricing, JSON-LD generation, and contact
//! links into per-page bundles, and produces the crawler-facing files
//! (sitemap, robots policy, web manifest). The `dreizeer_site` binary
//! prints any of these or exports them all to a directory.

pub mod config;
pub mod export;
pub mod landing;
pub mod manifest;
pub mod pages;
pub mod robots;
pub mod sitemap;

use dreizeer_locality::LocalityError;
use dreizeer_schema::{SchemaDocument, SchemaError};
use dreizeer_schema_models::DocumentKind;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while assembling or exporting the site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Reading or writing export files failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON-LD generation failed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Locality data was invalid.
    #[error(transparent)]
    Locality(#[from] LocalityError),

    /// Serializing a bundle failed.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// A pricing plan the page copy depends on is missing.
    #[error("Pricing plan not found: {id}")]
    MissingPlan {
        /// Plan id.
        id: String,
    },

    /// The requested static page does not exist.
    #[error("Unknown page: {name}")]
    UnknownPage {
        /// Requested page name.
        name: String,
    },

    /// A `--date` argument was not a `YYYY-MM-DD` date.
    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// Parse failure.
        source: chrono::ParseError,
    },
}

/// One rendered JSON-LD document of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSchema {
    /// Document kind.
    pub kind: DocumentKind,
    /// Pretty-printed JSON-LD.
    pub json: String,
}

/// Renders documents in order, skipping those with nothing to publish.
///
/// # Errors
///
/// * [`SiteError::Schema`] if any document fails to render
pub fn render_schemas(documents: &[SchemaDocument]) -> Result<Vec<RenderedSchema>, SiteError> {
    let mut rendered = Vec::with_capacity(documents.len());

    for doc in documents {
        let json = doc.render()?;
        if json.is_empty() {
            log::debug!("Skipping empty {} document", doc.kind());
            continue;
        }
        rendered.push(RenderedSchema {
            kind: doc.kind(),
            json,
        });
    }

    Ok(rendered)
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// * [`SiteError::InvalidDate`] if the input is not a valid date
pub fn parse_date(value: &str) -> Result<chrono::NaiveDate, SiteError> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| SiteError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dreizeer_schema_models::FaqItem;

    #[test]
    fn skips_empty_documents() {
        let rendered = render_schemas(&[
            SchemaDocument::Faq(vec![]),
            SchemaDocument::Faq(vec![FaqItem::new("Q", "A")]),
        ])
        .unwrap();

        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].kind, DocumentKind::Faq);
    }

    #[test]
    fn parses_dates() {
        assert_eq!(
            parse_date("2024-02-15").unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
        );
        assert!(matches!(
            parse_date("15/02/2024"),
            Err(SiteError::InvalidDate { .. })
        ));
    }
}
