//! Breadcrumb and FAQ documents.
//!
//! Both return an empty string when there is nothing to list.

use dreizeer_schema_models::nodes::{
    Answer, BreadcrumbList, FaqPage, JsonLd, ListItem, Question, SchemaType,
};
use dreizeer_schema_models::{BreadcrumbItem, FaqItem};

use crate::{SchemaError, to_pretty_json};

/// Resolves a breadcrumb URL against the site base URL. Anything already
/// starting with `http` is kept as is.
#[must_use]
pub fn resolve_url(url: &str, base: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("{base}{url}")
    }
}

/// Generates a `BreadcrumbList` JSON-LD document.
///
/// Positions are 1-based and follow input order.
///
/// # Errors
///
/// * [`SchemaError::Json`] if serialization fails
pub fn generate_breadcrumb_schema(
    items: &[BreadcrumbItem],
    base: &str,
) -> Result<String, SchemaError> {
    if items.is_empty() {
        return Ok(String::new());
    }

    let list = BreadcrumbList {
        kind: SchemaType::BreadcrumbList,
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(index, item)| ListItem {
                kind: SchemaType::ListItem,
                position: index + 1,
                name: item.name.clone(),
                item: resolve_url(&item.url, base),
            })
            .collect(),
    };

    to_pretty_json(&JsonLd::new(list))
}

/// Generates a `FAQPage` JSON-LD document.
///
/// Entries missing a question or an answer are dropped. If none remain the
/// result is empty.
///
/// # Errors
///
/// * [`SchemaError::Json`] if serialization fails
pub fn generate_faq_schema(items: &[FaqItem]) -> Result<String, SchemaError> {
    let main_entity: Vec<Question> = items
        .iter()
        .filter_map(FaqItem::complete)
        .map(|(question, answer)| Question {
            kind: SchemaType::Question,
            name: question.to_string(),
            accepted_answer: Answer {
                kind: SchemaType::Answer,
                text: answer.to_string(),
            },
        })
        .collect();

    if main_entity.len() < items.len() {
        log::debug!(
            "Dropped {} incomplete FAQ entries",
            items.len() - main_entity.len()
        );
    }

    if main_entity.is_empty() {
        return Ok(String::new());
    }

    to_pretty_json(&JsonLd::new(FaqPage {
        kind: SchemaType::FaqPage,
        main_entity,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const BASE: &str = "https://dreizeer.es";

    #[test]
    fn breadcrumb_positions_follow_input_order() {
        let json: Value = serde_json::from_str(
            &generate_breadcrumb_schema(
                &[
                    BreadcrumbItem::new("Inicio", "/"),
                    BreadcrumbItem::new("Madrid", "/madrid"),
                ],
                BASE,
            )
            .unwrap(),
        )
        .unwrap();

        assert_eq!(json["@type"], "BreadcrumbList");
        let items = json["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["name"], "Inicio");
        assert_eq!(items[0]["item"], "https://dreizeer.es/");
        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["item"], "https://dreizeer.es/madrid");
    }

    #[test]
    fn absolute_urls_are_kept() {
        assert_eq!(
            resolve_url("https://dreizeer.com/sobre-mi", BASE),
            "https://dreizeer.com/sobre-mi"
        );
        assert_eq!(resolve_url("/sobre-mi", BASE), "https://dreizeer.es/sobre-mi");
        assert_eq!(resolve_url("", BASE), BASE);
    }

    #[test]
    fn empty_breadcrumb_is_empty_string() {
        assert_eq!(generate_breadcrumb_schema(&[], BASE).unwrap(), "");
    }

    #[test]
    fn faq_drops_incomplete_entries() {
        let json: Value = serde_json::from_str(
            &generate_faq_schema(&[
                FaqItem::new("¿Es una app?", "No."),
                FaqItem {
                    question: Some("¿Sin respuesta?".into()),
                    answer: None,
                },
            ])
            .unwrap(),
        )
        .unwrap();

        assert_eq!(json["@type"], "FAQPage");
        let entries = json["mainEntity"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["@type"], "Question");
        assert_eq!(entries[0]["name"], "¿Es una app?");
        assert_eq!(entries[0]["acceptedAnswer"]["@type"], "Answer");
        assert_eq!(entries[0]["acceptedAnswer"]["text"], "No.");
    }

    #[test]
    fn empty_or_all_incomplete_faq_is_empty_string() {
        assert_eq!(generate_faq_schema(&[]).unwrap(), "");
        assert_eq!(
            generate_faq_schema(&[FaqItem::default(), FaqItem::new("", "A")]).unwrap(),
            ""
        );
    }

    #[test]
    fn output_is_pretty_printed() {
        let out = generate_faq_schema(&[FaqItem::new("Q", "A")]).unwrap();
        assert!(out.starts_with("{\n  \"@context\""));
    }
}
