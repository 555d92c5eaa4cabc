//! `Person` document for the trainer.

use dreizeer_schema_models::nodes::{JsonLd, Person, SchemaType};
use dreizeer_schema_models::{DEFAULT_EMAIL, DEFAULT_TELEPHONE, DEFAULT_URL, PersonParams};

use crate::{SchemaError, or_default, to_pretty_json};

/// Social profiles linked from every `Person` document.
pub const SAME_AS: [&str; 2] = [
    "https://www.instagram.com/dreizeer/",
    "https://www.tiktok.com/@dreizeerfit",
];

/// Builds the `Person` node without serializing it.
#[must_use]
pub fn person(params: &PersonParams) -> Person {
    let url = or_default(params.url.as_ref(), DEFAULT_URL);

    Person {
        kind: SchemaType::Person,
        id: format!("{url}#person"),
        name: params.name.clone(),
        job_title: params.job_title.clone(),
        email: or_default(params.email.as_ref(), DEFAULT_EMAIL),
        telephone: or_default(params.telephone.as_ref(), DEFAULT_TELEPHONE),
        url,
        description: params.description.clone().filter(|d| !d.is_empty()),
        image: params.image.clone().filter(|i| !i.is_empty()),
        same_as: SAME_AS.to_vec(),
    }
}

/// Generates a `Person` JSON-LD document.
///
/// # Errors
///
/// * [`SchemaError::Json`] if serialization fails
pub fn generate_person_schema(params: &PersonParams) -> Result<String, SchemaError> {
    to_pretty_json(&JsonLd::new(person(params)))
}
