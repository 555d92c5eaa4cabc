//! Aggregate rating and client reviews.

use std::sync::LazyLock;

use dreizeer_schema_models::Testimonial;
use dreizeer_schema_models::nodes::{JsonLd, NamedPlace, RatedBusiness, Rating, Review, SchemaType};
use serde::Deserialize;

use crate::{SchemaError, to_pretty_json};

const TESTIMONIALS_TOML: &str = include_str!("../data/testimonials.toml");

/// Business name the reviews are attached to.
pub const REVIEWED_BUSINESS: &str = "Entrenador Personal Dreizeer";

/// Publication date stamped on every review.
pub const REVIEW_DATE: &str = "2024-01-15";

const BEST_RATING: &str = "5";
const WORST_RATING: &str = "1";

/// Ratings a testimonial may carry.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Deserialize)]
struct TestimonialsFile {
    testimonials: Vec<Testimonial>,
}

/// Parses a testimonial table.
///
/// # Errors
///
/// * [`SchemaError::Testimonials`] if the TOML is malformed
/// * [`SchemaError::InvalidRating`] if a rating is outside `1..=5`
pub fn parse_testimonials(toml_str: &str) -> Result<Vec<Testimonial>, SchemaError> {
    let file: TestimonialsFile = toml::de::from_str(toml_str)?;
    validate_ratings(&file.testimonials)?;
    Ok(file.testimonials)
}

/// Checks every rating lies within [`RATING_RANGE`].
///
/// # Errors
///
/// * [`SchemaError::InvalidRating`] for the first out-of-range rating
pub fn validate_ratings(testimonials: &[Testimonial]) -> Result<(), SchemaError> {
    match testimonials
        .iter()
        .find(|t| !RATING_RANGE.contains(&t.rating))
    {
        Some(t) => Err(SchemaError::InvalidRating {
            name: t.name.clone(),
            rating: t.rating,
        }),
        None => Ok(()),
    }
}

static TESTIMONIALS: LazyLock<Vec<Testimonial>> = LazyLock::new(|| {
    parse_testimonials(TESTIMONIALS_TOML)
        .unwrap_or_else(|e| panic!("Embedded testimonials are invalid: {e}"))
});

/// The published client reviews.
#[must_use]
pub fn testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS
}

/// Mean rating rounded to one decimal, without a trailing `.0`.
#[must_use]
pub fn average_rating(testimonials: &[Testimonial]) -> String {
    let Ok(count) = u64::try_from(testimonials.len()) else {
        return "0".to_string();
    };
    if count == 0 {
        return "0".to_string();
    }

    let sum = testimonials
        .iter()
        .fold(0_u64, |acc, t| acc.saturating_add(u64::from(t.rating)));
    let tenths = sum.saturating_mul(10).saturating_add(count / 2) / count;

    if tenths % 10 == 0 {
        (tenths / 10).to_string()
    } else {
        format!("{}.{}", tenths / 10, tenths % 10)
    }
}

fn rating(value: String, review_count: Option<String>, kind: SchemaType) -> Rating {
    Rating {
        kind,
        rating_value: value,
        review_count,
        best_rating: BEST_RATING,
        worst_rating: WORST_RATING,
    }
}

/// Generates a `LocalBusiness` document carrying an `AggregateRating` and
/// one `Review` per testimonial. Returns an empty string when there are no
/// testimonials.
///
/// # Errors
///
/// * [`SchemaError::Json`] if serialization fails
/// * [`SchemaError::InvalidRating`] if a rating is outside `1..=5`
pub fn generate_reviews_schema(
    testimonials: &[Testimonial],
    image: Option<&str>,
) -> Result<String, SchemaError> {
    if testimonials.is_empty() {
        return Ok(String::new());
    }
    validate_ratings(testimonials)?;

    let business = RatedBusiness {
        kind: SchemaType::LocalBusiness,
        name: REVIEWED_BUSINESS.to_string(),
        image: image.filter(|i| !i.is_empty()).map(ToString::to_string),
        aggregate_rating: rating(
            average_rating(testimonials),
            Some(testimonials.len().to_string()),
            SchemaType::AggregateRating,
        ),
        review: testimonials
            .iter()
            .map(|t| Review {
                kind: SchemaType::Review,
                author: NamedPlace::new(SchemaType::Person, t.name.clone()),
                date_published: REVIEW_DATE.to_string(),
                review_body: t.text.clone(),
                review_rating: rating(t.rating.to_string(), None, SchemaType::Rating),
                content_location: NamedPlace::new(SchemaType::Place, t.location.clone()),
            })
            .collect(),
    };

    to_pretty_json(&JsonLd::new(business))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const EXPECTED_TESTIMONIAL_COUNT: usize = 3;

    fn testimonial(rating: u8) -> Testimonial {
        Testimonial {
            name: "X".into(),
            location: "Madrid".into(),
            text: "Bien".into(),
            rating,
            image: None,
        }
    }

    #[test]
    fn loads_embedded_testimonials() {
        let all = testimonials();
        assert_eq!(all.len(), EXPECTED_TESTIMONIAL_COUNT);
        assert_eq!(all[0].name, "Carlos M.");
        assert_eq!(all[1].location, "Rivas-Vaciamadrid");
        for t in all {
            assert!((1..=5).contains(&t.rating), "{}", t.name);
            assert!(!t.text.is_empty(), "{}", t.name);
        }
    }

    #[test]
    fn averages_ratings() {
        assert_eq!(average_rating(testimonials()), "5");
        assert_eq!(average_rating(&[testimonial(5), testimonial(4)]), "4.5");
        assert_eq!(
            average_rating(&[testimonial(5), testimonial(5), testimonial(4)]),
            "4.7"
        );
        assert_eq!(average_rating(&[]), "0");
    }

    #[test]
    fn builds_aggregate_and_reviews() {
        let json: Value = serde_json::from_str(
            &generate_reviews_schema(testimonials(), Some("https://dreizeer.es/images/a.jpg"))
                .unwrap(),
        )
        .unwrap();

        assert_eq!(json["@type"], "LocalBusiness");
        assert_eq!(json["name"], REVIEWED_BUSINESS);
        assert_eq!(json["aggregateRating"]["@type"], "AggregateRating");
        assert_eq!(json["aggregateRating"]["ratingValue"], "5");
        assert_eq!(json["aggregateRating"]["reviewCount"], "3");
        assert_eq!(json["aggregateRating"]["worstRating"], "1");

        let reviews = json["review"].as_array().unwrap();
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0]["author"]["@type"], "Person");
        assert_eq!(reviews[0]["author"]["name"], "Carlos M.");
        assert_eq!(reviews[0]["datePublished"], REVIEW_DATE);
        assert_eq!(reviews[0]["reviewRating"]["@type"], "Rating");
        assert!(reviews[0]["reviewRating"].get("reviewCount").is_none());
        assert_eq!(reviews[2]["contentLocation"]["name"], "Madrid (Chamberí)");
    }

    #[test]
    fn rejects_ratings_outside_one_to_five() {
        for rating in [0, 6, 9] {
            assert!(matches!(
                generate_reviews_schema(&[testimonial(5), testimonial(rating)], None),
                Err(SchemaError::InvalidRating { rating: r, .. }) if r == rating
            ));
        }
        assert!(generate_reviews_schema(&[testimonial(1), testimonial(5)], None).is_ok());
    }

    #[test]
    fn parse_rejects_out_of_range_rating() {
        let toml = r#"
[[testimonials]]
name = "Ana"
location = "Madrid"
text = "Genial"
rating = 0
"#;
        assert!(matches!(
            parse_testimonials(toml),
            Err(SchemaError::InvalidRating { ref name, rating: 0 }) if name == "Ana"
        ));
    }

    #[test]
    fn averages_large_lists_without_overflow() {
        let many = vec![testimonial(u8::MAX); 100_000];
        assert_eq!(average_rating(&many), "255");
    }

    #[test]
    fn no_testimonials_renders_nothing() {
        assert_eq!(generate_reviews_schema(&[], None).unwrap(), "");
    }
}
