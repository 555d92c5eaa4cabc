//! Neighborhood landing pages (`/{city}/{neighborhood}`).
//!
//! A landing page is fully determined by its two URL segments and the
//! date it is rendered on.

use std::borrow::Cow;

use chrono::NaiveDate;
use dreizeer_contact::{
    build_chat_link, free_session_message, group_booking_message, group_search_message,
    neighborhood_cta_message,
};
use dreizeer_locality::imagery::hero_image;
use dreizeer_locality::{capitalize_display_name, lookup_geo, resolve_content_profile};
use dreizeer_locality_models::{ContentProfile, GeoEntry, ImageRef, Locality};
use dreizeer_pricing::display::price_amount;
use dreizeer_pricing::{current_monthly_offer, plan_by_id, pricing_plans, resolve_featured_plan_id};
use dreizeer_pricing_models::MonthlyOffer;
use dreizeer_schema::SchemaDocument;
use dreizeer_schema_models::{AddressParams, BreadcrumbItem, GeoParams, LocalBusinessParams};
use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::{RenderedSchema, SiteError, render_schemas};

/// Region every landing page's address is placed in.
pub const REGION: &str = "Comunidad de Madrid";

/// Title, description, and canonical path for the page head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    /// Path relative to the site root.
    pub canonical: String,
    /// Absolute page URL.
    pub url: String,
}

/// Pre-filled WhatsApp links shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingLinks {
    /// Main hero button.
    pub cta: String,
    /// Looking for group partners.
    pub group_search: String,
    /// Booking for a complete group.
    pub group_booking: String,
    /// Closing free-session button.
    pub free_session: String,
}

/// Everything needed to render a neighborhood landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    /// Decoded URL segments.
    pub locality: Locality,
    pub display_city: String,
    pub display_neighborhood: String,
    pub profile: ContentProfile,
    pub geo: GeoEntry,
    /// Plan to highlight; empty when none.
    pub featured_plan_id: String,
    pub offer: MonthlyOffer,
    pub hero: ImageRef,
    pub seo: SeoMetadata,
    pub links: LandingLinks,
    /// JSON-LD documents in page order.
    pub schemas: Vec<RenderedSchema>,
}

fn decode_segment(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}

fn plan_amount(id: &str) -> Result<&'static str, SiteError> {
    plan_by_id(id)
        .and_then(|plan| price_amount(&plan.display_price))
        .ok_or_else(|| SiteError::MissingPlan { id: id.to_string() })
}

/// "Precios desde 25€/persona en grupos, desde 40€/sesión individual."
///
/// # Errors
///
/// * [`SiteError::MissingPlan`] if the group or individual plan is missing
pub fn pricing_summary() -> Result<String, SiteError> {
    Ok(format!(
        "Precios desde {}€/persona en grupos, desde {}€/sesión individual.",
        plan_amount("group")?,
        plan_amount("individual")?,
    ))
}

impl LandingPage {
    /// Builds the landing page bundle.
    ///
    /// `city` and `neighborhood` are raw URL segments and are
    /// percent-decoded first. Unknown neighborhoods still produce a page
    /// using the default profile and city-center coordinates.
    ///
    /// # Errors
    ///
    /// * [`SiteError::MissingPlan`] if the pricing catalog lacks a plan the
    ///   page copy quotes
    /// * [`SiteError::Schema`] if a JSON-LD document fails to render
    pub fn build(
        city: &str,
        neighborhood: &str,
        today: NaiveDate,
        config: &SiteConfig,
    ) -> Result<Self, SiteError> {
        let city = decode_segment(city).into_owned();
        let neighborhood = decode_segment(neighborhood).into_owned();
        let display_city = capitalize_display_name(&city);
        let display_neighborhood = capitalize_display_name(&neighborhood);

        let profile = resolve_content_profile(&neighborhood);
        let geo = lookup_geo(&neighborhood);
        let featured_plan_id = resolve_featured_plan_id(&neighborhood);
        let offer = current_monthly_offer(today);
        let hero = hero_image(
            &neighborhood,
            profile.tone,
            &display_neighborhood,
            &display_city,
        );

        log::debug!(
            "Landing {city}/{neighborhood}: tone={} geo={} featured={featured_plan_id:?}",
            profile.tone,
            geo.key,
        );

        let locality = Locality {
            city: city.clone(),
            neighborhood: neighborhood.clone(),
        };
        let canonical = locality.path();
        let url = config.url(&canonical);
        let pricing = pricing_summary()?;

        let seo = SeoMetadata {
            title: format!(
                "Entrenador Personal en {display_neighborhood}, {display_city} | A Domicilio & Parque - Dreizeer"
            ),
            description: format!(
                "Entrenamiento personalizado en {display_neighborhood}, {display_city}. Servicios a domicilio y al aire libre. {pricing}"
            ),
            keywords: format!(
                "entrenador personal {display_neighborhood}, entrenador personal {display_city}, entrenamiento a domicilio {display_neighborhood}, entrenamiento al aire libre {display_city}"
            ),
            canonical: canonical.clone(),
            url: url.clone(),
        };

        let links = LandingLinks {
            cta: build_chat_link(&neighborhood_cta_message(
                &profile.cta_text,
                &display_neighborhood,
            )),
            group_search: build_chat_link(&group_search_message(&display_neighborhood)),
            group_booking: build_chat_link(&group_booking_message(&display_neighborhood)),
            free_session: build_chat_link(&free_session_message(&display_neighborhood)),
        };

        let mut documents = vec![
            SchemaDocument::LocalBusiness(LocalBusinessParams {
                name: format!(
                    "Entrenador Personal en {display_neighborhood}, {display_city} - Dreizeer"
                ),
                description: format!(
                    "Entrenamiento personalizado en {display_neighborhood}, {display_city}. {}. {pricing}",
                    profile.emphasis_tags.join(", ")
                ),
                geo: Some(GeoParams {
                    latitude: geo.latitude,
                    longitude: geo.longitude,
                    radius_meters: Some(geo.radius_meters),
                }),
                price_range: Some(format!("desde {}€", plan_amount("group")?)),
                address: Some(AddressParams {
                    address_locality: Some(display_city.clone()),
                    address_region: Some(REGION.to_string()),
                    address_country: Some("ES".to_string()),
                    ..Default::default()
                }),
                url: Some(url),
                ..Default::default()
            }),
            SchemaDocument::Breadcrumb {
                items: vec![
                    BreadcrumbItem::new("Inicio", "/"),
                    BreadcrumbItem::new(display_city.clone(), format!("/{city}")),
                    BreadcrumbItem::new(display_neighborhood.clone(), canonical),
                ],
                base: config.base_url.clone(),
            },
            SchemaDocument::Offer(offer.clone()),
        ];
        documents.extend(
            pricing_plans()
                .iter()
                .cloned()
                .map(SchemaDocument::PlanService),
        );

        Ok(Self {
            locality,
            display_city,
            display_neighborhood,
            profile,
            geo,
            featured_plan_id,
            offer,
            hero,
            seo,
            links,
            schemas: render_schemas(&documents)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dreizeer_locality_models::Tone;
    use dreizeer_schema_models::DocumentKind;
    use serde_json::Value;

    fn config() -> SiteConfig {
        SiteConfig::from_site_url(Some("dreizeer.es"))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn schema(page: &LandingPage, kind: DocumentKind) -> Value {
        let doc = page
            .schemas
            .iter()
            .find(|s| s.kind == kind)
            .unwrap_or_else(|| panic!("missing {kind}"));
        serde_json::from_str(&doc.json).unwrap()
    }

    #[test]
    fn builds_retiro_page() {
        let page = LandingPage::build("madrid", "retiro", today(), &config()).unwrap();

        assert_eq!(page.display_city, "Madrid");
        assert_eq!(page.display_neighborhood, "Retiro");
        assert_eq!(page.profile.tone, Tone::Outdoor);
        assert_eq!(page.featured_plan_id, "individual");
        assert_eq!(page.geo.radius_meters, 2000);
        assert_eq!(page.offer.valid_through, "2024-01-31");
        assert_eq!(page.seo.canonical, "/madrid/retiro");
        assert_eq!(page.seo.url, "https://dreizeer.es/madrid/retiro");
        assert_eq!(
            page.seo.title,
            "Entrenador Personal en Retiro, Madrid | A Domicilio & Parque - Dreizeer"
        );
        assert!(
            page.seo
                .description
                .ends_with("Precios desde 25€/persona en grupos, desde 40€/sesión individual.")
        );
    }

    #[test]
    fn local_business_uses_locality_geo_and_address() {
        let page = LandingPage::build("madrid", "retiro", today(), &config()).unwrap();
        let json = schema(&page, DocumentKind::LocalBusiness);

        assert_eq!(json["name"], "Entrenador Personal en Retiro, Madrid - Dreizeer");
        assert_eq!(json["priceRange"], "desde 25€");
        assert_eq!(json["url"], "https://dreizeer.es/madrid/retiro");
        assert_eq!(json["@id"], "https://dreizeer.es/madrid/retiro#business");
        assert_eq!(json["areaServed"]["geoRadius"]["value"], 2000);
        assert_eq!(json["address"]["addressLocality"], "Madrid");
        assert_eq!(json["address"]["addressRegion"], REGION);
        assert!(
            json["description"]
                .as_str()
                .unwrap()
                .contains("Entrenamiento al aire libre, Calistenia, Parques y espacios abiertos.")
        );
    }

    #[test]
    fn breadcrumb_walks_city_then_neighborhood() {
        let page =
            LandingPage::build("rivas-vaciamadrid", "futura", today(), &config()).unwrap();
        let json = schema(&page, DocumentKind::Breadcrumb);
        let items = json["itemListElement"].as_array().unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[1]["name"], "Rivas-Vaciamadrid");
        assert_eq!(items[1]["item"], "https://dreizeer.es/rivas-vaciamadrid");
        assert_eq!(items[2]["position"], 3);
        assert_eq!(
            items[2]["item"],
            "https://dreizeer.es/rivas-vaciamadrid/futura"
        );
    }

    #[test]
    fn includes_offer_and_every_plan() {
        let page = LandingPage::build("madrid", "vallecas", today(), &config()).unwrap();
        let offer = schema(&page, DocumentKind::Offer);
        assert_eq!(offer["validThrough"], "2024-01-31");

        let plans = page
            .schemas
            .iter()
            .filter(|s| s.kind == DocumentKind::PlanService)
            .count();
        assert_eq!(plans, pricing_plans().len());
        assert_eq!(page.featured_plan_id, "");
    }

    #[test]
    fn decodes_segments() {
        let page =
            LandingPage::build("madrid", "madrid%20r%C3%ADo", today(), &config()).unwrap();

        assert_eq!(page.locality.neighborhood, "madrid río");
        assert_eq!(page.display_neighborhood, "Madrid Río");
        assert_eq!(page.profile.tone, Tone::Outdoor);
        assert_eq!(page.geo.key, "madrid río");
    }

    #[test]
    fn unknown_neighborhood_falls_back() {
        let page = LandingPage::build("madrid", "lavapies", today(), &config()).unwrap();

        assert_eq!(page.profile.cta_text, "Solicitar Información");
        assert_eq!(page.geo.radius_meters, 5000);
        assert_eq!(page.featured_plan_id, "");
    }

    #[test]
    fn links_name_the_neighborhood() {
        let page = LandingPage::build("madrid", "moncloa", today(), &config()).unwrap();

        assert_eq!(
            page.links.cta,
            build_chat_link("Hola, me interesa el Reservar Sesión en Moncloa")
        );
        assert!(page.links.group_booking.ends_with("Moncloa"));
        assert!(page.links.free_session.starts_with("https://wa.me/34637453753?text="));
    }
}
