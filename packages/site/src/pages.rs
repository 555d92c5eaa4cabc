//! JSON-LD bundles for the fixed marketing pages.

use std::sync::LazyLock;

use dreizeer_contact::ChatMessage;
use dreizeer_locality::imagery::{ImageKind, PageKind, alt_for_page};
use dreizeer_schema::SchemaDocument;
use dreizeer_schema::reviews::testimonials;
use dreizeer_schema_models::{
    AddressParams, AreaServed, BreadcrumbItem, FaqItem, GeoParams, LocalBusinessParams,
    OnlineBusinessParams, PersonParams,
};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::config::SiteConfig;
use crate::landing::REGION;
use crate::{RenderedSchema, SiteError, render_schemas};

const FAQ_TOML: &str = include_str!("../data/faq.toml");

#[derive(Deserialize)]
struct FaqFile {
    faq: Vec<FaqItem>,
}

static ABOUT_FAQ: LazyLock<Vec<FaqItem>> = LazyLock::new(|| {
    toml::de::from_str::<FaqFile>(FAQ_TOML)
        .map(|file| file.faq)
        .unwrap_or_else(|e| panic!("Embedded FAQ is invalid: {e}"))
});

/// Questions shown on the about page.
#[must_use]
pub fn about_faq() -> &'static [FaqItem] {
    &ABOUT_FAQ
}

/// Marketing pages outside the neighborhood landing pages.
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
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StaticPage {
    /// `/`
    Home,
    /// `/sobre-mi`
    SobreMi,
    /// `/tercera-edad`
    TerceraEdad,
    /// `/online-coaching`
    OnlineCoaching,
}

impl StaticPage {
    /// Path relative to the site root.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SobreMi => "/sobre-mi",
            Self::TerceraEdad => "/tercera-edad",
            Self::OnlineCoaching => "/online-coaching",
        }
    }

    /// WhatsApp template for the page's main button.
    #[must_use]
    pub const fn chat_message(self) -> ChatMessage {
        match self {
            Self::Home => ChatMessage::Hero,
            Self::SobreMi => ChatMessage::AboutMe,
            Self::TerceraEdad => ChatMessage::Seniors,
            Self::OnlineCoaching => ChatMessage::OnlinePage,
        }
    }

    /// Alt text of the page's lead image.
    #[must_use]
    pub fn lead_image_alt(self) -> String {
        match self {
            Self::Home => alt_for_page(PageKind::Home, ImageKind::Hero, Some("Madrid"), None),
            Self::SobreMi => alt_for_page(PageKind::About, ImageKind::Profile, Some("Madrid"), None),
            Self::TerceraEdad => {
                alt_for_page(PageKind::SeniorCare, ImageKind::Service, Some("Madrid"), None)
            }
            Self::OnlineCoaching => alt_for_page(PageKind::Online, ImageKind::Service, None, None),
        }
    }

    /// Parses a page name, e.g. `"sobre-mi"`.
    ///
    /// # Errors
    ///
    /// * [`SiteError::UnknownPage`] if no page has that name
    pub fn parse(name: &str) -> Result<Self, SiteError> {
        name.parse().map_err(|_| SiteError::UnknownPage {
            name: name.to_string(),
        })
    }

    fn madrid_address() -> AddressParams {
        AddressParams {
            address_locality: Some("Madrid".to_string()),
            address_region: Some(REGION.to_string()),
            address_country: Some("ES".to_string()),
            ..Default::default()
        }
    }

    fn breadcrumb(self, label: &str, config: &SiteConfig) -> SchemaDocument {
        SchemaDocument::Breadcrumb {
            items: vec![
                BreadcrumbItem::new("Inicio", "/"),
                BreadcrumbItem::new(label, self.path()),
            ],
            base: config.base_url.clone(),
        }
    }

    /// JSON-LD document requests for this page, in page order.
    #[must_use]
    pub fn documents(self, config: &SiteConfig) -> Vec<SchemaDocument> {
        let url = match self {
            Self::Home => config.base_url.clone(),
            _ => config.url(self.path()),
        };

        match self {
            Self::Home => vec![
                SchemaDocument::LocalBusiness(LocalBusinessParams {
                    name: "Dreizeer - Entrenador Personal".to_string(),
                    description: "Programas de entrenamiento personalizados para que alcances tus metas de una vez por todas. Entrenamiento a domicilio, online y al aire libre en Madrid.".to_string(),
                    geo: Some(GeoParams {
                        latitude: 40.4168,
                        longitude: -3.7038,
                        radius_meters: Some(15_000),
                    }),
                    price_range: Some("desde 40€".to_string()),
                    address: Some(Self::madrid_address()),
                    url: Some(url),
                    ..Default::default()
                }),
                SchemaDocument::Reviews {
                    testimonials: testimonials().to_vec(),
                    image: testimonials()
                        .first()
                        .and_then(|t| t.image.as_deref())
                        .map(|path| config.url(path)),
                },
            ],
            Self::SobreMi => vec![
                SchemaDocument::Person(PersonParams {
                    name: "Dreizeer".to_string(),
                    job_title: "Entrenador Personal Especializado".to_string(),
                    description: Some("Ciencia del Movimiento con Base en Madrid y Alcance Global. Especialista en biomecánica, entrenamiento híbrido y corrección de técnica.".to_string()),
                    url: Some(url),
                    ..Default::default()
                }),
                SchemaDocument::Faq(about_faq().to_vec()),
                self.breadcrumb("Sobre Mí", config),
            ],
            Self::TerceraEdad => vec![
                SchemaDocument::LocalBusiness(LocalBusinessParams {
                    name: "Gimnasia a Domicilio para Mayores - Dreizeer".to_string(),
                    description: "Ejercicios para mayores de 65 años adaptados a movilidad reducida. Gimnasia a domicilio y envejecimiento activo con entrenador personal especializado.".to_string(),
                    price_range: Some("desde 40€/sesión".to_string()),
                    address: Some(Self::madrid_address()),
                    url: Some(url),
                    ..Default::default()
                }),
                self.breadcrumb("Tercera Edad", config),
            ],
            Self::OnlineCoaching => vec![
                SchemaDocument::OnlineBusiness(OnlineBusinessParams {
                    name: "Dreizeer - Entrenamiento Online".to_string(),
                    description: "Planificación personalizada con entrenador humano real. Videoanálisis y corrección de técnica que las apps de IA no pueden ofrecer.".to_string(),
                    area_served: Some(AreaServed::Global),
                    price_range: Some("desde 50€/mes".to_string()),
                    url: Some(url),
                    ..Default::default()
                }),
                self.breadcrumb("Entrenamiento Online", config),
            ],
        }
    }
}

/// A rendered static page bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBundle {
    pub page: StaticPage,
    pub path: &'static str,
    /// Main button link.
    pub contact_link: String,
    pub lead_image_alt: String,
    pub schemas: Vec<RenderedSchema>,
}

impl PageBundle {
    /// Renders a static page.
    ///
    /// # Errors
    ///
    /// * [`SiteError::Schema`] if a JSON-LD document fails to render
    pub fn build(page: StaticPage, config: &SiteConfig) -> Result<Self, SiteError> {
        Ok(Self {
            page,
            path: page.path(),
            contact_link: page.chat_message().link(),
            lead_image_alt: page.lead_image_alt(),
            schemas: render_schemas(&page.documents(config))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dreizeer_schema_models::DocumentKind;
    use serde_json::Value;
    use strum::IntoEnumIterator;

    const EXPECTED_FAQ_COUNT: usize = 5;

    fn config() -> SiteConfig {
        SiteConfig::from_site_url(Some("dreizeer.es"))
    }

    fn kinds(bundle: &PageBundle) -> Vec<DocumentKind> {
        bundle.schemas.iter().map(|s| s.kind).collect()
    }

    fn json(bundle: &PageBundle, kind: DocumentKind) -> Value {
        let doc = bundle.schemas.iter().find(|s| s.kind == kind).unwrap();
        serde_json::from_str(&doc.json).unwrap()
    }

    #[test]
    fn faq_is_complete() {
        assert_eq!(about_faq().len(), EXPECTED_FAQ_COUNT);
        assert!(about_faq().iter().all(|item| item.complete().is_some()));
    }

    #[test]
    fn page_names_parse() {
        assert_eq!(StaticPage::parse("sobre-mi").unwrap(), StaticPage::SobreMi);
        assert_eq!(StaticPage::OnlineCoaching.to_string(), "online-coaching");
        assert!(matches!(
            StaticPage::parse("blog"),
            Err(SiteError::UnknownPage { .. })
        ));
    }

    #[test]
    fn home_has_business_and_reviews() {
        let bundle = PageBundle::build(StaticPage::Home, &config()).unwrap();
        assert_eq!(
            kinds(&bundle),
            [DocumentKind::LocalBusiness, DocumentKind::Reviews]
        );

        let business = json(&bundle, DocumentKind::LocalBusiness);
        assert_eq!(business["areaServed"]["geoRadius"]["value"], 15_000);
        assert_eq!(business["priceRange"], "desde 40€");
        assert_eq!(business["url"], "https://dreizeer.es");

        let reviews = json(&bundle, DocumentKind::Reviews);
        assert_eq!(
            reviews["image"],
            "https://dreizeer.es/images/hero/entrenador-personal-madrid-cliente-testimonio-1.jpg"
        );
    }

    #[test]
    fn about_page_has_person_faq_and_breadcrumb() {
        let bundle = PageBundle::build(StaticPage::SobreMi, &config()).unwrap();
        assert_eq!(
            kinds(&bundle),
            [
                DocumentKind::Person,
                DocumentKind::Faq,
                DocumentKind::Breadcrumb
            ]
        );

        let faq = json(&bundle, DocumentKind::Faq);
        assert_eq!(
            faq["mainEntity"].as_array().unwrap().len(),
            EXPECTED_FAQ_COUNT
        );

        let person = json(&bundle, DocumentKind::Person);
        assert_eq!(person["@id"], "https://dreizeer.es/sobre-mi#person");

        let crumbs = json(&bundle, DocumentKind::Breadcrumb);
        assert_eq!(crumbs["itemListElement"][1]["name"], "Sobre Mí");
        assert_eq!(
            crumbs["itemListElement"][1]["item"],
            "https://dreizeer.es/sobre-mi"
        );
    }

    #[test]
    fn online_page_serves_globally() {
        let bundle = PageBundle::build(StaticPage::OnlineCoaching, &config()).unwrap();
        let business = json(&bundle, DocumentKind::OnlineBusiness);

        assert_eq!(business["areaServed"]["name"], "Global");
        assert_eq!(business["priceRange"], "desde 50€/mes");
    }

    #[test]
    fn senior_page_has_no_geo() {
        let bundle = PageBundle::build(StaticPage::TerceraEdad, &config()).unwrap();
        let business = json(&bundle, DocumentKind::LocalBusiness);

        assert!(business.get("areaServed").is_none());
        assert!(business.get("geo").is_none());
        assert_eq!(business["address"]["addressLocality"], "Madrid");
    }

    #[test]
    fn lead_images_are_worded_per_page() {
        let home = PageBundle::build(StaticPage::Home, &config()).unwrap();
        assert_eq!(
            home.lead_image_alt,
            "Entrenador personal corrigiendo técnica en Madrid."
        );
        assert_eq!(
            StaticPage::SobreMi.lead_image_alt(),
            "Foto de perfil de Dreizeer en Madrid entrenador personal especializado."
        );
        assert!(
            StaticPage::TerceraEdad
                .lead_image_alt()
                .starts_with("Gimnasia a domicilio para mayores")
        );
        assert!(StaticPage::OnlineCoaching.lead_image_alt().contains("online"));
    }

    #[test]
    fn every_page_has_a_contact_link() {
        for page in StaticPage::iter() {
            let bundle = PageBundle::build(page, &config()).unwrap();
            assert!(
                bundle
                    .contact_link
                    .starts_with("https://wa.me/34637453753?text=")
            );
            assert!(!bundle.schemas.is_empty(), "{page}");
        }
    }
}
