//! Hero image selection and alt-text generation.
//!
//! Landing pages pick a hero image by exact neighborhood match, falling
//! back to a tone-specific image. Images without an explicit alt text get
//! one derived from page context or from the keywords in the file name.

use std::sync::LazyLock;

use dreizeer_locality_models::{ImageRef, Tone};
use regex::Regex;

use crate::LocalityError;
use crate::text::lookup_key;

const RETIRO_IMAGE: &str = "/images/local/madrid/entrenamiento-personal-aire-libre-parque-retiro.webp";
const SALAMANCA_IMAGE: &str =
    "/images/local/madrid/entrenador-personal-domicilio-barrio-salamanca-lujo.webp";
const CHAMBERI_IMAGE: &str = "/images/local/madrid/fitness-domicilio-chamberi-material-incluido.webp";
const VALLECAS_IMAGE: &str = "/images/local/madrid/grupo-entrenamiento-economico-vallecas-madrid.webp";
const FUTURA_IMAGE: &str =
    "/images/local/rivas/entrenador-personal-rivas-futura-grupos-reducidos.webp";
const COVIBAR_IMAGE: &str = "/images/local/rivas/gimnasia-salud-covibar-rivas-vaciamadrid.webp";

/// Exact-match hero images: `(keys, src, alt)`.
const HERO_IMAGES: &[(&[&str], &str, &str)] = &[
    (
        &["retiro", "madrid río", "madrid-rio"],
        RETIRO_IMAGE,
        "Clase de entrenamiento funcional individual en el Parque del Retiro, Madrid",
    ),
    (
        &["salamanca"],
        SALAMANCA_IMAGE,
        "Servicio de entrenador personal exclusivo a domicilio en Barrio de Salamanca",
    ),
    (
        &["chamberí", "chamberi"],
        CHAMBERI_IMAGE,
        "Entrenador personal llevando material deportivo a casa en Chamberí",
    ),
    (
        &["vallecas"],
        VALLECAS_IMAGE,
        "Grupo reducido de entrenamiento funcional al aire libre en Vallecas",
    ),
    (
        &["futura", "rivas-futura"],
        FUTURA_IMAGE,
        "Entrenamiento de alta intensidad para profesionales en Rivas Futura",
    ),
    (
        &["covibar", "rivas-covibar"],
        COVIBAR_IMAGE,
        "Ejercicios de salud y mantenimiento en el barrio de Covibar, Rivas",
    ),
];

/// Picks the hero image for a landing page.
///
/// Unlike content rules, this is an exact match on the lowercased
/// neighborhood. Unlisted neighborhoods get the image for their tone and
/// a generated alt text naming the display neighborhood and city.
#[must_use]
pub fn hero_image(
    neighborhood: &str,
    tone: Tone,
    display_neighborhood: &str,
    display_city: &str,
) -> ImageRef {
    let key = lookup_key(neighborhood);

    if let Some((_, src, alt)) = HERO_IMAGES
        .iter()
        .find(|(keys, _, _)| keys.contains(&key.as_str()))
    {
        return ImageRef {
            src: (*src).to_string(),
            alt: (*alt).to_string(),
        };
    }

    let (src, style) = match tone {
        Tone::Outdoor => (RETIRO_IMAGE, "al aire libre"),
        Tone::Premium => (SALAMANCA_IMAGE, "a domicilio exclusivo"),
        Tone::Accessible => (VALLECAS_IMAGE, "en grupo reducido"),
    };

    ImageRef {
        src: src.to_string(),
        alt: format!("Entrenamiento personal {style} en {display_neighborhood}, {display_city}"),
    }
}

/// What kind of page an image appears on, for alt-text wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    /// Neighborhood landing page.
    Local,
    /// Online coaching page.
    Online,
    /// Senior (tercera edad) page.
    SeniorCare,
    /// Hero banner.
    Hero,
    /// Trainer profile photo.
    Profile,
}

/// Page context used to word an alt text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AltTextContext {
    /// Kind of page; `None` yields an empty description.
    pub service_type: Option<ServiceType>,
    /// Display city.
    pub city: Option<String>,
    /// Display neighborhood.
    pub neighborhood: Option<String>,
    /// Action shown in the image (e.g. "corrigiendo técnica").
    pub action: Option<String>,
}

static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpg|jpeg|png|webp|gif)$").expect("valid regex"));

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_\s]+").expect("valid regex"));

const LOCATION_KEYWORDS: &[&str] = &[
    "madrid",
    "rivas",
    "retiro",
    "salamanca",
    "vallecas",
    "chamberi",
];

const GENERIC_KEYWORDS: &[&str] = &["imagen", "image", "foto", "photo", "jpg", "jpeg", "png"];

/// Splits a file name into lowercase keywords longer than two characters.
fn filename_keywords(filename: &str) -> Vec<String> {
    let stem = EXTENSION_RE.replace(filename, "");
    SEPARATOR_RE
        .split(&stem)
        .map(str::to_lowercase)
        .filter(|word| word.chars().count() > 2)
        .collect()
}

fn has_any(keywords: &[String], needles: &[&str]) -> bool {
    keywords
        .iter()
        .any(|k| needles.iter().any(|needle| k.contains(needle)))
}

/// Generates an alt text for an image path, optionally worded by context.
#[must_use]
pub fn generate_alt_text(image_path: &str, context: Option<&AltTextContext>) -> String {
    if let Some(context) = context {
        return context_alt_text(context);
    }

    let filename = image_path.rsplit('/').next().unwrap_or(image_path);
    let keywords = filename_keywords(filename);

    if keywords.is_empty() {
        return "Imagen de entrenamiento personal con Dreizeer.".to_string();
    }

    if has_any(&keywords, &["perfil", "profile"]) {
        return "Foto de perfil de entrenador personal Dreizeer en Madrid.".to_string();
    }

    if has_any(&keywords, &["entren", "train"]) {
        let location = keywords
            .iter()
            .find(|k| LOCATION_KEYWORDS.iter().any(|loc| k.contains(loc)));
        return location.map_or_else(
            || "Entrenamiento personal con Dreizeer.".to_string(),
            |location| format!("Entrenamiento personal en {location} con Dreizeer."),
        );
    }

    if has_any(&keywords, &["grupo", "group"]) {
        return "Grupo reducido de entrenamiento personal.".to_string();
    }

    let relevant = keywords
        .iter()
        .filter(|k| !GENERIC_KEYWORDS.contains(&k.as_str()))
        .take(4)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    if relevant.is_empty() {
        "Imagen de entrenamiento personal.".to_string()
    } else {
        format!("Imagen de {relevant}.")
    }
}

fn context_alt_text(context: &AltTextContext) -> String {
    let mut parts: Vec<String> = Vec::new();
    let city = context.city.as_deref();
    let neighborhood = context.neighborhood.as_deref();

    match context.service_type {
        Some(ServiceType::Profile) => {
            parts.push("Foto de perfil de".to_string());
            parts.push("Dreizeer".to_string());
            if let Some(city) = city {
                parts.push(format!("en {city}"));
            }
            parts.push("entrenador personal especializado".to_string());
        }
        Some(ServiceType::Hero) => {
            parts.push("Entrenador personal".to_string());
            if let Some(action) = &context.action {
                parts.push(action.clone());
            }
            if let Some(city) = city {
                parts.push(format!("en {city}"));
            }
            if let Some(neighborhood) = neighborhood {
                parts.push(neighborhood.to_string());
            }
        }
        Some(ServiceType::Local) => {
            parts.push("Entrenamiento personal".to_string());
            if let Some(neighborhood) = neighborhood {
                parts.push(format!("en {neighborhood}"));
            }
            if let Some(city) = city {
                parts.push(city.to_string());
            }
        }
        Some(ServiceType::SeniorCare) => {
            parts.push("Gimnasia a domicilio para mayores".to_string());
            if let Some(city) = city {
                parts.push(format!("en {city}"));
            }
            parts.push("con entrenador personal especializado".to_string());
        }
        Some(ServiceType::Online) => {
            parts.push("Análisis de técnica por video".to_string());
            parts.push("para entrenamiento online personalizado".to_string());
        }
        None => {}
    }

    format!("{}.", parts.join(" "))
}

/// Site page kinds with their own alt-text wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Home page.
    Home,
    /// About page (`/sobre-mi`).
    About,
    /// Online coaching page.
    Online,
    /// Senior page (`/tercera-edad`).
    SeniorCare,
}

/// Role of an image within a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// Hero banner.
    Hero,
    /// Profile photo.
    Profile,
    /// Service illustration.
    Service,
}

/// Alt text for a standard image slot on a site page.
#[must_use]
pub fn alt_for_page(
    page: PageKind,
    image: ImageKind,
    city: Option<&str>,
    neighborhood: Option<&str>,
) -> String {
    let service_type = match page {
        PageKind::Online => ServiceType::Online,
        PageKind::SeniorCare => ServiceType::SeniorCare,
        PageKind::About => ServiceType::Profile,
        PageKind::Home => ServiceType::Hero,
    };

    let mut context = AltTextContext {
        service_type: Some(service_type),
        city: city.map(ToString::to_string),
        neighborhood: neighborhood.map(ToString::to_string),
        action: None,
    };

    match image {
        ImageKind::Hero => {
            context.action = Some("corrigiendo técnica".to_string());
            generate_alt_text("hero", Some(&context))
        }
        ImageKind::Profile => generate_alt_text("perfil", Some(&context)),
        ImageKind::Service => generate_alt_text("servicio", Some(&context)),
    }
}

/// How an image is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLayout {
    /// Stretches to fill its container; no intrinsic size needed.
    Fill,
    /// Rendered at a fixed size.
    Fixed {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}

/// Responsive `sizes` attribute used when the caller gives none.
pub const DEFAULT_SIZES: &str = "(max-width: 768px) 100vw, (max-width: 1200px) 50vw, 33vw";

/// Default encoder quality.
pub const DEFAULT_QUALITY: u8 = 85;

/// A validated image reference ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    /// Image path and alt text.
    pub image: ImageRef,
    /// Layout.
    pub layout: ImageLayout,
    /// Responsive sizes.
    pub sizes: String,
    /// Encoder quality.
    pub quality: u8,
}

impl ImageSpec {
    /// Builds an image spec, generating the alt text when absent.
    ///
    /// # Errors
    ///
    /// Returns [`LocalityError::MissingDimensions`] if `fill` is false and
    /// either dimension is missing or zero.
    pub fn new(
        src: &str,
        alt: Option<&str>,
        fill: bool,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<Self, LocalityError> {
        let layout = if fill {
            ImageLayout::Fill
        } else {
            match (width, height) {
                (Some(width), Some(height)) if width > 0 && height > 0 => {
                    ImageLayout::Fixed { width, height }
                }
                _ => {
                    return Err(LocalityError::MissingDimensions {
                        src: src.to_string(),
                    });
                }
            }
        };

        let alt = alt
            .filter(|a| !a.is_empty())
            .map_or_else(|| generate_alt_text(src, None), ToString::to_string);

        Ok(Self {
            image: ImageRef {
                src: src.to_string(),
                alt,
            },
            layout,
            sizes: DEFAULT_SIZES.to_string(),
            quality: DEFAULT_QUALITY,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_neighborhoods_get_their_own_image() {
        let image = hero_image("Chamberí", Tone::Premium, "Chamberí", "Madrid");
        assert_eq!(image.src, CHAMBERI_IMAGE);
        assert!(image.alt.contains("Chamberí"));

        let image = hero_image("rivas-covibar", Tone::Accessible, "x", "y");
        assert_eq!(image.src, COVIBAR_IMAGE);
    }

    #[test]
    fn unlisted_neighborhoods_fall_back_by_tone() {
        let image = hero_image("moncloa", Tone::Outdoor, "Moncloa", "Madrid");
        assert_eq!(image.src, RETIRO_IMAGE);
        assert_eq!(
            image.alt,
            "Entrenamiento personal al aire libre en Moncloa, Madrid"
        );

        let image = hero_image("getafe", Tone::Accessible, "Getafe", "Getafe");
        assert_eq!(image.src, VALLECAS_IMAGE);
        assert_eq!(
            image.alt,
            "Entrenamiento personal en grupo reducido en Getafe, Getafe"
        );
    }

    #[test]
    fn hero_match_is_exact_not_substring() {
        let image = hero_image("el retiro", Tone::Premium, "El Retiro", "Madrid");
        assert_eq!(image.src, SALAMANCA_IMAGE);
    }

    #[test]
    fn alt_from_training_filename_names_location() {
        assert_eq!(
            generate_alt_text(RETIRO_IMAGE, None),
            "Entrenamiento personal en retiro con Dreizeer."
        );
    }

    #[test]
    fn alt_from_profile_filename() {
        assert_eq!(
            generate_alt_text("/images/perfil/perfil-entrenador-dreizeer-2.webp", None),
            "Foto de perfil de entrenador personal Dreizeer en Madrid."
        );
    }

    #[test]
    fn alt_from_group_filename() {
        assert_eq!(
            generate_alt_text("/img/grupo_amigos.png", None),
            "Grupo reducido de entrenamiento personal."
        );
    }

    #[test]
    fn alt_from_generic_keywords() {
        assert_eq!(
            generate_alt_text("/img/foto-sentadilla-con-barra-olimpica-pesada.jpg", None),
            "Imagen de sentadilla con barra olimpica."
        );
        assert_eq!(
            generate_alt_text("/img/foto.jpg", None),
            "Imagen de entrenamiento personal."
        );
        assert_eq!(
            generate_alt_text("/img/a-b.jpg", None),
            "Imagen de entrenamiento personal con Dreizeer."
        );
    }

    #[test]
    fn alt_from_context() {
        assert_eq!(
            alt_for_page(PageKind::Home, ImageKind::Hero, Some("Madrid"), None),
            "Entrenador personal corrigiendo técnica en Madrid."
        );
        assert_eq!(
            alt_for_page(PageKind::SeniorCare, ImageKind::Service, Some("Madrid"), None),
            "Gimnasia a domicilio para mayores en Madrid con entrenador personal especializado."
        );
        assert_eq!(
            alt_for_page(PageKind::Online, ImageKind::Service, None, None),
            "Análisis de técnica por video para entrenamiento online personalizado."
        );
        assert_eq!(
            alt_for_page(PageKind::About, ImageKind::Profile, None, None),
            "Foto de perfil de Dreizeer entrenador personal especializado."
        );
        let local = AltTextContext {
            service_type: Some(ServiceType::Local),
            city: Some("Madrid".to_string()),
            neighborhood: Some("Retiro".to_string()),
            action: None,
        };
        assert_eq!(
            generate_alt_text("x", Some(&local)),
            "Entrenamiento personal en Retiro Madrid."
        );
        assert_eq!(
            generate_alt_text("x", Some(&AltTextContext::default())),
            "."
        );
    }

    #[test]
    fn fixed_image_requires_dimensions() {
        let err = ImageSpec::new("/a.webp", None, false, Some(100), None).unwrap_err();
        assert!(matches!(err, LocalityError::MissingDimensions { .. }));

        let err = ImageSpec::new("/a.webp", None, false, Some(0), Some(10)).unwrap_err();
        assert!(matches!(err, LocalityError::MissingDimensions { .. }));

        let spec = ImageSpec::new("/a.webp", Some("Alt"), false, Some(100), Some(50)).unwrap();
        assert_eq!(
            spec.layout,
            ImageLayout::Fixed {
                width: 100,
                height: 50
            }
        );
        assert_eq!(spec.image.alt, "Alt");
    }

    #[test]
    fn fill_image_generates_missing_alt() {
        let spec = ImageSpec::new(VALLECAS_IMAGE, None, true, None, None).unwrap();
        assert_eq!(spec.layout, ImageLayout::Fill);
        assert_eq!(
            spec.image.alt,
            "Entrenamiento personal en vallecas con Dreizeer."
        );
        assert_eq!(spec.quality, DEFAULT_QUALITY);
    }
}
