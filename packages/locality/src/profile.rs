//! Neighborhood → [`ContentProfile`] resolution.
//!
//! Rules are matched by substring against the lowercased neighborhood, in
//! the order of [`CONTENT_RULES`]. The first rule with a matching keyword
//! wins; inputs matching nothing get [`DEFAULT_RULE`].

use dreizeer_locality_models::{ContentProfile, Tone};

use crate::text::lookup_key;

/// A named content rule: keywords plus the profile they select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRule {
    /// Rule identifier, used in logs and tests.
    pub name: &'static str,
    /// Lowercase substrings that select this rule.
    pub keywords: &'static [&'static str],
    /// Content style.
    pub tone: Tone,
    /// Emphasis tags.
    pub emphasis: &'static [&'static str],
    /// Feature bullets.
    pub features: &'static [&'static str],
    /// Call-to-action label.
    pub cta_text: &'static str,
}

impl ContentRule {
    /// Whether any keyword occurs in the already-lowercased input.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k))
    }

    /// Builds the owned profile for this rule.
    #[must_use]
    pub fn profile(&self) -> ContentProfile {
        ContentProfile {
            emphasis_tags: self.emphasis.iter().map(ToString::to_string).collect(),
            features: self.features.iter().map(ToString::to_string).collect(),
            tone: self.tone,
            cta_text: self.cta_text.to_string(),
        }
    }
}

/// Content rules in priority order.
pub const CONTENT_RULES: &[ContentRule] = &[
    ContentRule {
        name: "parks",
        keywords: &["retiro", "madrid río", "madrid-rio"],
        tone: Tone::Outdoor,
        emphasis: &[
            "Entrenamiento al aire libre",
            "Calistenia",
            "Parques y espacios abiertos",
        ],
        features: &[
            "Sesiones en parques y espacios verdes",
            "Calistenia y ejercicios funcionales",
            "Aprovechamiento del entorno natural",
            "Entrenamiento al aire libre todo el año",
        ],
        cta_text: "Reservar Entrenamiento al Aire Libre",
    },
    ContentRule {
        name: "premium",
        keywords: &["salamanca", "chamberí", "chamberi"],
        tone: Tone::Premium,
        emphasis: &[
            "Entrenamiento a domicilio",
            "Exclusividad",
            "Servicio premium",
        ],
        features: &[
            "Entrenamiento a domicilio exclusivo",
            "Atención personalizada de alta calidad",
            "Flexibilidad de horarios",
            "Programas personalizados premium",
        ],
        cta_text: "Solicitar Entrenamiento Premium",
    },
    ContentRule {
        name: "rivas_futura",
        keywords: &["futura", "rivas-futura"],
        tone: Tone::Accessible,
        emphasis: &[
            "Grupos reducidos",
            "Cerca del H2O",
            "Metro Rivas Futura",
            "Entrena antes de trabajar",
        ],
        features: &[
            "Entrenamiento en grupo reducido (hasta 3 personas)",
            "Ideal para entrenar antes o después del trabajo",
            "Cerca del Centro Comercial H2O y Metro Rivas Futura",
            "Precios accesibles divididos entre el grupo",
        ],
        cta_text: "Reservar para Grupo de 3",
    },
    ContentRule {
        name: "rivas_covibar",
        keywords: &["covibar", "rivas-covibar"],
        tone: Tone::Accessible,
        emphasis: &[
            "Gimnasia y salud",
            "Cerca del Centro de Salud",
            "Parque de Asturias",
            "Enfoque vecinal",
        ],
        features: &[
            "Entrenamiento adaptado a tercera edad y movilidad reducida",
            "Cerca del Centro de Salud y Parque de Asturias",
            "Enfoque vecinal y comunitario",
            "Grupos reducidos para vecinos del barrio",
        ],
        cta_text: "Consultar para Vecinos",
    },
    ContentRule {
        name: "value",
        keywords: &["vallecas", "getafe"],
        tone: Tone::Accessible,
        emphasis: &[
            "Precios accesibles",
            "Entrenamiento en grupo",
            "Calidad al mejor precio",
        ],
        features: &[
            "Precios accesibles sin comprometer calidad",
            "Opción de entrenamiento en grupo reducido",
            "Programas adaptados a tu presupuesto",
            "Misma calidad profesional, mejor precio",
        ],
        cta_text: "Consultar Precios Accesibles",
    },
    ContentRule {
        name: "urban",
        keywords: &["moncloa", "arganzuela"],
        tone: Tone::Outdoor,
        emphasis: &[
            "Entrenamiento funcional",
            "Parques urbanos",
            "A domicilio",
        ],
        features: &[
            "Entrenamiento en parques (Oeste, Madrid Río)",
            "Sesiones a domicilio personalizadas",
            "Flexibilidad horaria para profesionales",
            "Enfoque en salud y rendimiento",
        ],
        cta_text: "Reservar Sesión",
    },
];

/// Profile used when no rule matches.
pub const DEFAULT_RULE: ContentRule = ContentRule {
    name: "default",
    keywords: &[],
    tone: Tone::Outdoor,
    emphasis: &["Entrenamiento personalizado", "A domicilio y al aire libre"],
    features: &[
        "Entrenamiento a domicilio disponible",
        "Sesiones al aire libre opcionales",
        "Programas adaptados a tu zona",
        "Flexibilidad de ubicación",
    ],
    cta_text: "Solicitar Información",
};

/// Returns the rule selected for a neighborhood.
#[must_use]
pub fn matching_rule(neighborhood: &str) -> &'static ContentRule {
    let normalized = lookup_key(neighborhood);

    CONTENT_RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .unwrap_or_else(|| {
            log::debug!("No content rule for '{neighborhood}', using default profile");
            &DEFAULT_RULE
        })
}

/// Resolves the content profile for a neighborhood. Always succeeds.
#[must_use]
pub fn resolve_content_profile(neighborhood: &str) -> ContentProfile {
    let rule = matching_rule(neighborhood);
    log::debug!("Neighborhood '{neighborhood}' resolved to rule '{}'", rule.name);
    rule.profile()
}
