#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! WhatsApp deep links and pre-filled contact message templates.
//!
//! Every call-to-action on the site opens a chat with the trainer's number
//! and a message already typed in. Messages are percent-encoded the same
//! way browsers encode a URI component.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Destination phone number, international format without `+`.
pub const PHONE_NUMBER: &str = "34637453753";

/// Characters left unescaped by a URI-component encoder:
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds a `wa.me` link with a pre-filled message.
///
/// The message is not validated; an empty message yields a link with an
/// empty `text` parameter.
#[must_use]
pub fn build_chat_link(message: &str) -> String {
    format!(
        "https://wa.me/{PHONE_NUMBER}?text={}",
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

/// Fixed message templates used across the site.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChatMessage {
    /// Generic information request.
    General,
    /// Small group plan.
    PricingGroup,
    /// One-to-one plan.
    PricingIndividual,
    /// Online coaching plan.
    PricingOnline,
    /// Home page hero button.
    Hero,
    /// Footer button.
    Footer,
    /// Senior training page.
    Seniors,
    /// Online coaching page.
    OnlinePage,
    /// About page.
    AboutMe,
    /// Neighborhood page fallback.
    NeighborhoodDefault,
}

impl ChatMessage {
    /// Message text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::General => "Hola, me gustaría información sobre entrenamiento personal.",
            Self::PricingGroup => {
                "Hola, me interesa el plan de Small Group Training (desde 25€). ¿Me das más info?"
            }
            Self::PricingIndividual => {
                "Hola, me interesa el plan de Entrenamiento 1:1 (desde 40€). ¿Me das más info?"
            }
            Self::PricingOnline => {
                "Hola, me interesa la Asesoría Híbrida Online (desde 50€). ¿Me das más info?"
            }
            Self::Hero => "Hola, me interesa empezar a entrenar. Me gustaría más información.",
            Self::Footer => "Hola, me gustaría agendar una sesión de valoración gratuita.",
            Self::Seniors => "Hola, busco información sobre gimnasia para tercera edad.",
            Self::OnlinePage => "Hola, quiero saber más sobre el coaching online.",
            Self::AboutMe => "Hola, he leído tu historia y me gustaría entrenar contigo.",
            Self::NeighborhoodDefault => {
                "Hola, me gustaría solicitar una sesión gratuita en tu zona."
            }
        }
    }

    /// Template for a pricing plan id, if the plan has one.
    #[must_use]
    pub fn for_plan(plan_id: &str) -> Option<Self> {
        match plan_id {
            "group" => Some(Self::PricingGroup),
            "individual" => Some(Self::PricingIndividual),
            "online" => Some(Self::PricingOnline),
            _ => None,
        }
    }

    /// Chat link pre-filled with this template.
    #[must_use]
    pub fn link(self) -> String {
        build_chat_link(self.text())
    }
}

/// Message sent from a neighborhood page's main call-to-action.
#[must_use]
pub fn neighborhood_cta_message(cta_text: &str, display_neighborhood: &str) -> String {
    format!("Hola, me interesa el {cta_text} en {display_neighborhood}")
}

/// Message for finding group partners in a neighborhood.
#[must_use]
pub fn group_search_message(display_neighborhood: &str) -> String {
    format!("Hola, me interesa formar un grupo de 3 personas en {display_neighborhood}")
}

/// Message for booking a group of three in a neighborhood.
#[must_use]
pub fn group_booking_message(display_neighborhood: &str) -> String {
    format!("Hola, quiero reservar para un grupo de 3 en {display_neighborhood}")
}

/// Message for requesting a free session in a neighborhood.
#[must_use]
pub fn free_session_message(display_neighborhood: &str) -> String {
    format!("Hola, me gustaría solicitar una sesión gratuita en {display_neighborhood}")
}
