//! Web app manifest.

use serde::Serialize;

use crate::SiteError;

/// An icon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: &'static str,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
}

/// `manifest.webmanifest` contents. Field names follow the manifest
/// format, which uses snake case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebManifest {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub start_url: &'static str,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub icons: Vec<ManifestIcon>,
}

/// The site's manifest.
#[must_use]
pub fn manifest() -> WebManifest {
    WebManifest {
        name: "Dreizeer - Entrenador Personal",
        short_name: "Dreizeer",
        description: "Entrenador personal especializado en Madrid y Online. Biomecánica y corrección de técnica.",
        start_url: "/",
        display: "standalone",
        background_color: "#171717",
        theme_color: "#ef4444",
        icons: vec![ManifestIcon {
            src: "/favicon.ico",
            sizes: "any",
            mime_type: "image/x-icon",
        }],
    }
}

/// Renders the manifest as pretty-printed JSON.
///
/// # Errors
///
/// * [`SiteError::Json`] if serialization fails
pub fn render() -> Result<String, SiteError> {
    Ok(serde_json::to_string_pretty(&manifest())?)
}
