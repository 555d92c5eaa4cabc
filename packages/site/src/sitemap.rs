//! XML sitemap: the fixed pages plus one entry per published locality.

use std::fmt::Write as _;

use chrono::NaiveDate;
use dreizeer_locality::registry::all_localities;
use serde::Serialize;
use strum_macros::{AsRefStr, Display};

/// How often crawlers should revisit a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    /// 0.0 to 1.0.
    pub priority: f32,
}

/// `(path, change frequency, priority)` for the fixed pages.
pub const STATIC_ROUTES: [(&str, ChangeFrequency, f32); 6] = [
    ("", ChangeFrequency::Weekly, 1.0),
    ("/sobre-mi", ChangeFrequency::Monthly, 0.8),
    ("/tercera-edad", ChangeFrequency::Monthly, 0.9),
    ("/online-coaching", ChangeFrequency::Monthly, 0.9),
    ("/privacidad", ChangeFrequency::Yearly, 0.3),
    ("/terminos", ChangeFrequency::Yearly, 0.3),
];

/// Priority of neighborhood landing pages.
pub const LOCALITY_PRIORITY: f32 = 0.85;

/// Lists every sitemap entry, fixed pages first.
#[must_use]
pub fn entries(base: &str, today: NaiveDate) -> Vec<SitemapEntry> {
    let fixed = STATIC_ROUTES
        .iter()
        .map(|(path, change_frequency, priority)| SitemapEntry {
            url: format!("{base}{path}"),
            last_modified: today,
            change_frequency: *change_frequency,
            priority: *priority,
        });

    let localities = all_localities()
        .into_iter()
        .map(|locality| SitemapEntry {
            url: format!("{base}{}", locality.path()),
            last_modified: today,
            change_frequency: ChangeFrequency::Weekly,
            priority: LOCALITY_PRIORITY,
        });

    fixed.chain(localities).collect()
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Renders entries as a sitemap XML document.
#[must_use]
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            escape_xml(&entry.url),
            entry.last_modified.format("%Y-%m-%d"),
            entry.change_frequency,
            entry.priority,
        );
    }

    xml.push_str("</urlset>\n");
    xml
}
