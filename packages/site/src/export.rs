//! Writes every generated artifact to a directory.
//!
//! Layout:
//!
//! ```text
//! <out>/sitemap.xml
//! <out>/robots.txt
//! <out>/manifest.webmanifest
//! <out>/pages/<page>.json
//! <out>/landing/<city>/<neighborhood>.json
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use dreizeer_locality::registry::all_localities;
use strum::IntoEnumIterator;

use crate::SiteError;
use crate::config::SiteConfig;
use crate::landing::LandingPage;
use crate::pages::{PageBundle, StaticPage};
use crate::{manifest, robots, sitemap};

/// Counts of what an export wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Static page bundles.
    pub pages: usize,
    /// Landing page bundles.
    pub landings: usize,
    /// Every file written, in write order.
    pub files: Vec<PathBuf>,
}

fn write_file(path: &Path, contents: &str, stats: &mut ExportStats) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    log::debug!("Wrote {}", path.display());
    stats.files.push(path.to_path_buf());
    Ok(())
}

/// Exports the sitemap, robots policy, manifest, every static page, and
/// every published landing page under `out`.
///
/// # Errors
///
/// * [`SiteError::Io`] if a directory or file cannot be written
/// * [`SiteError::Schema`] or [`SiteError::Json`] if a bundle fails to
///   render
pub fn export_all(out: &Path, config: &SiteConfig, today: NaiveDate) -> Result<ExportStats, SiteError> {
    let mut stats = ExportStats::default();

    log::info!("Exporting site for {} to {}", config.base_url, out.display());

    let entries = sitemap::entries(&config.base_url, today);
    write_file(&out.join("sitemap.xml"), &sitemap::render_xml(&entries), &mut stats)?;
    write_file(&out.join("robots.txt"), &robots::render(&config.base_url), &mut stats)?;
    write_file(&out.join("manifest.webmanifest"), &manifest::render()?, &mut stats)?;

    for page in StaticPage::iter() {
        let bundle = PageBundle::build(page, config)?;
        let path = out.join("pages").join(format!("{page}.json"));
        write_file(&path, &serde_json::to_string_pretty(&bundle)?, &mut stats)?;
        stats.pages += 1;
    }

    for locality in all_localities() {
        let page = LandingPage::build(&locality.city, &locality.neighborhood, today, config)?;
        let path = out
            .join("landing")
            .join(&locality.city)
            .join(format!("{}.json", locality.neighborhood));
        write_file(&path, &serde_json::to_string_pretty(&page)?, &mut stats)?;
        stats.landings += 1;
    }

    log::info!(
        "Exported {} files ({} pages, {} landing pages)",
        stats.files.len(),
        stats.pages,
        stats.landings
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_every_artifact() {
        let tmp = std::env::temp_dir().join(format!(
            "dreizeer_site_export_test_{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&tmp);

        let config = SiteConfig::from_site_url(Some("dreizeer.es"));
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let stats = export_all(&tmp, &config, today).unwrap();

        assert_eq!(stats.pages, 4);
        assert_eq!(stats.landings, all_localities().len());
        assert_eq!(stats.files.len(), 3 + stats.pages + stats.landings);

        let robots = std::fs::read_to_string(tmp.join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://dreizeer.es/sitemap.xml"));

        let landing: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(tmp.join("landing/rivas-vaciamadrid/covibar.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(landing["displayNeighborhood"], "Covibar");
        assert_eq!(landing["profile"]["tone"], "accessible");
        assert_eq!(landing["featuredPlanId"], "group");

        assert!(tmp.join("pages/sobre-mi.json").exists());

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
