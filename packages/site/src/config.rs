//! Site-wide configuration read from the environment.

/// Environment variable holding the public site host.
pub const SITE_URL_VAR: &str = "SITE_URL";

/// Base URL used when no site URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Absolute base URL without a trailing slash.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Reads `SITE_URL`. Unset or empty falls back to the local dev server.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_site_url(std::env::var(SITE_URL_VAR).ok().as_deref())
    }

    /// Builds a config from an optional raw site URL.
    ///
    /// Any `http://` or `https://` prefix is stripped and the result is
    /// always served over HTTPS.
    #[must_use]
    pub fn from_site_url(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Self {
                base_url: normalize_base_url(raw),
            },
            None => {
                log::debug!("{SITE_URL_VAR} not set, using {DEFAULT_BASE_URL}");
                Self::default()
            }
        }
    }

    /// Absolute URL for a site path (`"/madrid"` →
    /// `"https://dreizeer.es/madrid"`).
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Forces a host onto HTTPS and drops any trailing slash.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    let host = raw
        .strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"))
        .unwrap_or(raw);

    format!("https://{}", host.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forces_https() {
        for raw in ["dreizeer.es", "http://dreizeer.es", "https://dreizeer.es/"] {
            assert_eq!(normalize_base_url(raw), "https://dreizeer.es", "raw: {raw}");
        }
    }

    #[test]
    fn missing_or_empty_uses_local_default() {
        assert_eq!(SiteConfig::from_site_url(None).base_url, DEFAULT_BASE_URL);
        assert_eq!(SiteConfig::from_site_url(Some("  ")).base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn joins_paths() {
        let config = SiteConfig::from_site_url(Some("dreizeer.es"));
        assert_eq!(config.url("/madrid/retiro"), "https://dreizeer.es/madrid/retiro");
        assert_eq!(config.url(""), "https://dreizeer.es");
    }
}
