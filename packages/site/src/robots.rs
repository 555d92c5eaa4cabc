//! `robots.txt` policy.

/// Paths crawlers must not index.
pub const DISALLOWED: [&str; 2] = ["/private/", "/api/"];

/// Renders `robots.txt`: everything allowed except [`DISALLOWED`], with a
/// pointer to the sitemap.
#[must_use]
pub fn render(base: &str) -> String {
    let mut lines = vec!["User-agent: *".to_string(), "Allow: /".to_string()];
    lines.extend(DISALLOWED.iter().map(|path| format!("Disallow: {path}")));
    lines.push(String::new());
    lines.push(format!("Sitemap: {base}/sitemap.xml"));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_root_and_blocks_private_paths() {
        assert_eq!(
            render("https://dreizeer.es"),
            "User-agent: *\nAllow: /\nDisallow: /private/\nDisallow: /api/\n\nSitemap: https://dreizeer.es/sitemap.xml\n"
        );
    }
}
