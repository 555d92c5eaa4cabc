//! Price text helpers.
//!
//! Display prices are free text (`"Desde 40€/sesión"`); schema prices are
//! fixed two-decimal strings (`"40.00"`). These helpers move between the
//! two and validate the fixed format.

use std::sync::LazyLock;

use regex::Regex;

static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)").expect("valid regex"));

static SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\s*([^\s€]+)").expect("valid regex"));

static SCHEMA_PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d{2})$").expect("valid regex"));

/// Leading whole-euro amount of a display price (`"Desde 40€/sesión"` →
/// `"40"`).
#[must_use]
pub fn price_amount(display: &str) -> Option<&str> {
    AMOUNT_RE
        .captures(display)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Unit suffix after the slash (`"Desde 40€/sesión"` → `"sesión"`).
#[must_use]
pub fn price_suffix(display: &str) -> Option<&str> {
    SUFFIX_RE
        .captures(display)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parses a two-decimal schema price into cents.
///
/// Returns `None` unless the input is digits, a dot, and exactly two
/// fraction digits.
#[must_use]
pub fn parse_schema_price(price: &str) -> Option<u64> {
    let caps = SCHEMA_PRICE_RE.captures(price)?;
    let whole: u64 = caps.get(1)?.as_str().parse().ok()?;
    let fraction: u64 = caps.get(2)?.as_str().parse().ok()?;
    whole.checked_mul(100)?.checked_add(fraction)
}

/// Formats cents as a two-decimal schema price.
#[must_use]
pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
