//! Featured plan per neighborhood.
//!
//! This rule set is separate from the content-tone rules and is not meant
//! to agree with them: Vallecas and Getafe get an accessible tone but no
//! featured plan.

/// `(keywords, plan id)` in priority order.
pub const FEATURED_RULES: &[(&[&str], &str)] = &[
    (&["futura", "covibar", "rivas"], "group"),
    (&["salamanca", "chamberí", "chamberi", "retiro"], "individual"),
];

/// Returns the id of the plan to highlight, or an empty string.
#[must_use]
pub fn resolve_featured_plan_id(neighborhood: &str) -> String {
    let normalized = neighborhood.to_lowercase();

    FEATURED_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(_, id)| (*id).to_string())
        .unwrap_or_default()
}
