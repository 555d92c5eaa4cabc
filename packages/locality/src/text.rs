//! Display capitalization and lookup-key normalization for URL segments.

/// Capitalizes each word of a location name for display.
///
/// Words are separated by single spaces. Hyphenated words have every
/// segment capitalized independently, so `"rivas-vaciamadrid"` becomes
/// `"Rivas-Vaciamadrid"`. Empty input is returned unchanged.
///
/// Never use the result as a lookup key; see [`lookup_key`].
#[must_use]
pub fn capitalize_display_name(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    raw.split(' ')
        .map(|word| {
            if word.contains('-') {
                word.split('-')
                    .map(capitalize_segment)
                    .collect::<Vec<_>>()
                    .join("-")
            } else {
                capitalize_segment(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes a raw segment into the form used by every table lookup.
#[must_use]
pub fn lookup_key(raw: &str) -> String {
    raw.to_lowercase()
}

/// Uppercases the first character and lowercases the rest.
fn capitalize_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out: String = first.to_uppercase().collect();
        out.push_str(&chars.as_str().to_lowercase());
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_plain_words() {
        assert_eq!(capitalize_display_name("madrid"), "Madrid");
        assert_eq!(capitalize_display_name("MADRID RÍO"), "Madrid Río");
    }

    #[test]
    fn capitalizes_each_hyphen_segment() {
        assert_eq!(
            capitalize_display_name("rivas-vaciamadrid"),
            "Rivas-Vaciamadrid"
        );
        assert_eq!(capitalize_display_name("madrid-RIO"), "Madrid-Rio");
    }

    #[test]
    fn mixes_spaces_and_hyphens() {
        assert_eq!(
            capitalize_display_name("barrio de rivas-futura"),
            "Barrio De Rivas-Futura"
        );
    }

    #[test]
    fn handles_accented_first_letter() {
        assert_eq!(capitalize_display_name("ávila"), "Ávila");
    }

    #[test]
    fn empty_input_is_unchanged() {
        assert_eq!(capitalize_display_name(""), "");
    }

    #[test]
    fn preserves_repeated_separators() {
        assert_eq!(capitalize_display_name("a  b"), "A  B");
        assert_eq!(capitalize_display_name("a--b"), "A--B");
    }

    #[test]
    fn lookup_key_lowercases_only() {
        assert_eq!(lookup_key("Chamberí"), "chamberí");
        assert_eq!(lookup_key("Madrid Río"), "madrid río");
    }
}
