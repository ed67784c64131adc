//! VAT number normalization and country-code derivation.

/// Normalize a raw VAT number: uppercase, strip whitespace, hyphens, and periods.
///
/// Pure and total — any input produces a normalized string, possibly empty.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '.')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Ensure a normalized VAT number carries a two-letter country prefix.
///
/// Returns the input unchanged when it already starts with two letters.
/// Otherwise prepends `hint` if it is a valid two-letter code (matched
/// case-insensitively). An absent or invalid hint leaves the input as-is,
/// and country extraction will fail downstream.
pub fn ensure_country_prefix(normalized: &str, hint: Option<&str>) -> String {
    if has_letter_prefix(normalized) {
        return normalized.to_string();
    }

    if let Some(hint) = hint {
        let hint = hint.to_ascii_uppercase();
        if hint.len() == 2 && hint.bytes().all(|b| b.is_ascii_uppercase()) {
            return format!("{hint}{normalized}");
        }
    }

    normalized.to_string()
}

/// Extract the VIES country code from the first two characters.
///
/// Returns `None` unless both characters are letters. Greece registers
/// under `EL` in VIES, so a `GR` prefix maps to `EL`.
pub fn extract_country(candidate: &str) -> Option<String> {
    if !has_letter_prefix(candidate) {
        return None;
    }
    let code = &candidate[..2];
    Some(if code == "GR" { "EL".to_string() } else { code.to_string() })
}

/// The candidate with its country prefix removed.
///
/// Strips `code` when it is the literal prefix; a remapped code (`EL` on a
/// `GR`-prefixed number) still drops the two leading letters. A candidate
/// without a letter prefix comes back unchanged.
pub fn extract_number_part(candidate: &str, code: &str) -> String {
    if let Some(rest) = candidate.strip_prefix(code) {
        return rest.to_string();
    }
    if has_letter_prefix(candidate) {
        return candidate[2..].to_string();
    }
    candidate.to_string()
}

fn has_letter_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 2 && b[0].is_ascii_uppercase() && b[1].is_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- normalize ---

    #[test]
    fn strips_separators_and_uppercases() {
        assert_eq!(normalize("nl 123-456-789.b01"), "NL123456789B01");
    }

    #[test]
    fn already_normalized_is_untouched() {
        assert_eq!(normalize("DE123456789"), "DE123456789");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  -. "), "");
    }

    // --- ensure_country_prefix ---

    #[test]
    fn prefix_noop_when_already_present() {
        assert_eq!(
            ensure_country_prefix("NL123456789B01", Some("DE")),
            "NL123456789B01"
        );
    }

    #[test]
    fn hint_prepended_when_missing() {
        assert_eq!(ensure_country_prefix("123456789", Some("NL")), "NL123456789");
    }

    #[test]
    fn lowercase_hint_uppercased() {
        assert_eq!(ensure_country_prefix("123456789", Some("nl")), "NL123456789");
    }

    #[test]
    fn invalid_hint_ignored() {
        assert_eq!(ensure_country_prefix("123456789", Some("NLD")), "123456789");
        assert_eq!(ensure_country_prefix("123456789", Some("1L")), "123456789");
        assert_eq!(ensure_country_prefix("123456789", None), "123456789");
    }

    // --- extract_country ---

    #[test]
    fn two_letter_prefix_extracted() {
        assert_eq!(extract_country("NL123456789B01").as_deref(), Some("NL"));
    }

    #[test]
    fn greece_remapped_to_el() {
        assert_eq!(extract_country("GR123456789").as_deref(), Some("EL"));
        assert_eq!(extract_country("EL123456789").as_deref(), Some("EL"));
    }

    #[test]
    fn digit_prefix_rejected() {
        assert_eq!(extract_country("123456789"), None);
        assert_eq!(extract_country("1A23456789"), None);
        assert_eq!(extract_country("D"), None);
        assert_eq!(extract_country(""), None);
    }

    // --- extract_number_part ---

    #[test]
    fn literal_prefix_stripped() {
        assert_eq!(extract_number_part("NL123456789B01", "NL"), "123456789B01");
    }

    #[test]
    fn remapped_prefix_stripped() {
        // GR-prefixed numbers query as EL but keep their literal prefix
        assert_eq!(extract_number_part("GR123456789", "EL"), "123456789");
    }

    #[test]
    fn no_prefix_returned_unchanged() {
        assert_eq!(extract_number_part("123456789", "NL"), "123456789");
    }
}
