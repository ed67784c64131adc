//! Property-based tests for the normalization pipeline.

use proptest::prelude::*;
use vatcheck::{ensure_country_prefix, extract_country, extract_number_part, normalize};

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "\\PC*") {
        let once = normalize(&s);
        let twice = normalize(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn normalize_strips_exactly_the_separators(s in "[a-zA-Z0-9 .\\-]{0,40}") {
        let n = normalize(&s);
        prop_assert!(n.chars().all(|c| !c.is_whitespace() && c != '-' && c != '.'));
        // Nothing else is removed: stripping by hand gives the same string.
        let by_hand: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '.')
            .collect::<String>()
            .to_ascii_uppercase();
        prop_assert_eq!(n, by_hand);
    }

    #[test]
    fn normalize_uppercases_ascii(s in "[a-z0-9]{1,20}") {
        prop_assert_eq!(normalize(&s), s.to_ascii_uppercase());
    }

    #[test]
    fn prefixing_is_noop_on_prefixed_input(vat in "[A-Z]{2}[0-9A-Z]{2,12}", hint in "[A-Z]{2}") {
        let unchanged = ensure_country_prefix(&vat, Some(&hint));
        prop_assert_eq!(unchanged, vat);
    }

    #[test]
    fn valid_hint_is_prepended_to_bare_numbers(num in "[0-9]{2,12}", hint in "[A-Z]{2}") {
        let prefixed = ensure_country_prefix(&num, Some(&hint));
        prop_assert_eq!(prefixed, format!("{hint}{num}"));
    }

    #[test]
    fn country_and_number_part_recompose(cc in "[A-Z]{2}", num in "[0-9]{2,12}") {
        let candidate = format!("{cc}{num}");
        let code = extract_country(&candidate).expect("letter prefix");
        // GR queries as EL; every other code round-trips literally.
        if cc == "GR" {
            prop_assert_eq!(&code, "EL");
        } else {
            prop_assert_eq!(&code, &cc);
        }
        prop_assert_eq!(extract_number_part(&candidate, &code), num);
    }

    #[test]
    fn bare_numbers_never_yield_a_country(num in "[0-9]{0,12}") {
        prop_assert_eq!(extract_country(&num), None);
    }
}
