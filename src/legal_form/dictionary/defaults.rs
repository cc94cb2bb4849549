//! Dictionaries compiled into the binary.
//!
//! The legal-form list and the alias table live in `resources/` and are parsed
//! on first use.

use std::sync::LazyLock;

use crate::legal_form::aliases::Aliases;
use crate::legal_form::dictionary::loader::parse_legal_forms_text;
use crate::legal_form::index::LegalForms;

const LEGAL_FORMS_TEXT: &str = include_str!("../../../resources/legal_forms.txt");
const ALIASES_JSON: &str = include_str!("../../../resources/aliases.json");

/// Built-in set of cleaned legal-form phrases.
pub static DEFAULT_LEGAL_FORMS: LazyLock<LegalForms> =
    LazyLock::new(|| parse_legal_forms_text(LEGAL_FORMS_TEXT));

/// Built-in country-specific alias table.
pub static DEFAULT_ALIASES: LazyLock<Aliases> = LazyLock::new(|| {
    Aliases::from_json_str(ALIASES_JSON).expect("Embedded alias table is not valid JSON")
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legal_form::aliases::WILDCARD_COUNTRY;
    use crate::legal_form::tokenize::{alias_key, clean};

    #[test]
    fn test_default_legal_forms_are_cleaned() {
        assert!(DEFAULT_LEGAL_FORMS.len() > 500);
        for phrase in DEFAULT_LEGAL_FORMS.iter() {
            assert_eq!(clean(phrase), phrase);
            assert!(!phrase.is_empty());
        }
    }

    #[test]
    fn test_default_aliases_have_wildcard_table() {
        assert!(DEFAULT_ALIASES.countries().any(|c| c == WILDCARD_COUNTRY));
        assert_eq!(DEFAULT_ALIASES.get(WILDCARD_COUNTRY, "limited"), Some("ltd"));
        assert_eq!(DEFAULT_ALIASES.get("DE", "gesellschaftmitbeschrankterhaftung"), Some("gmbh"));
    }

    #[test]
    fn test_default_alias_keys_are_canonical() {
        for country in DEFAULT_ALIASES.countries() {
            assert_eq!(country, country.to_uppercase());
            for (key, alias) in DEFAULT_ALIASES.entries(country) {
                assert_eq!(alias_key(key).1, key, "{} in {}", key, country);
                assert!(!alias.is_empty());
            }
        }
    }

    #[test]
    fn test_wildcard_aliases_are_recognized_legal_forms() {
        for (key, _) in DEFAULT_ALIASES.entries(WILDCARD_COUNTRY) {
            assert!(DEFAULT_LEGAL_FORMS.contains(key), "{} is not a legal form", key);
        }
    }
}
