//! Legal-form detection and alias resolution.
//!
//! A company name is tokenized on whitespace, every token is cleaned, and a
//! backward scan over the cleaned tokens locates a known legal-form phrase
//! (see [`strip`]). The recognized phrase can then be mapped to a short,
//! country-specific alias with [`Aliases::find`].
//!
//! The free functions in this module use the embedded default dictionaries.

pub mod aliases;
pub mod dictionary;
pub mod index;
pub mod normalizer;
pub mod query;
pub mod strip;
pub mod tokenize;

pub use aliases::{AliasTable, Aliases, WILDCARD_COUNTRY};
pub use dictionary::{Dictionaries, DictionarySources, DEFAULT_ALIASES, DEFAULT_LEGAL_FORMS};
pub use index::LegalForms;
pub use normalizer::{CompanyNameNormalizer, NormalizedName, StripMode};
pub use query::NameQuery;
pub use strip::{MiddleSpans, StripSpans};

/// The embedded legal-form set.
pub fn default_legal_forms() -> &'static LegalForms {
    &DEFAULT_LEGAL_FORMS
}

/// The embedded alias table.
pub fn default_aliases() -> &'static Aliases {
    &DEFAULT_ALIASES
}

/// [`LegalForms::strip`] with the default legal forms.
///
/// # Examples
/// ```
/// let (company, legal_form) = legalform::strip("Example GmbH & Co. KG");
/// assert_eq!(company, "Example");
/// assert_eq!(legal_form, "GmbH & Co. KG");
/// ```
pub fn strip(full_name: &str) -> (String, String) {
    DEFAULT_LEGAL_FORMS.strip(full_name)
}

/// [`LegalForms::strip_middle`] with the default legal forms.
pub fn strip_middle(full_name: &str) -> (String, String, String) {
    DEFAULT_LEGAL_FORMS.strip_middle(full_name)
}

/// [`Aliases::find`] with the default alias table.
pub fn find_alias(country: &str, legal_form: &str) -> String {
    DEFAULT_ALIASES.find(country, legal_form)
}
