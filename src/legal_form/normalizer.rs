//! Strip and alias resolution in one step.

use serde::{Deserialize, Serialize};

use crate::legal_form::aliases::{Aliases, WILDCARD_COUNTRY, canonical_country};
use crate::legal_form::dictionary::{DEFAULT_ALIASES, DEFAULT_LEGAL_FORMS};
use crate::legal_form::index::LegalForms;
use crate::legal_form::query::NameQuery;

/// Where a legal form may appear in a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StripMode {
    /// Only at the end of the name.
    #[default]
    Suffix,
    /// Anywhere after the first token; later text is kept as trailing content.
    Anywhere,
}

/// Result of normalizing one company name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedName {
    pub input: String,
    pub company: String,
    pub legal_form: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trailing: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Canonical alias of the legal form, `None` without a legal form.
    pub alias: Option<String>,
}

impl NormalizedName {
    /// Record-linkage key: cleaned company tokens, `|`, then the alias.
    ///
    /// "ACME, Inc." and "Acme Incorporated" share the key `acme|inc`.
    pub fn key(&self) -> String {
        let query = NameQuery::new(&self.company);
        let company = query.cleaned_text(0..query.len());
        format!("{}|{}", company, self.alias.as_deref().unwrap_or_default())
    }
}

pub struct CompanyNameNormalizer<'d> {
    legal_forms: &'d LegalForms,
    aliases: &'d Aliases,
    mode: StripMode,
    default_country: Option<String>,
}

impl<'d> CompanyNameNormalizer<'d> {
    pub fn new(legal_forms: &'d LegalForms, aliases: &'d Aliases) -> Self {
        Self {
            legal_forms,
            aliases,
            mode: StripMode::default(),
            default_country: None,
        }
    }

    pub fn with_mode(mut self, mode: StripMode) -> Self {
        self.mode = mode;
        self
    }

    /// Country used when [`Self::normalize`] is called without one.
    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = Some(country.into());
        self
    }

    pub fn mode(&self) -> StripMode {
        self.mode
    }

    /// Split `name` and resolve the alias of its legal form.
    ///
    /// Without a country (argument or default) only the wildcard aliases
    /// apply.
    pub fn normalize(&self, name: &str, country: Option<&str>) -> NormalizedName {
        let (company, legal_form, trailing) = match self.mode {
            StripMode::Suffix => {
                let (company, legal_form) = self.legal_forms.strip(name);
                (company, legal_form, String::new())
            }
            StripMode::Anywhere => self.legal_forms.strip_middle(name),
        };

        let country = country
            .or(self.default_country.as_deref())
            .map(canonical_country)
            .filter(|c| !c.is_empty());

        let alias = (!legal_form.is_empty()).then(|| {
            self.aliases
                .find(country.as_deref().unwrap_or(WILDCARD_COUNTRY), &legal_form)
        });

        NormalizedName {
            input: name.to_string(),
            company,
            legal_form,
            trailing,
            country,
            alias,
        }
    }
}

impl Default for CompanyNameNormalizer<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_LEGAL_FORMS, &DEFAULT_ALIASES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_suffix() {
        let normalizer = CompanyNameNormalizer::default();
        let result = normalizer.normalize("Example Private Limited", Some("in"));
        assert_eq!(result.company, "Example");
        assert_eq!(result.legal_form, "Private Limited");
        assert_eq!(result.country.as_deref(), Some("IN"));
        assert_eq!(result.alias.as_deref(), Some("pvtltd"));
        assert!(result.trailing.is_empty());
    }

    #[test]
    fn test_normalize_without_legal_form() {
        let normalizer = CompanyNameNormalizer::default();
        let result = normalizer.normalize("Example", Some("DE"));
        assert_eq!(result.company, "Example");
        assert_eq!(result.legal_form, "");
        assert_eq!(result.alias, None);
        assert_eq!(result.key(), "example|");
    }

    #[test]
    fn test_with_mode() {
        let normalizer = CompanyNameNormalizer::default();
        assert_eq!(normalizer.mode(), StripMode::Suffix);
        assert_eq!(normalizer.with_mode(StripMode::Anywhere).mode(), StripMode::Anywhere);
    }

    #[test]
    fn test_normalize_anywhere_keeps_trailing() {
        let normalizer = CompanyNameNormalizer::default().with_mode(StripMode::Anywhere);
        assert_eq!(normalizer.mode(), StripMode::Anywhere);
        let result = normalizer.normalize("Example GmbH (Foobar)", Some("DE"));
        assert_eq!(result.company, "Example");
        assert_eq!(result.legal_form, "GmbH");
        assert_eq!(result.trailing, "(Foobar)");
        assert_eq!(result.alias.as_deref(), Some("gmbh"));
    }

    #[test]
    fn test_default_country_applies() {
        let normalizer = CompanyNameNormalizer::default().with_default_country("de");
        let result = normalizer.normalize("Muster Gesellschaft mit beschränkter Haftung", None);
        assert_eq!(result.alias.as_deref(), Some("gmbh"));

        let overridden = normalizer.normalize("Muster Gesellschaft mit beschränkter Haftung", Some("US"));
        assert_eq!(overridden.alias.as_deref(), Some("gesellschaftmitbeschränkterhaftung"));
    }

    #[test]
    fn test_no_country_uses_wildcard() {
        let normalizer = CompanyNameNormalizer::default();
        let result = normalizer.normalize("Acme Incorporated", None);
        assert_eq!(result.country, None);
        assert_eq!(result.alias.as_deref(), Some("inc"));
    }

    #[test]
    fn test_key_ignores_legal_form_spelling() {
        let normalizer = CompanyNameNormalizer::default();
        let a = normalizer.normalize("ACME, Inc.", Some("US"));
        let b = normalizer.normalize("Acme   Incorporated", Some("US"));
        assert_eq!(a.key(), "acme|inc");
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let normalizer = CompanyNameNormalizer::default();
        let json = serde_json::to_value(normalizer.normalize("Example LLC", None)).unwrap();
        assert_eq!(json["company"], "Example");
        assert_eq!(json["legal_form"], "LLC");
        assert!(json.get("trailing").is_none());
        assert!(json.get("country").is_none());
    }

    #[test]
    fn test_strip_mode_serde() {
        let mode: StripMode = serde_json::from_str(r#""anywhere""#).unwrap();
        assert_eq!(mode, StripMode::Anywhere);
    }
}
