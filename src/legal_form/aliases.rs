//! Country-specific legal-form aliases.
//!
//! An alias table maps an uppercase country code to a table of flattened
//! legal-form keys and their short canonical alias. The sentinel country
//! [`WILDCARD_COUNTRY`] holds aliases that apply in every jurisdiction and is
//! consulted after the country table through the same lookup path.

use std::collections::HashMap;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::legal_form::tokenize::alias_key;

/// Country code of the table that applies to every country.
pub const WILDCARD_COUNTRY: &str = "*";

pub type AliasTable = HashMap<String, HashMap<String, String>>;

/// Immutable two-level alias table: country → legal-form key → alias.
#[derive(Debug, Clone, Default)]
pub struct Aliases {
    tables: AliasTable,
}

impl Aliases {
    /// Build the table, canonicalizing every entry.
    ///
    /// Country codes are trimmed and uppercased, legal-form keys are cleaned,
    /// flattened and diacritic-folded. Entries whose key is empty after that
    /// are dropped. When two entries collapse onto the same key the one that
    /// sorts first in the input wins.
    pub fn new(tables: AliasTable) -> Self {
        let mut canonical: AliasTable = HashMap::new();

        let mut countries: Vec<_> = tables.into_iter().collect();
        countries.sort_by(|a, b| a.0.cmp(&b.0));

        for (country, entries) in countries {
            let country_key = canonical_country(&country);
            if country_key.is_empty() {
                warn!("Ignoring {} alias(es) without a country code", entries.len());
                continue;
            }
            if country_key != country {
                warn!("Alias country {:?} normalized to {:?}", country, country_key);
            }

            let mut entries: Vec<_> = entries.into_iter().collect();
            entries.sort();

            let table = canonical.entry(country_key).or_default();
            for (legal_form, alias) in entries {
                let (_, key) = alias_key(&legal_form);
                if key.is_empty() {
                    warn!("Ignoring alias {:?} for empty legal form {:?}", alias, legal_form);
                    continue;
                }
                if key != legal_form {
                    warn!("Alias key {:?} normalized to {:?}", legal_form, key);
                }
                if let Some(existing) = table.get(&key) {
                    if *existing != alias {
                        warn!(
                            "Conflicting aliases for {:?}: keeping {:?}, ignoring {:?}",
                            key, existing, alias
                        );
                    }
                    continue;
                }
                table.insert(key, alias);
            }
        }

        Self { tables: canonical }
    }

    /// Parse a JSON object of objects (`{"DE": {"aktiengesellschaft": "ag"}}`).
    pub fn from_json_str(content: &str) -> Result<Self> {
        let tables: AliasTable =
            serde_json::from_str(content).context("Failed to parse alias table as JSON")?;
        Ok(Self::new(tables))
    }

    /// Parse a YAML mapping of mappings.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let tables: AliasTable =
            serde_yaml::from_str(content).context("Failed to parse alias table as YAML")?;
        Ok(Self::new(tables))
    }

    /// Resolve the alias of `legal_form` in `country`.
    ///
    /// The phrase is cleaned, flattened and diacritic-folded before lookup.
    /// The country table is tried first, then the wildcard table. Without a
    /// non-empty alias in either, the cleaned phrase itself is returned
    /// (without diacritic folding).
    ///
    /// # Examples
    /// ```
    /// # use legalform::default_aliases;
    /// let aliases = default_aliases();
    /// assert_eq!(aliases.find("de", "Gesellschaft mit beschränkter Haftung"), "gmbh");
    /// assert_eq!(aliases.find("XX", "Private Limited"), "pvtltd");
    /// ```
    pub fn find(&self, country: &str, legal_form: &str) -> String {
        let (cleaned, key) = alias_key(legal_form);
        let country = canonical_country(country);

        for table in [country.as_str(), WILDCARD_COUNTRY] {
            if let Some(alias) = self.get(table, &key) {
                debug!("Resolved {:?} to alias {:?} via {:?}", legal_form, alias, table);
                return alias.to_string();
            }
        }

        cleaned
    }

    /// Raw lookup of an already-flattened key. Empty aliases count as absent.
    pub fn get(&self, country: &str, key: &str) -> Option<&str> {
        self.tables
            .get(country)
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .filter(|alias| !alias.is_empty())
    }

    /// Country codes with a table, wildcard included, in arbitrary order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Entries of one country table in arbitrary order.
    pub fn entries<'a>(&'a self, country: &str) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        self.tables
            .get(country)
            .into_iter()
            .flat_map(|table| table.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Total number of entries over all tables.
    pub fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trimmed, uppercased country code as used for table lookup.
pub(crate) fn canonical_country(country: &str) -> String {
    country.trim().to_uppercase()
}
