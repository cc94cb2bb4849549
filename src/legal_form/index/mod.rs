//! Legal-form dictionary index.
//!
//! [`LegalForms`] holds the set of cleaned legal-form phrases. It is built
//! once, never mutated afterwards and can be shared freely between threads.

mod trie;

use std::collections::HashSet;

use log::warn;

use crate::legal_form::query::NameQuery;
use crate::legal_form::strip::{self, MiddleSpans, StripSpans};
use crate::legal_form::tokenize::clean;

pub use trie::{ReverseTrie, TrieCursor};

/// Set of recognized legal-form phrases in cleaned form.
#[derive(Debug, Clone, Default)]
pub struct LegalForms {
    phrases: HashSet<String>,
    trie: ReverseTrie,
}

impl LegalForms {
    /// Build the index from phrases.
    ///
    /// Every phrase is passed through [`clean`] so that the stored keys are
    /// comparable with cleaned tokens. Phrases that clean to nothing are
    /// dropped.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut forms = Self::default();
        for phrase in phrases {
            forms.insert(phrase.as_ref());
        }
        forms
    }

    fn insert(&mut self, phrase: &str) {
        let cleaned = clean(phrase);
        if cleaned.is_empty() {
            if !phrase.trim().is_empty() {
                warn!("Ignoring legal form {:?}: nothing left after cleaning", phrase);
            }
            return;
        }
        if self.phrases.contains(&cleaned) {
            return;
        }
        self.trie.insert(&cleaned);
        self.phrases.insert(cleaned);
    }

    /// Exact membership test for an already-cleaned phrase.
    pub fn contains(&self, cleaned_phrase: &str) -> bool {
        self.phrases.contains(cleaned_phrase)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Iterate over the stored phrases in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Start an empty matching window.
    pub(crate) fn cursor(&self) -> TrieCursor<'_> {
        self.trie.cursor()
    }

    /// Split a trailing legal form off `full_name`.
    ///
    /// Returns `(company, legal_form)`, each re-joined with single spaces.
    /// The legal form is empty when nothing matched.
    pub fn strip(&self, full_name: &str) -> (String, String) {
        let query = NameQuery::new(full_name);
        let spans = self.strip_spans(&query);
        (query.text(spans.company), query.text(spans.legal_form))
    }

    /// Find a legal form anywhere in `full_name`.
    ///
    /// Returns `(company, legal_form, trailing)`. When nothing qualifies the
    /// whole (whitespace-normalized) name is returned as the company.
    pub fn strip_middle(&self, full_name: &str) -> (String, String, String) {
        let query = NameQuery::new(full_name);
        match self.strip_middle_spans(&query) {
            Some(spans) => (
                query.text(spans.company),
                query.text(spans.legal_form),
                query.text(spans.trailing),
            ),
            None => (query.text(0..query.len()), String::new(), String::new()),
        }
    }

    /// Token ranges for [`Self::strip`].
    pub fn strip_spans(&self, query: &NameQuery<'_>) -> StripSpans {
        strip::strip_spans(query, self)
    }

    /// Token ranges for [`Self::strip_middle`], `None` when no legal form
    /// qualifies.
    pub fn strip_middle_spans(&self, query: &NameQuery<'_>) -> Option<MiddleSpans> {
        strip::strip_middle_spans(query, self)
    }
}

impl<S: AsRef<str>> FromIterator<S> for LegalForms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cleans_phrases() {
        let forms = LegalForms::new(["L.L.C.", "GmbH", "e.V."]);
        assert_eq!(forms.len(), 3);
        assert!(forms.contains("llc"));
        assert!(forms.contains("gmbh"));
        assert!(forms.contains("ev"));
        assert!(!forms.contains("L.L.C."));
    }

    #[test]
    fn test_new_drops_empty_and_duplicates() {
        let forms: LegalForms = ["", "&", "  ", "ltd", "Ltd."].into_iter().collect();
        assert_eq!(forms.len(), 1);
        assert!(!forms.contains(""));
    }

    #[test]
    fn test_empty_index() {
        let forms = LegalForms::default();
        assert!(forms.is_empty());
        assert_eq!(forms.strip("Example LLC"), ("Example LLC".to_string(), String::new()));
    }

    #[test]
    fn test_iter_returns_cleaned_phrases() {
        let forms = LegalForms::new(["Pvt. Ltd."]);
        let phrases: Vec<&str> = forms.iter().collect();
        assert_eq!(phrases, vec!["pvtltd"]);
    }

    #[test]
    fn test_legal_forms_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LegalForms>();
    }
}
