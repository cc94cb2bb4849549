//! Tokenized company name ready for legal-form matching.

use std::ops::Range;

use crate::legal_form::tokenize::{clean, tokenize};

/// A company name split into original tokens with their cleaned forms.
///
/// `tokens[i]` and `cleaned[i]` always describe the same token; the matcher
/// works purely on indices into these two parallel vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery<'a> {
    tokens: Vec<&'a str>,
    cleaned: Vec<String>,
}

impl<'a> NameQuery<'a> {
    /// Tokenize `text` and clean every token.
    pub fn new(text: &'a str) -> Self {
        let tokens = tokenize(text);
        let cleaned = tokens.iter().map(|token| clean(token)).collect();
        Self { tokens, cleaned }
    }

    /// Original token text, in input order.
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Cleaned token text, index-aligned with [`Self::tokens`].
    pub fn cleaned(&self) -> &[String] {
        &self.cleaned
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Join the original tokens in `range` with single spaces.
    ///
    /// An empty or out-of-bounds range yields an empty string.
    pub fn text(&self, range: Range<usize>) -> String {
        self.tokens.get(range).map(|t| t.join(" ")).unwrap_or_default()
    }

    /// Join the cleaned tokens in `range` with single spaces.
    pub fn cleaned_text(&self, range: Range<usize>) -> String {
        self.cleaned
            .get(range)
            .map(|t| {
                t.iter()
                    .filter(|token| !token.is_empty())
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }

    /// Number of characters of [`Self::text`] for `range`, without building it.
    pub(crate) fn text_char_len(&self, range: Range<usize>) -> usize {
        let Some(tokens) = self.tokens.get(range) else {
            return 0;
        };
        let chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
        chars + tokens.len().saturating_sub(1)
    }

    /// Number of characters of the cleaned tokens in `range`, concatenated.
    pub(crate) fn cleaned_char_len(&self, range: Range<usize>) -> usize {
        self.cleaned
            .get(range)
            .map(|t| t.iter().map(|token| token.chars().count()).sum::<usize>())
            .unwrap_or_default()
    }
}
