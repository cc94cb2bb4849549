//! Text tokenization and normalization.
//!
//! Company names are split into whitespace-separated tokens that keep their
//! original text, and every token gets a cleaned form that is used as a
//! lookup key against the legal-form dictionary.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Characters removed from a token by [`clean`].
///
/// The space is part of the set so that cleaning a multi-word phrase yields
/// the same key as concatenating its cleaned tokens.
pub const STRIPPED_CHARS: &[char] = &['.', '-', '/', '"', '’', '(', ')', '&', '\'', ',', ':', ' '];

/// Any run of non-whitespace characters. `\s` is Unicode-aware.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("Invalid token pattern"));

/// Splits text on runs of whitespace and returns the original substrings.
///
/// # Examples
/// ```
/// # use legalform::legal_form::tokenize::tokenize;
/// let tokens = tokenize("  Example   GmbH & Co. KG ");
/// assert_eq!(tokens, vec!["Example", "GmbH", "&", "Co.", "KG"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    TOKEN_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Cleans a token (or phrase) for matching: lowercase, then drop every
/// character in [`STRIPPED_CHARS`].
///
/// Works on code points, so non-Latin scripts survive untouched apart from
/// case folding.
///
/// # Examples
/// ```
/// # use legalform::legal_form::tokenize::clean;
/// assert_eq!(clean("L.L.C."), "llc");
/// assert_eq!(clean("Co-Op's"), "coops");
/// ```
pub fn clean(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect()
}

/// Folds accented characters to their base form ("beschränkt" → "beschrankt").
///
/// Decomposes to NFD, drops combining marks and recomposes, so characters
/// without a decomposition (e.g. "ß", CJK) pass through unchanged.
pub fn fold_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}

/// Builds the flattened alias key for a legal-form phrase: cleaned, with all
/// whitespace removed and diacritics folded.
///
/// Returns `(cleaned, key)`; the cleaned form is what the alias lookup echoes
/// back when nothing matches.
pub fn alias_key(legal_form: &str) -> (String, String) {
    let cleaned: String = clean(legal_form)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let key = fold_diacritics(&cleaned);
    (cleaned, key)
}
