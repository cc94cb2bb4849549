//! Legal-form span detection.
//!
//! Both matchers share one backward scan: starting at a right boundary, a
//! window of cleaned tokens grows leftwards until its concatenation is a known
//! phrase. A hit is frozen into the legal-form span and the window restarts
//! empty, so composite forms such as "GmbH & Co. KG" are assembled from
//! several independently recognized parts. Index 0 is never scanned, which
//! keeps at least one token for the company name.

use std::ops::Range;

use log::{debug, trace};

use crate::legal_form::index::LegalForms;
use crate::legal_form::query::NameQuery;

/// A legal form found by [`strip_middle_spans`] must be longer than this, both
/// in its original text and in its cleaned form. Rejects lone letters such as
/// "A" or "A.".
pub const MAX_REJECTED_LEGAL_FORM_CHARS: usize = 1;

/// Token ranges produced by the suffix matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripSpans {
    pub company: Range<usize>,
    pub legal_form: Range<usize>,
}

impl StripSpans {
    pub fn has_legal_form(&self) -> bool {
        !self.legal_form.is_empty()
    }
}

/// Token ranges produced by the anywhere-in-text matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddleSpans {
    pub company: Range<usize>,
    pub legal_form: Range<usize>,
    pub trailing: Range<usize>,
}

/// Scan `tokens[1..end]` backwards and return the start of the legal-form
/// span that ends at `end`. Returns `end` when nothing matched.
fn scan_legal_form_start(query: &NameQuery<'_>, forms: &LegalForms, end: usize) -> usize {
    let cleaned = query.cleaned();
    let mut start = end;
    let mut window = forms.cursor();

    for i in (1..end).rev() {
        if !window.prepend(&cleaned[i]) {
            // no phrase ends with this window, and prepending more won't help
            break;
        }
        if window.is_match() {
            trace!("Legal form part {:?} at tokens {}..{}", query.text(i..start), i, start);
            start = i;
            window = forms.cursor();
        }
    }

    start
}

/// Find the trailing legal form of `query`.
pub fn strip_spans(query: &NameQuery<'_>, forms: &LegalForms) -> StripSpans {
    let end = query.len();
    let start = scan_legal_form_start(query, forms, end);

    if start < end {
        debug!(
            "Stripped legal form {:?} from {:?}",
            query.text(start..end),
            query.text(0..start)
        );
    }

    StripSpans {
        company: 0..start,
        legal_form: start..end,
    }
}

/// Find a legal form anywhere in `query`, preferring the right-most boundary.
///
/// Every boundary from the last token down to index 1 is tried with the same
/// scan as [`strip_spans`], ignoring the tokens after it. The first boundary
/// whose legal form has more than [`MAX_REJECTED_LEGAL_FORM_CHARS`] characters
/// wins, counted both on the single-space joined original text and on the
/// cleaned text.
pub fn strip_middle_spans(query: &NameQuery<'_>, forms: &LegalForms) -> Option<MiddleSpans> {
    let len = query.len();

    for boundary in (1..len).rev() {
        let end = boundary + 1;
        let start = scan_legal_form_start(query, forms, end);
        if start == end {
            continue;
        }

        if query.text_char_len(start..end) <= MAX_REJECTED_LEGAL_FORM_CHARS
            || query.cleaned_char_len(start..end) <= MAX_REJECTED_LEGAL_FORM_CHARS
        {
            trace!(
                "Rejected short legal form {:?} at tokens {}..{}",
                query.text(start..end),
                start,
                end
            );
            continue;
        }

        debug!(
            "Found legal form {:?} at tokens {}..{} of {}",
            query.text(start..end),
            start,
            end,
            len
        );
        return Some(MiddleSpans {
            company: 0..start,
            legal_form: start..end,
            trailing: end..len,
        });
    }

    None
}
