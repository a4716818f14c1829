//! Party name classification for free text.
//!
//! Only the list and div strategies use this: their text comes from
//! arbitrary containers, so a keyword check stands in for the structure a
//! table row or a document link would otherwise provide.

use crate::options::Options;
use crate::text::char_len;

/// Check whether `text` plausibly names a political party.
///
/// The text must be between `classifier_min_len` and `classifier_max_len`
/// characters long and contain one of the configured keywords. Keyword
/// matching is case-insensitive substring containment, so "росси" matches
/// "России" and "Российская" alike.
#[must_use]
pub fn looks_like_entity_name(text: &str, options: &Options) -> bool {
    let len = char_len(text);
    if len < options.classifier_min_len || len > options.classifier_max_len {
        return false;
    }

    let lowered = text.to_lowercase();
    options
        .party_keywords
        .iter()
        .any(|keyword| lowered.contains(keyword.as_str()))
}
