//! Name normalization.
//!
//! Turns raw extracted text into a canonical party name: boilerplate
//! prefixes are stripped from the front, double quotes are removed and
//! whitespace is collapsed.

use crate::options::DEFAULT_NAME_PREFIXES;

/// Normalize a raw name using the default prefix list.
#[must_use]
pub fn normalize_name_default(raw: &str) -> String {
    normalize_name(raw, DEFAULT_NAME_PREFIXES)
}

/// Normalize a raw name, stripping any of `prefixes` from its start.
///
/// Prefixes are checked in list order against the progressively stripped
/// string, so stacked prefixes ("Политическая партия Партия ...") are all
/// removed. The pass repeats until the string stops changing, which makes
/// the function idempotent.
///
/// # Example
///
/// ```rust
/// use rs_partylist::text::normalize_name_default;
///
/// assert_eq!(
///     normalize_name_default("Политическая партия \"Новые  люди\""),
///     "Новые люди"
/// );
/// ```
#[must_use]
pub fn normalize_name<S: AsRef<str>>(raw: &str, prefixes: &[S]) -> String {
    let mut current = single_pass(raw, prefixes);
    loop {
        let next = single_pass(&current, prefixes);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn single_pass<S: AsRef<str>>(raw: &str, prefixes: &[S]) -> String {
    let mut name = raw;
    for prefix in prefixes {
        let prefix = prefix.as_ref();
        if prefix.is_empty() {
            continue;
        }
        if let Some(rest) = name.strip_prefix(prefix) {
            name = rest.trim();
        }
    }

    collapse_whitespace(&name.replace('"', ""))
}

/// Collapse every run of whitespace to a single space and trim the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length of `text` in characters, not bytes.
#[inline]
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
