//! List strategy.

use super::{candidate, long_enough};
use crate::classifier::looks_like_entity_name;
use crate::dom::Container;
use crate::links::find_document_link;
use crate::options::Options;
use crate::result::Candidate;

/// Extract candidates from the `<li>` items of every `<ul>` and `<ol>`.
///
/// Items inside nested lists are visited once per enclosing list; the
/// finalizer removes the resulting duplicates.
pub fn extract<C: Container>(root: &C, options: &Options) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for list in root.find_all(&["ul", "ol"]) {
        for item in list.find_all(&["li"]) {
            let raw = item.stripped_text();
            if !long_enough(&raw, options) || !looks_like_entity_name(&raw, options) {
                continue;
            }
            let document_url = find_document_link(&item, options);
            candidates.extend(candidate(&raw, document_url, options));
        }
    }

    candidates
}
