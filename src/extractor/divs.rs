//! Div strategy.
//!
//! Last resort for card-style layouts: any `div` whose class names hint at a
//! party entry is read as a whole.

use super::{candidate, long_enough};
use crate::classifier::looks_like_entity_name;
use crate::dom::Container;
use crate::links::find_document_link;
use crate::options::Options;
use crate::result::Candidate;

/// True if any class name contains one of the configured markers
/// (case-insensitive).
fn has_marker_class<C: Container>(div: &C, options: &Options) -> bool {
    div.class_names().iter().any(|class| {
        let class = class.to_lowercase();
        options
            .div_class_markers
            .iter()
            .any(|marker| class.contains(&marker.to_lowercase()))
    })
}

/// Extract candidates from class-tagged divs.
pub fn extract<C: Container>(root: &C, options: &Options) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for div in root.find_all(&["div"]) {
        if !has_marker_class(&div, options) {
            continue;
        }
        let raw = div.stripped_text();
        if !long_enough(&raw, options) || !looks_like_entity_name(&raw, options) {
            continue;
        }
        let document_url = find_document_link(&div, options);
        candidates.extend(candidate(&raw, document_url, options));
    }

    candidates
}
