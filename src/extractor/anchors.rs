//! Document-link strategy.
//!
//! When the page is a flat list of certificate links, each anchor is both
//! the name source and the link source.

use super::{candidate, long_enough};
use crate::dom::Container;
use crate::links::is_documents_href;
use crate::options::Options;
use crate::result::Candidate;
use crate::url_utils::normalize_url_with_base;

/// Extract a candidate from every anchor pointing under `/documents/`.
pub fn extract<C: Container>(root: &C, options: &Options) -> Vec<Candidate> {
    root.anchors()
        .iter()
        .filter_map(|anchor| {
            let href = anchor.href().filter(|href| is_documents_href(href))?;
            let raw = anchor.stripped_text();
            if !long_enough(&raw, options) {
                return None;
            }
            let document_url = normalize_url_with_base(Some(href.as_str()), &options.base_origin);
            candidate(&raw, document_url, options)
        })
        .collect()
}
