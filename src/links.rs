//! Document link discovery.
//!
//! Party entries usually carry a link to their registration certificate.
//! These helpers pick the most likely candidate among the anchors of a
//! container and return it normalized.

use crate::dom::Container;
use crate::options::Options;
use crate::url_utils::normalize_url_with_base;

/// Path fragment used by the register for hosted documents.
pub const DOCUMENTS_PATH: &str = "/documents/";

/// True if the href points at a PDF (case-insensitive).
#[must_use]
pub fn is_pdf_href(href: &str) -> bool {
    href.to_lowercase().contains(".pdf")
}

/// True if the href is under the documents path (case-sensitive).
#[must_use]
pub fn is_documents_href(href: &str) -> bool {
    href.contains(DOCUMENTS_PATH)
}

fn is_download_href(href: &str) -> bool {
    href.to_lowercase().contains("download")
}

/// Find the best document link inside `container`.
///
/// A PDF link wins outright. Failing that, the first link under
/// `/documents/` or mentioning `download` is taken. Both searches run in
/// document order.
#[must_use]
pub fn find_document_link<C: Container>(container: &C, options: &Options) -> Option<String> {
    let hrefs: Vec<String> = container
        .anchors()
        .iter()
        .filter_map(Container::href)
        .filter(|href| !href.is_empty())
        .collect();

    hrefs
        .iter()
        .find(|href| is_pdf_href(href))
        .or_else(|| {
            hrefs
                .iter()
                .find(|href| is_documents_href(href) || is_download_href(href))
        })
        .and_then(|href| normalize_url_with_base(Some(href.as_str()), &options.base_origin))
}

/// Find the document link of a table row.
///
/// Cells are scanned in order and anchors within each cell in order; the
/// first href that is a PDF or sits under `/documents/` wins. Unlike
/// [`find_document_link`] there is no `download` fallback.
#[must_use]
pub fn find_row_document_link<C: Container>(cells: &[C], options: &Options) -> Option<String> {
    cells
        .iter()
        .flat_map(Container::anchors)
        .filter_map(|anchor| anchor.href())
        .find(|href| !href.is_empty() && (is_pdf_href(href) || is_documents_href(href)))
        .and_then(|href| normalize_url_with_base(Some(href.as_str()), &options.base_origin))
}
