//! # rs-partylist
//!
//! Extracts the list of registered political parties from an HTML page
//! whose layout cannot be relied upon.
//!
//! The register has been published as a table, as a flat set of document
//! links, as bulleted lists and as card-style divs. Instead of betting on
//! one layout, the extractor runs a cascade of four heuristics and keeps the
//! result of the first one that finds anything. Names are then normalized,
//! deduplicated and sorted.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_partylist::extract;
//!
//! let html = r#"<html><body><table>
//!     <tr><th>Наименование</th><th>Документ</th></tr>
//!     <tr><td>Политическая партия Единство</td>
//!         <td><a href="/documents/a.pdf">PDF</a></td></tr>
//! </table></body></html>"#;
//!
//! let result = extract(html);
//! assert_eq!(result.parties[0].name, "Единство");
//! assert_eq!(
//!     result.parties[0].document_url.as_deref(),
//!     Some("https://minjust.gov.ru/documents/a.pdf")
//! );
//! ```
//!
//! ## Strategies
//!
//! - **Tables**: rows of every `<table>`, header row skipped
//! - **Links**: anchors pointing under `/documents/`
//! - **Lists**: `<li>` items that read like party names
//! - **Divs**: class-tagged `<div>` cards that read like party names

mod error;
mod options;
mod result;

/// Parser abstraction and its `dom_query` implementation.
pub mod dom;

/// Name normalization.
pub mod text;

/// Party-name classification for free text.
pub mod classifier;

/// URL normalization.
pub mod url_utils;

/// Document link discovery.
pub mod links;

/// Strategy cascade, strategies and finalizer.
pub mod extractor;

/// Character encoding detection and transcoding.
pub mod encoding;

/// JSON and listing renderers.
pub mod output;

/// Input file discovery and reading.
pub mod source;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::pipeline::extract_from_container;
pub use extractor::Strategy;
pub use options::Options;
pub use result::{Candidate, ExtractResult, PartyRecord};

/// Extracts parties from an HTML document using default options.
///
/// Extraction never fails: a document without recognisable structure gives
/// an empty result.
#[must_use]
pub fn extract(html: &str) -> ExtractResult {
    extract_with_options(html, &Options::default())
}

/// Extracts parties from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_partylist::{extract_with_options, Options};
///
/// let html = r#"<ul><li>Green Party of the Shire</li></ul>"#;
/// let options = Options {
///     party_keywords: vec!["party".to_string()],
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options);
/// assert_eq!(result.parties.len(), 1);
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ExtractResult {
    let document = dom::parse(html);
    extract_from_container(&document.root(), options)
}

/// Extracts parties from HTML bytes with automatic encoding detection.
///
/// The charset is taken from a byte order mark or a `<meta>` declaration,
/// defaulting to UTF-8. Invalid bytes are replaced, never rejected.
///
/// # Example
///
/// ```rust
/// use rs_partylist::extract_bytes;
///
/// // "Союз правых сил" in windows-1251
/// let html = b"<meta charset=\"windows-1251\"><ul><li>\xD1\xEE\xFE\xE7 \xEF\xF0\xE0\xE2\xFB\xF5 \xF1\xE8\xEB</li></ul>";
/// let result = extract_bytes(html);
/// assert_eq!(result.parties[0].name, "Союз правых сил");
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> ExtractResult {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts parties from HTML bytes with custom options and automatic
/// encoding detection.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> ExtractResult {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
