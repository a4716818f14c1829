//! Rendering of extracted parties.
//!
//! Both renderers return strings; where the text ends up is the caller's
//! business.

use crate::error::Result;
use crate::result::PartyRecord;

/// Shown in the listing when a party has no document link.
pub const MISSING_DOCUMENT: &str = "Документ не найден";

/// Serialize records as a pretty-printed JSON array.
///
/// Each element has a `name` and a `doc_url` (string or `null`). Indentation
/// is two spaces and non-ASCII text is written as-is.
///
/// # Example
///
/// ```rust
/// use rs_partylist::{output, PartyRecord};
///
/// let json = output::to_json(&[PartyRecord {
///     name: "Союз".to_string(),
///     document_url: None,
/// }])?;
/// assert_eq!(json, "[\n  {\n    \"name\": \"Союз\",\n    \"doc_url\": null\n  }\n]");
/// # Ok::<(), rs_partylist::Error>(())
/// ```
pub fn to_json(records: &[PartyRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Render a numbered, human-readable listing.
///
/// ```text
///  1. Name
///      https://...
///
/// ```
#[must_use]
pub fn render_listing(records: &[PartyRecord]) -> String {
    let mut out = String::new();
    for (index, record) in records.iter().enumerate() {
        let link = record.document_url.as_deref().unwrap_or(MISSING_DOCUMENT);
        out.push_str(&format!("{:>2}. {}\n     {}\n\n", index + 1, record.name, link));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, url: Option<&str>) -> PartyRecord {
        PartyRecord {
            name: name.to_string(),
            document_url: url.map(str::to_string),
        }
    }

    #[test]
    fn json_uses_doc_url_key_and_literal_cyrillic() {
        let json = to_json(&[record("Единство", Some("https://minjust.gov.ru/documents/a.pdf"))])
            .expect("serialization should succeed");

        assert!(json.contains("\"doc_url\": \"https://minjust.gov.ru/documents/a.pdf\""));
        assert!(json.contains("\"name\": \"Единство\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn json_of_nothing_is_empty_array() {
        assert_eq!(to_json(&[]).expect("serialization should succeed"), "[]");
    }

    #[test]
    fn listing_numbers_from_one_with_placeholder() {
        let listing = render_listing(&[
            record("Альфа", Some("https://minjust.gov.ru/documents/a.pdf")),
            record("Бета", None),
        ]);

        assert_eq!(
            listing,
            " 1. Альфа\n     https://minjust.gov.ru/documents/a.pdf\n\n 2. Бета\n     Документ не найден\n\n"
        );
    }

    #[test]
    fn listing_widens_past_two_digits() {
        let records: Vec<PartyRecord> = (0..100).map(|i| record(&format!("P{i}"), None)).collect();
        let listing = render_listing(&records);

        assert!(listing.starts_with(" 1. P0\n"));
        assert!(listing.contains("\n10. P9\n"));
        assert!(listing.contains("\n100. P99\n"));
    }
}
