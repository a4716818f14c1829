//! Character encoding detection and transcoding.
//!
//! Saved register pages arrive as raw bytes. Older revisions were served as
//! windows-1251 or KOI8-R, so the charset is sniffed before decoding.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How many leading bytes are searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">`
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Detect the character encoding of an HTML document.
///
/// Checked in order:
/// 1. A byte order mark
/// 2. A `charset=` declaration inside a `<meta>` tag in the first 1024 bytes
///    (covers both `<meta charset>` and `http-equiv="Content-Type"`)
/// 3. UTF-8
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn declared_charset(head: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD; decoding never fails. A leading BOM is
/// removed.
///
/// # Examples
///
/// ```
/// use rs_partylist::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"windows-1251\"><p>\xCF\xE0\xF0\xF2\xE8\xFF</p>";
/// assert!(transcode_to_utf8(html).contains("Партия"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let (decoded, _encoding_used, _had_errors) = detect_encoding(html).decode(html);
    decoded.into_owned()
}
