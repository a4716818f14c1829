//! URL normalization for document links.
//!
//! Hrefs found in the register pages are often root-relative and sometimes
//! still point at plain `http://`. Everything that leaves the extractor is
//! absolute and prefers HTTPS.

use url::Url;

use crate::options::DEFAULT_BASE_ORIGIN;

/// Normalize an href against the default base origin.
///
/// # Example
///
/// ```rust
/// use rs_partylist::url_utils::normalize_url;
///
/// assert_eq!(
///     normalize_url(Some("/documents/a.pdf")).as_deref(),
///     Some("https://minjust.gov.ru/documents/a.pdf")
/// );
/// assert_eq!(normalize_url(None), None);
/// ```
#[must_use]
pub fn normalize_url(href: Option<&str>) -> Option<String> {
    normalize_url_with_base(href, DEFAULT_BASE_ORIGIN)
}

/// Normalize an href, resolving root-relative paths against `base`.
///
/// - Absent, empty or blank input gives `None`.
/// - Hrefs starting with `//` take the scheme of `base`.
/// - Other hrefs starting with `/` are appended to `base` after `.` and
///   `..` segments are collapsed. No percent-encoding is applied.
/// - An `http://` scheme is upgraded to `https://`.
/// - Anything else passes through unchanged.
#[must_use]
pub fn normalize_url_with_base(href: Option<&str>, base: &str) -> Option<String> {
    let href = href?.trim();
    if href.is_empty() {
        return None;
    }

    let absolute = if href.starts_with('/') {
        resolve_root_relative(href, base)
    } else {
        href.to_string()
    };

    Some(upgrade_scheme(absolute))
}

fn resolve_root_relative(href: &str, base: &str) -> String {
    if href.starts_with("//") {
        let scheme = Url::parse(base)
            .map_or_else(|_| "https".to_string(), |url| url.scheme().to_string());
        return format!("{scheme}:{href}");
    }

    let (path, rest) = href.split_at(href.find(['?', '#']).unwrap_or(href.len()));
    format!("{}{}{rest}", base.trim_end_matches('/'), remove_dot_segments(path))
}

/// Collapse `.` and `..` segments of an absolute path. Everything else,
/// including empty segments, backslashes and non-ASCII text, is kept as is.
fn remove_dot_segments(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    let mut resolved: Vec<&str> = Vec::with_capacity(segments.len());
    for segment in &segments {
        match *segment {
            "." => {}
            ".." => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    if matches!(segments.last(), Some(&("." | ".."))) {
        resolved.push("");
    }

    let joined = resolved.join("/");
    if joined.starts_with('/') {
        joined
    } else {
        format!("/{joined}")
    }
}

fn upgrade_scheme(url: String) -> String {
    const INSECURE: &str = "http://";
    match url.get(..INSECURE.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(INSECURE) => {
            format!("https://{}", &url[INSECURE.len()..])
        }
        _ => url,
    }
}
