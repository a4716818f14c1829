//! Configuration options for party extraction.
//!
//! The `Options` struct holds the data the heuristics match against: the
//! boilerplate prefixes, the party keywords, the length thresholds and the
//! base origin used to absolutize links. Swapping a list never requires
//! touching the cascade itself.

/// Base origin that root-relative document links are resolved against.
pub const DEFAULT_BASE_ORIGIN: &str = "https://minjust.gov.ru";

/// Boilerplate prefixes stripped from the start of a name, checked in order.
pub const DEFAULT_NAME_PREFIXES: &[&str] = &[
    "Политическая партия",
    "Политическая Партия",
    "Партия",
    "Название:",
    "Свидетельство о государственной регистрации",
];

/// Lowercase substrings that mark free text as a plausible party name.
///
/// Matching is plain substring containment so that stems such as "росси"
/// also catch inflected forms ("России", "российская").
pub const DEFAULT_PARTY_KEYWORDS: &[&str] = &[
    "партия",
    "росси",
    "демократ",
    "союз",
    "движение",
    "объединение",
];

/// Class-name fragments that mark a `div` as a party container.
pub const DEFAULT_DIV_CLASS_MARKERS: &[&str] = &["party", "item", "document"];

/// Configuration options for party extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the settings tuned for the Ministry of Justice party register.
///
/// # Example
///
/// ```rust
/// use rs_partylist::Options;
///
/// let options = Options {
///     base_origin: "https://example.org".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.min_name_len, 10);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Origin that root-relative hrefs are resolved against.
    ///
    /// Default: `"https://minjust.gov.ru"`
    pub base_origin: String,

    /// Prefixes stripped from the start of a name, in order.
    pub name_prefixes: Vec<String>,

    /// Keywords the name classifier looks for (lowercase).
    pub party_keywords: Vec<String>,

    /// Class-name fragments that qualify a `div` for the div strategy.
    pub div_class_markers: Vec<String>,

    /// Raw names must be strictly longer than this many characters.
    ///
    /// Applies to every strategy before normalization.
    ///
    /// Default: `10`
    pub min_name_len: usize,

    /// Shortest text (characters) the classifier accepts.
    ///
    /// Default: `10`
    pub classifier_min_len: usize,

    /// Longest text (characters) the classifier accepts.
    ///
    /// Default: `200`
    pub classifier_max_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_origin: DEFAULT_BASE_ORIGIN.to_string(),
            name_prefixes: to_owned_list(DEFAULT_NAME_PREFIXES),
            party_keywords: to_owned_list(DEFAULT_PARTY_KEYWORDS),
            div_class_markers: to_owned_list(DEFAULT_DIV_CLASS_MARKERS),
            min_name_len: 10,
            classifier_min_len: 10,
            classifier_max_len: 200,
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_thresholds() {
        let opts = Options::default();

        assert_eq!(opts.base_origin, "https://minjust.gov.ru");
        assert_eq!(opts.min_name_len, 10);
        assert_eq!(opts.classifier_min_len, 10);
        assert_eq!(opts.classifier_max_len, 200);
    }

    #[test]
    fn test_default_lists_keep_declared_order() {
        let opts = Options::default();

        assert_eq!(opts.name_prefixes.len(), 5);
        assert_eq!(opts.name_prefixes[0], "Политическая партия");
        assert_eq!(opts.name_prefixes[2], "Партия");
        assert_eq!(opts.party_keywords, DEFAULT_PARTY_KEYWORDS);
        assert_eq!(opts.div_class_markers, vec!["party", "item", "document"]);
    }

    #[test]
    fn test_custom_lists() {
        let opts = Options {
            party_keywords: vec!["party".to_string()],
            min_name_len: 3,
            ..Options::default()
        };

        assert_eq!(opts.party_keywords, vec!["party"]);
        assert_eq!(opts.min_name_len, 3);
        assert_eq!(opts.name_prefixes.len(), 5);
    }
}
