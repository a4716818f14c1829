//! DOM Container Abstraction
//!
//! The extraction heuristics never talk to a parser directly. They work
//! against the [`Container`] trait, which captures the handful of operations
//! they need: find descendant elements by tag, read an attribute, list the
//! anchors carrying an `href`, and pull out the visible text.
//!
//! [`dom_query`] provides the default implementation through
//! [`NodeRef`]. Any tolerant HTML parser can be substituted by implementing
//! the trait for its node type.

pub use dom_query::{Document, NodeRef, Selection};

/// Elements whose text never counts as visible.
const HIDDEN_TEXT_TAGS: &[&str] = &["script", "style", "template"];

/// A parsed element used as a search scope.
pub trait Container: Sized {
    /// Descendant elements whose tag is one of `tags`, in document order.
    ///
    /// The container itself is not included.
    fn find_all(&self, tags: &[&str]) -> Vec<Self>;

    /// Value of an attribute, if present.
    fn attr(&self, name: &str) -> Option<String>;

    /// Visible text with "strip" semantics.
    ///
    /// Every text node is trimmed, empty ones are dropped, and the rest are
    /// concatenated without a separator.
    fn stripped_text(&self) -> String;

    /// Descendant anchors that carry an `href` attribute.
    fn anchors(&self) -> Vec<Self> {
        self.find_all(&["a"])
            .into_iter()
            .filter(|a| a.attr("href").is_some())
            .collect()
    }

    /// The `href` of this element, if present.
    fn href(&self) -> Option<String> {
        self.attr("href")
    }

    /// Whitespace-separated class names.
    fn class_names(&self) -> Vec<String> {
        self.attr("class")
            .map(|classes| classes.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl Container for NodeRef<'_> {
    fn find_all(&self, tags: &[&str]) -> Vec<Self> {
        self.descendants()
            .into_iter()
            .filter(|node| node.is_element() && has_tag(node, tags))
            .collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        Selection::from(*self).attr(name).map(|value| value.to_string())
    }

    fn stripped_text(&self) -> String {
        let mut out = String::new();
        for node in self.descendants() {
            if !node.is_text() {
                continue;
            }
            if node.parent().is_some_and(|parent| has_tag(&parent, HIDDEN_TEXT_TAGS)) {
                continue;
            }
            out.push_str(node.text().trim());
        }
        out
    }
}

fn has_tag(node: &NodeRef, tags: &[&str]) -> bool {
    node.node_name()
        .is_some_and(|name| tags.iter().any(|tag| name.eq_ignore_ascii_case(tag)))
}

/// Parse an HTML string into a document.
///
/// Parsing is tag-soup tolerant and never fails.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(doc: &'a Document, selector: &str) -> NodeRef<'a> {
        let sel = doc.select(selector);
        let node = sel.nodes().first().copied();
        node.expect("selector should match")
    }

    #[test]
    fn test_find_all_in_document_order() {
        let doc = parse(r#"<div><ul><li>1</li></ul><ol><li>2</li></ol><ul><li>3</li></ul></div>"#);
        let root = doc.root();

        let lists = root.find_all(&["ul", "ol"]);
        let tags: Vec<String> = lists
            .iter()
            .filter_map(|n| n.node_name().map(|t| t.to_string()))
            .collect();
        assert_eq!(tags, vec!["ul", "ol", "ul"]);
    }

    #[test]
    fn test_find_all_excludes_self() {
        let doc = parse(r#"<div class="outer"><div class="inner">x</div></div>"#);
        let outer = first(&doc, "div.outer");

        let divs = outer.find_all(&["div"]);
        assert_eq!(divs.len(), 1);
        assert_eq!(divs[0].attr("class").as_deref(), Some("inner"));
    }

    #[test]
    fn test_stripped_text_concatenates_trimmed_nodes() {
        let doc = parse("<p>  Партия \n <b> Единство </b>  </p>");
        let p = first(&doc, "p");

        assert_eq!(p.stripped_text(), "ПартияЕдинство");
    }

    #[test]
    fn test_stripped_text_skips_scripts() {
        let doc = parse("<div>visible<script>var x = 1;</script><style>p{}</style></div>");
        let div = first(&doc, "div");

        assert_eq!(div.stripped_text(), "visible");
    }

    #[test]
    fn test_stripped_text_keeps_noscript() {
        let doc = parse("<div>visible<noscript>fallback</noscript></div>");
        let div = first(&doc, "div");

        assert_eq!(div.stripped_text(), "visiblefallback");
    }

    #[test]
    fn test_anchors_require_href() {
        let doc = parse(r#"<div><a name="top">x</a><a href="/a">a</a><a href="">b</a></div>"#);
        let div = first(&doc, "div");

        let hrefs: Vec<Option<String>> = div.anchors().iter().map(Container::href).collect();
        assert_eq!(hrefs, vec![Some("/a".to_string()), Some(String::new())]);
    }

    #[test]
    fn test_class_names() {
        let doc = parse(r#"<div class=" party-item  Card ">x</div><span>y</span>"#);

        assert_eq!(first(&doc, "div").class_names(), vec!["party-item", "Card"]);
        assert!(first(&doc, "span").class_names().is_empty());
    }

    #[test]
    fn test_empty_document_has_nothing() {
        let doc = parse("");
        let root = doc.root();

        assert!(root.find_all(&["table"]).is_empty());
        assert!(root.anchors().is_empty());
        assert_eq!(root.stripped_text(), "");
    }
}
