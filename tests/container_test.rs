//! The cascade runs over any `Container`, not only `dom_query` nodes.

use std::rc::Rc;

use rs_partylist::dom::Container;
use rs_partylist::{extract_from_container, Options, Strategy};

/// A minimal in-memory element tree.
#[derive(Debug, Clone)]
struct Node(Rc<Element>);

#[derive(Debug)]
struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, &'static str)>,
    text: &'static str,
    children: Vec<Node>,
}

fn el(tag: &'static str, attrs: &[(&'static str, &'static str)], text: &'static str, children: Vec<Node>) -> Node {
    Node(Rc::new(Element {
        tag,
        attrs: attrs.to_vec(),
        text,
        children,
    }))
}

impl Node {
    fn collect(&self, tags: &[&str], out: &mut Vec<Node>) {
        for child in &self.0.children {
            if tags.contains(&child.0.tag) {
                out.push(child.clone());
            }
            child.collect(tags, out);
        }
    }
}

impl Container for Node {
    fn find_all(&self, tags: &[&str]) -> Vec<Self> {
        let mut out = Vec::new();
        self.collect(tags, &mut out);
        out
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0
            .attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_string())
    }

    fn stripped_text(&self) -> String {
        let mut out = self.0.text.trim().to_string();
        for child in &self.0.children {
            out.push_str(&child.stripped_text());
        }
        out
    }
}

#[test]
fn cascade_runs_over_custom_tree() {
    let root = el(
        "body",
        &[],
        "",
        vec![el(
            "table",
            &[],
            "",
            vec![
                el("tr", &[], "", vec![el("td", &[], "Name", vec![]), el("td", &[], "Doc", vec![])]),
                el(
                    "tr",
                    &[],
                    "",
                    vec![
                        el("td", &[], "Политическая партия Единство", vec![]),
                        el(
                            "td",
                            &[],
                            "",
                            vec![el("a", &[("href", "http://minjust.gov.ru/documents/a.pdf")], "PDF", vec![])],
                        ),
                    ],
                ),
            ],
        )],
    );

    let result = extract_from_container(&root, &Options::default());

    assert_eq!(result.strategy, Some(Strategy::Tables));
    assert_eq!(result.parties.len(), 1);
    assert_eq!(result.parties[0].name, "Единство");
    assert_eq!(
        result.parties[0].document_url.as_deref(),
        Some("https://minjust.gov.ru/documents/a.pdf")
    );
}

#[test]
fn custom_tree_without_structure_is_empty() {
    let root = el("body", &[], "Просто текст", vec![]);

    let result = extract_from_container(&root, &Options::default());

    assert!(result.is_empty());
    assert_eq!(result.strategy, None);
}
