//! Party extraction strategies and the cascade that runs them.
//!
//! # Module Structure
//!
//! - `tables`: rows of `<table>` elements
//! - `anchors`: anchors pointing under `/documents/`
//! - `lists`: `<li>` items of `<ul>`/`<ol>` lists
//! - `divs`: `<div>` containers with party-like class names
//! - `pipeline`: the ordered cascade over the four strategies
//! - `finalize`: deduplication and sorting of the winning candidates
//!
//! # Usage
//!
//! ```rust
//! use rs_partylist::dom;
//! use rs_partylist::extractor::{pipeline, Strategy};
//! use rs_partylist::Options;
//!
//! let doc = dom::parse(r#"<a href="/documents/b.pdf">Демократический союз России</a>"#);
//! let outcome = pipeline::run_cascade(&doc.root(), &Options::default());
//! assert_eq!(outcome.strategy, Some(Strategy::Links));
//! ```

use std::fmt;

use crate::dom::Container;
use crate::options::Options;
use crate::result::Candidate;
use crate::text::{char_len, normalize_name};

pub mod anchors;
pub mod divs;
pub mod finalize;
pub mod lists;
pub mod pipeline;
pub mod tables;

pub use finalize::finalize;
pub use pipeline::{run_cascade, CascadeOutcome};

/// One extraction heuristic, in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Table rows: first cell is the name.
    Tables,
    /// Anchors under `/documents/`: anchor text is the name.
    Links,
    /// List items that read like party names.
    Lists,
    /// Class-tagged divs that read like party names.
    Divs,
}

impl Strategy {
    /// Every strategy, in the order the cascade tries them.
    pub const ALL: [Strategy; 4] = [
        Strategy::Tables,
        Strategy::Links,
        Strategy::Lists,
        Strategy::Divs,
    ];

    /// Short, stable identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Tables => "tables",
            Strategy::Links => "links",
            Strategy::Lists => "lists",
            Strategy::Divs => "divs",
        }
    }

    /// Run this strategy over the whole document.
    pub fn run<C: Container>(self, root: &C, options: &Options) -> Vec<Candidate> {
        match self {
            Strategy::Tables => tables::extract(root, options),
            Strategy::Links => anchors::extract(root, options),
            Strategy::Lists => lists::extract(root, options),
            Strategy::Divs => divs::extract(root, options),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True if a raw name passes the shared length gate.
pub(crate) fn long_enough(raw: &str, options: &Options) -> bool {
    char_len(raw) > options.min_name_len
}

/// Normalize an accepted raw name into a candidate.
///
/// Names that normalize to nothing (a bare prefix, quotes only) are dropped.
pub(crate) fn candidate(raw: &str, document_url: Option<String>, options: &Options) -> Option<Candidate> {
    let name = normalize_name(raw, options.name_prefixes.as_slice());
    if name.is_empty() {
        return None;
    }
    Some(Candidate::new(name, document_url))
}
