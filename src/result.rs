//! Result types for extraction output.
//!
//! `PartyRecord` is the terminal, deduplicated unit; `Candidate` is what a
//! single strategy produces before the finalizer runs.

use serde::Serialize;

use crate::extractor::Strategy;

/// One political party found in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyRecord {
    /// Normalized party name, unique within a result set.
    pub name: String,

    /// Absolute URL of the supporting document, if one was found.
    #[serde(rename = "doc_url")]
    pub document_url: Option<String>,
}

/// A strategy-local extraction result, before deduplication and sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub document_url: Option<String>,
}

impl Candidate {
    #[must_use]
    pub fn new(name: impl Into<String>, document_url: Option<String>) -> Self {
        Self {
            name: name.into(),
            document_url,
        }
    }
}

impl From<Candidate> for PartyRecord {
    fn from(candidate: Candidate) -> Self {
        Self {
            name: candidate.name,
            document_url: candidate.document_url,
        }
    }
}

/// Result of running the extraction pipeline over one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractResult {
    /// Unique parties, sorted by name.
    pub parties: Vec<PartyRecord>,

    /// Strategy that produced the candidates, or `None` when every
    /// strategy came up empty.
    pub strategy: Option<Strategy>,

    /// Number of candidates before deduplication.
    pub candidates_found: usize,
}

impl ExtractResult {
    /// True when no party was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }
}
