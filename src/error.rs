//! Error types for rs-partylist.
//!
//! Extraction itself never fails: a document without recognisable structure
//! simply yields no parties. These errors cover the surrounding I/O glue
//! (locating and reading the input, rendering the output).

use std::path::PathBuf;

/// Error type for source and output operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the source document failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No HTML file was found in the searched directory.
    #[error("no HTML file found in {}", .0.display())]
    NoHtmlFile(PathBuf),

    /// Serializing the extracted records failed.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for source and output operations.
pub type Result<T> = std::result::Result<T, Error>;
