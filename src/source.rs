//! Locating and reading the input document.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::encoding::transcode_to_utf8;
use crate::error::{Error, Result};

/// True if the path has an `.html` or `.htm` extension (any case).
#[must_use]
pub fn is_html_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

/// Find the first HTML file in `dir`.
///
/// Entries are sorted by file name so the choice does not depend on the
/// order the filesystem happens to return them in.
pub fn find_html_file(dir: &Path) -> Result<PathBuf> {
    let io_err = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = fs::read_dir(dir)
        .map_err(io_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(io_err)?;
    paths.sort();

    let found = paths
        .into_iter()
        .find(|path| path.is_file() && is_html_path(path))
        .ok_or_else(|| Error::NoHtmlFile(dir.to_path_buf()))?;

    debug!(path = %found.display(), "found HTML file");
    Ok(found)
}

/// Read an HTML file, decoding it according to its declared charset.
pub fn read_html(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read HTML file");
    Ok(transcode_to_utf8(&bytes))
}

/// Resolve a file-or-directory argument to the HTML file to read.
pub fn resolve_input(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        find_html_file(path)
    } else {
        Ok(path.to_path_buf())
    }
}
