//! Table strategy.
//!
//! The register has historically published parties as a table: one row per
//! party, the name in the first cell and the certificate link somewhere in
//! the row. The first row of every table is taken to be the header.

use tracing::trace;

use super::{candidate, long_enough};
use crate::dom::Container;
use crate::links::find_row_document_link;
use crate::options::Options;
use crate::result::Candidate;

/// Extract candidates from every table in the document.
pub fn extract<C: Container>(root: &C, options: &Options) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for table in root.find_all(&["table"]) {
        for row in table.find_all(&["tr"]).iter().skip(1) {
            let cells = row.find_all(&["td"]);
            if cells.len() < 2 {
                continue;
            }

            let raw = cells[0].stripped_text();
            if !long_enough(&raw, options) {
                trace!(name = %raw, "table row name too short; skipped");
                continue;
            }

            let document_url = find_row_document_link(&cells, options);
            candidates.extend(candidate(&raw, document_url, options));
        }
    }

    candidates
}
