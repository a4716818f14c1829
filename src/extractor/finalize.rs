//! Deduplication and ordering of candidates.

use std::collections::HashSet;

use crate::result::{Candidate, PartyRecord};

/// Turn raw candidates into the canonical record list.
///
/// The first candidate with a given name wins; later ones are discarded even
/// if they carry a document URL the winner lacks. The survivors are sorted
/// by name in code-point order.
#[must_use]
pub fn finalize(candidates: Vec<Candidate>) -> Vec<PartyRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());
    let mut records: Vec<PartyRecord> = candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.name.clone()))
        .map(PartyRecord::from)
        .collect();

    records.sort_by(|a, b| a.name.cmp(&b.name));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let records = finalize(vec![
            Candidate::new("Союз", None),
            Candidate::new("Союз", Some("https://minjust.gov.ru/documents/s.pdf".to_string())),
        ]);

        assert_eq!(
            records,
            vec![PartyRecord {
                name: "Союз".to_string(),
                document_url: None,
            }]
        );
    }

    #[test]
    fn sorts_by_name() {
        let names: Vec<String> = finalize(vec![
            Candidate::new("Движение", None),
            Candidate::new("Альфа", None),
            Candidate::new("Бета", None),
        ])
        .into_iter()
        .map(|r| r.name)
        .collect();

        assert_eq!(names, vec!["Альфа", "Бета", "Движение"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let records = finalize(vec![Candidate::new("союз", None), Candidate::new("Союз", None)]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Союз");
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(finalize(Vec::new()).is_empty());
    }
}
