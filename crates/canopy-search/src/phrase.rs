//! Phrase search: the whole query inside a single path segment.

use std::collections::HashSet;

use canopy_tree::PathIndex;

use crate::hit::{SearchHit, sort_hits};

/// Finds every path whose normalized segments contain `phrase`.
///
/// The anchor runs up to and including the first segment that contains the
/// phrase. An empty phrase matches nothing.
pub fn phrase_matches(index: &PathIndex, phrase: &str) -> Vec<SearchHit> {
    if phrase.is_empty() {
        return Vec::new();
    }

    let mut seen: HashSet<&[String]> = HashSet::new();
    let mut hits = Vec::new();

    for (parts, nparts) in index.iter() {
        let Some(j) = nparts.iter().position(|seg| seg.contains(phrase)) else {
            continue;
        };
        let anchor = &parts[..=j];
        if seen.insert(anchor) {
            hits.push(SearchHit::new(anchor.to_vec()));
        }
    }

    sort_hits(&mut hits);
    hits
}
