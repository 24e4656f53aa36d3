//! Search hit types and their ordering.

use std::cmp::Ordering;

use serde::Serialize;

/// Separator used to render an anchor as a single label.
pub const PATH_SEPARATOR: &str = " > ";

/// A match inside one model's tree, identified by its anchor path.
///
/// Two hits with the same anchor are the same hit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchHit {
    /// Original titles from the root down to the matched node.
    pub anchor_parts: Vec<String>,
    /// `anchor_parts` joined with `" > "`.
    pub path_label: String,
}

impl SearchHit {
    /// Creates a hit from its anchor path.
    pub fn new(anchor_parts: Vec<String>) -> Self {
        let path_label = anchor_parts.join(PATH_SEPARATOR);
        Self {
            anchor_parts,
            path_label,
        }
    }

    /// Orders shallower anchors first, then by label.
    pub fn cmp_depth_then_label(&self, other: &Self) -> Ordering {
        self.anchor_parts
            .len()
            .cmp(&other.anchor_parts.len())
            .then_with(|| self.path_label.cmp(&other.path_label))
    }
}

/// Sorts hits ascending by `(anchor length, path label)`.
pub fn sort_hits(hits: &mut [SearchHit]) {
    hits.sort_by(SearchHit::cmp_depth_then_label);
}

/// A hit tagged with the model whose tree it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelHit {
    /// Model column name.
    pub model: String,
    /// `anchor_parts` joined with `" > "`.
    pub path_label: String,
    /// Original titles from the root down to the matched node.
    pub anchor_parts: Vec<String>,
}

impl ModelHit {
    /// Tags a hit with its model.
    pub fn new(model: impl Into<String>, hit: SearchHit) -> Self {
        Self {
            model: model.into(),
            path_label: hit.path_label,
            anchor_parts: hit.anchor_parts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(parts: &[&str]) -> SearchHit {
        SearchHit::new(parts.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_path_label() {
        assert_eq!(hit(&["Root", "3 Lights"]).path_label, "Root > 3 Lights");
        assert_eq!(hit(&[]).path_label, "");
    }

    #[test]
    fn test_sort_depth_first() {
        let mut hits = vec![
            hit(&["Root", "b", "c"]),
            hit(&["Root", "z"]),
            hit(&["Root", "a"]),
        ];
        sort_hits(&mut hits);
        let labels: Vec<&str> = hits.iter().map(|h| h.path_label.as_str()).collect();
        assert_eq!(labels, vec!["Root > a", "Root > z", "Root > b > c"]);
    }
}
