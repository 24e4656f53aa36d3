//! Ancestor collapse over merged, model-tagged hits.
//!
//! Within one model only the shallowest hit of each lineage survives: a hit is
//! dropped when another kept hit of the same model has an anchor that is a
//! prefix of (or equal to) its own.

use std::collections::BTreeMap;

use crate::hit::ModelHit;

/// Returns true if `ancestor` is a prefix of `anchor` or equal to it.
pub fn is_ancestor_or_self(ancestor: &[String], anchor: &[String]) -> bool {
    ancestor.len() <= anchor.len() && anchor[..ancestor.len()] == *ancestor
}

/// Collapses hits to their shallowest ancestors, per model.
///
/// Duplicate `(model, anchor)` pairs are removed as a side effect. The result
/// is ordered by `(model, path_label)`.
pub fn collapse_to_ancestors(hits: Vec<ModelHit>) -> Vec<ModelHit> {
    let mut by_model: BTreeMap<String, Vec<ModelHit>> = BTreeMap::new();
    for hit in hits {
        by_model.entry(hit.model.clone()).or_default().push(hit);
    }

    let mut kept = Vec::new();
    for (_, mut group) in by_model {
        // Shallow anchors first so ancestors are kept before their descendants.
        group.sort_by_key(|h| h.anchor_parts.len());
        let mut survivors: Vec<ModelHit> = Vec::with_capacity(group.len());
        for hit in group {
            let covered = survivors
                .iter()
                .any(|s| is_ancestor_or_self(&s.anchor_parts, &hit.anchor_parts));
            if !covered {
                survivors.push(hit);
            }
        }
        survivors.sort_by(|a, b| a.path_label.cmp(&b.path_label));
        kept.extend(survivors);
    }
    kept
}
