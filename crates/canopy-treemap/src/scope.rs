//! Anchor resolution and the set of IDs a treemap covers.

use std::collections::HashSet;

use canopy_table::IdMaps;
use tracing::debug;

/// Resolves a label path to an ID by walking down from the top level.
///
/// Each part must equal the label of a child of the previous match. Siblings are
/// tried in order and the first complete match wins. An empty path resolves to
/// nothing.
pub fn resolve_anchor<'a, S: AsRef<str>>(maps: &'a IdMaps, parts: &[S]) -> Option<&'a str> {
    let (first, rest) = parts.split_first()?;
    maps.top_level()
        .iter()
        .filter(|id| maps.label(id) == Some(first.as_ref()))
        .find_map(|id| descend(maps, id, rest))
}

/// Follows the remaining label parts below `id`.
fn descend<'a, S: AsRef<str>>(maps: &'a IdMaps, id: &'a str, parts: &[S]) -> Option<&'a str> {
    let Some((want, rest)) = parts.split_first() else {
        return Some(id);
    };
    maps.children(id)
        .iter()
        .filter(|child| maps.label(child) == Some(want.as_ref()))
        .find_map(|child| descend(maps, child, rest))
}

/// Returns `id` and all of its descendants in pre-order.
pub fn subtree_ids<'a>(maps: &'a IdMaps, id: &'a str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut stack = vec![id];
    while let Some(cur) = stack.pop() {
        out.push(cur);
        // Reverse so the first child is visited first.
        stack.extend(maps.children(cur).iter().rev().map(String::as_str));
    }
    out
}

/// The IDs covered by one treemap, in output order.
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    /// Resolved anchor, or `None` for the whole table.
    pub anchor: Option<&'a str>,
    /// IDs in scope in output order.
    pub ids: Vec<&'a str>,
    /// Membership set over `ids`.
    members: HashSet<&'a str>,
}

impl<'a> Scope<'a> {
    /// Builds the scope for an optional anchor label path.
    ///
    /// A path that resolves to no ID falls back to the whole table.
    pub fn new<S: AsRef<str>>(maps: &'a IdMaps, path_parts: &[S]) -> Self {
        let anchor = resolve_anchor(maps, path_parts);
        if anchor.is_none() && !path_parts.is_empty() {
            let wanted: Vec<&str> = path_parts.iter().map(AsRef::as_ref).collect();
            debug!(path = ?wanted, "anchor not found, using whole table");
        }
        let ids = match anchor {
            Some(id) => subtree_ids(maps, id),
            None => maps.ids().iter().map(String::as_str).collect(),
        };
        let members = ids.iter().copied().collect();
        Self {
            anchor,
            ids,
            members,
        }
    }

    /// Returns true if the ID is in scope.
    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Returns the in-scope children of an ID.
    pub fn children(&self, maps: &'a IdMaps, id: &str) -> impl Iterator<Item = &'a str> {
        maps.children(id)
            .iter()
            .map(String::as_str)
            .filter(|child| self.contains(child))
    }

    /// Returns true if the ID has no in-scope children.
    pub fn is_leaf(&self, maps: &'a IdMaps, id: &str) -> bool {
        self.children(maps, id).next().is_none()
    }
}
