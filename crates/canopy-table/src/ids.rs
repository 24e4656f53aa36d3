//! Hierarchical ID helpers.
//!
//! Hierarchical IDs are dotted numeric strings such as `3.3.2`. The parent of an ID is
//! the ID with its last dot-segment removed; IDs without a dot are top level and have
//! the empty string as parent.

use std::collections::HashMap;

use crate::{Table, is_blank_cell};

/// Returns the parent key of a dotted hierarchical key.
///
/// `"3.3.2"` has parent `"3.3"`, `"3"` has parent `""` (top level).
pub fn parent_key(key: &str) -> &str {
    key.rsplit_once('.').map_or("", |(parent, _)| parent)
}

/// Returns the hierarchical depth of an ID: one more than its number of dots.
pub fn depth(id: &str) -> usize {
    1 + id.matches('.').count()
}

/// Parent, label, and children maps derived from a table's IDs.
///
/// These maps operate on raw row IDs and are independent of the model trees. Rows
/// whose ID is empty or `nan` are not addressable and are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMaps {
    /// Unique IDs in first-seen order.
    order: Vec<String>,
    /// ID to parent ID (`""` for top level).
    parents: HashMap<String, String>,
    /// ID to label. A duplicated ID keeps the label of its last row.
    labels: HashMap<String, String>,
    /// Parent ID to child IDs in first-seen order. `""` lists the top-level IDs.
    children: HashMap<String, Vec<String>>,
}

impl IdMaps {
    /// Derives the maps from a table.
    pub fn from_table(table: &Table) -> Self {
        Self::from_pairs(table.rows().iter().map(|r| (r.id.as_str(), r.label.as_str())))
    }

    /// Derives the maps from `(id, label)` pairs in table order.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut maps = Self::default();
        for (id, label) in pairs {
            if is_blank_cell(id) {
                continue;
            }
            if !maps.parents.contains_key(id) {
                let parent = parent_key(id).to_string();
                maps.children
                    .entry(parent.clone())
                    .or_default()
                    .push(id.to_string());
                maps.parents.insert(id.to_string(), parent);
                maps.order.push(id.to_string());
            }
            maps.labels.insert(id.to_string(), label.to_string());
        }
        maps
    }

    /// Returns all IDs in first-seen order.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// Returns true if the ID occurs in the table.
    pub fn contains(&self, id: &str) -> bool {
        self.parents.contains_key(id)
    }

    /// Returns the parent ID, or `None` if the ID is unknown.
    pub fn parent(&self, id: &str) -> Option<&str> {
        self.parents.get(id).map(String::as_str)
    }

    /// Returns the label of an ID, or `None` if the ID is unknown.
    pub fn label(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Returns the child IDs of a parent (`""` for the top level).
    pub fn children(&self, id: &str) -> &[String] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }

    /// Returns the top-level IDs.
    pub fn top_level(&self) -> &[String] {
        self.children("")
    }
}
