//! Tree construction from the row stream of one model column.
//!
//! Nodes live in an arena addressed by their dotted hierarchical key. The parent of a
//! key is found by string operation alone, so nodes never hold back-pointers. Once all
//! rows are consumed the arena is materialized into an owned [`TreeNode`] tree.

use std::{collections::HashMap, mem};

use canopy_table::{Table, is_blank_cell, parent_key};
use tracing::debug;

use crate::{
    label::HierarchyParser,
    node::{NodeKind, TreeNode},
};

/// Arena slot payload.
#[derive(Debug)]
enum Slot {
    /// A keyed structural node. `title` is `None` for intermediate nodes created
    /// only because a deeper key needed a parent.
    Structural {
        /// Hierarchical key of the node.
        key: String,
        /// Title assigned on first explicit creation.
        title: Option<String>,
    },
    /// A value leaf.
    Value(String),
}

/// One arena entry.
#[derive(Debug)]
struct ArenaNode {
    /// Node payload.
    slot: Slot,
    /// Arena indices of the children in insertion order.
    children: Vec<usize>,
}

/// Counters collected while building one tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Rows consumed.
    pub rows: usize,
    /// Rows that could not be placed.
    pub skipped: usize,
    /// Value leaves attached.
    pub values: usize,
}

/// Incremental builder for one model tree.
#[derive(Debug)]
pub struct TreeBuilder {
    /// Node arena; index 0 is the synthetic root.
    nodes: Vec<ArenaNode>,
    /// Hierarchical key to arena index. The root is registered under `""`.
    keys: HashMap<String, usize>,
    /// Parser state carried across rows.
    parser: HierarchyParser,
    /// Counters.
    stats: BuildStats,
}

impl TreeBuilder {
    /// Creates a builder whose synthetic root carries `root_title`.
    pub fn new(root_title: impl Into<String>) -> Self {
        let root = ArenaNode {
            slot: Slot::Structural {
                key: String::new(),
                title: Some(root_title.into()),
            },
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            keys: HashMap::from([(String::new(), 0)]),
            parser: HierarchyParser::new(),
            stats: BuildStats::default(),
        }
    }

    /// Returns the node for `key`, creating it (and any missing ancestors) if needed.
    ///
    /// A new node is appended as the last child of its parent. Titles are set once and
    /// never overwritten; an intermediate node created without a title takes the title
    /// of the first row that names it explicitly.
    pub fn ensure(&mut self, key: &str, title: &str) -> usize {
        self.ensure_slot(key, Some(title))
    }

    /// Shared implementation of [`Self::ensure`].
    fn ensure_slot(&mut self, key: &str, title: Option<&str>) -> usize {
        if let Some(&idx) = self.keys.get(key) {
            if let (Some(title), Slot::Structural { title: slot @ None, .. }) =
                (title, &mut self.nodes[idx].slot)
            {
                *slot = Some(title.to_string());
            }
            return idx;
        }

        let parent = self.ensure_slot(parent_key(key), None);
        let idx = self.nodes.len();
        self.nodes.push(ArenaNode {
            slot: Slot::Structural {
                key: key.to_string(),
                title: title.map(str::to_string),
            },
            children: Vec::new(),
        });
        self.nodes[parent].children.push(idx);
        self.keys.insert(key.to_string(), idx);
        idx
    }

    /// Consumes one row. Returns false if the row could not be placed.
    ///
    /// A non-blank `value` adds its own value leaf under the row's node, even if the
    /// node already has value leaves from earlier rows.
    pub fn push_row(&mut self, row_id: &str, label: &str, value: &str) -> bool {
        self.stats.rows += 1;
        let Some(placement) = self.parser.place(row_id, label) else {
            self.stats.skipped += 1;
            return false;
        };

        let idx = self.ensure(&placement.key, &placement.title());
        if !is_blank_cell(value) {
            let leaf = self.nodes.len();
            self.nodes.push(ArenaNode {
                slot: Slot::Value(value.trim().to_string()),
                children: Vec::new(),
            });
            self.nodes[idx].children.push(leaf);
            self.stats.values += 1;
        }
        true
    }

    /// Returns the counters collected so far.
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Materializes the full (unpruned) tree.
    pub fn finish(mut self) -> TreeNode {
        materialize(&mut self.nodes, 0)
    }
}

/// Moves an arena subtree into an owned node.
fn materialize(nodes: &mut [ArenaNode], idx: usize) -> TreeNode {
    let children = mem::take(&mut nodes[idx].children);
    let kind = match &mut nodes[idx].slot {
        Slot::Structural { key, title } => {
            NodeKind::Structural(title.take().unwrap_or_else(|| mem::take(key)))
        }
        Slot::Value(text) => NodeKind::Value(mem::take(text)),
    };
    TreeNode {
        kind,
        children: children
            .into_iter()
            .map(|child| materialize(nodes, child))
            .collect(),
    }
}

/// Builds the full tree for one model column of a table.
pub fn build_tree(table: &Table, model_idx: usize, root_title: &str) -> (TreeNode, BuildStats) {
    let mut builder = TreeBuilder::new(root_title);
    for row in table.rows() {
        builder.push_row(&row.id, &row.label, row.value(model_idx));
    }
    let stats = builder.stats();
    let tree = builder.finish();
    debug!(
        model = table.models().get(model_idx).map(String::as_str),
        rows = stats.rows,
        skipped = stats.skipped,
        values = stats.values,
        nodes = tree.node_count(),
        "built model tree"
    );
    (tree, stats)
}

#[cfg(test)]
mod tests {
    use canopy_table::Row;
    use pretty_assertions::assert_eq;

    use super::*;

    fn titles(node: &TreeNode) -> Vec<String> {
        node.children.iter().map(|c| c.title().into_owned()).collect()
    }

    #[test]
    fn test_ensure_reuses_existing_node() {
        let mut builder = TreeBuilder::new("Root");
        let a = builder.ensure("1", "1 First");
        let b = builder.ensure("1", "1 Second");
        assert_eq!(a, b);
        let tree = builder.finish();
        assert_eq!(titles(&tree), vec!["1 First"]);
    }

    #[test]
    fn test_ensure_creates_missing_ancestors() {
        let mut builder = TreeBuilder::new("Root");
        builder.ensure("2.1.4", "2.1.4 Deep");
        builder.ensure("2", "2 Named later");
        builder.ensure("2", "2 Renamed");
        let tree = builder.finish();

        assert_eq!(titles(&tree), vec!["2 Named later"]);
        assert_eq!(titles(&tree.children[0]), vec!["2.1"]);
        assert_eq!(titles(&tree.children[0].children[0]), vec!["2.1.4 Deep"]);
    }

    #[test]
    fn test_values_attach_as_leaves() {
        let mut builder = TreeBuilder::new("Root");
        assert!(builder.push_row("1", "1 Lights", ""));
        assert!(builder.push_row("1.1", "1.1 Front", " 5 "));
        assert!(builder.push_row("1.1", "1.1 Front again", "7"));
        assert!(builder.push_row("1.2", "1.2 Rear", "nan"));
        let stats = builder.stats();
        let tree = builder.finish();

        assert_eq!(stats, BuildStats { rows: 4, skipped: 0, values: 2 });
        let lights = &tree.children[0];
        assert_eq!(titles(lights), vec!["1.1 Front", "1.2 Rear"]);
        // Each truthy row adds its own marker leaf; titles are not overwritten.
        assert_eq!(titles(&lights.children[0]), vec!["- 5", "- 7"]);
        assert!(lights.children[1].is_leaf());
    }

    #[test]
    fn test_unplaceable_rows_are_skipped() {
        let mut builder = TreeBuilder::new("Root");
        assert!(!builder.push_row("1", "Intro text", "x"));
        assert!(builder.push_row("2", "2 Body", ""));
        assert!(builder.push_row("3", "detail row", "y"));
        let stats = builder.stats();
        let tree = builder.finish();

        assert_eq!(stats.skipped, 1);
        assert_eq!(titles(&tree), vec!["2 Body"]);
        assert_eq!(titles(&tree.children[0]), vec!["detail row"]);
        assert_eq!(titles(&tree.children[0].children[0]), vec!["- y"]);
    }

    #[test]
    fn test_build_tree_per_model() {
        let table = Table::new(
            vec!["A".into(), "B".into()],
            vec![
                Row::new("1", "1 Lights", vec![String::new(), "b".into()]),
                Row::new("1.1", "1.1 Front", vec!["a".into(), String::new()]),
            ],
        );

        let (a, _) = build_tree(&table, 0, "Root");
        let (b, _) = build_tree(&table, 1, "Root");
        assert_eq!(titles(&a.children[0]), vec!["1.1 Front"]);
        assert_eq!(titles(&a.children[0].children[0]), vec!["- a"]);
        assert_eq!(titles(&b.children[0]), vec!["- b", "1.1 Front"]);
    }
}
