//! Path index over a pruned tree.
//!
//! Every node contributes one entry: the titles from the root down to the node, in
//! original and normalized form. Entries follow pre-order.

use serde::Serialize;

use crate::{node::TreeNode, normalize::normalize};

/// Root-to-node title paths of one model tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathIndex {
    /// Original titles, root first.
    paths: Vec<Vec<String>>,
    /// Normalized titles, same shape as `paths`.
    npaths: Vec<Vec<String>>,
}

impl PathIndex {
    /// Indexes every node of a tree in pre-order.
    ///
    /// A node with an empty title (after trimming) reuses its parent's path.
    pub fn from_tree(tree: &TreeNode) -> Self {
        let mut paths = Vec::with_capacity(tree.node_count());
        collect(tree, &[], &mut paths);
        let npaths = paths
            .iter()
            .map(|parts| parts.iter().map(|p| normalize(p)).collect())
            .collect();
        Self { paths, npaths }
    }

    /// Returns the original-title paths.
    pub fn paths(&self) -> &[Vec<String>] {
        &self.paths
    }

    /// Returns the normalized paths.
    pub fn npaths(&self) -> &[Vec<String>] {
        &self.npaths
    }

    /// Iterates `(path, normalized_path)` pairs in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (&[String], &[String])> {
        self.paths
            .iter()
            .zip(&self.npaths)
            .map(|(p, n)| (p.as_slice(), n.as_slice()))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Appends the path of `node`, then those of its descendants.
fn collect(node: &TreeNode, acc: &[String], out: &mut Vec<Vec<String>>) {
    let title = node.title();
    let title = title.trim();
    let mut path = acc.to_vec();
    if !title.is_empty() {
        path.push(title.to_string());
    }
    out.push(path.clone());
    for child in &node.children {
        collect(child, &path, out);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn lights() -> TreeNode {
        TreeNode::structural("Root").with_child(
            TreeNode::structural("3 Lights").with_child(
                TreeNode::structural("3.3 Front").with_child(
                    TreeNode::structural("3.3.2 Left indicator").with_child(TreeNode::value("x")),
                ),
            ),
        )
    }

    #[test]
    fn test_paths_in_preorder() {
        let index = PathIndex::from_tree(&lights());
        assert_eq!(index.len(), 5);
        assert_eq!(index.paths()[0], vec!["Root"]);
        assert_eq!(
            index.paths()[4],
            vec!["Root", "3 Lights", "3.3 Front", "3.3.2 Left indicator", "- x"]
        );
        assert_eq!(
            index.npaths()[4],
            vec!["root", "3 lights", "3.3 front", "3.3.2 left indicator", "x"]
        );
    }

    #[test]
    fn test_empty_root_title_reuses_accumulator() {
        let tree = TreeNode::structural("").with_child(TreeNode::structural("1 A").with_child(TreeNode::value("v")));
        let index = PathIndex::from_tree(&tree);
        let paths: Vec<&[String]> = index.iter().map(|(p, _)| p).collect();
        assert_eq!(paths[0], &[] as &[String]);
        assert_eq!(paths[1], ["1 A"]);
        assert_eq!(paths[2], ["1 A", "- v"]);
    }

    #[test]
    fn test_sibling_paths_do_not_leak() {
        let tree = TreeNode::structural("Root")
            .with_child(TreeNode::structural("1 A").with_child(TreeNode::value("a")))
            .with_child(TreeNode::structural("2 B").with_child(TreeNode::value("b")));
        let index = PathIndex::from_tree(&tree);
        assert_eq!(index.paths()[3], vec!["Root", "2 B"]);
        assert_eq!(index.paths()[4], vec!["Root", "2 B", "- b"]);
    }

    /// Generates arbitrary trees of bounded depth and fan-out.
    fn arb_tree() -> impl Strategy<Value = TreeNode> {
        let leaf = "[a-c ]{0,3}".prop_map(TreeNode::value);
        leaf.prop_recursive(4, 32, 4, |inner| {
            ("[a-c ]{0,3}", prop::collection::vec(inner, 0..4)).prop_map(|(title, children)| {
                TreeNode {
                    kind: crate::node::NodeKind::Structural(title),
                    children,
                }
            })
        })
    }

    /// Walks the tree alongside the index, checking each child extends its parent path.
    fn check_extensions(node: &TreeNode, index: &PathIndex, pos: &mut usize) -> Result<(), TestCaseError> {
        let own = *pos;
        *pos += 1;
        for child in &node.children {
            let child_pos = *pos;
            let parent = &index.paths()[own];
            let path = &index.paths()[child_pos];
            prop_assert!(path.len() >= parent.len());
            prop_assert!(path.len() <= parent.len() + 1);
            prop_assert_eq!(&path[..parent.len()], parent.as_slice());
            check_extensions(child, index, pos)?;
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn one_entry_per_node(tree in arb_tree()) {
            let index = PathIndex::from_tree(&tree);
            prop_assert_eq!(index.len(), tree.node_count());
            prop_assert_eq!(index.paths().len(), index.npaths().len());
            for (p, n) in index.iter() {
                prop_assert_eq!(p.len(), n.len());
            }
            let mut pos = 0;
            check_extensions(&tree, &index, &mut pos)?;
        }
    }
}
