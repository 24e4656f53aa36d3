//! Tree pruning.
//!
//! Removes structural nodes that have no value leaf anywhere beneath them. The root
//! always survives, even when it ends up without children.

use crate::node::{NodeKind, TreeNode};

/// Returns the minimal tree that keeps every branch leading to a value leaf.
///
/// Takes the tree by value: the input is consumed and a new tree is returned, so a
/// tree shared elsewhere is never modified. Pruning a pruned tree yields the same tree.
pub fn prune(tree: TreeNode) -> TreeNode {
    let TreeNode { kind, children } = tree;
    TreeNode {
        kind,
        children: children.into_iter().filter_map(prune_subtree).collect(),
    }
}

/// Prunes a non-root subtree, returning `None` if nothing in it is worth keeping.
fn prune_subtree(node: TreeNode) -> Option<TreeNode> {
    let TreeNode { kind, children } = node;
    let children: Vec<TreeNode> = children.into_iter().filter_map(prune_subtree).collect();
    let keep = !children.is_empty() || matches!(kind, NodeKind::Value(_));
    keep.then_some(TreeNode { kind, children })
}
