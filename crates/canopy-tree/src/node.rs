//! Hierarchy tree nodes.
//!
//! A model tree is made of structural nodes (the numbered headings and continuation
//! rows of the table) and value leaves that carry the model's cell text. The root is
//! a structural node with a configurable title.

use std::borrow::Cow;

use serde::{Serialize, Serializer, ser::SerializeStruct};

/// Display prefix that marks a value leaf in titles and paths.
pub const VALUE_MARKER: &str = "- ";

/// Distinguishes structural nodes from value leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A heading or continuation row, titled by its label.
    Structural(String),
    /// A model value attached to the structural node above it.
    Value(String),
}

/// A node in a model tree. Children keep first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// What the node represents.
    pub kind: NodeKind,
    /// Child nodes in table order.
    pub children: Vec<Self>,
}

impl TreeNode {
    /// Creates a structural node without children.
    pub fn structural(title: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Structural(title.into()),
            children: Vec::new(),
        }
    }

    /// Creates a value leaf.
    pub fn value(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Value(text.into()),
            children: Vec::new(),
        }
    }

    /// Adds a child and returns the node, for building trees by hand.
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the display title. Value leaves are prefixed with [`VALUE_MARKER`].
    pub fn title(&self) -> Cow<'_, str> {
        match &self.kind {
            NodeKind::Structural(title) => Cow::Borrowed(title),
            NodeKind::Value(text) => Cow::Owned(format!("{VALUE_MARKER}{text}")),
        }
    }

    /// Returns true for value leaves.
    pub fn is_value(&self) -> bool {
        matches!(self.kind, NodeKind::Value(_))
    }

    /// Returns an iterator over this node and all descendants in pre-order.
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        PreorderIter { stack: vec![self] }
    }

    /// Returns the total number of nodes in this subtree (including self).
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Returns the number of value leaves in this subtree.
    pub fn value_count(&self) -> usize {
        self.iter_preorder().filter(|n| n.is_value()).count()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Serializes as `{"name": ..., "children": [...]}`.
impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TreeNode", 2)?;
        state.serialize_field("name", &self.title())?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

/// Iterator for pre-order traversal of nodes.
pub struct PreorderIter<'a> {
    /// Stack of nodes to visit (rightmost children pushed first).
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
