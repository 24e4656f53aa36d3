//! Hierarchy reconstruction for canopy.
//!
//! Turns the row stream of a dataset into one tree per model column:
//! - Row labels are parsed into dotted hierarchical keys
//! - Rows are placed under their key's parent; truthy model cells become value leaves
//! - Branches without any value leaf are pruned away
//! - The pruned tree is flattened into a path index for search

#![warn(missing_docs)]

mod build;
mod label;
mod node;
mod normalize;
mod paths;
mod prune;

use std::collections::BTreeMap;

pub use build::{BuildStats, TreeBuilder, build_tree};
use canopy_table::Table;
pub use label::{HierarchyParser, Placement, clean_row_id, split_number};
pub use node::{NodeKind, PreorderIter, TreeNode, VALUE_MARKER};
pub use normalize::{normalize, to_words};
pub use paths::PathIndex;
pub use prune::prune;
use tracing::debug;

/// Default title of the synthetic root node.
pub const DEFAULT_ROOT_TITLE: &str = "Root";

/// Options for building model trees.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Title of the synthetic root node. May be empty.
    pub root_title: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            root_title: DEFAULT_ROOT_TITLE.to_string(),
        }
    }
}

/// The pruned tree and path index of one model column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBuild {
    /// Pruned tree.
    pub tree: TreeNode,
    /// Path index over the pruned tree.
    pub index: PathIndex,
}

/// Builds the pruned tree and path index for a single model column.
///
/// Returns `None` if the table has no such model column.
pub fn build_model(table: &Table, model: &str, options: &BuildOptions) -> Option<ModelBuild> {
    let idx = table.model_index(model)?;
    let (full, _) = build_tree(table, idx, &options.root_title);
    let tree = prune(full);
    let index = PathIndex::from_tree(&tree);
    debug!(
        model,
        nodes = tree.node_count(),
        paths = index.len(),
        "pruned and indexed model tree"
    );
    Some(ModelBuild { tree, index })
}

/// Builds every model column of a table.
///
/// Each model is built independently from the same rows.
pub fn build_models(table: &Table, options: &BuildOptions) -> BTreeMap<String, ModelBuild> {
    table
        .models()
        .iter()
        .filter_map(|model| build_model(table, model, options).map(|b| (model.clone(), b)))
        .collect()
}
