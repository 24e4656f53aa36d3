//! Treemap aggregation for canopy.
//!
//! Works on raw table IDs, independent of the pruned model trees. For one model
//! column it derives a base value per ID, optionally restricts the IDs to the
//! subtree under an anchor label path, rolls the values up bottom-up, and lays
//! the result out as parallel `labels`/`parents`/`values`/`ids` arrays with a
//! synthetic root at index 0.
//!
//! # Fallbacks
//!
//! - A parent whose children sum to exactly zero keeps its own base value.
//! - When the whole scope sums to zero, every scoped leaf counts as one.
//! - An anchor path that matches nothing selects the whole table.

#![warn(missing_docs)]

mod error;
mod rollup;
mod scope;
mod value;

use std::collections::HashMap;

use canopy_table::{IdMaps, Table};
pub use error::TreemapError;
pub use rollup::{Measure, Rollup, rollup, top_ids};
pub use scope::{Scope, resolve_anchor, subtree_ids};
use serde::Serialize;
use tracing::debug;
pub use value::{base_value, base_values};

/// Suffix of the synthetic root ID, appended to the model name.
pub const ROOT_ID_SUFFIX: &str = "__root";

/// Parallel treemap arrays. Index 0 is the synthetic root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Treemap {
    /// Display label per entry.
    pub labels: Vec<String>,
    /// Parent ID per entry; empty for the root.
    pub parents: Vec<String>,
    /// Rollup total per entry.
    pub values: Vec<f64>,
    /// ID per entry.
    pub ids: Vec<String>,
    /// Whether totals are value sums or leaf counts.
    #[serde(skip)]
    pub measure: Measure,
}

impl Treemap {
    /// Returns the number of entries, root included.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if there are no entries. Never true for a built treemap.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the root total.
    pub fn root_value(&self) -> f64 {
        self.values.first().copied().unwrap_or(0.0)
    }

    /// Iterates `(label, parent, value, id)` rows in order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str, f64, &str)> {
        self.labels
            .iter()
            .zip(&self.parents)
            .zip(&self.values)
            .zip(&self.ids)
            .map(|(((l, p), v), i)| (l.as_str(), p.as_str(), *v, i.as_str()))
    }
}

/// Builds treemap arrays from base values keyed by ID.
///
/// `path_parts` optionally names an anchor by its label path from the top level.
/// IDs missing from `base` count as zero.
pub fn aggregate<S: AsRef<str>>(
    model: &str,
    maps: &IdMaps,
    base: &HashMap<String, f64>,
    path_parts: &[S],
) -> Treemap {
    let scope = Scope::new(maps, path_parts);
    let totals = rollup(maps, &scope, base);
    let root_id = format!("{model}{ROOT_ID_SUFFIX}");

    let mut map = Treemap {
        labels: Vec::with_capacity(scope.ids.len() + 1),
        parents: Vec::with_capacity(scope.ids.len() + 1),
        values: Vec::with_capacity(scope.ids.len() + 1),
        ids: Vec::with_capacity(scope.ids.len() + 1),
        measure: totals.measure,
    };
    map.labels.push(model.to_string());
    map.parents.push(String::new());
    map.values.push(totals.root_value);
    map.ids.push(root_id.clone());

    for &id in &scope.ids {
        let parent = maps
            .parent(id)
            .filter(|p| scope.contains(p))
            .unwrap_or(root_id.as_str());
        map.labels.push(maps.label(id).unwrap_or(id).to_string());
        map.parents.push(parent.to_string());
        map.values.push(totals.total(id));
        map.ids.push(id.to_string());
    }

    debug!(
        model,
        anchor = ?scope.anchor,
        entries = map.len(),
        root = map.root_value(),
        measure = ?map.measure,
        "built treemap"
    );
    map
}

/// Builds the treemap of one model column of a table.
///
/// Fails with [`TreemapError::UnknownModel`] if the table has no such column.
pub fn treemap_for_model<S: AsRef<str>>(
    table: &Table,
    maps: &IdMaps,
    model: &str,
    path_parts: &[S],
) -> Result<Treemap, TreemapError> {
    let idx = table
        .model_index(model)
        .ok_or_else(|| TreemapError::UnknownModel {
            model: model.to_string(),
        })?;
    let base = base_values(table, idx);
    Ok(aggregate(model, maps, &base, path_parts))
}

/// Treemaps of two models over the same scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Treemap of the first model.
    pub a: Treemap,
    /// Treemap of the second model.
    pub b: Treemap,
}

/// Builds the treemaps of two models, optionally restricted to one top-level
/// section identified by its label.
pub fn compare(
    table: &Table,
    maps: &IdMaps,
    model_a: &str,
    model_b: &str,
    section: Option<&str>,
) -> Result<Comparison, TreemapError> {
    let parts: Vec<&str> = section.into_iter().collect();
    Ok(Comparison {
        a: treemap_for_model(table, maps, model_a, &parts)?,
        b: treemap_for_model(table, maps, model_b, &parts)?,
    })
}
