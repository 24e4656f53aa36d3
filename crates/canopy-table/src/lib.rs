//! Tabular dataset model for canopy.
//!
//! A dataset is a table whose rows carry a dotted hierarchical identifier (`ID`), a
//! human-readable `Label`, and one value column per model. This crate handles:
//! - Header normalization (`ID`/`Label` aliases, model column discovery)
//! - Loading CSV and JSON tables
//! - Hierarchical ID helpers and the parent/label/children maps derived from IDs

#![warn(missing_docs)]

mod columns;
mod error;
mod ids;
mod load;

pub use columns::{ColumnAliases, ID_COLUMN, LABEL_COLUMN};
pub use error::TableError;
pub use ids::{IdMaps, depth, parent_key};
pub use load::{LoadOptions, load_bytes, load_path, parse_csv, parse_json};

/// Returns true if a raw cell carries no usable content.
///
/// Empty (after trimming) and the literal `nan` in any casing are treated as absent.
pub fn is_blank_cell(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
}

/// One table row in original file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Hierarchical identifier (trimmed), e.g. `3.3.2`. May be empty for continuation rows.
    pub id: String,
    /// Human-readable label (trimmed).
    pub label: String,
    /// Raw model cells, aligned with [`Table::models`].
    pub values: Vec<String>,
}

impl Row {
    /// Creates a row from its parts.
    pub fn new(id: impl Into<String>, label: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            values,
        }
    }

    /// Returns the raw cell at `model_idx`, or an empty string if the row is short.
    pub fn value(&self, model_idx: usize) -> &str {
        self.values.get(model_idx).map_or("", String::as_str)
    }
}

/// An immutable, already-parsed dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Model column names in file order.
    models: Vec<String>,
    /// Rows in file order.
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table from model column names and rows.
    pub fn new(models: Vec<String>, rows: Vec<Row>) -> Self {
        Self { models, rows }
    }

    /// Returns the model column names in file order.
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Returns the rows in file order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the position of a model column, if present.
    pub fn model_index(&self, model: &str) -> Option<usize> {
        self.models.iter().position(|m| m == model)
    }

    /// Returns true if the table has a model column with this name.
    pub fn has_model(&self, model: &str) -> bool {
        self.model_index(model).is_some()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["Alpha".into(), "Beta".into()],
            vec![
                Row::new("1", "1 Lights", vec!["x".into(), String::new()]),
                Row::new("1.1", "1.1 Front", vec!["5".into()]),
            ],
        )
    }

    #[test]
    fn test_model_lookup() {
        let table = sample();
        assert_eq!(table.model_index("Beta"), Some(1));
        assert!(table.has_model("Alpha"));
        assert!(!table.has_model("ID"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_short_row_reads_empty() {
        let table = sample();
        let row = &table.rows()[1];
        assert_eq!(row.value(0), "5");
        assert_eq!(row.value(1), "");
    }

    #[test]
    fn test_blank_cells() {
        assert!(is_blank_cell(""));
        assert!(is_blank_cell("   "));
        assert!(is_blank_cell("nan"));
        assert!(is_blank_cell(" NaN "));
        assert!(!is_blank_cell("0"));
        assert!(!is_blank_cell("nano"));
    }
}
