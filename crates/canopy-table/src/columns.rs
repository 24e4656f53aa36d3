//! Header normalization.
//!
//! Column names are matched case-insensitively against configurable alias lists so
//! that tables exported with `Nummer`/`Titel` headers load the same as `ID`/`Label`.
//! Every remaining column is a model column.

use tracing::debug;

use crate::{Row, Table, TableError};

/// Canonical name of the identifier column.
pub const ID_COLUMN: &str = "ID";

/// Canonical name of the label column.
pub const LABEL_COLUMN: &str = "Label";

/// Header aliases recognized for the identifier and label columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAliases {
    /// Lowercase names that map to `ID`.
    pub id: Vec<String>,
    /// Lowercase names that map to `Label`.
    pub label: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            id: vec!["id".into(), "nummer".into(), "no".into()],
            label: vec!["label".into(), "name".into(), "titel".into(), "title".into()],
        }
    }
}

/// The role a source column plays after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ColumnRole {
    /// The identifier column.
    Id,
    /// The label column.
    Label,
    /// A model value column with its trimmed name.
    Model(String),
    /// A repeated `ID`/`Label` alias; ignored.
    Ignored,
}

impl ColumnAliases {
    /// Classifies a raw header name.
    fn role(&self, raw: &str) -> Option<ColumnRole> {
        let name = raw.trim();
        let lower = name.to_lowercase();
        if lower == ID_COLUMN.to_lowercase() || self.id.iter().any(|a| a.to_lowercase() == lower) {
            Some(ColumnRole::Id)
        } else if lower == LABEL_COLUMN.to_lowercase()
            || self.label.iter().any(|a| a.to_lowercase() == lower)
        {
            Some(ColumnRole::Label)
        } else if name.is_empty() {
            None
        } else {
            Some(ColumnRole::Model(name.to_string()))
        }
    }
}

/// Builds a [`Table`] from a header and raw records.
///
/// The first column resolving to `ID` (and `Label`) wins; later aliases of the same role
/// are dropped. Columns with a blank header are dropped. `ID` and `Label` cells are
/// trimmed, model cells are kept verbatim.
pub(crate) fn table_from_records(
    header: &[String],
    records: Vec<Vec<String>>,
    aliases: &ColumnAliases,
) -> Result<Table, TableError> {
    let mut id_col = None;
    let mut label_col = None;
    let mut model_cols: Vec<(usize, String)> = Vec::new();

    for (idx, raw) in header.iter().enumerate() {
        let role = match aliases.role(raw) {
            Some(ColumnRole::Id) if id_col.is_some() => ColumnRole::Ignored,
            Some(ColumnRole::Label) if label_col.is_some() => ColumnRole::Ignored,
            Some(role) => role,
            None => ColumnRole::Ignored,
        };
        match role {
            ColumnRole::Id => id_col = Some(idx),
            ColumnRole::Label => label_col = Some(idx),
            ColumnRole::Model(name) => {
                if !model_cols.iter().any(|(_, m)| *m == name) {
                    model_cols.push((idx, name));
                }
            }
            ColumnRole::Ignored => debug!(column = %raw, "ignoring column"),
        }
    }

    let id_col = id_col.ok_or(TableError::MissingColumn { column: ID_COLUMN })?;
    let label_col = label_col.ok_or(TableError::MissingColumn {
        column: LABEL_COLUMN,
    })?;
    if model_cols.is_empty() {
        return Err(TableError::NoModelColumns);
    }

    let cell = |record: &[String], idx: usize| record.get(idx).cloned().unwrap_or_default();
    let rows = records
        .iter()
        .map(|record| Row {
            id: cell(record, id_col).trim().to_string(),
            label: cell(record, label_col).trim().to_string(),
            values: model_cols
                .iter()
                .map(|(idx, _)| cell(record, *idx))
                .collect(),
        })
        .collect();

    let models = model_cols.into_iter().map(|(_, name)| name).collect();
    Ok(Table::new(models, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn record(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_aliases_are_case_insensitive() {
        let table = table_from_records(
            &header(&[" Nummer ", "TITEL", "Model A"]),
            vec![record(&[" 1 ", " 1 Lights ", " x "])],
            &ColumnAliases::default(),
        )
        .unwrap();

        assert_eq!(table.models(), ["Model A"]);
        let row = &table.rows()[0];
        assert_eq!(row.id, "1");
        assert_eq!(row.label, "1 Lights");
        assert_eq!(row.value(0), " x ");
    }

    #[test]
    fn test_model_columns_keep_file_order() {
        let table = table_from_records(
            &header(&["Zeta", "ID", "Alpha", "Label", "Mid"]),
            vec![record(&["z", "1", "a", "1 A", "m"])],
            &ColumnAliases::default(),
        )
        .unwrap();
        assert_eq!(table.models(), ["Zeta", "Alpha", "Mid"]);
        assert_eq!(table.rows()[0].values, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_missing_label_column() {
        let err = table_from_records(
            &header(&["ID", "Model"]),
            vec![],
            &ColumnAliases::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TableError::MissingColumn { column: "Label" }));
    }

    #[test]
    fn test_no_model_columns() {
        let err = table_from_records(
            &header(&["ID", "Label"]),
            vec![],
            &ColumnAliases::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TableError::NoModelColumns));
    }

    #[test]
    fn test_duplicate_alias_is_dropped() {
        let table = table_from_records(
            &header(&["ID", "No", "Label", "M"]),
            vec![record(&["1", "99", "1 A", "v"])],
            &ColumnAliases::default(),
        )
        .unwrap();
        assert_eq!(table.models(), ["M"]);
        assert_eq!(table.rows()[0].id, "1");
    }

    #[test]
    fn test_custom_aliases() {
        let aliases = ColumnAliases {
            id: vec!["key".into()],
            label: vec!["caption".into()],
        };
        let table = table_from_records(
            &header(&["Key", "Caption", "M"]),
            vec![record(&["2", "2 B", ""])],
            &aliases,
        )
        .unwrap();
        assert_eq!(table.rows()[0].label, "2 B");
    }

    #[test]
    fn test_short_records_pad_with_empty_cells() {
        let table = table_from_records(
            &header(&["ID", "Label", "M1", "M2"]),
            vec![record(&["1", "1 A"])],
            &ColumnAliases::default(),
        )
        .unwrap();
        assert_eq!(table.rows()[0].values, vec!["", ""]);
    }
}
