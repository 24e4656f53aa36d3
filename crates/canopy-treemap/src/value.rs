//! Base value derivation from raw model cells.

use std::collections::HashMap;

use canopy_table::{Table, is_blank_cell};

/// Interprets a raw model cell as a base value.
///
/// Numbers are used as-is, except that a parsed NaN counts as `0.0`. Any other
/// content marks presence and counts as `1.0`. Empty and `nan` cells count as
/// `0.0`. Never fails.
pub fn base_value(cell: &str) -> f64 {
    let trimmed = cell.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_nan() => 0.0,
        Ok(v) => v,
        Err(_) if is_blank_cell(trimmed) => 0.0,
        Err(_) => 1.0,
    }
}

/// Returns the base value of every addressable ID for one model column.
///
/// A duplicated ID takes the value of its last row, matching the label map.
pub fn base_values(table: &Table, model_idx: usize) -> HashMap<String, f64> {
    table
        .rows()
        .iter()
        .filter(|row| !is_blank_cell(&row.id))
        .map(|row| (row.id.clone(), base_value(row.value(model_idx))))
        .collect()
}
