//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

pub use canopy_highlight::{dim, header, subheader, success, warning};
use canopy_highlight::{tree_prefix, value};
use canopy_search::ModelHit;
use canopy_tree::TreeNode;
use canopy_treemap::{Measure, Treemap};
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Renders a tree with box-drawing connectors, one node per line.
///
/// The root is printed as a header; value leaves are highlighted.
pub fn render_tree(tree: &TreeNode) -> String {
    let mut out = header(&tree.title());
    out.push('\n');
    let mut ancestors = Vec::new();
    render_children(tree, &mut ancestors, &mut out);
    out
}

/// Appends the children of `node`, tracking which ancestors were last siblings.
fn render_children(node: &TreeNode, ancestors: &mut Vec<bool>, out: &mut String) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;
        let title = child.title();
        let styled = if child.is_value() {
            value(&title)
        } else {
            title.into_owned()
        };
        out.push_str(&dim(&tree_prefix(ancestors, is_last)));
        out.push_str(&styled);
        out.push('\n');

        ancestors.push(is_last);
        render_children(child, ancestors, out);
        ancestors.pop();
    }
}

/// Prints search hits, one path per line, grouped under their model.
pub fn print_hits(hits: &[ModelHit]) {
    if hits.is_empty() {
        println!("{}", dim("No results found."));
        return;
    }

    let mut current: Option<&str> = None;
    for hit in hits {
        if current != Some(hit.model.as_str()) {
            if current.is_some() {
                println!();
            }
            println!("{}", header(&hit.model));
            current = Some(hit.model.as_str());
        }
        println!("   {}", hit.path_label);
    }
}

/// Formats a treemap value, dropping the fraction for whole numbers.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

/// Describes what treemap values measure.
pub const fn measure_name(measure: Measure) -> &'static str {
    match measure {
        Measure::Value => "value sums",
        Measure::Count => "leaf counts (no values found)",
    }
}

/// Builds a table of treemap rows: ID, label, parent, value.
pub fn treemap_table(map: &Treemap) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["ID", "Label", "Parent", "Value"]);
    for (label, parent, v, id) in map.rows() {
        table.add_row(vec![
            Cell::new(id),
            Cell::new(label),
            Cell::new(parent),
            Cell::new(format_value(v)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Prints a titled treemap table followed by its measure.
pub fn print_treemap(title: &str, map: &Treemap) {
    println!("{}", subheader(title));
    println!("{}", treemap_table(map));
    println!(
        "{}",
        dim(&format!(
            "{} entries, total {}, {}",
            map.len(),
            format_value(map.root_value()),
            measure_name(map.measure)
        ))
    );
}
