//! Loading tables from CSV and JSON sources.

use std::{fs, path::Path};

use serde_json::Value;
use tracing::debug;

use crate::{ColumnAliases, Table, TableError, columns::table_from_records};

/// Options controlling how raw files are read.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Header aliases for the `ID` and `Label` columns.
    pub aliases: ColumnAliases,
    /// Forced CSV delimiter. When unset, `,` is tried first and `;` second.
    pub delimiter: Option<u8>,
}

/// Loads a table from a `.csv` or `.json` file.
pub fn load_path(path: &Path, options: &LoadOptions) -> Result<Table, TableError> {
    let bytes = fs::read(path).map_err(|source| TableError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    load_bytes(&bytes, path, options)
}

/// Parses table bytes, choosing the format from the file name's extension.
pub fn load_bytes(bytes: &[u8], file_name: &Path, options: &LoadOptions) -> Result<Table, TableError> {
    let extension = file_name
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("csv") => parse_csv(bytes, options),
        Some("json") => parse_json(bytes, options),
        _ => Err(TableError::UnsupportedFileType {
            path: file_name.to_path_buf(),
        }),
    }
}

/// Parses CSV bytes into a table.
///
/// Without a forced delimiter the input is read as comma-separated. If that fails and
/// the header line contains a `;`, the input is re-read as semicolon-separated.
pub fn parse_csv(bytes: &[u8], options: &LoadOptions) -> Result<Table, TableError> {
    if let Some(delimiter) = options.delimiter {
        return parse_csv_with(bytes, delimiter, &options.aliases);
    }

    match parse_csv_with(bytes, b',', &options.aliases) {
        Ok(table) => Ok(table),
        Err(err) if header_line(bytes).contains(&b';') => {
            debug!(error = %err, "comma-separated parse failed, retrying with ';'");
            parse_csv_with(bytes, b';', &options.aliases)
        }
        Err(err) => Err(err),
    }
}

/// Returns the bytes of the first line.
fn header_line(bytes: &[u8]) -> &[u8] {
    bytes.split(|b| *b == b'\n').next().unwrap_or_default()
}

/// Parses CSV with a fixed delimiter.
fn parse_csv_with(bytes: &[u8], delimiter: u8, aliases: &ColumnAliases) -> Result<Table, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(strip_bom(bytes));

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let records = reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect::<Vec<_>>()))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        delimiter = %char::from(delimiter),
        columns = header.len(),
        rows = records.len(),
        "parsed CSV"
    );
    table_from_records(&header, records, aliases)
}

/// Strips a UTF-8 byte order mark, as written by spreadsheet exports.
fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}

/// Parses a JSON array of flat records into a table.
///
/// Columns are taken in first-seen key order across all records. Strings are kept,
/// numbers and booleans are rendered as text, and `null` becomes an empty cell.
pub fn parse_json(bytes: &[u8], options: &LoadOptions) -> Result<Table, TableError> {
    let value: Value = serde_json::from_slice(strip_bom(bytes))?;
    let Value::Array(items) = value else {
        return Err(TableError::InvalidJsonShape(
            "expected an array of records".into(),
        ));
    };

    let mut header: Vec<String> = Vec::new();
    let mut objects = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        let Value::Object(map) = item else {
            return Err(TableError::InvalidJsonShape(format!(
                "record {idx} is not an object"
            )));
        };
        for key in map.keys() {
            if !header.contains(key) {
                header.push(key.clone());
            }
        }
        objects.push(map);
    }

    let records = objects
        .iter()
        .enumerate()
        .map(|(idx, map)| {
            header
                .iter()
                .map(|key| map.get(key).map_or(Ok(String::new()), |v| json_cell(v, idx, key)))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(columns = header.len(), rows = records.len(), "parsed JSON");
    table_from_records(&header, records, &options.aliases)
}

/// Renders a scalar JSON value as cell text.
fn json_cell(value: &Value, record: usize, key: &str) -> Result<String, TableError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(_) | Value::Object(_) => Err(TableError::InvalidJsonShape(format!(
            "record {record} field '{key}' is not a scalar"
        ))),
    }
}
