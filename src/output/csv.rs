//! CSV output formatting for network rows.

use super::NetworkRow;
use itertools::Itertools;

const CSV_HEADER: [&str; 8] = [
    "cidr",
    "family",
    "network",
    "broadcast",
    "netmask",
    "first",
    "last",
    "size",
];

/// Render rows as CSV, header first, every field quoted.
///
/// Fields are joined without spaces after the comma; spreadsheet imports
/// treat a leading space as part of the value.
pub fn to_csv(rows: &[NetworkRow]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADER.iter().map(|h| quote_field(h)).join(","));
    out.push('\n');
    for row in rows {
        out.push_str(&csv_row(row));
        out.push('\n');
    }
    out
}

/// A single CSV row.
fn csv_row(row: &NetworkRow) -> String {
    [
        &row.cidr,
        &row.family,
        &row.network,
        &row.broadcast,
        &row.netmask,
        &row.first,
        &row.last,
        &row.size,
    ]
    .iter()
    .map(|field| quote_field(field))
    .join(",")
}

/// Wraps a field in double quotes, doubling any quote inside it.
fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
