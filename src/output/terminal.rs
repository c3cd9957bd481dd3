//! Terminal output: the colored network table.

use super::NetworkRow;
use colored::Colorize;

const HEADERS: [&str; 8] = [
    "cidr",
    "family",
    "network",
    "broadcast",
    "netmask",
    "first",
    "last",
    "size",
];

fn cells(row: &NetworkRow) -> [&str; 8] {
    [
        row.cidr.as_str(),
        row.family.as_str(),
        row.network.as_str(),
        row.broadcast.as_str(),
        row.netmask.as_str(),
        row.first.as_str(),
        row.last.as_str(),
        row.size.as_str(),
    ]
}

/// Render rows as a left-aligned table with a bold header.
///
/// Column widths follow the longest cell. The CIDR column is colored per
/// family, so call `colored::control::set_override(false)` for plain text.
pub fn to_table(rows: &[NetworkRow]) -> String {
    let mut widths = HEADERS.map(str::len);
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(cells(row)) {
            *w = (*w).max(cell.len());
        }
    }

    let pad = |text: &str, width: usize| format!("{text:<width$}");
    let mut out = String::new();

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(*h, w).bold().to_string())
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    for row in rows {
        let line: Vec<String> = cells(row)
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                let text = pad(*cell, w);
                match (i, row.family.as_str()) {
                    (0, "IPv4") => text.green().to_string(),
                    (0, _) => text.cyan().to_string(),
                    _ => text,
                }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}
