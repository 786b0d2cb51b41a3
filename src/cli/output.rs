/// Output formatting: bordered text tables and error lines.
use std::fmt::Display;
use std::io::Write;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, Table, TableComponent};

/// Render `rows` under `header` as an ASCII table, newline-terminated.
///
/// Every column is as wide as its widest cell plus one space of padding on
/// each side. A separator line follows the header and every row:
///
/// ```text
/// +---------+------+
/// | Name    | Type |
/// +---------+------+
/// | router1 | foo  |
/// +---------+------+
/// ```
///
/// Line breaks inside a cell are flattened to spaces so each record stays on
/// one line.
#[must_use]
pub fn render_table<R, C>(header: &[&str], rows: impl IntoIterator<Item = R>) -> String
where
    R: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    // ASCII_FULL draws the header rule with '=' and row rules with '|' ends.
    table.set_style(TableComponent::HeaderLines, '-');
    table.set_style(TableComponent::MiddleHeaderIntersections, '+');
    table.set_style(TableComponent::LeftBorderIntersections, '+');
    table.set_style(TableComponent::RightBorderIntersections, '+');

    table.set_header(header.iter().copied().map(single_line));
    for row in rows {
        table.add_row(row.into_iter().map(|c| single_line(c.as_ref())).collect::<Vec<_>>());
    }
    format!("{table}\n")
}

fn single_line(text: &str) -> Cell {
    Cell::new(text.replace("\r\n", " ").replace(['\r', '\n'], " "))
}

/// Write an error line to stderr.
pub fn write_error(err: &dyn Display) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
}
