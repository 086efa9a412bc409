//! Table rendering for stats rows.

use comfy_table::{presets::UTF8_FULL, Table};
use std::io::{self, Write};
use substat_stats::StatsRow;

/// Blank the first cell of every row that repeats the previous row's first
/// cell, so runs of the same node ID read as one merged cell.
pub fn merge_first_column(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut previous: Option<String> = None;
    rows.into_iter()
        .map(|mut row| {
            if let Some(first) = row.first_mut() {
                if previous.as_deref() == Some(first.as_str()) {
                    first.clear();
                } else {
                    previous = Some(first.clone());
                }
            }
            row
        })
        .collect()
}

pub fn build_table<R: StatsRow>(rows: &[R]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(R::HEADER.to_vec());
    for row in merge_first_column(rows.iter().map(R::cells).collect()) {
        table.add_row(row);
    }
    table
}

/// Write an underlined heading.
pub fn write_heading(out: &mut impl Write, heading: &str) -> io::Result<()> {
    writeln!(out, "{heading}")?;
    writeln!(out, "{}", "=".repeat(heading.chars().count()))
}

pub fn write_table<R: StatsRow>(out: &mut impl Write, rows: &[R]) -> io::Result<()> {
    writeln!(out, "{}", build_table(rows))
}
