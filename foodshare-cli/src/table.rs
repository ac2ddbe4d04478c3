//! Plain-text table rendering for query results.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

const MAX_CELL_WIDTH: usize = 32;

/// Render rows under their column headers with aligned columns.
pub(crate) fn print_table(columns: &[String], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = columns
        .iter()
        .map(|c| c.len().min(MAX_CELL_WIDTH))
        .collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len().min(MAX_CELL_WIDTH));
            }
        }
    }

    let header = format_row(columns, &widths);
    log::info!("{}", header.if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in rows {
        log::info!("{}", format_row(row, &widths));
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", truncate_str(cell, MAX_CELL_WIDTH), width = *w))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else if max > 3 {
        format!("{}...", &s[..max - 3])
    } else {
        s[..max].to_string()
    }
}
