//! Plain-text rendering of a table page for terminal output.

use unicode_width::UnicodeWidthStr;

use crate::records::{Level, Thresholds, classify};
use crate::table::{Cell, SortDirection, TableColumn, TableQueryState, TableView, Tabular};

const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Color count cells by level (ANSI). None renders plain text.
    pub highlight: Option<Thresholds>,
}

fn header_label<C: TableColumn>(column: C, query: &TableQueryState<C>) -> String {
    match (query.sort_column(), query.sort_direction()) {
        (Some(active), SortDirection::Ascending) if active == column => {
            format!("{} ▲", column.header())
        }
        (Some(active), SortDirection::Descending) if active == column => {
            format!("{} ▼", column.header())
        }
        _ => column.header().to_string(),
    }
}

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Low => "\x1b[31m",
        Level::Medium => "\x1b[33m",
        Level::High => "\x1b[32m",
    }
}

fn push_padded(out: &mut String, plain: &str, styled: &str, width: usize, right: bool) {
    let fill = " ".repeat(width.saturating_sub(plain.width()));
    if right {
        out.push_str(&fill);
        out.push_str(styled);
    } else {
        out.push_str(styled);
        out.push_str(&fill);
    }
}

/// Header, separator, one line per visible row, then a page footer.
/// Text columns are left-aligned, numeric columns right-aligned.
pub fn render_table<R: Tabular>(
    view: &TableView<'_, R>,
    query: &TableQueryState<R::Column>,
    options: &RenderOptions,
) -> String {
    let headers: Vec<String> = R::COLUMNS
        .iter()
        .map(|column| header_label(*column, query))
        .collect();
    let rows: Vec<Vec<Cell<'_>>> = view
        .rows
        .iter()
        .map(|record| R::COLUMNS.iter().map(|column| record.cell(*column)).collect())
        .collect();
    let texts: Vec<Vec<String>> = rows
        .iter()
        .map(|cells| cells.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let numeric: Vec<bool> = (0..headers.len())
        .map(|i| rows.iter().any(|cells| !matches!(cells[i], Cell::Text(_))))
        .collect();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            texts
                .iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let mut line = String::new();

    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        push_padded(&mut line, header, header, widths[i], numeric[i]);
    }
    out.push_str(line.trim_end());
    out.push('\n');

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&separator.join(COLUMN_GAP));
    out.push('\n');

    if rows.is_empty() {
        out.push_str("(no rows)\n");
    }

    for (cells, row_texts) in rows.iter().zip(&texts) {
        line.clear();
        for (i, (cell, text)) in cells.iter().zip(row_texts).enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            let styled = match (options.highlight, cell.as_count()) {
                (Some(thresholds), Some(count)) => format!(
                    "{}{}\x1b[0m",
                    level_color(classify(count, &thresholds)),
                    text
                ),
                _ => text.clone(),
            };
            push_padded(&mut line, text, &styled, widths[i], numeric[i]);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!(
        "page {}/{} ({} rows)",
        view.current_page, view.total_pages, view.filtered_count
    ));
    if view.has_prev() {
        out.push_str("  < prev");
    }
    if view.has_next() {
        out.push_str("  next >");
    }
    out.push('\n');
    out
}
