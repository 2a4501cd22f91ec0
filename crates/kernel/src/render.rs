//! Plain-text and JSON renderings of query results.

use anyhow::{Context, Result};
use unicode_width::UnicodeWidthStr;

use crate::controls::SortIndicator;
use crate::gather::{NO_MATCH_MESSAGE, ProductView, QueryOutcome, SortKey, SortSpec};

/// Render rows as an aligned text table, or the no-match message when empty.
///
/// Columns are padded by terminal display width, so wide characters such as
/// emoji category icons stay aligned.
pub fn render_table(outcome: &QueryOutcome, sort: &SortSpec) -> String {
    if outcome.is_empty() {
        return format!("{NO_MATCH_MESSAGE}\n");
    }

    let header: Vec<String> = SortKey::ALL
        .iter()
        .map(|&key| header_cell(key, sort.indicator(key)))
        .collect();

    let rows: Vec<[String; 4]> = outcome.rows().iter().map(cells).collect();

    let mut widths = [0usize; 4];
    for (i, cell) in header.iter().enumerate() {
        widths[i] = cell.width();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, header.iter().map(String::as_str), &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

/// Render rows as a pretty-printed JSON array.
pub fn render_json(outcome: &QueryOutcome) -> Result<String> {
    serde_json::to_string_pretty(outcome.rows()).context("failed to serialize query rows")
}

fn header_cell(key: SortKey, indicator: SortIndicator) -> String {
    match indicator {
        SortIndicator::Unsorted => key.label().to_string(),
        SortIndicator::Ascending => format!("{} ^", key.label()),
        SortIndicator::Descending => format!("{} v", key.label()),
    }
}

fn cells(view: &ProductView) -> [String; 4] {
    [
        view.id.to_string(),
        view.name.clone(),
        view.category.label(),
        view.owner.name.clone(),
    ]
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| {
            let pad = width.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
