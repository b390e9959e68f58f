//! Plain-text layout of a [`TableView`] for terminal output.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use super::column::Alignment;
use super::config::TableConfig;
use super::pagination::PageItem;
use super::sort::SortIndicator;
use super::view::{Body, PaginationBar, TableView};
use crate::table::format::Labels;

const GAP: &str = "  ";
const INDENT: usize = 2;
const CHECKBOX_WIDTH: usize = 3;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Cut `s` to `max_width` display columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

/// Pad (or cut) `s` to exactly `width` display columns.
pub fn align_to_width(s: &str, width: usize, align: Alignment) -> String {
    let text = truncate_to_width(s, width);
    let slack = width.saturating_sub(display_width(&text));
    let (left, right) = match align {
        Alignment::Left => (0, slack),
        Alignment::Right => (slack, 0),
        Alignment::Center => (slack / 2, slack - slack / 2),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn header_text(title: &str, indicator: SortIndicator) -> String {
    // Neutral indicators only appear on hover, which a terminal cannot show.
    match indicator {
        SortIndicator::Active(_) => match indicator.symbol() {
            Some(symbol) => format!("{} {}", title, symbol),
            None => title.to_string(),
        },
        SortIndicator::Neutral | SortIndicator::None => title.to_string(),
    }
}

/// Lay out a table as lines of text.
///
/// Columns without a fixed width fit their content, capped at
/// `config.max_column_width`. The first column is indented by row depth.
pub fn render_text<K>(view: &TableView<K>, config: &TableConfig, labels: &Labels) -> String {
    let headers: Vec<String> = view
        .headers
        .iter()
        .map(|h| header_text(&h.title, h.indicator))
        .collect();

    let widths: Vec<usize> = view
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| match header.width {
            Some(fixed) => usize::from(fixed),
            None => {
                let content = match &view.body {
                    Body::Rows(rows) => rows
                        .iter()
                        .map(|row| {
                            let indent = if i == 0 { row.depth * INDENT } else { 0 };
                            indent + row.cells.get(i).map_or(0, |c| display_width(c))
                        })
                        .max()
                        .unwrap_or(0),
                    _ => 0,
                };
                display_width(&headers[i])
                    .max(content)
                    .min(usize::from(config.max_column_width))
            }
        })
        .collect();

    let mut lead = Vec::new();
    if let Some(state) = view.select_all {
        lead.push(state.symbol().to_string());
    }
    let mut header_cells = lead;
    for (i, header) in view.headers.iter().enumerate() {
        header_cells.push(align_to_width(&headers[i], widths[i], header.align));
    }
    let header_line = header_cells.join(GAP);
    let total_width = display_width(&header_line).max(1);

    let mut out = String::new();
    let _ = writeln!(out, "{}", header_line.trim_end());
    let _ = writeln!(out, "{}", "─".repeat(total_width));

    match &view.body {
        Body::Loading { message } => {
            let line = align_to_width(message, total_width, Alignment::Center);
            let _ = writeln!(out, "{}", line.trim_end());
        }
        Body::Empty { icon, message } => {
            let text = format!("{} {}", icon.glyph(), message);
            let line = align_to_width(&text, total_width, Alignment::Center);
            let _ = writeln!(out, "{}", line.trim_end());
        }
        Body::Rows(rows) => {
            for row in rows {
                let mut cells = Vec::with_capacity(view.span());
                if let Some(check) = row.checkbox {
                    cells.push(check.symbol().to_string());
                } else if view.select_all.is_some() {
                    cells.push(" ".repeat(CHECKBOX_WIDTH));
                }
                for (i, header) in view.headers.iter().enumerate() {
                    let cell = row.cells.get(i).map(String::as_str).unwrap_or_default();
                    let text = if i == 0 && row.depth > 0 {
                        format!("{}{}", " ".repeat(row.depth * INDENT), cell)
                    } else {
                        cell.to_string()
                    };
                    cells.push(align_to_width(&text, widths[i], header.align));
                }
                let _ = writeln!(out, "{}", cells.join(GAP).trim_end());
            }
        }
    }

    if let Some(bar) = &view.pagination {
        let _ = writeln!(out, "{}", "─".repeat(total_width));
        let _ = writeln!(out, "{}", labels.showing(bar.from, bar.to, bar.total));
        let _ = writeln!(out, "{}", pagination_line(bar));
    }

    out
}

/// `‹ 1 … 8 9 [10] 11 12 … 20 ›`, with disabled arrows blanked.
pub fn pagination_line(bar: &PaginationBar) -> String {
    let mut parts = Vec::with_capacity(bar.pages.len() + 2);
    parts.push(if bar.previous.enabled { "‹" } else { " " }.to_string());
    for item in &bar.pages {
        parts.push(match item {
            PageItem::Page(n) if *n == bar.current_page => format!("[{}]", n),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        });
    }
    parts.push(if bar.next.enabled { "›" } else { " " }.to_string());
    parts.join(" ").trim_end().to_string()
}
