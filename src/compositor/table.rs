//! Box-drawn tables.

use crate::markdown::Table;
use crate::style::{Color, Span, Style};

use super::content::run_spans;
use super::layout::{line_width, push_span, spaces, Line};

const BORDER: Style = Style::new().fg(Color::WHITE);
const HEADER: Style = Style::new().bold();

struct Edges {
    left: char,
    join: char,
    right: char,
}

const TOP: Edges = Edges {
    left: '┌',
    join: '┬',
    right: '┐',
};
const MIDDLE: Edges = Edges {
    left: '├',
    join: '┼',
    right: '┤',
};
const BOTTOM: Edges = Edges {
    left: '└',
    join: '┴',
    right: '┘',
};

/// Rows of a table indented by `indent` columns.
///
/// Each column is as wide as its widest cell across header and body, plus one
/// space on each side. Rows are not wrapped; the caller wraps them to the
/// viewport.
pub fn render_table(table: &Table, indent: usize) -> Vec<Line> {
    let columns = table.columns();
    if columns == 0 {
        return Vec::new();
    }

    let header: Vec<Vec<Span>> = table
        .header
        .iter()
        .map(|cell| run_spans(cell, HEADER))
        .collect();
    let body: Vec<Vec<Vec<Span>>> = (0..table.rows.len())
        .map(|r| {
            (0..columns)
                .map(|c| run_spans(table.cell(r, c), Style::default()))
                .collect()
        })
        .collect();

    let mut widths = vec![0; columns];
    for row in std::iter::once(&header).chain(body.iter()) {
        for (c, cell) in row.iter().enumerate().take(columns) {
            widths[c] = widths[c].max(line_width(cell));
        }
    }

    let mut rows = Vec::with_capacity(body.len() + 4);
    rows.push(border(&TOP, &widths, indent));
    rows.push(cells_row(&header, &widths, indent));
    rows.push(border(&MIDDLE, &widths, indent));
    for row in &body {
        rows.push(cells_row(row, &widths, indent));
    }
    rows.push(border(&BOTTOM, &widths, indent));
    rows
}

fn border(edges: &Edges, widths: &[usize], indent: usize) -> Line {
    let mut text = String::new();
    text.push(edges.left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            text.push(edges.join);
        }
        text.push_str(&"─".repeat(w + 2));
    }
    text.push(edges.right);
    vec![spaces(indent), Span::styled(text, BORDER)]
}

fn cells_row(cells: &[Vec<Span>], widths: &[usize], indent: usize) -> Line {
    let mut line = vec![spaces(indent)];
    push_span(&mut line, "│", BORDER);
    for (c, width) in widths.iter().enumerate() {
        let cell = cells.get(c).map(Vec::as_slice).unwrap_or(&[]);
        let pad = width - line_width(cell);
        push_span(&mut line, " ", Style::default());
        for span in cell {
            push_span(&mut line, &span.text, span.style);
        }
        push_span(&mut line, &" ".repeat(pad + 1), Style::default());
        push_span(&mut line, "│", BORDER);
    }
    line
}
