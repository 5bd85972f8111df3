//! Width-aware helpers for building rows of styled spans.

use crate::style::{char_width, truncate_to_width, Span, Style};

/// One output row.
pub type Line = Vec<Span>;

/// Display width of a row.
pub fn line_width(line: &[Span]) -> usize {
    line.iter().map(Span::width).sum()
}

/// `n` unstyled spaces.
pub fn spaces(n: usize) -> Span {
    Span::raw(" ".repeat(n))
}

/// Append `text`, merging into the last span when the style matches.
pub fn push_span(line: &mut Line, text: &str, style: Style) {
    if text.is_empty() {
        return;
    }
    match line.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => line.push(Span::styled(text, style)),
    }
}

/// Cut a row down to `width` columns.
pub fn clip_line(line: Line, width: usize) -> Line {
    let mut out = Vec::with_capacity(line.len());
    let mut used = 0;
    for span in line {
        let room = width.saturating_sub(used);
        if room == 0 {
            break;
        }
        let w = span.width();
        if w <= room {
            used += w;
            out.push(span);
        } else {
            let cut = truncate_to_width(&span.text, room);
            if !cut.is_empty() {
                out.push(Span::styled(cut, span.style));
            }
            break;
        }
    }
    out
}

/// Hard-wrap `body` to `width` columns.
///
/// The first row starts with `first`, continuation rows with `rest`. Breaks
/// happen mid-word at the column limit, and a wide character that would
/// straddle the limit moves to the next row. A `rest` prefix that leaves no
/// room for text is dropped, and a `first` prefix that fills the row is left
/// on a row of its own.
pub fn wrap(first: &[Span], rest: &[Span], body: &[Span], width: usize) -> Vec<Line> {
    let rest: &[Span] = if line_width(rest) < width { rest } else { &[] };
    let rest_width = line_width(rest);

    let mut rows = Vec::new();
    let mut current: Line = first.to_vec();
    let mut used = line_width(first);
    let mut has_body = false;

    for span in body {
        let mut chunk = String::new();
        for c in span.text.chars() {
            let w = char_width(c);
            if used + w > width && (has_body || used > rest_width) {
                push_span(&mut current, &chunk, span.style);
                chunk.clear();
                rows.push(std::mem::replace(&mut current, rest.to_vec()));
                used = rest_width;
                has_body = false;
            }
            if used + w > width {
                // does not fit even on a fresh row
                continue;
            }
            chunk.push(c);
            used += w;
            has_body = true;
        }
        push_span(&mut current, &chunk, span.style);
    }
    rows.push(current);

    rows.into_iter().map(|row| clip_line(row, width)).collect()
}

/// Pad a row on the left so it sits centered in `width` columns.
///
/// Odd leftover columns go on the left. Rows wider than `width` are clipped.
pub fn center_line(line: Line, width: usize) -> Line {
    let w = line_width(&line);
    if w >= width {
        return clip_line(line, width);
    }
    let left = (width - w + 1) / 2;
    let mut out = Vec::with_capacity(line.len() + 1);
    out.push(spaces(left));
    out.extend(line);
    out
}

/// Unstyled text of a row.
pub fn plain_text(line: &[Span]) -> String {
    line.iter().map(|s| s.text.as_str()).collect()
}
