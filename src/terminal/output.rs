//! Writes composed frames to the terminal.

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

use super::CellPainter;
use crate::compositor::Frame;

/// Redraw the whole viewport with `frame`.
///
/// Everything is queued and flushed once, so the terminal sees one write per
/// transition.
pub fn draw_frame<W: Write>(
    out: &mut W,
    frame: &Frame,
    painter: &dyn CellPainter,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    for (y, line) in frame.to_ansi_lines(painter).iter().enumerate() {
        let y = u16::try_from(y).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, y), Print(line))?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::Frame;
    use crate::style::{Color, Span, Style};
    use crate::terminal::TrueColorPainter;

    #[test]
    fn test_draw_frame_writes_rows() {
        let frame = Frame::from_rows(
            10,
            2,
            vec![
                vec![Span::raw("hello")],
                vec![Span::styled("hi", Style::new().fg(Color::CYAN))],
            ],
        );
        let mut out = Vec::new();
        draw_frame(&mut out, &frame, &TrueColorPainter).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("\x1b[2J"));
        assert!(text.contains("\x1b[1;1Hhello"));
        assert!(text.contains("\x1b[2;1H\x1b[36mhi\x1b[0m"));
    }
}
