//! Unit tests for terminal output (color depth, painters, SGR encoding,
//! frame writing).
//!
//! These tests cover the pure output logic without requiring a real terminal.

use termslide::ascii::{ColorCell, CELL_GLYPH};
use termslide::compositor::Frame;
use termslide::style::{display_width, sanitize, Color, Rgb, Span, Style};
use termslide::terminal::*;

// ==================== Color Depth Tests ====================

#[test]
fn test_colorterm_values() {
    assert_eq!(depth_from_colorterm(Some("truecolor")), ColorDepth::TrueColor);
    assert_eq!(depth_from_colorterm(Some("24BIT")), ColorDepth::TrueColor);
    assert_eq!(depth_from_colorterm(Some("yes")), ColorDepth::Ansi256);
    assert_eq!(depth_from_colorterm(None), ColorDepth::Ansi256);
}

#[test]
fn test_painter_for_depth() {
    assert_eq!(painter_for(ColorDepth::TrueColor).depth(), ColorDepth::TrueColor);
    assert_eq!(painter_for(ColorDepth::Ansi256).depth(), ColorDepth::Ansi256);
    assert_eq!(ColorDepth::Ansi256.name(), "ansi256");
}

// ==================== Painter Tests ====================

#[test]
fn test_paint_cell_at_both_depths() {
    let cell = ColorCell {
        glyph: CELL_GLYPH,
        color: Color::Rgb(Rgb::new(0, 0, 0)),
    };

    let span = TrueColorPainter.paint(&cell);
    assert_eq!(span.text, "█");
    assert_eq!(span.style.fg, Some(Color::Rgb(Rgb::new(0, 0, 0))));

    let span = Ansi256Painter.paint(&cell);
    assert_eq!(span.style.fg, Some(Color::Indexed(0)));
}

#[test]
fn test_repaint_leaves_named_colors() {
    assert_eq!(Ansi256Painter.repaint(Color::CYAN), Color::CYAN);
    assert_eq!(Ansi256Painter.repaint(Color::Indexed(236)), Color::Indexed(236));
}

// ==================== SGR Tests ====================

#[test]
fn test_sgr_sequences() {
    let style = Style::new().fg(Color::BRIGHT_YELLOW).bold();
    assert_eq!(style.sgr(&TrueColorPainter), "\x1b[1;93m");

    let style = Style::new().fg(Color::GREEN).bg(Color::Indexed(236));
    assert_eq!(style.sgr(&TrueColorPainter), "\x1b[32;48;5;236m");

    let style = Style::new().fg(Color::Rgb(Rgb::new(1, 2, 3))).underline();
    assert_eq!(style.sgr(&TrueColorPainter), "\x1b[4;38;2;1;2;3m");
}

#[test]
fn test_widths_and_sanitizing() {
    assert_eq!(display_width("日本"), 4);
    assert_eq!(sanitize("a\tb\x07"), "a    b");
}

// ==================== Frame Output Tests ====================

#[test]
fn test_ansi_lines_reset_after_styled_spans() {
    let frame = Frame::from_rows(
        10,
        1,
        vec![vec![
            Span::raw("a "),
            Span::styled("b", Style::new().italic()),
        ]],
    );
    assert_eq!(frame.to_ansi_lines(&TrueColorPainter), vec!["a \x1b[3mb\x1b[0m"]);
}

#[test]
fn test_draw_frame_positions_each_row() {
    let frame = Frame::from_rows(
        5,
        3,
        vec![vec![Span::raw("one")], vec![], vec![Span::raw("three")]],
    );
    let mut out = Vec::new();
    draw_frame(&mut out, &frame, &TrueColorPainter).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("\x1b[2J"));
    assert!(text.contains("\x1b[1;1Hone"));
    assert!(text.contains("\x1b[3;1Hthree"));
}
