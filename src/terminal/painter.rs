//! Color-depth strategies.
//!
//! A painter is picked once at startup from the terminal capability and is
//! then used for every image cell and every styled span, so nothing
//! downstream branches on the color depth itself.

use crate::ascii::{nearest_ansi256, ColorCell};
use crate::style::{Color, Rgb, Span, Style};

use super::capability::ColorDepth;

/// Turns colors into what the terminal can display.
pub trait CellPainter {
    /// The depth this painter targets.
    fn depth(&self) -> ColorDepth;

    /// Resolve an averaged RGB value into a displayable color.
    fn resolve(&self, rgb: Rgb) -> Color;

    /// Resolve any color; only RGB colors are affected.
    fn repaint(&self, color: Color) -> Color {
        match color {
            Color::Rgb(rgb) => self.resolve(rgb),
            other => other,
        }
    }

    /// Render one image cell as a styled glyph.
    fn paint(&self, cell: &ColorCell) -> Span {
        Span::styled(
            cell.glyph.to_string(),
            Style::new().fg(self.repaint(cell.color)),
        )
    }
}

/// Passes 24-bit colors through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrueColorPainter;

impl CellPainter for TrueColorPainter {
    fn depth(&self) -> ColorDepth {
        ColorDepth::TrueColor
    }

    fn resolve(&self, rgb: Rgb) -> Color {
        Color::Rgb(rgb)
    }
}

/// Quantizes to the nearest entry of the 256-color palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi256Painter;

impl CellPainter for Ansi256Painter {
    fn depth(&self) -> ColorDepth {
        ColorDepth::Ansi256
    }

    fn resolve(&self, rgb: Rgb) -> Color {
        Color::Indexed(nearest_ansi256(rgb))
    }
}

/// Painter for a color depth.
pub fn painter_for(depth: ColorDepth) -> Box<dyn CellPainter> {
    match depth {
        ColorDepth::TrueColor => Box::new(TrueColorPainter),
        ColorDepth::Ansi256 => Box::new(Ansi256Painter),
    }
}
