//! Colors, text styles and styled spans shared by the rasterizer, the
//! compositor and the terminal writer.

use unicode_width::UnicodeWidthChar;

use crate::terminal::CellPainter;

/// RGB color of one pixel or one averaged cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance in RGB space.
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 16 basic ANSI colors (0-7 normal, 8-15 bright).
    Ansi(u8),
    /// An entry of the 256-color palette.
    Indexed(u8),
    /// 24-bit color.
    Rgb(Rgb),
}

impl Color {
    pub const RED: Color = Color::Ansi(1);
    pub const GREEN: Color = Color::Ansi(2);
    pub const YELLOW: Color = Color::Ansi(3);
    pub const BLUE: Color = Color::Ansi(4);
    pub const CYAN: Color = Color::Ansi(6);
    pub const WHITE: Color = Color::Ansi(7);
    pub const BRIGHT_BLACK: Color = Color::Ansi(8);
    pub const BRIGHT_YELLOW: Color = Color::Ansi(11);
    pub const BRIGHT_MAGENTA: Color = Color::Ansi(13);
    pub const BRIGHT_CYAN: Color = Color::Ansi(14);

    fn push_sgr(self, out: &mut Vec<String>, foreground: bool) {
        match self {
            Color::Ansi(n) => {
                let n = u16::from(n.min(15));
                let base = match (foreground, n < 8) {
                    (true, true) => 30,
                    (true, false) => 90 - 8,
                    (false, true) => 40,
                    (false, false) => 100 - 8,
                };
                out.push((base + n).to_string());
            }
            Color::Indexed(n) => {
                out.push(format!("{};5;{}", if foreground { 38 } else { 48 }, n));
            }
            Color::Rgb(c) => {
                out.push(format!(
                    "{};2;{};{};{}",
                    if foreground { 38 } else { 48 },
                    c.r,
                    c.g,
                    c.b
                ));
            }
        }
    }
}

/// Visual attributes of a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Layer `other` on top of `self`: colors set in `other` win, flags add up.
    pub fn patch(self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            dim: self.dim || other.dim,
        }
    }

    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }

    /// SGR escape sequence selecting this style, or an empty string for the
    /// default style. RGB colors go through the painter so a 256-color
    /// terminal never receives a 24-bit sequence.
    pub fn sgr(&self, painter: &dyn CellPainter) -> String {
        if self.is_plain() {
            return String::new();
        }

        let mut params = Vec::new();
        if self.bold {
            params.push("1".to_string());
        }
        if self.dim {
            params.push("2".to_string());
        }
        if self.italic {
            params.push("3".to_string());
        }
        if self.underline {
            params.push("4".to_string());
        }
        if let Some(fg) = self.fg {
            painter.repaint(fg).push_sgr(&mut params, true);
        }
        if let Some(bg) = self.bg {
            painter.repaint(bg).push_sgr(&mut params, false);
        }

        format!("\x1b[{}m", params.join(";"))
    }
}

/// A run of text drawn with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        display_width(&self.text)
    }
}

/// Display width of a single character. Control characters count as zero.
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        0
    } else {
        c.width().unwrap_or(0)
    }
}

/// Display width of a string in terminal columns.
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Longest prefix of `text` that fits in `width` columns.
///
/// A wide character that would straddle the limit is left out.
pub fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        let w = char_width(c);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Expand tabs and drop other control characters so widths stay honest.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => out.push_str("    "),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{Ansi256Painter, TrueColorPainter};

    #[test]
    fn test_plain_style_has_no_sgr() {
        assert_eq!(Style::default().sgr(&TrueColorPainter), "");
    }

    #[test]
    fn test_sgr_basic_colors() {
        let style = Style::new().fg(Color::CYAN).bold();
        assert_eq!(style.sgr(&TrueColorPainter), "\x1b[1;36m");

        let bright = Style::new().fg(Color::BRIGHT_YELLOW);
        assert_eq!(bright.sgr(&TrueColorPainter), "\x1b[93m");

        let bg = Style::new().bg(Color::BRIGHT_BLACK);
        assert_eq!(bg.sgr(&TrueColorPainter), "\x1b[100m");
    }

    #[test]
    fn test_sgr_rgb_depends_on_painter() {
        let style = Style::new().fg(Color::Rgb(Rgb::new(255, 0, 0)));
        assert_eq!(style.sgr(&TrueColorPainter), "\x1b[38;2;255;0;0m");
        assert_eq!(style.sgr(&Ansi256Painter), "\x1b[38;5;9m");
    }

    #[test]
    fn test_patch_overrides_colors_and_merges_flags() {
        let base = Style::new().fg(Color::WHITE).bold();
        let patched = base.patch(Style::new().fg(Color::GREEN).italic());
        assert_eq!(patched.fg, Some(Color::GREEN));
        assert!(patched.bold);
        assert!(patched.italic);
    }

    #[test]
    fn test_display_width_counts_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("█"), 1);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("hi", 10), "hi");
        assert_eq!(truncate_to_width("日本", 3), "日");
        assert_eq!(truncate_to_width("日本", 1), "");
    }

    #[test]
    fn test_sanitize_expands_tabs() {
        assert_eq!(sanitize("a\tb"), "a    b");
        assert_eq!(sanitize("a\u{7}b"), "ab");
    }
}
