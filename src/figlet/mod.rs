//! Large banner text built from per-character glyph rows.

mod builtin;
mod flf;

use std::collections::HashMap;
use std::path::Path;

use crate::style::{display_width, truncate_to_width};

pub use flf::{load_flf, parse_flf, FontError};

/// Default number of blank columns between glyphs.
pub const DEFAULT_SPACING: usize = 1;

/// A character to glyph-rows lookup with a fixed height.
#[derive(Debug, Clone)]
pub struct FigletFont {
    height: usize,
    glyphs: HashMap<char, Vec<String>>,
    blank_width: usize,
    fold_case: bool,
}

impl Default for FigletFont {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FigletFont {
    /// The built-in 5-row block font. Lowercase folds to uppercase.
    pub fn builtin() -> Self {
        let ink = "\u{2588}";
        let glyphs = builtin::GLYPHS
            .iter()
            .map(|(c, rows)| {
                let rows = rows
                    .iter()
                    .map(|row| row.replace(builtin::INK, ink))
                    .collect();
                (*c, rows)
            })
            .collect();
        Self::from_parts(builtin::HEIGHT, glyphs, builtin::BLANK_WIDTH, true)
    }

    pub(crate) fn from_parts(
        height: usize,
        glyphs: HashMap<char, Vec<String>>,
        blank_width: usize,
        fold_case: bool,
    ) -> Self {
        Self {
            height,
            glyphs,
            blank_width,
            fold_case,
        }
    }

    /// Rows per glyph (and per rendered banner).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width of the glyph drawn for characters missing from the font.
    pub fn blank_width(&self) -> usize {
        self.blank_width
    }

    /// Glyph rows for `c`, if the font has it.
    pub fn glyph(&self, c: char) -> Option<&[String]> {
        let rows = match self.glyphs.get(&c) {
            Some(rows) => rows,
            None if self.fold_case => self.glyphs.get(&c.to_uppercase().next()?)?,
            None => return None,
        };
        Some(rows.as_slice())
    }

    /// Render `text` into exactly `height()` rows of equal width.
    pub fn render(&self, text: &str, spacing: usize) -> Vec<String> {
        let blank = " ".repeat(self.blank_width);
        let gap = " ".repeat(spacing);
        let mut rows = vec![String::new(); self.height];

        for (i, c) in text.chars().enumerate() {
            let glyph = self.glyph(c);
            if glyph.is_none() {
                log::debug!("No glyph for {:?}, drawing blank", c);
            }
            for (r, row) in rows.iter_mut().enumerate() {
                if i > 0 {
                    row.push_str(&gap);
                }
                let part = glyph
                    .and_then(|g| g.get(r))
                    .map(String::as_str)
                    .unwrap_or(blank.as_str());
                row.push_str(part);
            }
        }

        rows
    }

    /// Columns `render(text, spacing)` would occupy.
    pub fn width_of(&self, text: &str, spacing: usize) -> usize {
        self.render(text, spacing)
            .iter()
            .map(|r| display_width(r))
            .max()
            .unwrap_or(0)
    }

    /// Render and center against `width` columns.
    pub fn render_centered(&self, text: &str, spacing: usize, width: usize) -> Vec<String> {
        center(&self.render(text, spacing), width)
    }
}

/// Center banner rows in `width` columns.
///
/// Every output row is exactly `width` columns. When the padding is odd the
/// extra column goes on the left; rows wider than `width` are clipped.
pub fn center(rows: &[String], width: usize) -> Vec<String> {
    let banner = rows.iter().map(|r| display_width(r)).max().unwrap_or(0);
    let diff = width.saturating_sub(banner);
    let left = (diff + 1) / 2;

    rows.iter()
        .map(|row| {
            let clipped = truncate_to_width(row, width);
            let used = left + display_width(clipped);
            format!(
                "{}{}{}",
                " ".repeat(left),
                clipped,
                " ".repeat(width.saturating_sub(used))
            )
        })
        .collect()
}

/// Load the configured font, falling back to the built-in one.
pub fn load_font(path: Option<&Path>) -> FigletFont {
    match path {
        Some(path) => match load_flf(path) {
            Ok(font) => font,
            Err(e) => {
                log::warn!("Using built-in font: {}", e);
                FigletFont::builtin()
            }
        },
        None => FigletFont::builtin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_glyphs_are_rectangular() {
        let font = FigletFont::builtin();
        for (c, rows) in &font.glyphs {
            assert_eq!(rows.len(), font.height(), "glyph {:?}", c);
            let w = display_width(&rows[0]);
            assert!(rows.iter().all(|r| display_width(r) == w), "glyph {:?}", c);
        }
    }

    #[test]
    fn test_builtin_covers_alphanumerics() {
        let font = FigletFont::builtin();
        for c in ('A'..='Z').chain('0'..='9') {
            assert!(font.glyph(c).is_some(), "missing {:?}", c);
        }
    }

    #[test]
    fn test_render_hi() {
        let font = FigletFont::builtin();
        let rows = font.render("HI", 1);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], "█  █ ███");
        assert_eq!(rows[2], "████  █ ");
        assert_eq!(rows[4], "█  █ ███");
    }

    #[test]
    fn test_lowercase_folds() {
        let font = FigletFont::builtin();
        assert_eq!(font.render("hi", 1), font.render("HI", 1));
    }

    #[test]
    fn test_spacing() {
        let font = FigletFont::builtin();
        assert_eq!(font.width_of("HI", 0), 7);
        assert_eq!(font.width_of("HI", 3), 10);
        assert_eq!(font.width_of("", 1), 0);
    }

    #[test]
    fn test_unknown_char_is_blank() {
        let font = FigletFont::builtin();
        let rows = font.render("~", 1);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r == "    "));
    }

    #[test]
    fn test_center_odd_extra_on_left() {
        let rows = vec!["ab".to_string(), "cd".to_string()];
        assert_eq!(center(&rows, 5), vec!["  ab ", "  cd "]);
        assert_eq!(center(&rows, 6), vec!["  ab  ", "  cd  "]);
    }

    #[test]
    fn test_centered_rows_equal_length() {
        let font = FigletFont::builtin();
        for width in [20, 33, 80] {
            let rows = font.render_centered("Hello!", 1, width);
            assert_eq!(rows.len(), font.height());
            assert!(rows.iter().all(|r| display_width(r) == width));
        }
    }

    #[test]
    fn test_wide_banner_is_clipped() {
        let font = FigletFont::builtin();
        let rows = font.render_centered("WIDE BANNER", 1, 10);
        assert!(rows.iter().all(|r| display_width(r) == 10));
    }

    #[test]
    fn test_load_font_falls_back() {
        let font = load_font(Some(Path::new("/nonexistent/font.flf")));
        assert_eq!(font.height(), 5);
        assert!(font.glyph('a').is_some());
    }

    #[test]
    fn test_load_font_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.flf");
        std::fs::write(&path, flf::tests::tiny_font_text()).unwrap();
        let font = load_font(Some(&path));
        assert_eq!(font.height(), 2);
        assert_eq!(font.render("AB", 0), vec!["A B ", "AABB"]);
    }
}
