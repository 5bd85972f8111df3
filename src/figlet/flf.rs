//! FIGlet `.flf` font files.
//!
//! Only the required ASCII block (32..=126) is read; German and code-tagged
//! characters that may follow are ignored. Smushing rules in the header are
//! ignored as well, glyphs are always laid out at full width.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::FigletFont;
use crate::style::display_width;

const SIGNATURE: &str = "flf2a";

/// Error loading a FIGlet font file.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing flf2a signature")]
    Signature,
    #[error("malformed header: {0}")]
    Header(String),
    #[error("font ends before glyph {0:?}")]
    Truncated(char),
}

struct Header {
    hardblank: char,
    height: usize,
    comment_lines: usize,
}

fn parse_header(line: &str) -> Result<Header, FontError> {
    let rest = line.strip_prefix(SIGNATURE).ok_or(FontError::Signature)?;
    let mut chars = rest.chars();
    let hardblank = chars
        .next()
        .ok_or_else(|| FontError::Header("no hardblank".to_string()))?;

    let fields: Vec<&str> = chars.as_str().split_whitespace().collect();
    let number = |idx: usize, name: &str| -> Result<usize, FontError> {
        fields
            .get(idx)
            .ok_or_else(|| FontError::Header(format!("missing {}", name)))?
            .parse::<usize>()
            .map_err(|_| FontError::Header(format!("bad {}", name)))
    };

    let height = number(0, "height")?;
    if height == 0 {
        return Err(FontError::Header("height is zero".to_string()));
    }
    // fields: height baseline max_length old_layout comment_lines ...
    let comment_lines = number(4, "comment line count")?;

    Ok(Header {
        hardblank,
        height,
        comment_lines,
    })
}

/// Drop the trailing endmark characters of a glyph line.
fn strip_endmarks(line: &str) -> &str {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.chars().last() {
        Some(mark) => line.trim_end_matches(mark),
        None => line,
    }
}

/// Parse a font from the text of an `.flf` file.
pub fn parse_flf(text: &str) -> Result<FigletFont, FontError> {
    let mut lines = text.lines();
    let header = parse_header(lines.next().ok_or(FontError::Signature)?)?;
    let mut lines = lines.skip(header.comment_lines);

    let mut glyphs = HashMap::new();
    for code in 32u8..=126 {
        let ch = char::from(code);
        let mut rows = Vec::with_capacity(header.height);
        for _ in 0..header.height {
            let line = lines.next().ok_or(FontError::Truncated(ch))?;
            rows.push(strip_endmarks(line).replace(header.hardblank, " "));
        }
        glyphs.insert(ch, pad_rows(rows));
    }

    let blank_width = glyphs
        .get(&' ')
        .and_then(|rows| rows.first())
        .map(|row| display_width(row))
        .filter(|w| *w > 0)
        .unwrap_or(1);

    Ok(FigletFont::from_parts(header.height, glyphs, blank_width, false))
}

/// Pad every row to the widest one so glyph rows stay rectangular.
fn pad_rows(rows: Vec<String>) -> Vec<String> {
    let width = rows.iter().map(|r| display_width(r)).max().unwrap_or(0);
    rows.into_iter()
        .map(|row| {
            let pad = width - display_width(&row);
            format!("{}{}", row, " ".repeat(pad))
        })
        .collect()
}

/// Read and parse a font file.
pub fn load_flf(path: &Path) -> Result<FigletFont, FontError> {
    let text = std::fs::read_to_string(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let font = parse_flf(&text)?;
    log::info!("Loaded font {} (height {})", path.display(), font.height());
    Ok(font)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A two-row font where every glyph is its character followed by a `$`
    /// hardblank.
    pub(crate) fn tiny_font_text() -> String {
        let mut text = String::from("flf2a$ 2 1 4 -1 2\ncomment one\ncomment two\n");
        for code in 32u8..=126 {
            let c = char::from(code);
            let c = if c == '@' || c == ' ' { '.' } else { c };
            text.push_str(&format!("{}$@\n", c));
            text.push_str(&format!("{}{}@@\n", c, c));
        }
        text
    }

    #[test]
    fn test_parse_header() {
        let header = parse_header("flf2a$ 6 5 16 15 13 0 24463").unwrap();
        assert_eq!(header.hardblank, '$');
        assert_eq!(header.height, 6);
        assert_eq!(header.comment_lines, 13);
    }

    #[test]
    fn test_bad_signature() {
        assert!(matches!(parse_flf("tlf2a$ 1 1 1 0 0"), Err(FontError::Signature)));
        assert!(matches!(parse_flf(""), Err(FontError::Signature)));
    }

    #[test]
    fn test_bad_header() {
        assert!(matches!(parse_flf("flf2a$ x 1 1 0 0"), Err(FontError::Header(_))));
        assert!(matches!(parse_flf("flf2a$ 2 1"), Err(FontError::Header(_))));
        assert!(matches!(parse_flf("flf2a$ 0 1 1 0 0"), Err(FontError::Header(_))));
    }

    #[test]
    fn test_strip_endmarks() {
        assert_eq!(strip_endmarks(" _ @"), " _ ");
        assert_eq!(strip_endmarks("|_|@@"), "|_|");
        assert_eq!(strip_endmarks("ab#\r"), "ab");
        assert_eq!(strip_endmarks(""), "");
    }

    #[test]
    fn test_parse_tiny_font() {
        let font = parse_flf(&tiny_font_text()).unwrap();
        assert_eq!(font.height(), 2);
        assert_eq!(font.glyph('A'), Some(&["A ".to_string(), "AA".to_string()][..]));
        // hardblank becomes a space
        assert_eq!(font.glyph('!').map(|g| g[0].as_str()), Some("! "));
        // no case folding for file fonts
        assert_ne!(font.glyph('a'), font.glyph('A'));
    }

    #[test]
    fn test_truncated_font() {
        let text: String = tiny_font_text().lines().take(40).collect::<Vec<_>>().join("\n");
        assert!(matches!(parse_flf(&text), Err(FontError::Truncated(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_flf(Path::new("/nonexistent/font.flf")).unwrap_err();
        assert!(matches!(err, FontError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/font.flf"));
    }
}
