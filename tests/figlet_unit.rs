//! Unit tests for banner rendering: the built-in font, `.flf` font files
//! and centering.

use std::path::Path;

use termslide::figlet::*;

/// A two-row font: row one is the character and a hardblank, row two is the
/// character twice. Space is two hardblanks wide.
fn two_row_font() -> String {
    let mut text = String::from("flf2a$ 2 1 4 -1 1\nsynthetic test font\n");
    for code in 32u8..=126 {
        let c = char::from(code);
        match c {
            ' ' => text.push_str("$$@\n$$@@\n"),
            '@' => text.push_str("#$#\n##$##\n"),
            _ => text.push_str(&format!("{}$@\n{}{}@@\n", c, c, c)),
        }
    }
    text
}

// ==================== Built-in Font Tests ====================

#[test]
fn test_builtin_banner_has_font_height() {
    let font = FigletFont::builtin();
    let rows = font.render("Hello, World!", DEFAULT_SPACING);
    assert_eq!(rows.len(), font.height());
    assert_eq!(font.height(), 5);
}

#[test]
fn test_builtin_rows_share_width() {
    let font = FigletFont::builtin();
    let rows = font.render("RUST 2024", DEFAULT_SPACING);
    let width = font.width_of("RUST 2024", DEFAULT_SPACING);
    assert!(rows.iter().all(|r| r.chars().count() == width));
}

#[test]
fn test_unknown_char_is_blank() {
    let font = FigletFont::builtin();
    assert!(font.glyph('λ').is_none());
    let rows = font.render("λ", 0);
    assert!(rows.iter().all(|r| r == &" ".repeat(font.blank_width())));
}

#[test]
fn test_render_centered_fills_width() {
    let font = FigletFont::builtin();
    let rows = font.render_centered("HI", 1, 12);
    assert_eq!(rows[0], "  █  █ ███  ");
    assert!(rows.iter().all(|r| r.chars().count() == 12));
}

#[test]
fn test_center_clips_wide_rows() {
    let rows = vec!["abcdefgh".to_string()];
    assert_eq!(center(&rows, 5), vec!["abcde".to_string()]);
}

#[test]
fn test_center_odd_padding_goes_left() {
    let rows = vec!["ab".to_string()];
    assert_eq!(center(&rows, 5), vec!["  ab ".to_string()]);
}

// ==================== FLF Font Tests ====================

#[test]
fn test_parse_flf_glyphs() {
    let font = parse_flf(&two_row_font()).unwrap();
    assert_eq!(font.height(), 2);
    assert_eq!(font.blank_width(), 2);
    assert_eq!(font.render("AB", 0), vec!["A B ".to_string(), "AABB".to_string()]);
}

#[test]
fn test_flf_is_case_sensitive() {
    let font = parse_flf(&two_row_font()).unwrap();
    assert_eq!(font.render("a", 0), vec!["a ".to_string(), "aa".to_string()]);
}

#[test]
fn test_flf_truncated() {
    let text: String = two_row_font().lines().take(40).map(|l| format!("{}\n", l)).collect();
    assert!(matches!(parse_flf(&text), Err(FontError::Truncated(_))));
}

#[test]
fn test_load_flf_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two.flf");
    std::fs::write(&path, two_row_font()).unwrap();

    let font = load_flf(&path).unwrap();
    assert_eq!(font.height(), 2);
    assert_eq!(load_font(Some(&path)).height(), 2);
}

#[test]
fn test_load_font_falls_back_to_builtin() {
    let font = load_font(Some(Path::new("/nonexistent/font.flf")));
    assert_eq!(font.height(), 5);

    let err = load_flf(Path::new("/nonexistent/font.flf")).unwrap_err();
    assert!(err.to_string().starts_with("failed to read font /nonexistent/font.flf"));
}
