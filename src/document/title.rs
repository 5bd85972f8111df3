//! Classifies a slide source as an image, title or content slide.

use std::path::PathBuf;

use super::Slide;
use crate::markdown::{layout_blocks, parse_image_ref};

/// Classify one slide source.
///
/// The image shape is checked first, then the title shape; anything else is
/// laid out as content.
pub fn classify(source: &str) -> Slide {
    if let Some((alt, path)) = image_only(source) {
        return Slide::Image {
            path: PathBuf::from(path),
            alt,
        };
    }

    if let Some((headline, subtitle)) = title_parts(source) {
        return Slide::Title { headline, subtitle };
    }

    Slide::Content {
        blocks: layout_blocks(source),
    }
}

/// `![alt](path)` as the only non-empty line.
pub fn image_only(source: &str) -> Option<(String, String)> {
    let mut lines = source.lines().filter(|l| !l.trim().is_empty());
    let only = lines.next()?;
    if lines.next().is_some() {
        return None;
    }
    parse_image_ref(only)
}

/// Headline followed by a line of three or more `=`.
///
/// Returns the trimmed headline and the remaining non-empty lines joined with
/// single spaces.
pub fn title_parts(source: &str) -> Option<(String, String)> {
    let mut lines = source.lines().map(str::trim).filter(|l| !l.is_empty());
    let headline = lines.next()?;
    let underline = lines.next()?;
    if underline.len() < 3 || !underline.bytes().all(|b| b == b'=') {
        return None;
    }
    let subtitle = lines.collect::<Vec<_>>().join(" ");
    Some((headline.to_string(), subtitle))
}
