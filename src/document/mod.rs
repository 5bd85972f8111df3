//! Documents and slides.
//!
//! A document is parsed once at load time: the text is split on horizontal
//! rules and every segment is classified as an image, title or content slide.

mod splitter;
mod title;

use std::path::PathBuf;

use crate::markdown::Block;

pub use splitter::{is_rule_line, split_slides};
pub use title::{classify, image_only, title_parts};

/// One navigable unit of a presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    /// Headline drawn as a banner, with an optional subtitle line.
    Title { headline: String, subtitle: String },
    /// Markdown blocks in document order.
    Content { blocks: Vec<Block> },
    /// A single image filling the slide.
    Image { path: PathBuf, alt: String },
}

/// An immutable, ordered sequence of slides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    slides: Vec<Slide>,
}

impl Document {
    /// Parse a whole document.
    pub fn parse(text: &str) -> Self {
        let slides = split_slides(text).iter().map(|s| classify(s)).collect();
        Self { slides }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
