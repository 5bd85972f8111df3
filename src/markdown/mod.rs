//! The Markdown subset understood inside slides.

mod blocks;
mod inline;

pub use blocks::{layout_blocks, Block, BlockKind, Cell, Table};
pub use inline::{
    parse_image_ref, runs_text, tokenize, tokenize_line, RunStyle, StyledRun, Tokenizer,
};
