//! Terminal management: raw mode, color capability, painters and output.

mod capability;
mod output;
mod painter;
mod raw_mode;

pub use capability::{depth_from_colorterm, detect_color_depth, ColorDepth};
pub use output::draw_frame;
pub use painter::{painter_for, Ansi256Painter, CellPainter, TrueColorPainter};
pub use raw_mode::{restore_terminal, RawModeGuard};
