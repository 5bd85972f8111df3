//! Image rasterizer: turns raster images into grids of colored terminal cells.
//!
//! The pipeline:
//!
//! 1. **Decoding** - the `image` crate loads the file (cached per path)
//! 2. **Fitting** - a grid size that fits the viewport and keeps the aspect ratio
//! 3. **Downsampling** - each cell takes the average color of its region
//! 4. **Color resolution** - the painter keeps 24-bit color or quantizes to
//!    the 256-color palette

mod dimensions;
mod downsample;
mod palette;
mod raster;

pub use dimensions::{fit_dimensions, DEFAULT_CHAR_ASPECT_RATIO};
pub use downsample::downsample_colors;
pub use palette::{nearest_ansi256, palette_rgb};
pub use raster::{
    placeholder_text, rasterize_image, ColorCell, ImageGrid, RasterError, RasterOutcome,
    Rasterizer, CELL_GLYPH,
};
