//! Image loading and rasterization into colored terminal cells.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::RgbImage;
use thiserror::Error;

use super::dimensions::{fit_dimensions, DEFAULT_CHAR_ASPECT_RATIO};
use super::downsample::downsample_colors;
use crate::style::Color;
use crate::terminal::CellPainter;

/// Glyph used for every image cell.
pub const CELL_GLYPH: char = '█';

/// One terminal character cell of image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCell {
    pub glyph: char,
    pub color: Color,
}

/// A rectangular grid of cells, row-major. Every row has `width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGrid {
    width: u16,
    height: u16,
    cells: Vec<ColorCell>,
}

impl ImageGrid {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&ColorCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ColorCell]> {
        self.cells.chunks(usize::from(self.width.max(1)))
    }
}

/// Errors while turning an image file into a grid.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("{source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image has no pixels")]
    Empty,
    #[error("no room to draw the image")]
    NoRoom,
}

/// Result of rasterizing an image for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterOutcome {
    Grid(ImageGrid),
    /// The image could not be shown; the line to draw instead.
    Placeholder(String),
}

/// Downsample a decoded image into a grid that fits `max_cols` x `max_rows`.
pub fn rasterize_image(
    image: &RgbImage,
    max_cols: u16,
    max_rows: u16,
    char_aspect: f32,
    painter: &dyn CellPainter,
) -> Result<ImageGrid, RasterError> {
    let (img_width, img_height) = image.dimensions();
    if img_width == 0 || img_height == 0 {
        return Err(RasterError::Empty);
    }

    let (cols, rows) = fit_dimensions(img_width, img_height, max_cols, max_rows, char_aspect);
    if cols == 0 || rows == 0 {
        return Err(RasterError::NoRoom);
    }

    let cells = downsample_colors(image, cols, rows)
        .into_iter()
        .map(|rgb| ColorCell {
            glyph: CELL_GLYPH,
            color: painter.resolve(rgb),
        })
        .collect();

    Ok(ImageGrid {
        width: cols,
        height: rows,
        cells,
    })
}

/// Loads images from disk, keeps the decoded pixels, and rasterizes them on
/// demand for the current viewport.
pub struct Rasterizer {
    char_aspect: f32,
    base_dir: Option<PathBuf>,
    cache: HashMap<PathBuf, RgbImage>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_ASPECT_RATIO)
    }
}

impl Rasterizer {
    pub fn new(char_aspect: f32) -> Self {
        Self {
            char_aspect,
            base_dir: None,
            cache: HashMap::new(),
        }
    }

    /// Resolve relative image paths against `dir` (the document's directory).
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Number of decoded images held in memory.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn load(&mut self, path: &Path) -> Result<&RgbImage, RasterError> {
        if !self.cache.contains_key(path) {
            let decoded = image::open(path).map_err(|source| RasterError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
            log::debug!(
                "Decoded image {} ({}x{})",
                path.display(),
                decoded.width(),
                decoded.height()
            );
            self.cache.insert(path.to_path_buf(), decoded.to_rgb8());
        }
        self.cache.get(path).ok_or(RasterError::Empty)
    }

    /// Rasterize the image at `path` into at most `max_cols` x `max_rows`
    /// cells. Any failure becomes a placeholder line instead of an error.
    pub fn rasterize(
        &mut self,
        path: &Path,
        max_cols: u16,
        max_rows: u16,
        painter: &dyn CellPainter,
    ) -> RasterOutcome {
        let resolved = self.resolve_path(path);
        let char_aspect = self.char_aspect;

        let result = self
            .load(&resolved)
            .and_then(|img| rasterize_image(img, max_cols, max_rows, char_aspect, painter));

        match result {
            Ok(grid) => RasterOutcome::Grid(grid),
            Err(e) => {
                log::warn!("Cannot show image {}: {}", resolved.display(), e);
                RasterOutcome::Placeholder(placeholder_text(path, &e))
            }
        }
    }
}

/// The single line drawn in place of an image that cannot be shown.
pub fn placeholder_text(path: &Path, err: &RasterError) -> String {
    format!("[image unavailable: {} ({})]", path.display(), err)
}
