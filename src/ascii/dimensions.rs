//! Grid size calculation for aspect-ratio-correct image rendering.

/// Default terminal character aspect ratio.
/// Terminal characters are typically ~2x taller than wide.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 2.0;

/// Calculate a cell grid that fits `max_cols` x `max_rows` and shows the image
/// with its original proportions.
///
/// Terminal characters are `char_aspect` times taller than wide, so an image
/// needs `char_aspect` times fewer rows than a naive pixel mapping would give.
/// The grid is fitted to the full width first and falls back to the full
/// height when that would be too tall.
///
/// The grid never has more cells than the image has pixels in either
/// direction, so tiny images are not blown up into empty cells.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `max_cols` - Maximum output width in characters
/// * `max_rows` - Maximum output height in characters
/// * `char_aspect` - Character cell height / width (values <= 0 use the default)
///
/// # Returns
/// `(cols, rows)`, or `(0, 0)` if either the image or the bounds are empty.
pub fn fit_dimensions(
    img_width: u32,
    img_height: u32,
    max_cols: u16,
    max_rows: u16,
    char_aspect: f32,
) -> (u16, u16) {
    if img_width == 0 || img_height == 0 || max_cols == 0 || max_rows == 0 {
        return (0, 0);
    }

    let char_aspect = if char_aspect > 0.0 && char_aspect.is_finite() {
        char_aspect
    } else {
        DEFAULT_CHAR_ASPECT_RATIO
    };

    let max_cols = max_cols.min(img_width.min(u32::from(u16::MAX)) as u16);
    let max_rows = max_rows.min(img_height.min(u32::from(u16::MAX)) as u16);

    // Columns per row that reproduce the image aspect on screen.
    let target = (img_width as f32 / img_height as f32) * char_aspect;

    let rows_at_full_width = (f32::from(max_cols) / target).round();
    if rows_at_full_width <= f32::from(max_rows) {
        (max_cols, (rows_at_full_width as u16).max(1))
    } else {
        let cols = (f32::from(max_rows) * target).round() as u16;
        (cols.clamp(1, max_cols), max_rows)
    }
}
