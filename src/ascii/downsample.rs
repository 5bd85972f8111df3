//! Downsampling of pixel data to character grids.

use image::RgbImage;

use crate::style::Rgb;

/// Downsample an RGB image to the average color of each character cell.
///
/// The image is split into a uniform `cols` x `rows` grid of regions and
/// every region's pixels are averaged. Each region covers at least one pixel.
///
/// # Returns
/// One color per cell in row-major order, `cols * rows` long, or an empty
/// vector when the image or the grid is empty.
pub fn downsample_colors(image: &RgbImage, cols: u16, rows: u16) -> Vec<Rgb> {
    let (img_width, img_height) = image.dimensions();
    let data = image.as_raw();

    if cols == 0 || rows == 0 || img_width == 0 || img_height == 0 || data.is_empty() {
        return Vec::new();
    }

    let cell_w = img_width as f32 / f32::from(cols);
    let cell_h = img_height as f32 / f32::from(rows);

    let mut result = Vec::with_capacity(usize::from(cols) * usize::from(rows));

    for cy in 0..rows {
        let (start_y, end_y) = cell_span(cy, cell_h, img_height);
        for cx in 0..cols {
            let (start_x, end_x) = cell_span(cx, cell_w, img_width);

            let mut sum_r = 0u64;
            let mut sum_g = 0u64;
            let mut sum_b = 0u64;
            let mut count = 0u64;

            for py in start_y..end_y {
                for px in start_x..end_x {
                    let idx = ((py * img_width + px) * 3) as usize;
                    if idx + 2 < data.len() {
                        sum_r += u64::from(data[idx]);
                        sum_g += u64::from(data[idx + 1]);
                        sum_b += u64::from(data[idx + 2]);
                        count += 1;
                    }
                }
            }

            result.push(if count > 0 {
                Rgb::new(
                    (sum_r / count) as u8,
                    (sum_g / count) as u8,
                    (sum_b / count) as u8,
                )
            } else {
                Rgb::default()
            });
        }
    }

    result
}

/// Pixel range covered by cell `index` along one axis.
fn cell_span(index: u16, cell_size: f32, limit: u32) -> (u32, u32) {
    let start = ((f32::from(index) * cell_size) as u32).min(limit.saturating_sub(1));
    let end = ((f32::from(index + 1) * cell_size) as u32).clamp(start + 1, limit);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb as Pixel;

    #[test]
    fn test_empty_inputs() {
        let img = RgbImage::new(4, 4);
        assert!(downsample_colors(&img, 0, 2).is_empty());
        assert!(downsample_colors(&img, 2, 0).is_empty());
    }

    #[test]
    fn test_uniform_image() {
        let img = RgbImage::from_pixel(10, 10, Pixel([10, 20, 30]));
        let cells = downsample_colors(&img, 5, 5);
        assert_eq!(cells.len(), 25);
        assert!(cells.iter().all(|c| *c == Rgb::new(10, 20, 30)));
    }

    #[test]
    fn test_averages_each_region() {
        // Left half red, right half blue.
        let img = RgbImage::from_fn(4, 2, |x, _| {
            if x < 2 {
                Pixel([255, 0, 0])
            } else {
                Pixel([0, 0, 255])
            }
        });
        let cells = downsample_colors(&img, 2, 1);
        assert_eq!(cells, vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]);

        let averaged = downsample_colors(&img, 1, 1);
        assert_eq!(averaged, vec![Rgb::new(127, 0, 127)]);
    }

    #[test]
    fn test_more_cells_than_pixels_still_sampled() {
        let img = RgbImage::from_pixel(1, 1, Pixel([200, 100, 50]));
        let cells = downsample_colors(&img, 3, 2);
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|c| *c == Rgb::new(200, 100, 50)));
    }
}
