//! The fixed xterm 256-color palette and nearest-color quantization.

use crate::style::Rgb;

/// xterm defaults for the 16 system colors.
const SYSTEM_COLORS: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(205, 0, 0),
    Rgb::new(0, 205, 0),
    Rgb::new(205, 205, 0),
    Rgb::new(0, 0, 238),
    Rgb::new(205, 0, 205),
    Rgb::new(0, 205, 205),
    Rgb::new(229, 229, 229),
    Rgb::new(127, 127, 127),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(92, 92, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

/// Channel levels of the 6x6x6 color cube (indices 16-231).
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// RGB value of a palette index.
pub fn palette_rgb(index: u8) -> Rgb {
    match index {
        0..=15 => SYSTEM_COLORS[index as usize],
        16..=231 => {
            let i = index - 16;
            Rgb::new(
                CUBE_LEVELS[(i / 36) as usize],
                CUBE_LEVELS[((i / 6) % 6) as usize],
                CUBE_LEVELS[(i % 6) as usize],
            )
        }
        232..=255 => {
            let gray = 8 + (index - 232) * 10;
            Rgb::new(gray, gray, gray)
        }
    }
}

/// Nearest palette index by Euclidean RGB distance. Ties go to the lowest index.
pub fn nearest_ansi256(color: Rgb) -> u8 {
    let mut best = 0u8;
    let mut best_dist = u32::MAX;
    for index in 0..=255u8 {
        let dist = color.distance_sq(palette_rgb(index));
        if dist < best_dist {
            best = index;
            best_dist = dist;
            if dist == 0 {
                break;
            }
        }
    }
    best
}
