use image::{RgbaImage, imageops};

/// Terminal character aspect ratio (height over width)
///
/// Cells are roughly twice as tall as they are wide, so the row count
/// divides by this ratio to keep rendered proportions close to the source.
pub const CHAR_ASPECT_RATIO: u64 = 2;

/// Number of character rows for a grid `columns` wide
///
/// Formula: rows = floor(image_height * (columns / image_width) * 0.5),
/// the 0.5 being `1 / CHAR_ASPECT_RATIO`. Computed exactly as
/// `(image_height * columns) / (CHAR_ASPECT_RATIO * image_width)` in
/// integer math, which truncates the same way the real-valued formula
/// floors.
///
/// # Arguments
/// * `image_width` - Source width in pixels, non-zero
/// * `image_height` - Source height in pixels
/// * `columns` - Output width in character columns
///
/// # Returns
/// The row count. Wide, short sources can legitimately come out at 0 rows;
/// tall, narrow ones can exceed `u32::MAX`, hence the `u64`.
pub fn grid_rows(image_width: u32, image_height: u32, columns: u32) -> u64 {
    (image_height as u64 * columns as u64) / (CHAR_ASPECT_RATIO * image_width as u64)
}

/// Resample an image down to the character grid, one pixel per cell
///
/// Nearest-neighbor sampling: each grid cell takes the color of a single
/// source pixel, with no averaging over the cell's footprint.
///
/// # Arguments
/// * `input` - The input RGBA image
/// * `columns` - Grid width in cells
/// * `rows` - Grid height in cells
///
/// # Returns
/// A `columns`x`rows` image holding the sampled cells
pub fn resample(input: &RgbaImage, columns: u32, rows: u32) -> RgbaImage {
    imageops::resize(input, columns, rows, imageops::FilterType::Nearest)
}
