use crate::brightness::mean_brightness;
use crate::config::AsciiConfig;
use crate::error::ConvertError;
use crate::palette::glyph_for;
use crate::scale::{grid_rows, resample};
use image::RgbaImage;

/// Converts an input image to an ASCII art string
///
/// The pipeline:
/// 1. Compute the character grid: `config.width` columns, row count
///    vertically compressed by 0.5 to match character cell proportions
/// 2. Resample the image to one source sample per grid cell (nearest-neighbor)
/// 3. Reduce each cell to its mean channel brightness
/// 4. Map every cell through the brightness ramp, row by row
///
/// Every emitted row, including the last, is terminated by `'\n'`. A grid
/// that works out to zero rows yields an empty string, which is a valid
/// conversion rather than an error.
///
/// The conversion is deterministic: the same image and config always
/// produce byte-identical output.
///
/// # Arguments
/// * `input` - The input RGBA image to convert
/// * `config` - Configuration parameters for the conversion
///
/// # Returns
/// The ASCII art string, or a [`ConvertError`] describing why this image
/// cannot be converted
pub fn render_ascii(input: &RgbaImage, config: &AsciiConfig) -> Result<String, ConvertError> {
    config.validate()?;

    let (width, height) = input.dimensions();
    if width == 0 || height == 0 {
        return Err(ConvertError::EmptyImage { width, height });
    }

    // Step 1: Grid geometry
    let columns = config.width;
    let row_count = grid_rows(width, height, columns);
    if row_count == 0 {
        return Ok(String::new());
    }
    let rows = u32::try_from(row_count).map_err(|_| ConvertError::GridTooLarge {
        columns,
        rows: row_count,
    })?;

    // Step 2: One source sample per grid cell
    let cells = resample(input, columns, rows);

    // Step 3: Mean channel brightness per cell
    let gray = mean_brightness(&cells);

    // Step 4: Map brightness through the ramp
    let mut art = String::with_capacity(rows as usize * (columns as usize + 1));
    for y in 0..rows {
        for x in 0..columns {
            art.push(glyph_for(gray.get_pixel(x, y)[0]));
        }
        art.push('\n');
    }

    Ok(art)
}
