use image::{GrayImage, Luma, RgbaImage};

/// Compute per-pixel brightness as the unweighted channel mean
///
/// Formula: B = (R + G + B) / 3, in integer math with truncation.
/// No perceptual weighting, and alpha is ignored: a fully transparent
/// pixel still contributes its color channels.
///
/// # Arguments
/// * `img` - Input RGBA image
///
/// # Returns
/// Grayscale image with brightness values
pub fn mean_brightness(img: &RgbaImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let pixel = img.get_pixel(x, y);
            let sum = pixel[0] as u16 + pixel[1] as u16 + pixel[2] as u16;
            output.put_pixel(x, y, Luma([(sum / 3) as u8]));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_black() {
        let img = RgbaImage::from_pixel(10, 10, image::Rgba([0, 0, 0, 255]));
        let gray = mean_brightness(&img);
        assert_eq!(gray.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_brightness_white() {
        let img = RgbaImage::from_pixel(10, 10, image::Rgba([255, 255, 255, 255]));
        let gray = mean_brightness(&img);
        assert_eq!(gray.get_pixel(0, 0)[0], 255);
    }

    #[test]
    fn test_brightness_gray() {
        let img = RgbaImage::from_pixel(10, 10, image::Rgba([128, 128, 128, 255]));
        let gray = mean_brightness(&img);
        assert_eq!(gray.get_pixel(0, 0)[0], 128);
    }

    #[test]
    fn test_brightness_weighs_channels_equally() {
        let red = RgbaImage::from_pixel(1, 1, image::Rgba([255, 0, 0, 255]));
        let green = RgbaImage::from_pixel(1, 1, image::Rgba([0, 255, 0, 255]));
        let blue = RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 255, 255]));

        assert_eq!(mean_brightness(&red).get_pixel(0, 0)[0], 85);
        assert_eq!(mean_brightness(&green).get_pixel(0, 0)[0], 85);
        assert_eq!(mean_brightness(&blue).get_pixel(0, 0)[0], 85);
    }

    #[test]
    fn test_brightness_ignores_alpha() {
        let opaque = RgbaImage::from_pixel(1, 1, image::Rgba([30, 60, 90, 255]));
        let transparent = RgbaImage::from_pixel(1, 1, image::Rgba([30, 60, 90, 0]));

        assert_eq!(
            mean_brightness(&opaque).get_pixel(0, 0)[0],
            mean_brightness(&transparent).get_pixel(0, 0)[0],
        );
        assert_eq!(mean_brightness(&opaque).get_pixel(0, 0)[0], 60);
    }

    #[test]
    fn test_brightness_truncates() {
        let img = RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 2, 255]));
        let gray = mean_brightness(&img);
        assert_eq!(gray.get_pixel(0, 0)[0], 0);
    }
}
