/// Shapes example: Convert a synthetic test image to ASCII art
///
/// Draws a bright disc on a dark background and prints the converted grid
use asciigram::{AsciiConfig, render_ascii};
use image::{Rgba, RgbaImage};

fn main() {
    println!("asciigram - Shapes Example");
    println!("==========================\n");

    let width = 200;
    let height = 200;
    let mut img = RgbaImage::new(width, height);

    // Dark background
    for y in 0..height {
        for x in 0..width {
            img.put_pixel(x, y, Rgba([25, 25, 25, 255]));
        }
    }

    // Bright disc fading toward the rim
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 70.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                let level = (255.0 - (dist / radius) * 180.0) as u8;
                img.put_pixel(x, y, Rgba([level, level, level, 255]));
            }
        }
    }

    println!("Created test image: {}x{}", width, height);

    let config = AsciiConfig::default();
    let art = render_ascii(&img, &config).expect("conversion failed");

    println!("Converted to {} columns:\n", config.width);
    print!("{}", art);
}
