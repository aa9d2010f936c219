use asciigram::{AsciiConfig, render_ascii};
use image::{Rgba, RgbaImage};

fn main() {
    println!("asciigram - Grid Geometry Demo");
    println!("==============================\n");

    // Sources with various aspect ratios
    let test_cases = vec![
        (100, 100, "square"),
        (1920, 1080, "Full HD landscape"),
        (600, 800, "portrait"),
        (300, 2, "wide strip, collapses to an empty grid"),
    ];

    let config = AsciiConfig::default();

    for (width, height, description) in test_cases {
        // Horizontal left-to-right brightness ramp
        let mut img = RgbaImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let level = (x * 255 / (width - 1)) as u8;
                img.put_pixel(x, y, Rgba([level, level, level, 255]));
            }
        }

        let art = render_ascii(&img, &config).expect("conversion failed");
        let rows = art.lines().count();

        println!("Input:  {}x{} ({})", width, height, description);
        println!("  Grid: {} columns x {} rows", config.width, rows);
        match art.lines().next() {
            Some(first) => println!("  First row: {:?}", first),
            None => println!("  Empty output"),
        }
        println!();
    }

    println!("Row count follows: floor(height * (columns / width) * 0.5)");
}
