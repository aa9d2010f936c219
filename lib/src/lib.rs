//! asciigram - image to ASCII art converter
//!
//! This library turns a decoded RGBA image into a fixed-width grid of ramp
//! characters: dark pixels become dense glyphs like `@`, bright pixels thin
//! out to `.` and space. The conversion is pure and deterministic; decoding
//! files and writing output stay with the caller.
//!
//! # Example
//! ```no_run
//! use asciigram::{render_ascii, AsciiConfig};
//! use image;
//!
//! let input = image::open("photo.jpg").unwrap().to_rgba8();
//! let config = AsciiConfig::default();
//! let art = render_ascii(&input, &config).unwrap();
//! print!("{art}");
//! ```

pub mod brightness;
pub mod config;
pub mod error;
pub mod palette;
pub mod processor;
pub mod scale;

// Re-export main types for convenience
pub use config::{AsciiConfig, DEFAULT_WIDTH};
pub use error::ConvertError;
pub use palette::PALETTE;
pub use processor::render_ascii;
