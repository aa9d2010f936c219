use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use asciigram::{AsciiConfig, DEFAULT_WIDTH, render_ascii};
use clap::Parser;
use log::{debug, info};

/// Parse and validate output width (at least 1 column)
fn parse_width(s: &str) -> Result<u32, String> {
    let width: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid column count", s))?;
    if width < 1 {
        return Err(format!("Width must be at least 1 column, got {}", width));
    }
    Ok(width)
}

/// asciigram: Turn images into ASCII art
#[derive(Parser)]
#[command(name = "asciigram")]
#[command(version, about = "Turn images into ASCII art")]
#[command(after_help = "EXAMPLES:
    # Print a photo as ASCII art
    asciigram photo.jpg

    # Wider grid for more detail
    asciigram photo.jpg --width 120

    # Save to a text file instead of printing
    asciigram photo.jpg -o photo.txt")]
struct Cli {
    /// Path to the image to convert (any format the decoder recognizes)
    image: PathBuf,

    /// Output width in character columns
    #[arg(long, short = 'w', value_parser = parse_width, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Write the art to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<()> {
    let decoded = image::open(&cli.image)
        .with_context(|| format!("Failed to load image '{}'", cli.image.display()))?;
    let input = decoded.to_rgba8();
    debug!(
        "decoded {}x{} pixels from '{}'",
        input.width(),
        input.height(),
        cli.image.display()
    );

    let config = AsciiConfig { width: cli.width };
    let started = Instant::now();
    let art = render_ascii(&input, &config)
        .with_context(|| format!("Failed to convert '{}'", cli.image.display()))?;
    debug!("converted to {} columns in {:?}", cli.width, started.elapsed());

    match cli.output {
        Some(path) => {
            fs::write(&path, &art)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            info!("wrote {} bytes to '{}'", art.len(), path.display());
        }
        // The art carries its own trailing newline
        None => print!("{}", art),
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_width_valid() {
        assert_eq!(parse_width("50").unwrap(), 50);
        assert_eq!(parse_width("1").unwrap(), 1);
        assert_eq!(parse_width("200").unwrap(), 200);
    }

    #[test]
    fn test_parse_width_zero() {
        let err = parse_width("0").unwrap_err();
        assert!(err.contains("at least 1"));
    }

    #[test]
    fn test_parse_width_invalid_input() {
        assert!(parse_width("not_a_number").is_err());
        assert!(parse_width("").is_err());
        assert!(parse_width("-3").is_err());
        assert!(parse_width("12.5").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["asciigram", "photo.png"]);
        assert_eq!(cli.width, 50);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["asciigram", "photo.png", "-w", "80", "-o", "art.txt"]);
        assert_eq!(cli.width, 80);
        assert_eq!(cli.output, Some(PathBuf::from("art.txt")));
    }
}
