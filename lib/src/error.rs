use thiserror::Error;

/// Failures that can occur while converting an image to ASCII art
///
/// Decoding is not part of the conversion; feeding the converter happens
/// upstream, so unreadable files never show up here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The source image has a zero dimension
    #[error("source image dimensions {width}x{height} are invalid; both sides must be at least 1 pixel")]
    EmptyImage { width: u32, height: u32 },

    /// The configured output width is zero columns
    #[error("output width must be at least 1 column, got {0}")]
    InvalidWidth(u32),

    /// The computed character grid cannot be materialized as an image surface
    #[error("character grid of {columns}x{rows} cells exceeds the addressable surface size")]
    GridTooLarge { columns: u32, rows: u64 },
}
