//! Error types for rectclip.

use thiserror::Error;

/// Main error type for rectclip operations.
///
/// Trimming itself never fails; errors only come from malformed input
/// buffers, configuration and image output.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid clip bounds: x [{min_x}, {max_x}], y [{min_y}, {max_y}] (min must be below max and all finite)")]
    InvalidBounds {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },

    #[error("Coordinate arrays differ in length: {x} x values, {y} y values")]
    LengthMismatch { x: usize, y: usize },

    #[error("Invalid bounds configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for rectclip operations.
pub type Result<T> = std::result::Result<T, Error>;
