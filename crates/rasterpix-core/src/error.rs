//! Error types for rasterpix-core
//!
//! Provides a unified error type for the core crate. Each variant captures
//! enough context for diagnostics without exposing internal representation
//! details.

use thiserror::Error;

/// rasterpix core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer byte length does not match `width * height * 4`
    #[error(
        "buffer shape mismatch: {width}x{height} RGBA needs {expected} bytes, got {actual}"
    )]
    ShapeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Pixel coordinates outside the buffer grid
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} buffer")]
    PixelOutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
