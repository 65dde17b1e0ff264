//! rasterpix-core - Basic data structures for RGBA raster processing
//!
//! This crate provides the fundamental container used throughout the
//! rasterpix library:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - flat RGBA pixel grid
//!   (immutable / mutable)
//!
//! Transforms over buffers live in `rasterpix-transform`; conversion to and
//! from platform image types lives in `rasterpix-io`. Keeping the container
//! free of behavior lets the transforms be composed and tested independently
//! of the byte layout.

pub mod buffer;
pub mod error;

pub use buffer::{PixelBuffer, PixelBufferMut, Rgba};
pub use error::{Error, Result};

/// Channel byte offsets within a single RGBA pixel.
///
/// # Pixel format
///
/// Pixels are stored as four consecutive bytes in R, G, B, A order,
/// row-major, with no padding between rows. The byte at offset
/// `4 * (y * width + x) + c` holds channel `c` of pixel (x, y).
pub mod channel {
    /// Red channel (byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (byte 3)
    pub const ALPHA: usize = 3;

    /// Bytes occupied by one RGBA pixel.
    pub const BYTES_PER_PIXEL: usize = 4;
}
