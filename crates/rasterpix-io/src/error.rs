//! I/O error types
//!
//! Provides a unified error type for the platform image boundary. Transform
//! failures surfacing through the image-level operations are wrapped so
//! callers of this crate handle a single error type.

use thiserror::Error;

/// Error type for the platform image boundary.
#[derive(Error, Debug)]
pub enum IoError {
    /// The platform image's raster data cannot be expressed as an RGBA buffer
    #[error("decode error: {0}")]
    Decode(String),

    /// A platform image could not be built from the buffer
    #[error("encode error: {0}")]
    Encode(String),

    /// A transform between decode and encode failed
    #[error("transform error: {0}")]
    Transform(#[from] rasterpix_transform::TransformError),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
