//! Error types for rasterpix-transform

use thiserror::Error;

/// Errors that can occur during buffer transforms
#[derive(Debug, Error)]
pub enum TransformError {
    /// Requested rectangle exceeds the source buffer
    #[error(
        "rectangle {}x{} at ({}, {}) exceeds {}x{} buffer",
        .size.0, .size.1, .origin.0, .origin.1, .bounds.0, .bounds.1
    )]
    OutOfBounds {
        origin: (u32, u32),
        size: (u32, u32),
        bounds: (u32, u32),
    },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
