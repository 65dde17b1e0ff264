//! rasterpix - RGBA pixel buffer transforms
//!
//! A small library for manipulating raw RGBA pixel buffers decoded from an
//! image:
//!
//! - Grayscale conversion (channel average or Rec. 601 luma)
//! - Half-rate decimation along columns, rows, or both
//! - Rectangular cropping
//! - Per-channel remapping and alpha overwrite
//!
//! Buffers are immutable values; every transform returns a new buffer, so
//! a decoded source can feed several pipelines at once. Conversion to and
//! from the `image` crate's types lives in the [`io`] module and is the
//! only place a platform imaging API appears.
//!
//! # Example
//!
//! ```
//! use rasterpix::PixelBufferMut;
//! use rasterpix::transform::{GrayscaleStyle, downsample_half, grayscale};
//!
//! let mut bm = PixelBufferMut::new(4, 4);
//! bm.set_rgba(1, 1, [100, 150, 200, 255]).unwrap();
//! let source = bm.into();
//!
//! let gray = grayscale(&source, GrayscaleStyle::Luma);
//! let half = downsample_half(&gray);
//! assert_eq!((half.width(), half.height()), (2, 2));
//! assert_eq!(half.rgba(0, 0), Some([140, 140, 140, 255]));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterpix_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterpix_io as io;
pub use rasterpix_transform as transform;
