//! rasterpix-io - Platform image boundary
//!
//! Converts between the [`image`] crate's in-memory image types (the
//! "platform image") and [`rasterpix_core::PixelBuffer`], and offers
//! image-to-image convenience operations that run a transform between the
//! two conversions. This is the only crate in the workspace that knows
//! about a platform imaging API; the core container and the transform
//! engine stay independent of it.
//!
//! The conversion is a thin adapter: 8 bits per channel RGBA, straight
//! R, G, B, A byte order, row-major, no padding between rows.

mod apply;
mod codec;
mod error;

pub use apply::{crop_image, downsample_image, grayscale_image, modify_pixels_image};
pub use codec::{decode, encode};
pub use error::{IoError, IoResult};
