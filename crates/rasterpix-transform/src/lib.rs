//! rasterpix-transform - Transforms over RGBA pixel buffers
//!
//! This crate provides the transform engine of the rasterpix library:
//!
//! - Grayscale conversion (channel average or Rec. 601 luma)
//! - Half-rate decimation along columns, rows, or both
//! - Rectangular cropping
//! - Per-channel functional remapping and alpha overwrite
//!
//! Every operation is a pure function from `&PixelBuffer` to a freshly
//! allocated `PixelBuffer`; inputs are never mutated and no state is kept
//! between calls, so concurrent use on shared buffers needs no locking.
//! Operations that can fail return [`TransformResult`] instead of silently
//! falling back to the input.

mod crop;
mod decimate;
mod error;
mod gray;
mod remap;

pub use crop::crop;
pub use decimate::{downsample_half, drop_odd_columns, drop_odd_rows};
pub use error::{TransformError, TransformResult};
pub use gray::{GrayscaleStyle, grayscale};
pub use remap::{Channel, PixelMap, modify_alpha, modify_channel, modify_pixels};
