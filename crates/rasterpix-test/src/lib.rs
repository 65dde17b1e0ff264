//! rasterpix-test - Regression test support for rasterpix
//!
//! This crate provides two things to the workspace's `tests/*_reg.rs`
//! integration tests:
//!
//! - [`RegParams`], an indexed comparison tracker that records failures and
//!   reports them all at the end of a test instead of stopping at the first
//! - synthetic buffer builders, since the workspace keeps no image files on
//!   disk: test images are generated, not loaded
//!
//! # Usage
//!
//! ```
//! use rasterpix_test::{RegParams, gradient};
//!
//! let mut rp = RegParams::new("example");
//! let pix = gradient(4, 4);
//! rp.compare_values(4.0, pix.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use rasterpix_core::{PixelBuffer, PixelBufferMut};

/// Build a buffer where every pixel has the same RGBA value.
pub fn solid(width: u32, height: u32, px: [u8; 4]) -> PixelBuffer {
    let mut bm = PixelBufferMut::new(width, height);
    for chunk in bm.bytes_mut().chunks_exact_mut(4) {
        chunk.copy_from_slice(&px);
    }
    bm.into()
}

/// Build a buffer with a coordinate-dependent color ramp.
///
/// Pixel (x, y) gets `R = x % 256`, `G = y % 256`, `B = (x + y) % 256`,
/// `A = 255`. Useful when a test needs every pixel distinguishable from
/// its neighbors.
pub fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut bm = PixelBufferMut::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let px = [(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255];
            bm.set_rgba(x, y, px).expect("coordinates in range");
        }
    }
    bm.into()
}

/// Build a buffer where all four bytes of pixel (x, y) are `(x * y) % 256`.
///
/// The multiplicative pattern makes row/column provenance visible after
/// cropping or decimation.
pub fn product_pattern(width: u32, height: u32) -> PixelBuffer {
    let mut bm = PixelBufferMut::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = ((x as u64 * y as u64) % 256) as u8;
            bm.set_rgba(x, y, [v, v, v, v]).expect("coordinates in range");
        }
    }
    bm.into()
}
