//! Per-channel remapping
//!
//! Functional remaps of the red, green, or blue channel and unconditional
//! alpha overwrite. The remap function must be a total, pure `u8 -> u8` map
//! with no dependence on pixel position; that is what makes each operation a
//! simple per-element pass. R, G, B and A touch disjoint bytes, so applying
//! several remaps in one combined pass ([`modify_pixels`]) is equivalent to
//! applying them one at a time, in any order.

use rasterpix_core::{PixelBuffer, channel};
use std::fmt;

/// Color channel selector for [`modify_channel`].
///
/// Alpha is excluded on purpose: alpha is overwritten with a constant via
/// [`modify_alpha`], never remapped as a function of its old value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Red channel (byte 0)
    Red,
    /// Green channel (byte 1)
    Green,
    /// Blue channel (byte 2)
    Blue,
}

impl Channel {
    /// Byte offset of this channel within a pixel.
    #[inline]
    fn offset(self) -> usize {
        match self {
            Channel::Red => channel::RED,
            Channel::Green => channel::GREEN,
            Channel::Blue => channel::BLUE,
        }
    }
}

/// Replace one channel of every pixel with `f(current)`.
///
/// The other three channels are untouched; shape is preserved.
pub fn modify_channel<F>(src: &PixelBuffer, ch: Channel, f: F) -> PixelBuffer
where
    F: Fn(u8) -> u8,
{
    let at = ch.offset();
    let mut out = src.to_mut();
    for px in out.bytes_mut().chunks_exact_mut(channel::BYTES_PER_PIXEL) {
        px[at] = f(px[at]);
    }
    out.into()
}

/// Set every pixel's alpha to a fixed value.
///
/// An unconditional overwrite, not a function of the old alpha; R, G, B
/// bytes are untouched.
pub fn modify_alpha(src: &PixelBuffer, alpha: u8) -> PixelBuffer {
    let mut out = src.to_mut();
    for px in out.bytes_mut().chunks_exact_mut(channel::BYTES_PER_PIXEL) {
        px[channel::ALPHA] = alpha;
    }
    out.into()
}

type ChannelFn = Box<dyn Fn(u8) -> u8>;

/// Combined per-channel configuration for [`modify_pixels`].
///
/// Each color channel defaults to identity and the alpha overwrite defaults
/// to off, so an empty map is a no-op; set only the parts you need:
///
/// ```
/// use rasterpix_transform::{PixelMap, modify_pixels};
/// use rasterpix_core::PixelBufferMut;
///
/// let map = PixelMap::new().red(|v| 255 - v).alpha(200);
/// let mut bm = PixelBufferMut::new(1, 1);
/// bm.set_rgba(0, 0, [10, 20, 30, 255]).unwrap();
/// let out = modify_pixels(&bm.into(), &map);
/// assert_eq!(out.rgba(0, 0), Some([245, 20, 30, 200]));
/// ```
#[derive(Default)]
pub struct PixelMap {
    red: Option<ChannelFn>,
    green: Option<ChannelFn>,
    blue: Option<ChannelFn>,
    alpha: Option<u8>,
}

impl PixelMap {
    /// Create an empty map (identity on every channel, alpha untouched).
    pub fn new() -> Self {
        Self::default()
    }

    /// Remap the red channel with `f`.
    pub fn red(mut self, f: impl Fn(u8) -> u8 + 'static) -> Self {
        self.red = Some(Box::new(f));
        self
    }

    /// Remap the green channel with `f`.
    pub fn green(mut self, f: impl Fn(u8) -> u8 + 'static) -> Self {
        self.green = Some(Box::new(f));
        self
    }

    /// Remap the blue channel with `f`.
    pub fn blue(mut self, f: impl Fn(u8) -> u8 + 'static) -> Self {
        self.blue = Some(Box::new(f));
        self
    }

    /// Overwrite every alpha byte with `alpha`.
    pub fn alpha(mut self, alpha: u8) -> Self {
        self.alpha = Some(alpha);
        self
    }
}

impl fmt::Debug for PixelMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelMap")
            .field("red", &self.red.as_ref().map(|_| "fn"))
            .field("green", &self.green.as_ref().map(|_| "fn"))
            .field("blue", &self.blue.as_ref().map(|_| "fn"))
            .field("alpha", &self.alpha)
            .finish()
    }
}

/// Apply a [`PixelMap`] in a single pass over the buffer.
///
/// Equivalent to running the configured channel remaps and alpha overwrite
/// as separate passes; each touches disjoint bytes.
pub fn modify_pixels(src: &PixelBuffer, map: &PixelMap) -> PixelBuffer {
    let mut out = src.to_mut();
    for px in out.bytes_mut().chunks_exact_mut(channel::BYTES_PER_PIXEL) {
        if let Some(f) = &map.red {
            px[channel::RED] = f(px[channel::RED]);
        }
        if let Some(f) = &map.green {
            px[channel::GREEN] = f(px[channel::GREEN]);
        }
        if let Some(f) = &map.blue {
            px[channel::BLUE] = f(px[channel::BLUE]);
        }
        if let Some(alpha) = map.alpha {
            px[channel::ALPHA] = alpha;
        }
    }
    out.into()
}
