//! Pixel access functions
//!
//! Low-level functions for reading and writing individual pixels.
//! Transforms normally work on whole rows or the flat byte slice; these
//! accessors exist for spot checks and for building test fixtures.

use super::{PixelBuffer, PixelBufferMut};
use crate::channel::BYTES_PER_PIXEL;
use crate::error::{Error, Result};

/// One RGBA pixel value, in channel order R, G, B, A.
pub type Rgba = [u8; 4];

/// Byte offset of pixel (x, y) in a buffer of the given width.
#[inline]
fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL
}

impl PixelBuffer {
    /// Get the RGBA value at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn rgba(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let at = pixel_offset(self.width(), x, y);
        let mut px = [0u8; BYTES_PER_PIXEL];
        px.copy_from_slice(&self.bytes()[at..at + BYTES_PER_PIXEL]);
        Some(px)
    }
}

impl PixelBufferMut {
    /// Get the RGBA value at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn rgba(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let at = pixel_offset(self.width(), x, y);
        let mut px = [0u8; BYTES_PER_PIXEL];
        px.copy_from_slice(&self.bytes()[at..at + BYTES_PER_PIXEL]);
        Some(px)
    }

    /// Set the RGBA value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, px: Rgba) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        let at = pixel_offset(self.width(), x, y);
        self.bytes_mut()[at..at + BYTES_PER_PIXEL].copy_from_slice(&px);
        Ok(())
    }
}
