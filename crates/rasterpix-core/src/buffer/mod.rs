//! PixelBuffer - The RGBA pixel grid container
//!
//! # Byte layout
//!
//! - One pixel is four consecutive bytes: R, G, B, A
//! - Rows are stored top to bottom with no padding (`width * 4` bytes each)
//! - `bytes.len() == width * height * 4` for every buffer this crate hands out
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for cheap cloning (shared ownership) and exposes
//! no mutating methods: once a buffer has been handed to a caller it never
//! changes. Construction and in-place edits go through [`PixelBufferMut`],
//! obtained via [`PixelBuffer::try_into_mut`] or [`PixelBuffer::to_mut`] and
//! frozen back with `Into<PixelBuffer>`.

mod access;

use crate::channel::BYTES_PER_PIXEL;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal buffer data
#[derive(Debug, PartialEq, Eq)]
struct BufferData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Tightly packed RGBA bytes, row-major
    bytes: Vec<u8>,
}

/// Immutable RGBA pixel grid
///
/// The main container of the rasterpix library. Cloning is cheap (the pixel
/// data is shared); use [`PixelBuffer::deep_clone`] for an independent copy.
///
/// # Examples
///
/// ```
/// use rasterpix_core::PixelBuffer;
///
/// let buffer = PixelBuffer::from_raw(2, 1, vec![0; 8]).unwrap();
/// assert_eq!(buffer.width(), 2);
/// assert_eq!(buffer.height(), 1);
/// assert_eq!(buffer.bytes().len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    inner: Arc<BufferData>,
}

/// Number of bytes a `width x height` RGBA grid occupies.
#[inline]
fn byte_len(width: u32, height: u32) -> usize {
    (width as usize) * (height as usize) * BYTES_PER_PIXEL
}

impl PixelBuffer {
    /// Build a buffer from raw RGBA bytes.
    ///
    /// Zero-sized grids (width or height 0 with empty `bytes`) are valid;
    /// they arise naturally when decimating one-pixel-wide buffers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `bytes.len()` is not exactly
    /// `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height);
        if bytes.len() != expected {
            return Err(Error::ShapeMismatch {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        Ok(PixelBuffer {
            inner: Arc::new(BufferData {
                width,
                height,
                bytes,
            }),
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the raw RGBA bytes, row-major.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.inner.bytes
    }

    /// Get the bytes of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.inner.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * stride;
        &self.inner.bytes[start..start + stride]
    }

    /// Check if two buffers have the same width and height.
    pub fn same_size(&self, other: &PixelBuffer) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Get the number of strong references to this buffer's data.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create an independent copy of this buffer.
    ///
    /// Unlike `clone()`, which shares data via `Arc`, this copies the
    /// pixel data.
    pub fn deep_clone(&self) -> Self {
        PixelBuffer {
            inner: Arc::new(BufferData {
                width: self.inner.width,
                height: self.inner.height,
                bytes: self.inner.bytes.clone(),
            }),
        }
    }

    /// Try to take exclusive, mutable ownership of the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data;
    /// otherwise the buffer is returned unchanged.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelBufferMut { inner: data }),
            Err(arc) => Err(PixelBuffer { inner: arc }),
        }
    }

    /// Create a mutable copy of this buffer.
    ///
    /// Always copies; the original is untouched.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: BufferData {
                width: self.inner.width,
                height: self.inner.height,
                bytes: self.inner.bytes.clone(),
            },
        }
    }
}

impl PartialEq for PixelBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.inner.as_ref() == other.inner.as_ref()
    }
}

impl Eq for PixelBuffer {}

/// Mutable pixel grid
///
/// The exclusive-access construction stage: transforms allocate a
/// `PixelBufferMut`, fill it, and freeze it into an immutable
/// [`PixelBuffer`] with `Into<PixelBuffer>`. Exclusivity is enforced at
/// compile time, so freezing never copies.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: BufferData,
}

impl PixelBufferMut {
    /// Create a zero-filled buffer of the given dimensions.
    ///
    /// All bytes start at 0 (transparent black).
    pub fn new(width: u32, height: u32) -> Self {
        PixelBufferMut {
            inner: BufferData {
                width,
                height,
                bytes: vec![0u8; byte_len(width, height)],
            },
        }
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the raw RGBA bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.inner.bytes
    }

    /// Get mutable access to the raw RGBA bytes.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.inner.bytes
    }

    /// Get mutable access to the bytes of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.inner.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * stride;
        &mut self.inner.bytes[start..start + stride]
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buffer_mut: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buffer_mut.inner),
        }
    }
}

pub use access::Rgba;
