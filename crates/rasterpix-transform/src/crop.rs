//! Rectangular cropping

use crate::error::{TransformError, TransformResult};
use rasterpix_core::{PixelBuffer, PixelBufferMut, channel::BYTES_PER_PIXEL};

/// Extract a `new_width x new_height` rectangle whose top-left corner is
/// `(origin_x, origin_y)` in source pixel coordinates.
///
/// Row order and byte order within each row are preserved. The output is
/// exactly the requested size; a rectangle that does not fit is rejected
/// rather than clipped or silently replaced by the input.
///
/// # Errors
///
/// Returns [`TransformError::OutOfBounds`] when
/// `origin_x + new_width > width` or `origin_y + new_height > height`.
///
/// # Examples
///
/// ```
/// use rasterpix_core::PixelBufferMut;
/// use rasterpix_transform::crop;
///
/// let src = PixelBufferMut::new(10, 8).into();
/// let out = crop(&src, 4, 3, 2, 1).unwrap();
/// assert_eq!((out.width(), out.height()), (4, 3));
/// assert!(crop(&src, 4, 3, 7, 0).is_err());
/// ```
pub fn crop(
    src: &PixelBuffer,
    new_width: u32,
    new_height: u32,
    origin_x: u32,
    origin_y: u32,
) -> TransformResult<PixelBuffer> {
    let (width, height) = (src.width(), src.height());

    // u64 arithmetic keeps origin + size from wrapping
    if origin_x as u64 + new_width as u64 > width as u64
        || origin_y as u64 + new_height as u64 > height as u64
    {
        return Err(TransformError::OutOfBounds {
            origin: (origin_x, origin_y),
            size: (new_width, new_height),
            bounds: (width, height),
        });
    }

    let mut out = PixelBufferMut::new(new_width, new_height);
    let start = origin_x as usize * BYTES_PER_PIXEL;
    let row_bytes = new_width as usize * BYTES_PER_PIXEL;

    for r in 0..new_height {
        let src_row = src.row(origin_y + r);
        out.row_mut(r)
            .copy_from_slice(&src_row[start..start + row_bytes]);
    }

    Ok(out.into())
}
