//! Image to buffer conversion
//!
//! Two free functions form the whole codec boundary: [`decode`] copies a
//! platform image's raster into a [`PixelBuffer`], [`encode`] builds a
//! platform image from a buffer. For any valid buffer,
//! `decode(&encode(b).into()) == b` byte-exact; the in-memory
//! [`RgbaImage`] is lossless.

use crate::error::{IoError, IoResult};
use image::{DynamicImage, RgbaImage};
use rasterpix_core::PixelBuffer;

/// Copy a platform image's raster data into a pixel buffer.
///
/// Width and height are taken from the image's native pixel dimensions;
/// the bytes are tightly packed RGBA8 rows (`width * 4` bytes each). Images
/// in other color types are expanded to RGBA8 first, so the buffer is
/// always 4 bytes per pixel.
///
/// # Errors
///
/// Returns [`IoError::Decode`] if the converted raster does not match the
/// image's stated dimensions.
pub fn decode(image: &DynamicImage) -> IoResult<PixelBuffer> {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::from_raw(width, height, rgba.into_raw())
        .map_err(|e| IoError::Decode(format!("raster does not match image dimensions: {e}")))
}

/// Build a platform image from a pixel buffer.
///
/// The buffer's bytes become the image's backing store unchanged, in the
/// same RGBA8 row-major layout.
///
/// # Errors
///
/// Returns [`IoError::Encode`] if the backing store cannot be assembled
/// from the buffer's shape.
pub fn encode(buffer: &PixelBuffer) -> IoResult<RgbaImage> {
    let (width, height) = (buffer.width(), buffer.height());
    RgbaImage::from_raw(width, height, buffer.bytes().to_vec()).ok_or_else(|| {
        IoError::Encode(format!(
            "cannot build {}x{} image from {} bytes",
            width,
            height,
            buffer.bytes().len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_dimensions_and_layout() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgba([9, 8, 7, 6]));
        let buffer = decode(&DynamicImage::ImageRgba8(img)).unwrap();

        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.rgba(2, 1), Some([9, 8, 7, 6]));
    }

    #[test]
    fn test_decode_expands_other_color_types() {
        let mut gray = image::GrayImage::new(2, 1);
        gray.put_pixel(1, 0, image::Luma([200]));
        let buffer = decode(&DynamicImage::ImageLuma8(gray)).unwrap();

        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.rgba(1, 0), Some([200, 200, 200, 255]));
    }

    #[test]
    fn test_encode_layout() {
        let buffer = rasterpix_test::gradient(4, 3);
        let img = encode(&buffer).unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.get_pixel(3, 2).0, [3, 2, 5, 255]);
        assert_eq!(img.as_raw().as_slice(), buffer.bytes());
    }

    #[test]
    fn test_roundtrip_byte_exact() {
        let buffer = rasterpix_test::gradient(5, 7);
        let image = DynamicImage::ImageRgba8(encode(&buffer).unwrap());
        let back = decode(&image).unwrap();
        assert_eq!(back, buffer);
    }

    #[test]
    fn test_roundtrip_zero_sized() {
        let buffer = PixelBuffer::from_raw(0, 0, Vec::new()).unwrap();
        let image = DynamicImage::ImageRgba8(encode(&buffer).unwrap());
        assert_eq!(decode(&image).unwrap(), buffer);
    }
}
