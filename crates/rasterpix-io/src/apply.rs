//! Image-level convenience operations
//!
//! Each function decodes a platform image, runs one transform pipeline over
//! the buffer, and encodes the result back, so a caller holding an
//! [`image::DynamicImage`] never touches `PixelBuffer` directly. Failures
//! at any stage propagate; there is no silent fallback to the input image.

use crate::codec::{decode, encode};
use crate::error::IoResult;
use image::{DynamicImage, RgbaImage};
use rasterpix_transform::{GrayscaleStyle, PixelMap, crop, downsample_half, grayscale, modify_pixels};

/// Convert an image to grayscale with the given style.
pub fn grayscale_image(image: &DynamicImage, style: GrayscaleStyle) -> IoResult<RgbaImage> {
    let buffer = decode(image)?;
    encode(&grayscale(&buffer, style))
}

/// Halve an image in both dimensions by dropping odd columns, then odd rows.
pub fn downsample_image(image: &DynamicImage) -> IoResult<RgbaImage> {
    let buffer = decode(image)?;
    encode(&downsample_half(&buffer))
}

/// Crop an image to a `new_width x new_height` rectangle at
/// `(origin_x, origin_y)`.
///
/// # Errors
///
/// A rectangle that exceeds the image bounds is reported via
/// [`IoError::Transform`](crate::IoError::Transform); the caller decides
/// what to show instead.
pub fn crop_image(
    image: &DynamicImage,
    new_width: u32,
    new_height: u32,
    origin_x: u32,
    origin_y: u32,
) -> IoResult<RgbaImage> {
    let buffer = decode(image)?;
    let cropped = crop(&buffer, new_width, new_height, origin_x, origin_y)?;
    encode(&cropped)
}

/// Apply a combined per-channel remap and alpha overwrite to an image.
pub fn modify_pixels_image(image: &DynamicImage, map: &PixelMap) -> IoResult<RgbaImage> {
    let buffer = decode(image)?;
    encode(&modify_pixels(&buffer, map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoError;

    fn test_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(encode(&rasterpix_test::gradient(width, height)).unwrap())
    }

    #[test]
    fn test_grayscale_image() {
        let img = test_image(3, 3);
        let gray = grayscale_image(&img, GrayscaleStyle::Luma).unwrap();
        assert_eq!(gray.dimensions(), (3, 3));
        for px in gray.pixels() {
            let [r, g, b, _] = px.0;
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn test_downsample_image() {
        let img = test_image(8, 6);
        let half = downsample_image(&img).unwrap();
        assert_eq!(half.dimensions(), (4, 3));
    }

    #[test]
    fn test_crop_image() {
        let img = test_image(10, 8);
        let out = crop_image(&img, 4, 3, 2, 1).unwrap();
        assert_eq!(out.dimensions(), (4, 3));
        // Top-left of the crop is source pixel (2, 1)
        assert_eq!(out.get_pixel(0, 0).0, [2, 1, 3, 255]);
    }

    #[test]
    fn test_crop_image_out_of_bounds() {
        let img = test_image(4, 4);
        let err = crop_image(&img, 5, 1, 0, 0).unwrap_err();
        assert!(matches!(err, IoError::Transform(_)));
    }

    #[test]
    fn test_modify_pixels_image() {
        let img = test_image(2, 2);
        let map = PixelMap::new().blue(|_| 0).alpha(128);
        let out = modify_pixels_image(&img, &map).unwrap();
        for px in out.pixels() {
            assert_eq!(px.0[2], 0);
            assert_eq!(px.0[3], 128);
        }
    }
}
