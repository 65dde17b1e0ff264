//! Grayscale conversion
//!
//! Replaces R, G, B of every pixel with a single luminance value computed
//! from the original channels; alpha is untouched. Two formulas are offered,
//! both truncating (not rounding) the real-valued result.

use rasterpix_core::{PixelBuffer, channel};

/// Luminance formula for [`grayscale`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrayscaleStyle {
    /// Plain channel average: `trunc((R + G + B) / 3)`
    Average,
    /// Rec. 601 luma: `trunc(0.299 R + 0.587 G + 0.114 B)`
    Luma,
}

/// Convert a buffer to grayscale.
///
/// Per-pixel, order-independent map: output shape and alpha bytes are
/// identical to the source. Applying the same style twice is a no-op after
/// the first pass, since both formulas map three equal channels to that
/// same value.
///
/// # Examples
///
/// ```
/// use rasterpix_core::PixelBufferMut;
/// use rasterpix_transform::{GrayscaleStyle, grayscale};
///
/// let mut bm = PixelBufferMut::new(1, 1);
/// bm.set_rgba(0, 0, [100, 150, 200, 255]).unwrap();
/// let gray = grayscale(&bm.into(), GrayscaleStyle::Luma);
/// assert_eq!(gray.rgba(0, 0), Some([140, 140, 140, 255]));
/// ```
pub fn grayscale(src: &PixelBuffer, style: GrayscaleStyle) -> PixelBuffer {
    let mut out = src.to_mut();
    for px in out.bytes_mut().chunks_exact_mut(channel::BYTES_PER_PIXEL) {
        let (r, g, b) = (px[channel::RED], px[channel::GREEN], px[channel::BLUE]);
        let gray = match style {
            GrayscaleStyle::Average => average_luminance(r, g, b),
            GrayscaleStyle::Luma => luma_luminance(r, g, b),
        };
        px[channel::RED] = gray;
        px[channel::GREEN] = gray;
        px[channel::BLUE] = gray;
    }
    out.into()
}

/// `trunc((r + g + b) / 3)`; integer division is exactly the floor of the
/// real-valued average.
#[inline]
fn average_luminance(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// `trunc(0.299 r + 0.587 g + 0.114 b)`, computed in integer fixed point.
///
/// The coefficients are exact thousandths, so `(299 r + 587 g + 114 b) / 1000`
/// is the floor of the true real value. Floating-point per-term products drift
/// below the true value for some inputs (`0.299 v + 0.587 v + 0.114 v < v` for
/// many `v`), which would break the fixed-point-after-one-pass guarantee.
#[inline]
fn luma_luminance(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterpix_core::PixelBufferMut;

    #[test]
    fn test_average_luminance() {
        assert_eq!(average_luminance(0, 0, 0), 0);
        assert_eq!(average_luminance(255, 255, 255), 255);
        // (10 + 20 + 31) / 3 = 20.33… -> 20
        assert_eq!(average_luminance(10, 20, 31), 20);
        // (1 + 1 + 0) / 3 = 0.66… truncates, not rounds
        assert_eq!(average_luminance(1, 1, 0), 0);
    }

    #[test]
    fn test_luma_luminance() {
        // 29.9 + 88.05 + 22.8 = 140.75 -> 140
        assert_eq!(luma_luminance(100, 150, 200), 140);
        assert_eq!(luma_luminance(0, 0, 0), 0);
        assert_eq!(luma_luminance(255, 255, 255), 255);
    }

    #[test]
    fn test_luma_fixed_point_after_one_pass() {
        // Every gray level must map to itself
        for v in 0..=255u8 {
            assert_eq!(luma_luminance(v, v, v), v, "luma moved gray level {v}");
            assert_eq!(average_luminance(v, v, v), v, "average moved gray level {v}");
        }
    }

    #[test]
    fn test_grayscale_leaves_alpha() {
        let mut bm = PixelBufferMut::new(2, 1);
        bm.set_rgba(0, 0, [1, 2, 3, 77]).unwrap();
        bm.set_rgba(1, 0, [200, 100, 0, 0]).unwrap();
        let src = bm.into();

        for style in [GrayscaleStyle::Average, GrayscaleStyle::Luma] {
            let gray = grayscale(&src, style);
            assert_eq!(gray.rgba(0, 0).unwrap()[3], 77);
            assert_eq!(gray.rgba(1, 0).unwrap()[3], 0);
        }
    }

    #[test]
    fn test_grayscale_average() {
        let mut bm = PixelBufferMut::new(1, 1);
        bm.set_rgba(0, 0, [10, 20, 31, 255]).unwrap();
        let gray = grayscale(&bm.into(), GrayscaleStyle::Average);
        assert_eq!(gray.rgba(0, 0), Some([20, 20, 20, 255]));
    }

    #[test]
    fn test_grayscale_does_not_touch_source() {
        let mut bm = PixelBufferMut::new(1, 1);
        bm.set_rgba(0, 0, [100, 150, 200, 255]).unwrap();
        let src: rasterpix_core::PixelBuffer = bm.into();
        let _ = grayscale(&src, GrayscaleStyle::Luma);
        assert_eq!(src.rgba(0, 0), Some([100, 150, 200, 255]));
    }
}
