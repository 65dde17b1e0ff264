//! Half-rate decimation
//!
//! Nearest-neighbor decimation that keeps every other column or row and
//! discards the rest. Aliasing is expected; these are not area-averaging
//! resizes. The retained samples are pinned exactly: a 0-based index `i`
//! survives iff `(i + 1) % 2 == 0`, so columns/rows 1, 3, 5, … are kept.
//! Changing the parity shifts the surviving samples and visibly changes
//! the output, so both passes use the same test.

use rasterpix_core::{PixelBuffer, PixelBufferMut, channel::BYTES_PER_PIXEL};

/// Keep 0-based odd columns, halving the width (floor); height unchanged.
pub fn drop_odd_columns(src: &PixelBuffer) -> PixelBuffer {
    let width = src.width() as usize;
    let mut out = PixelBufferMut::new(src.width() / 2, src.height());

    for y in 0..src.height() {
        let src_row = src.row(y);
        let dst_row = out.row_mut(y);
        let mut at = 0;
        for x in 0..width {
            if (x + 1) % 2 != 0 {
                continue;
            }
            let from = x * BYTES_PER_PIXEL;
            dst_row[at..at + BYTES_PER_PIXEL]
                .copy_from_slice(&src_row[from..from + BYTES_PER_PIXEL]);
            at += BYTES_PER_PIXEL;
        }
    }

    out.into()
}

/// Keep 0-based odd rows, halving the height (floor); width unchanged.
pub fn drop_odd_rows(src: &PixelBuffer) -> PixelBuffer {
    let mut out = PixelBufferMut::new(src.width(), src.height() / 2);

    let mut at = 0;
    for y in 0..src.height() as usize {
        if (y + 1) % 2 != 0 {
            continue;
        }
        out.row_mut(at).copy_from_slice(src.row(y as u32));
        at += 1;
    }

    out.into()
}

/// Halve both dimensions by composing the two decimation passes.
///
/// Deliberately runs [`drop_odd_columns`] then [`drop_odd_rows`] rather than
/// a fused single-pass resize, so which samples survive matches the two-pass
/// composition bit for bit.
pub fn downsample_half(src: &PixelBuffer) -> PixelBuffer {
    drop_odd_rows(&drop_odd_columns(src))
}
