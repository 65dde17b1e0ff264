//! Crop regression test
//!
//! Pins pixel provenance of the cropped rectangle against a uniquely
//! colored source and the rejection of rectangles that do not fit.

use rasterpix_test::{RegParams, product_pattern};
use rasterpix_transform::{TransformError, crop};

#[test]
fn crop_reg() {
    let mut rp = RegParams::new("crop");

    // Pixel (x, y) carries (x * y) % 256 in all four bytes
    let pixs = product_pattern(8, 6);

    // --- Test 1: 3x3 at origin (2, 1) matches source (2..5, 1..4) ---
    let out = crop(&pixs, 3, 3, 2, 1).expect("crop in bounds");
    rp.compare_values(3.0, out.width() as f64, 0.0);
    rp.compare_values(3.0, out.height() as f64, 0.0);
    rp.compare_values((3 * 3 * 4) as f64, out.bytes().len() as f64, 0.0);
    let mut provenance_ok = true;
    for y in 0..3u32 {
        for x in 0..3u32 {
            if out.rgba(x, y) != pixs.rgba(x + 2, y + 1) {
                provenance_ok = false;
            }
        }
    }
    rp.compare_values(1.0, provenance_ok as u8 as f64, 0.0);

    // --- Test 2: full-frame crop is the identity ---
    let full = crop(&pixs, 8, 6, 0, 0).expect("full frame");
    rp.compare_buffers(&pixs, &full);

    // --- Test 3: rectangles that do not fit are rejected ---
    for (w, h, ox, oy) in [(7, 1, 2, 0), (1, 6, 0, 1), (9, 6, 0, 0), (1, 1, 8, 0)] {
        let result = crop(&pixs, w, h, ox, oy);
        let rejected = matches!(result, Err(TransformError::OutOfBounds { .. }));
        rp.compare_values(1.0, rejected as u8 as f64, 0.0);
    }

    // --- Test 4: failure does not hand back the input ---
    // (the error path carries no buffer at all, so a silent fallback is
    // impossible by construction; pin the reported context instead)
    match crop(&pixs, 4, 4, 5, 3) {
        Err(TransformError::OutOfBounds { origin, size, bounds }) => {
            rp.compare_values(5.0, origin.0 as f64, 0.0);
            rp.compare_values(3.0, origin.1 as f64, 0.0);
            rp.compare_values(4.0, size.0 as f64, 0.0);
            rp.compare_values(8.0, bounds.0 as f64, 0.0);
            rp.compare_values(6.0, bounds.1 as f64, 0.0);
        }
        Ok(_) => {
            rp.compare_values(1.0, 0.0, 0.0);
        }
    }

    assert!(rp.cleanup(), "crop regression test failed");
}
