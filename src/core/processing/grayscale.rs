//! Color-to-grayscale conversion.
//!
//! Collapses an `(H, W, 3)` RGB array to an `(H, W)` intensity array using
//! a luminance-weighted combination of the channels. Rec.601 is the default
//! weight set; Rec.709 and a plain channel mean are available as
//! alternatives. Output values are rounded and saturated to u8.
use ndarray::{Array2, Array3};

use crate::types::GrayscaleMethod;

/// Convert an RGB array to a single-channel intensity array.
///
/// The output has the same height and width as the input.
pub fn rgb_to_gray(rgb: &Array3<u8>, method: GrayscaleMethod) -> Array2<u8> {
    let (height, width, _) = rgb.dim();
    let [wr, wg, wb] = method.weights();

    Array2::from_shape_fn((height, width), |(i, j)| {
        let r = rgb[[i, j, 0]] as f32;
        let g = rgb[[i, j, 1]] as f32;
        let b = rgb[[i, j, 2]] as f32;
        (wr * r + wg * g + wb * b).round().clamp(0.0, 255.0) as u8
    })
}
