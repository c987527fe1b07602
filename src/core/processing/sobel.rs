//! Sobel edge filter: horizontal and vertical gradient kernels combined
//! into a per-pixel magnitude `sqrt(gx^2 + gy^2)`, saturated to u8.
use ndarray::Array2;

use crate::core::processing::ops::{Kernel3, convolve3x3, sqrt_array, square_array, sum_arrays};

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Gradient magnitude of an intensity image.
///
/// Output dimensions equal the input's; magnitudes above 255 saturate.
pub fn sobel_magnitude(gray: &Array2<u8>) -> Array2<u8> {
    let input = gray.mapv(|v| v as f32);

    let gx = convolve3x3(&input, &SOBEL_KERNEL_X);
    let gy = convolve3x3(&input, &SOBEL_KERNEL_Y);
    let magnitude = sqrt_array(&sum_arrays(&square_array(&gx), &square_array(&gy)));

    magnitude.mapv(|v| v.round().clamp(0.0, 255.0) as u8)
}
