use ndarray::{Array2, Zip};

/// 3x3 convolution kernel
pub type Kernel3 = [[f32; 3]; 3];

/// Element-wise sum: a + b
pub fn sum_arrays(a: &Array2<f32>, b: &Array2<f32>) -> Array2<f32> {
    a + b
}

/// Element-wise square: a * a
pub fn square_array(a: &Array2<f32>) -> Array2<f32> {
    let mut result = Array2::zeros(a.dim());
    Zip::from(a).and(&mut result).for_each(|&v, res| {
        *res = v * v;
    });
    result
}

/// Element-wise square root of non-negative values
pub fn sqrt_array(a: &Array2<f32>) -> Array2<f32> {
    a.mapv(|v| v.max(0.0).sqrt())
}

/// Convolve with a 3x3 kernel. Taps falling outside the image contribute
/// zero, so border pixels see a partial kernel.
pub fn convolve3x3(input: &Array2<f32>, kernel: &Kernel3) -> Array2<f32> {
    let (rows, cols) = input.dim();
    let mut output = Array2::zeros((rows, cols));

    for i in 0..rows {
        for j in 0..cols {
            let mut sum = 0.0;
            for (m, kernel_row) in kernel.iter().enumerate() {
                let ii = i as isize + m as isize - 1;
                if ii < 0 || ii >= rows as isize {
                    continue;
                }
                for (n, &k) in kernel_row.iter().enumerate() {
                    let jj = j as isize + n as isize - 1;
                    if jj < 0 || jj >= cols as isize {
                        continue;
                    }
                    sum += k * input[[ii as usize, jj as usize]];
                }
            }
            output[[i, j]] = sum;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const IDENTITY: Kernel3 = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];

    #[test]
    fn identity_kernel_preserves_the_image() {
        let img = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let out = convolve3x3(&img, &IDENTITY);
        assert_eq!(out, img);
    }

    #[test]
    fn box_kernel_sums_the_neighborhood() {
        let ones: Kernel3 = [[1.0; 3]; 3];
        let img = Array2::from_elem((5, 5), 1.0_f32);
        let out = convolve3x3(&img, &ones);
        // Interior pixels see the full 3x3 window, corners only 2x2.
        assert_eq!(out[[2, 2]], 9.0);
        assert_eq!(out[[0, 0]], 4.0);
        assert_eq!(out[[0, 2]], 6.0);
    }

    #[test]
    fn elementwise_helpers_compose() {
        let a = array![[3.0, 4.0]];
        let b = array![[1.0, 2.0]];
        let squared = square_array(&a);
        assert_eq!(squared, array![[9.0, 16.0]]);
        let total = sum_arrays(&squared, &square_array(&b));
        assert_eq!(sqrt_array(&total), array![[10.0_f32.sqrt(), 20.0_f32.sqrt()]]);
    }

    #[test]
    fn sqrt_clamps_negative_inputs_to_zero() {
        let a = array![[-4.0, 9.0]];
        assert_eq!(sqrt_array(&a), array![[0.0, 3.0]]);
    }
}
