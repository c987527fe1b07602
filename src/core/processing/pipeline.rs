use ndarray::{Array2, Array3};
use tracing::debug;

use crate::core::params::ViewParams;
use crate::core::processing::grayscale::rgb_to_gray;
use crate::core::processing::resize::resize_gray;
use crate::core::processing::sobel::sobel_magnitude;
use crate::error::Result;
use crate::types::EdgeFilter;

/// A display-ready single-channel frame.
#[derive(Debug, Clone)]
pub struct GrayFrame {
    pub width: usize,
    pub height: usize,
    /// Row-major intensity values, `width * height` bytes
    pub data: Vec<u8>,
}

impl GrayFrame {
    pub fn from_array(gray: Array2<u8>) -> Self {
        let (height, width) = gray.dim();
        Self {
            width,
            height,
            data: gray.into_raw_vec(),
        }
    }
}

/// Render an RGB array to a display frame: grayscale, then the optional
/// filter and resize steps.
pub fn render_rgb(rgb: &Array3<u8>, params: &ViewParams) -> Result<GrayFrame> {
    let gray = rgb_to_gray(rgb, params.grayscale);
    debug!(
        "Converted to grayscale ({}): {}x{}",
        params.grayscale,
        gray.ncols(),
        gray.nrows()
    );
    render_gray(gray, params)
}

/// Render an already single-channel array to a display frame.
pub fn render_gray(gray: Array2<u8>, params: &ViewParams) -> Result<GrayFrame> {
    let filtered = match params.filter {
        EdgeFilter::None => gray,
        EdgeFilter::Sobel => sobel_magnitude(&gray),
    };
    let resized = resize_gray(filtered, params.size)?;
    Ok(GrayFrame::from_array(resized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GrayscaleMethod;
    use ndarray::Array3;

    #[test]
    fn rgb_input_becomes_single_channel_of_same_size() {
        let rgb = Array3::from_shape_fn((6, 10, 3), |(_, j, _)| (j * 20) as u8);
        let frame = render_rgb(&rgb, &ViewParams::default()).unwrap();
        assert_eq!((frame.width, frame.height), (10, 6));
        assert_eq!(frame.data.len(), 60);
        // Equal channels: intensity equals the channel value per column.
        assert_eq!(frame.data[0], 0);
        assert_eq!(frame.data[9], 180);
    }

    #[test]
    fn sobel_and_resize_steps_chain() {
        let rgb = Array3::from_shape_fn(
            (16, 32, 3),
            |(_, j, _)| if j < 16 { 0 } else { 255 },
        );
        let params = ViewParams {
            grayscale: GrayscaleMethod::Rec601,
            filter: crate::types::EdgeFilter::Sobel,
            size: Some(16),
            ..Default::default()
        };
        let frame = render_rgb(&rgb, &params).unwrap();
        assert_eq!((frame.width, frame.height), (16, 8));
        assert!(frame.data.iter().any(|&v| v > 0), "edge response survived resize");
    }
}
