use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use ndarray::Array2;
use tracing::{info, warn};

use crate::error::{Error, Result};

pub fn calculate_resize_dimensions(
    original_cols: usize,
    original_rows: usize,
    target_size: usize,
) -> (usize, usize) {
    let short_side = original_rows.min(original_cols);
    let long_side = original_rows.max(original_cols);

    if target_size > long_side {
        warn!(
            "Target size {} is larger than original long side {}. Keeping original dimensions {}x{}",
            target_size, long_side, original_cols, original_rows
        );
        return (original_cols, original_rows);
    }

    let scale_factor = target_size as f64 / long_side as f64;
    let new_short_side = ((short_side as f64 * scale_factor).round() as usize).max(1);

    if original_cols > original_rows {
        (target_size, new_short_side)
    } else {
        (new_short_side, target_size)
    }
}

pub fn resize_u8_image(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<u8>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        data.to_vec(),
        PixelType::U8,
    )
    .map_err(Error::external)?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::U8);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    Ok(dst_image.into_vec())
}

/// Downscale an intensity image so its long side is `target_size`.
///
/// `None` or an already-matching long side returns the input unchanged.
/// Aspect ratio is preserved; upscaling is never performed.
pub fn resize_gray(gray: Array2<u8>, target_size: Option<usize>) -> Result<Array2<u8>> {
    let Some(size) = target_size else {
        return Ok(gray);
    };
    if size == 0 {
        return Err(Error::ZeroSize { size });
    }

    let (rows, cols) = gray.dim();
    if cols.max(rows) == size {
        return Ok(gray);
    }

    let (new_cols, new_rows) = calculate_resize_dimensions(cols, rows, size);
    if (new_cols, new_rows) == (cols, rows) {
        return Ok(gray);
    }

    info!(
        "Resizing image: {}x{} -> {}x{}",
        cols, rows, new_cols, new_rows
    );

    let data = gray.into_raw_vec();
    let resized = resize_u8_image(&data, cols, rows, new_cols, new_rows)?;
    Array2::from_shape_vec((new_rows, new_cols), resized).map_err(Error::external)
}
