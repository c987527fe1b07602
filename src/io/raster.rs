//! Decoder for common raster formats (PNG, JPEG, BMP, ...) backed by the
//! `image` crate. Everything is normalized to an interleaved 8-bit RGB
//! array; alpha is dropped, 16-bit sources are narrowed.
use std::path::Path;

use ndarray::Array3;
use tracing::debug;

use crate::error::{Error, Result};

/// Decode `path` into an `(height, width, 3)` RGB array.
///
/// A missing or undecodable file is a hard error carrying the decoder's
/// diagnostic; a decoded image with zero pixels is rejected as
/// `Error::EmptyImage`.
pub fn load_rgb(path: &Path) -> Result<Array3<u8>> {
    let img = image::open(path)?.to_rgb8();
    let (width, height) = img.dimensions();
    debug!("Decoded {:?}: {}x{} RGB", path, width, height);

    if width == 0 || height == 0 {
        return Err(Error::EmptyImage);
    }

    let data = img.into_raw();
    Array3::from_shape_vec((height as usize, width as usize, 3), data)
        .map_err(Error::external)
}
