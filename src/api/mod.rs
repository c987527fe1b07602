//! High-level, ergonomic library API: load an input file and render it to an
//! in-memory display frame. Prefer these entrypoints over the low-level
//! processing modules when integrating LUMAVIEW.
use std::path::Path;

use tracing::info;

use crate::core::params::ViewParams;
use crate::core::processing::pipeline::{GrayFrame, render_gray, render_rgb};
use crate::error::Result;
use crate::io::{load_matrix, load_rgb};
use crate::types::InputKind;

/// True when `path` should go through the matrix reader under `Auto`.
fn is_matrix_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

/// Load `input` according to `params` and render it to a display frame.
///
/// `InputKind::Auto` decodes through the image stack, falling back to the
/// plain-text matrix reader for `.txt` files; `InputKind::Matrix` forces
/// the matrix reader. Matrix inputs are already single-channel, so the
/// grayscale step is skipped for them.
pub fn render_frame_from_path(input: &Path, params: &ViewParams) -> Result<GrayFrame> {
    let use_matrix = match params.input_kind {
        InputKind::Matrix => true,
        InputKind::Auto => is_matrix_path(input),
    };

    let frame = if use_matrix {
        let gray = load_matrix(input)?;
        render_gray(gray, params)?
    } else {
        let rgb = load_rgb(input)?;
        render_rgb(&rgb, params)?
    };

    info!(
        "Rendered {:?}: {}x{}, grayscale={}, filter={}",
        input, frame.width, frame.height, params.grayscale, params.filter
    );
    Ok(frame)
}
