//! I/O layer for decoding input rasters.
//! Provides the `raster` decoder for common image formats and the `matrix`
//! reader for the plain-text intensity format.
pub mod matrix;
pub use matrix::{MatrixError, load_matrix, parse_matrix};

pub mod raster;
pub use raster::load_rgb;
