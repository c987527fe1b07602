//! Core processing building blocks: grayscale conversion, element-wise
//! matrix ops, the Sobel filter, resizing, and the render pipeline. These
//! are internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
