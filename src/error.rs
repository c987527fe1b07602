//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decoder, and matrix-format errors, and provides
//! semantic variants for argument validation and display failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Matrix format error: {0}")]
    Matrix(#[from] crate::io::MatrixError),

    #[error("Display error: {0}")]
    Display(String),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: usize },

    #[error("Decoded image has zero width or height")]
    EmptyImage,

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
