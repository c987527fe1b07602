//! Reader for the plain-text intensity matrix format: a `rows cols` header
//! followed by `rows * cols` whitespace-separated integers. Values outside
//! 0..=255 are clamped.
use std::fs;
use std::path::Path;

use ndarray::Array2;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing or incomplete header, expected `rows cols`")]
    BadHeader,

    #[error("Matrix dimensions must be positive, got {rows}x{cols}")]
    ZeroDimensions { rows: usize, cols: usize },

    #[error("Expected {expected} values, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("Not a number: {token}")]
    BadToken { token: String },
}

/// Parse matrix text into a `(rows, cols)` intensity array.
pub fn parse_matrix(text: &str) -> Result<Array2<u8>, MatrixError> {
    let mut tokens = text.split_whitespace();

    let rows = next_dimension(&mut tokens)?;
    let cols = next_dimension(&mut tokens)?;
    if rows == 0 || cols == 0 {
        return Err(MatrixError::ZeroDimensions { rows, cols });
    }

    let expected = rows * cols;
    let mut data = Vec::with_capacity(expected);
    for token in tokens.by_ref().take(expected) {
        let value: i64 = token.parse().map_err(|_| MatrixError::BadToken {
            token: token.to_string(),
        })?;
        data.push(value.clamp(0, 255) as u8);
    }

    if data.len() < expected {
        return Err(MatrixError::Truncated {
            expected,
            found: data.len(),
        });
    }

    // Array2::from_shape_vec cannot fail here: data.len() == rows * cols
    Ok(Array2::from_shape_vec((rows, cols), data).expect("shape checked above"))
}

/// Read and parse a matrix file from disk.
pub fn load_matrix(path: &Path) -> Result<Array2<u8>, MatrixError> {
    let text = fs::read_to_string(path)?;
    let matrix = parse_matrix(&text)?;
    debug!(
        "Loaded matrix {:?}: {}x{}",
        path,
        matrix.ncols(),
        matrix.nrows()
    );
    Ok(matrix)
}

fn next_dimension<'a, I: Iterator<Item = &'a str>>(tokens: &mut I) -> Result<usize, MatrixError> {
    let token = tokens.next().ok_or(MatrixError::BadHeader)?;
    token.parse().map_err(|_| MatrixError::BadToken {
        token: token.to_string(),
    })
}
