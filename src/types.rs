//! Shared types and enums used across LUMAVIEW.
//! Includes `GrayscaleMethod`, `EdgeFilter`, and `InputKind`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Weight set used to collapse a three-channel pixel to a single intensity.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum GrayscaleMethod {
    /// ITU-R BT.601 luma (0.299, 0.587, 0.114)
    Rec601,
    /// ITU-R BT.709 luma (0.2126, 0.7152, 0.0722)
    Rec709,
    /// Unweighted channel mean
    Average,
}

impl GrayscaleMethod {
    /// RGB weights for this method. Each set sums to 1.
    pub fn weights(self) -> [f32; 3] {
        match self {
            GrayscaleMethod::Rec601 => [0.299, 0.587, 0.114],
            GrayscaleMethod::Rec709 => [0.2126, 0.7152, 0.0722],
            GrayscaleMethod::Average => [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
        }
    }
}

impl std::fmt::Display for GrayscaleMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GrayscaleMethod::Rec601 => "Rec601",
            GrayscaleMethod::Rec709 => "Rec709",
            GrayscaleMethod::Average => "Average",
        };
        write!(f, "{}", s)
    }
}

/// Post-conversion filter applied to the intensity image.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum EdgeFilter {
    None,
    Sobel,
}

impl std::fmt::Display for EdgeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeFilter::None => write!(f, "None"),
            EdgeFilter::Sobel => write!(f, "Sobel"),
        }
    }
}

/// How the input file is interpreted.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum InputKind {
    /// Decode through the image stack; `.txt` falls back to the matrix reader
    Auto,
    /// Plain-text intensity matrix (`rows cols` header, then values)
    Matrix,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Auto => write!(f, "Auto"),
            InputKind::Matrix => write!(f, "Matrix"),
        }
    }
}
