use serde::{Deserialize, Serialize};

use crate::types::{EdgeFilter, GrayscaleMethod, InputKind};

/// View parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewParams {
    pub grayscale: GrayscaleMethod,
    pub filter: EdgeFilter,
    pub input_kind: InputKind,
    /// Target long side in pixels; None means original size
    pub size: Option<usize>,
    /// Window title shown by the viewer
    pub title: String,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            grayscale: GrayscaleMethod::Rec601,
            filter: EdgeFilter::None,
            input_kind: InputKind::Auto,
            size: None,
            title: "grayscale".to_string(),
        }
    }
}
