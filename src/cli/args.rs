use clap::Parser;
use std::path::PathBuf;

use lumaview::types::{EdgeFilter, GrayscaleMethod, InputKind};

#[derive(Parser)]
#[command(name = "lumaview", version, about = "LUMAVIEW CLI")]
pub struct CliArgs {
    /// Input image file; defaults to lena512.bmp in the working directory
    #[arg(default_value = "lena512.bmp")]
    pub input: PathBuf,

    /// Grayscale conversion weights (rec601, rec709, average)
    #[arg(long, value_enum, default_value_t = GrayscaleMethod::Rec601)]
    pub grayscale: GrayscaleMethod,

    /// Filter applied after conversion (none or sobel)
    #[arg(long, value_enum, default_value_t = EdgeFilter::None)]
    pub filter: EdgeFilter,

    /// How to interpret the input file (auto or matrix)
    #[arg(long, value_enum, default_value_t = InputKind::Auto)]
    pub input_kind: InputKind,

    /// Image size for scaling. Options:
    /// - Custom: any positive integer (e.g., 1024)
    /// - Original: "original" (no scaling)
    #[arg(long, default_value = "original")]
    pub size: String,

    /// Window title
    #[arg(long, default_value = "grayscale")]
    pub title: String,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
