#![doc = r#"
LUMAVIEW — a small grayscale image inspector.

This crate decodes a raster image, reduces it to a single-channel 8-bit
intensity image with a luminance-weighted conversion, optionally runs a
Sobel edge pass, and shows the result in a native window that stays open
until a key is pressed. It powers the LUMAVIEW CLI and can be embedded in
your own Rust applications as a library.

Quick start: view a file
------------------------
```rust,no_run
use std::path::Path;
use lumaview::{ViewParams, render_frame_from_path};

fn main() -> lumaview::Result<()> {
    let params = ViewParams::default();
    let frame = render_frame_from_path(Path::new("lena512.bmp"), &params)?;
    lumaview::display::show_frame(&params.title, frame)
}
```

Render in-memory to a `GrayFrame`
---------------------------------
```rust,no_run
use std::path::Path;
use lumaview::{EdgeFilter, GrayscaleMethod, ViewParams, render_frame_from_path};

fn main() -> lumaview::Result<()> {
    let params = ViewParams {
        grayscale: GrayscaleMethod::Rec709,
        filter: EdgeFilter::Sobel,
        size: Some(1024),
        ..Default::default()
    };

    let frame = render_frame_from_path(Path::new("photo.png"), &params)?;
    // frame.data holds width * height intensity bytes, row-major.
    println!("{}x{}", frame.width, frame.height);
    Ok(())
}
```

Typed building blocks (when you already have arrays)
----------------------------------------------------
```rust
use ndarray::Array3;
use lumaview::core::processing::grayscale::rgb_to_gray;
use lumaview::core::processing::sobel::sobel_magnitude;
use lumaview::GrayscaleMethod;

fn edges(rgb: &Array3<u8>) -> ndarray::Array2<u8> {
    let gray = rgb_to_gray(rgb, GrayscaleMethod::Rec601);
    sobel_magnitude(&gray)
}
```

Error handling
--------------
All public functions return `lumaview::Result<T>`; match on
`lumaview::Error` to handle specific cases, e.g. decoder or matrix-format
errors.

```rust,no_run
use std::path::Path;
use lumaview::{Error, ViewParams, render_frame_from_path};

fn main() {
    match render_frame_from_path(Path::new("missing.png"), &ViewParams::default()) {
        Ok(frame) => println!("{}x{}", frame.width, frame.height),
        Err(Error::Decode(e)) => eprintln!("decode error: {e}"),
        Err(Error::Matrix(e)) => eprintln!("matrix error: {e}"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Feature flags
-------------
- `display`: builds the native window viewer (on by default). The library
  API works without it.
- `full`: enables a complete feature set for typical end-to-end workflows.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `GrayscaleMethod`, `EdgeFilter`).
- [`io`] — raster and text-matrix readers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Display module (only available with display feature)
#[cfg(feature = "display")]
pub mod display;

// Curated public API surface
// Types
pub use core::params::ViewParams;
pub use error::{Error, Result};
pub use types::{EdgeFilter, GrayscaleMethod, InputKind};

// Readers
pub use io::matrix::{MatrixError, load_matrix, parse_matrix};
pub use io::raster::load_rgb;

// High-level API re-exports
pub use api::render_frame_from_path;
pub use core::processing::pipeline::{GrayFrame, render_gray, render_rgb};
