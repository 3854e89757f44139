#![doc = r#"
LOGONORM — a small toolkit for normalizing logo raster assets.

This crate turns arbitrary logo images (PNG/WEBP) into web-ready assets:
near-white background pixels become fully transparent, the image is cropped
to the tightest box around its visible content, and the result is scaled to a
fixed height with Lanczos3 resampling. It powers the LOGONORM CLI and can be
embedded in your own build tooling.

Quick start: normalize a file in place
--------------------------------------
```rust,no_run
use std::path::Path;
use logonorm::{NormalizeParams, normalize_file_in_place};

fn main() -> logonorm::Result<()> {
    let params = NormalizeParams {
        threshold: 200,
        target_height: 100,
        ..NormalizeParams::default()
    };

    let (width, height) =
        normalize_file_in_place(Path::new("public/images/partner-logo.webp"), &params)?;
    println!("saved {width}x{height}");
    Ok(())
}
```

Process an in-memory buffer (no disk I/O)
-----------------------------------------
```rust
use image::{Rgba, RgbaImage};
use logonorm::{NormalizeParams, normalize_to_buffer};

fn main() -> logonorm::Result<()> {
    let img = RgbaImage::from_pixel(300, 150, Rgba([40, 80, 120, 255]));
    let out = normalize_to_buffer(img, &NormalizeParams::default())?;
    assert_eq!(out.dimensions(), (200, 100));
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use logonorm::{NormalizeParams, process_directory};

fn main() -> logonorm::Result<()> {
    let report = process_directory(
        Path::new("public/images/partner logos"),
        &NormalizeParams::default(),
    )?;
    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `logonorm::Result<T>`; match on `logonorm::Error`
to handle specific cases. The batch helpers never abort on a per-item failure;
they log it and count it in the returned `BatchReport`.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — the pure transform primitives (knockout, trim, resize).
- [`types`] — enums and core types (e.g. `TrimMode`, `BoundingBox`).
- [`io`] — raster decode/encode helpers and path conventions.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::NormalizeParams;
pub use error::{Error, Result};
pub use types::{BoundingBox, OutputFormat, TrimMode};

// High-level API re-exports
pub use api::{
    BatchReport, normalize_file_in_place, normalize_file_to_path, normalize_to_buffer,
    process_directory, process_files,
};
