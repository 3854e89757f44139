use image::RgbaImage;
use tracing::{info, warn};

use crate::core::params::NormalizeParams;
use crate::core::processing::resize::{calculate_resize_dimensions, resize_rgba_image};
use crate::core::processing::transparency::make_transparent;
use crate::core::processing::trim::{alpha_bounding_box, trim_alpha};
use crate::error::{Error, Result};
use crate::types::TrimMode;

/// The full normalization pass: background knockout, alpha trim, then a
/// height-locked Lanczos3 resize. Pure with respect to I/O; the caller owns
/// reading and writing files.
///
/// An input whose every pixel classifies as background is returned after the
/// knockout step without cropping or resizing, so an all-white placeholder
/// never divides by zero or collapses to an empty image.
pub fn normalize_logo(mut img: RgbaImage, params: &NormalizeParams) -> Result<RgbaImage> {
    if params.target_height == 0 {
        return Err(Error::ZeroHeight {
            height: params.target_height,
        });
    }

    make_transparent(&mut img, params.threshold);

    let img = match params.trim {
        TrimMode::Alpha => {
            if alpha_bounding_box(&img).is_none() {
                warn!(
                    "Image is entirely background at threshold {}; skipping trim and resize",
                    params.threshold
                );
                return Ok(img);
            }
            trim_alpha(img)
        }
    };
    let (cols, rows) = img.dimensions();
    let (target_cols, target_rows) =
        calculate_resize_dimensions(cols, rows, params.target_height);

    info!(
        "Trimmed to {}x{}, resizing to {}x{}",
        cols, rows, target_cols, target_rows
    );

    resize_rgba_image(&img, target_cols, target_rows).map_err(Error::external)
}
