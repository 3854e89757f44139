use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Decodes an image file into an owned RGBA buffer.
///
/// Sources without an alpha channel gain a fully opaque one, so the trim and
/// knockout passes can assume four channels. Formats are whatever the `image`
/// crate is built with; here PNG and WEBP.
pub fn open_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path)?;
    debug!("Decoded {:?}: {}x{}", path, img.width(), img.height());
    Ok(img.to_rgba8())
}

/// Output path convention: same directory and stem as the input, `.png`
/// extension. A `.png` input maps to itself (in-place overwrite).
pub fn normalized_output_path(input: &Path) -> PathBuf {
    input.with_extension("png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_swaps_extension() {
        assert_eq!(
            normalized_output_path(Path::new("logos/gov-mongolia.webp")),
            PathBuf::from("logos/gov-mongolia.png")
        );
    }

    #[test]
    fn png_input_maps_to_itself() {
        assert_eq!(
            normalized_output_path(Path::new("logos/ulaanbaatar-city.png")),
            PathBuf::from("logos/ulaanbaatar-city.png")
        );
    }

    #[test]
    fn missing_input_is_not_found() {
        match open_rgba(Path::new("/definitely/not/here.png")) {
            Err(Error::NotFound { path }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.png"));
            }
            other => panic!("expected NotFound, got {:?}", other.map(|i| i.dimensions())),
        }
    }
}
