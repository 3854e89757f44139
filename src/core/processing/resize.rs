use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::info;

/// Computes the output dimensions for a height-locked uniform scale.
///
/// The aspect ratio comes from the (already trimmed) input dimensions as
/// floating-point division; the final width is truncated, not rounded, and
/// clamped to at least one pixel so a very narrow logo never collapses.
pub fn calculate_resize_dimensions(
    original_cols: u32,
    original_rows: u32,
    target_height: u32,
) -> (u32, u32) {
    let aspect_ratio = original_cols as f64 / original_rows as f64;
    let new_width = (target_height as f64 * aspect_ratio) as u32;
    (new_width.max(1), target_height)
}

/// Resizes an RGBA image to exact target dimensions with Lanczos3.
///
/// `fast_image_resize` premultiplies and restores alpha around the
/// convolution, so partially transparent edges do not bleed background color.
pub fn resize_rgba_image(
    img: &RgbaImage,
    target_cols: u32,
    target_rows: u32,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    let (cols, rows) = img.dimensions();
    if (cols, rows) == (target_cols, target_rows) {
        return Ok(img.clone());
    }

    info!(
        "Original size: {}x{}, New size: {}x{}",
        cols, rows, target_cols, target_rows
    );

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(cols, rows, img.as_raw().clone(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| "resized buffer does not match target dimensions".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn dimensions_preserve_aspect_ratio() {
        assert_eq!(calculate_resize_dimensions(300, 150, 100), (200, 100));
        assert_eq!(calculate_resize_dimensions(100, 100, 100), (100, 100));
        assert_eq!(calculate_resize_dimensions(640, 480, 120), (160, 120));
    }

    #[test]
    fn width_is_truncated_not_rounded() {
        // 100 * 199/100 = 199.0; 100 * 299/150 = 199.33.. -> 199
        assert_eq!(calculate_resize_dimensions(299, 150, 100), (199, 100));
        // 100 * 151/300 = 50.33.. -> 50
        assert_eq!(calculate_resize_dimensions(151, 300, 100), (50, 100));
    }

    #[test]
    fn narrow_input_never_collapses_to_zero_width() {
        assert_eq!(calculate_resize_dimensions(1, 500, 100), (1, 100));
    }

    #[test]
    fn resize_hits_exact_target_dimensions() {
        let img = RgbaImage::from_pixel(300, 150, Rgba([40, 80, 120, 255]));
        let out = resize_rgba_image(&img, 200, 100).unwrap();
        assert_eq!(out.dimensions(), (200, 100));
        // Uniform opaque input stays opaque through the resampler.
        assert!(out.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn identity_resize_returns_equal_pixels() {
        let mut img = RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]));
        img.put_pixel(3, 3, Rgba([200, 100, 50, 128]));
        let out = resize_rgba_image(&img, 8, 8).unwrap();
        assert_eq!(out.as_raw(), img.as_raw());
    }
}
