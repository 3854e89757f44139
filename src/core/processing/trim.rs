use image::{RgbaImage, imageops};
use tracing::debug;

use crate::types::BoundingBox;

/// Tightest box containing every pixel with non-zero alpha, or `None` when
/// the whole image is transparent. `right`/`bottom` are exclusive.
pub fn alpha_bounding_box(img: &RgbaImage) -> Option<BoundingBox> {
    let mut left = u32::MAX;
    let mut top = u32::MAX;
    let mut right = 0u32;
    let mut bottom = 0u32;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel.0[3] > 0 {
            left = left.min(x);
            top = top.min(y);
            right = right.max(x + 1);
            bottom = bottom.max(y + 1);
        }
    }

    if left == u32::MAX {
        return None;
    }

    Some(BoundingBox {
        left,
        top,
        right,
        bottom,
    })
}

/// Crops the image to its alpha bounding box. A fully transparent image is
/// returned unchanged rather than cropped to zero size.
pub fn trim_alpha(img: RgbaImage) -> RgbaImage {
    match alpha_bounding_box(&img) {
        Some(bbox) => {
            debug!("Trimming to bounding box {}", bbox);
            imageops::crop_imm(&img, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
        }
        None => img,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn transparent(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 0]))
    }

    #[test]
    fn bounding_box_of_centered_content() {
        let mut img = transparent(10, 8);
        for y in 2..6 {
            for x in 3..7 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        let bbox = alpha_bounding_box(&img).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                left: 3,
                top: 2,
                right: 7,
                bottom: 6
            }
        );
        assert_eq!(bbox.width(), 4);
        assert_eq!(bbox.height(), 4);
    }

    #[test]
    fn bounding_box_of_single_pixel() {
        let mut img = transparent(5, 5);
        img.put_pixel(4, 0, Rgba([0, 0, 0, 1]));
        let bbox = alpha_bounding_box(&img).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                left: 4,
                top: 0,
                right: 5,
                bottom: 1
            }
        );
    }

    #[test]
    fn fully_transparent_has_no_bounding_box() {
        assert!(alpha_bounding_box(&transparent(6, 6)).is_none());
    }

    #[test]
    fn trim_crops_to_content() {
        let mut img = transparent(20, 10);
        img.put_pixel(5, 2, Rgba([1, 2, 3, 255]));
        img.put_pixel(14, 7, Rgba([4, 5, 6, 200]));
        let trimmed = trim_alpha(img);
        assert_eq!(trimmed.dimensions(), (10, 6));
        assert_eq!(trimmed.get_pixel(0, 0).0, [1, 2, 3, 255]);
        assert_eq!(trimmed.get_pixel(9, 5).0, [4, 5, 6, 200]);
    }

    #[test]
    fn trim_of_fully_transparent_is_identity() {
        let img = transparent(7, 3);
        let trimmed = trim_alpha(img.clone());
        assert_eq!(trimmed.dimensions(), (7, 3));
        assert_eq!(trimmed.as_raw(), img.as_raw());
    }

    #[test]
    fn trim_of_fully_opaque_is_identity() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));
        let trimmed = trim_alpha(img.clone());
        assert_eq!(trimmed.dimensions(), (4, 4));
    }
}
