use image::RgbaImage;

/// Rewrites every near-white pixel to fully transparent white.
///
/// A pixel counts as background when R, G, and B all strictly exceed
/// `threshold`. Matching pixels become `(255, 255, 255, 0)`; every other
/// pixel is left byte-identical, existing transparency included.
pub fn make_transparent(img: &mut RgbaImage, threshold: u8) {
    for pixel in img.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if r > threshold && g > threshold && b > threshold {
            pixel.0 = [255, 255, 255, 0];
        }
    }
}
