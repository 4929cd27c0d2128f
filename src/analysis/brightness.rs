//! Per-pixel brightness plane shared by the symmetry and texture analyzers

use image::{Rgba, RgbaImage};
use ndarray::Array2;

/// Mean of the red, green and blue channels; alpha is ignored
pub fn pixel_brightness(pixel: &Rgba<u8>) -> f64 {
    let [r, g, b, _] = pixel.0;
    (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0
}

/// Brightness of every pixel, indexed `(row, col)`
pub fn brightness_map(pixels: &RgbaImage) -> Array2<f64> {
    let (width, height) = (pixels.width() as usize, pixels.height() as usize);
    let mut map = Array2::zeros((height, width));
    for (x, y, pixel) in pixels.enumerate_pixels() {
        if let Some(value) = map.get_mut((y as usize, x as usize)) {
            *value = pixel_brightness(pixel);
        }
    }
    map
}
