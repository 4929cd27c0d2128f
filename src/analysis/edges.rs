//! Edge strength dispersion check
//!
//! Natural photographs mix soft and hard edges in a fairly stable ratio.
//! Both an almost uniform edge field and a wildly dispersed one are treated
//! as suspicious.

use image::RgbaImage;

use crate::io::configuration::{EDGE_CV_MAX, EDGE_CV_MIN, EDGE_NOISE_FLOOR};
use crate::math::statistics::coefficient_of_variation;

/// Dispersion of the edges found in an image
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeConsistency {
    /// Number of gradients above the noise floor
    pub edge_count: usize,
    /// Coefficient of variation of those gradients, if any were found
    pub coefficient_of_variation: Option<f64>,
}

impl EdgeConsistency {
    /// Collect edge strengths and their dispersion
    pub fn measure(pixels: &RgbaImage) -> Self {
        let strengths = edge_strengths(pixels);
        Self {
            edge_count: strengths.len(),
            coefficient_of_variation: coefficient_of_variation(&strengths),
        }
    }

    /// Whether the edge field is too jagged or too uniform
    ///
    /// An image without qualifying edges carries no signal and is not flagged.
    pub fn is_unnatural(&self) -> bool {
        self.coefficient_of_variation
            .is_some_and(|cv| cv > EDGE_CV_MAX || cv < EDGE_CV_MIN)
    }
}

/// Gradient magnitudes above the noise floor, scanned row by row
///
/// Works on the red channel. The window for pixel `(x, y)` spans columns
/// `x-1..=x+1` and rows `y..=y+2`; rows whose window would leave the image
/// are skipped.
// `hypot` rounds differently from the plain square root
#[allow(clippy::imprecise_flops, clippy::suboptimal_flops)]
pub fn edge_strengths(pixels: &RgbaImage) -> Vec<f64> {
    let (width, height) = pixels.dimensions();
    let red = |x: u32, y: u32| {
        pixels
            .get_pixel_checked(x, y)
            .map_or(0.0, |p| f64::from(p.0[0]))
    };

    let mut strengths = Vec::new();
    for y in 1..height.saturating_sub(2) {
        for x in 1..width.saturating_sub(1) {
            let grad_x = -red(x - 1, y) + red(x + 1, y) - 2.0 * red(x - 1, y + 1)
                + 2.0 * red(x + 1, y + 1)
                - red(x - 1, y + 2)
                + red(x + 1, y + 2);

            let grad_y = red(x - 1, y + 2) + 2.0 * red(x, y + 2) + red(x + 1, y + 2)
                - red(x - 1, y)
                - 2.0 * red(x, y)
                - red(x + 1, y);

            let strength = (grad_x * grad_x + grad_y * grad_y).sqrt();
            if strength > EDGE_NOISE_FLOOR {
                strengths.push(strength);
            }
        }
    }
    strengths
}
