//! Channel variance check for flattened or oversaturated palettes

use image::RgbaImage;

use crate::io::configuration::{COLOR_VARIANCE_MAX, COLOR_VARIANCE_MIN};
use crate::math::statistics::MomentAccumulator;

/// Per-channel variance summary of an image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDistribution {
    /// Variance of the red, green and blue channels
    pub channel_variances: [f64; 3],
    /// Mean of the three channel variances
    pub average_variance: f64,
}

impl ColorDistribution {
    /// Measure the channel variances of every pixel
    pub fn measure(pixels: &RgbaImage) -> Self {
        let mut channels = [MomentAccumulator::default(); 3];
        for pixel in pixels.pixels() {
            for (accumulator, &value) in channels.iter_mut().zip(pixel.0.iter()) {
                accumulator.push(value);
            }
        }

        let channel_variances = channels.map(|c| c.variance().unwrap_or(0.0));
        let average_variance = channel_variances.iter().sum::<f64>() / 3.0;

        Self {
            channel_variances,
            average_variance,
        }
    }

    /// Whether the average variance falls outside the natural band
    pub fn is_unusual(&self) -> bool {
        self.average_variance < COLOR_VARIANCE_MIN || self.average_variance > COLOR_VARIANCE_MAX
    }
}
