//! Pixel-level pattern analysis on a bounded canvas
//!
//! The source image is first redrawn onto a canvas capped at
//! [`ANALYSIS_MAX_DIMENSION`] on each axis, then every [`PixelAnalyzer`] runs
//! over that canvas and contributes its weight when it fires.

use std::borrow::Cow;

use image::RgbaImage;
use image::imageops::{self, FilterType};
use ndarray::Array2;

use crate::analysis::brightness::brightness_map;
use crate::analysis::color::ColorDistribution;
use crate::analysis::edges::EdgeConsistency;
use crate::analysis::finding::AnalyzerFinding;
use crate::analysis::sample::ImageSample;
use crate::analysis::symmetry::analyze_symmetry;
use crate::analysis::texture::TextureRepetition;
use crate::io::configuration::{
    ANALYSIS_MAX_DIMENSION, COLOR_WEIGHT, EDGE_WEIGHT, REPETITION_THRESHOLD, REPETITION_WEIGHT,
    SYMMETRY_THRESHOLD, SYMMETRY_WEIGHT,
};

/// Canvas size for an image: each axis capped independently
pub fn canvas_dimensions(width: u32, height: u32) -> (u32, u32) {
    (
        width.min(ANALYSIS_MAX_DIMENSION),
        height.min(ANALYSIS_MAX_DIMENSION),
    )
}

/// Redraw an image onto the analysis canvas
///
/// Images already within the cap are borrowed untouched. Larger ones are
/// stretched with bilinear filtering, so the aspect ratio is not preserved
/// when only one axis is capped.
pub fn downsample(pixels: &RgbaImage) -> Cow<'_, RgbaImage> {
    let (width, height) = pixels.dimensions();
    let (canvas_width, canvas_height) = canvas_dimensions(width, height);
    if (canvas_width, canvas_height) == (width, height) {
        Cow::Borrowed(pixels)
    } else {
        Cow::Owned(imageops::resize(
            pixels,
            canvas_width,
            canvas_height,
            FilterType::Triangle,
        ))
    }
}

/// Downsampled pixels plus the brightness plane derived from them
pub struct AnalysisCanvas<'a> {
    pixels: Cow<'a, RgbaImage>,
    brightness: Array2<f64>,
}

impl<'a> AnalysisCanvas<'a> {
    /// Prepare the canvas for a full-resolution image
    pub fn new(pixels: &'a RgbaImage) -> Self {
        let pixels = downsample(pixels);
        let brightness = brightness_map(&pixels);
        Self { pixels, brightness }
    }

    /// Canvas pixels
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Canvas brightness, indexed `(row, col)`
    pub const fn brightness(&self) -> &Array2<f64> {
        &self.brightness
    }
}

/// Outcome of one pixel analyzer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
    /// Raw measurement, absent when the analyzer found nothing to measure
    pub measurement: Option<f64>,
    /// Whether the analyzer considers the measurement suspicious
    pub fired: bool,
}

/// Registry of pixel-level analyzers in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelAnalyzer {
    /// Channel variance outside the natural band
    ColorDistribution,
    /// Edge strength dispersion too high or too low
    EdgeConsistency,
    /// Strong left-right mirror similarity
    Symmetry,
    /// Many near-identical texture blocks
    TextureRepetition,
}

impl PixelAnalyzer {
    /// Every analyzer, in the order their clues are reported
    pub const ALL: [Self; 4] = [
        Self::ColorDistribution,
        Self::EdgeConsistency,
        Self::Symmetry,
        Self::TextureRepetition,
    ];

    /// Score contributed when the analyzer fires
    pub const fn weight(self) -> f64 {
        match self {
            Self::ColorDistribution => COLOR_WEIGHT,
            Self::EdgeConsistency => EDGE_WEIGHT,
            Self::Symmetry => SYMMETRY_WEIGHT,
            Self::TextureRepetition => REPETITION_WEIGHT,
        }
    }

    /// Clue reported when the analyzer fires
    pub const fn clue(self) -> &'static str {
        match self {
            Self::ColorDistribution => "Unusual color distribution pattern",
            Self::EdgeConsistency => "Inconsistent edge patterns detected",
            Self::Symmetry => "Unnaturally high symmetry",
            Self::TextureRepetition => "Texture repetition patterns detected",
        }
    }

    /// Short identifier used in logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::ColorDistribution => "color",
            Self::EdgeConsistency => "edges",
            Self::Symmetry => "symmetry",
            Self::TextureRepetition => "texture",
        }
    }

    /// Run the analyzer over a canvas
    pub fn evaluate(self, canvas: &AnalysisCanvas<'_>) -> Signal {
        match self {
            Self::ColorDistribution => {
                let colors = ColorDistribution::measure(canvas.pixels());
                Signal {
                    measurement: Some(colors.average_variance),
                    fired: colors.is_unusual(),
                }
            }
            Self::EdgeConsistency => {
                let edges = EdgeConsistency::measure(canvas.pixels());
                Signal {
                    measurement: edges.coefficient_of_variation,
                    fired: edges.is_unnatural(),
                }
            }
            Self::Symmetry => {
                let symmetry = analyze_symmetry(canvas.brightness());
                Signal {
                    measurement: Some(symmetry),
                    fired: symmetry > SYMMETRY_THRESHOLD,
                }
            }
            Self::TextureRepetition => {
                let repetition = TextureRepetition::measure(canvas.brightness()).score();
                Signal {
                    measurement: Some(repetition),
                    fired: repetition > REPETITION_THRESHOLD,
                }
            }
        }
    }
}

/// Score an image on pixel-level artifacts
pub fn analyze_patterns(sample: &ImageSample) -> AnalyzerFinding {
    let canvas = AnalysisCanvas::new(sample.pixels());
    tracing::debug!(
        width = canvas.pixels().width(),
        height = canvas.pixels().height(),
        "prepared analysis canvas"
    );

    let contributions = PixelAnalyzer::ALL.into_iter().filter_map(|analyzer| {
        let signal = analyzer.evaluate(&canvas);
        tracing::debug!(
            analyzer = analyzer.name(),
            measurement = ?signal.measurement,
            fired = signal.fired,
            "pixel analyzer finished"
        );
        signal
            .fired
            .then(|| (analyzer.weight(), analyzer.clue().to_string()))
    });

    AnalyzerFinding::from_contributions(contributions)
}
