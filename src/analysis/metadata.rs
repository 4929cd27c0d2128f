//! File size, resolution and aspect ratio signatures of generated tiles

use crate::analysis::finding::AnalyzerFinding;
use crate::io::configuration::{
    AI_ASPECT_RATIOS, AI_TRAINING_DIMENSIONS, ASPECT_RATIO_TOLERANCE, ASPECT_RATIO_WEIGHT,
    DIMENSION_TOLERANCE, DIMENSION_WEIGHT, LOW_COMPRESSION_BYTES_PER_MEGAPIXEL,
    LOW_COMPRESSION_MIN_MEGAPIXELS, LOW_COMPRESSION_WEIGHT,
};

/// Score an image by its file size and geometry alone
///
/// Rules are independent and additive; the total is clamped to 1.
pub fn analyze_metadata(file_size: u64, width: u32, height: u32) -> AnalyzerFinding {
    let mut contributions = Vec::new();

    let megapixels = f64::from(width) * f64::from(height) / 1_000_000.0;
    if is_lightly_compressed(file_size, megapixels) {
        contributions.push((
            LOW_COMPRESSION_WEIGHT,
            "Low compression for high resolution (common in AI images)".to_string(),
        ));
    }

    if matches_training_dimension(width, height) {
        contributions.push((
            DIMENSION_WEIGHT,
            format!("Common AI training dimension detected ({width}×{height})"),
        ));
    }

    let aspect_ratio = f64::from(width) / f64::from(height);
    if matches_aspect_ratio(aspect_ratio) {
        contributions.push((
            ASPECT_RATIO_WEIGHT,
            format!("Common AI aspect ratio ({aspect_ratio:.2})"),
        ));
    }

    AnalyzerFinding::from_contributions(contributions)
}

fn is_lightly_compressed(file_size: u64, megapixels: f64) -> bool {
    let bytes_per_megapixel = file_size as f64 / megapixels;
    bytes_per_megapixel < LOW_COMPRESSION_BYTES_PER_MEGAPIXEL
        && megapixels > LOW_COMPRESSION_MIN_MEGAPIXELS
}

/// Check whether a size lies within tolerance of a typical generator output size
pub fn matches_training_dimension(width: u32, height: u32) -> bool {
    AI_TRAINING_DIMENSIONS.iter().any(|&(w, h)| {
        width.abs_diff(w) <= DIMENSION_TOLERANCE && height.abs_diff(h) <= DIMENSION_TOLERANCE
    })
}

/// Check whether an aspect ratio is close to a typical generator ratio
pub fn matches_aspect_ratio(aspect_ratio: f64) -> bool {
    AI_ASPECT_RATIOS
        .iter()
        .any(|ratio| (aspect_ratio - ratio).abs() < ASPECT_RATIO_TOLERANCE)
}
