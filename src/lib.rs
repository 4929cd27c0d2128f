//! Explainable heuristic scoring of images for generative-model artifacts
//!
//! A decoded image is examined by independent analyzers: file size and
//! geometry signatures, channel variance, edge strength dispersion, mirror
//! symmetry and block repetition. Their weighted findings are fused into a
//! clamped confidence and a three-way label together with the clues that
//! produced it.

#![forbid(unsafe_code)]

/// Individual analyzers and the image sample they read
pub mod analysis;
/// Fusion of findings into a labelled verdict
pub mod detection;
/// Input/output operations and error handling
pub mod io;
/// Statistical helpers
pub mod math;

pub use analysis::finding::AnalyzerFinding;
pub use analysis::sample::ImageSample;
pub use detection::classifier::{DetectionResult, Label, score_image};
pub use io::error::{DetectorError, Result};
