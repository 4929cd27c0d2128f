//! Fusion of analyzer findings into a final verdict

/// Confidence fusion, labelling and the `score_image` entry point
pub mod classifier;
