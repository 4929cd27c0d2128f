//! Weighted fusion of analyzer findings into a labelled verdict

use std::fmt;

use num_traits::clamp;

use crate::analysis::finding::AnalyzerFinding;
use crate::analysis::metadata::analyze_metadata;
use crate::analysis::patterns::analyze_patterns;
use crate::analysis::sample::ImageSample;
use crate::io::configuration::{
    AI_GENERATED_THRESHOLD, CONFIDENCE_CEILING, CONFIDENCE_FLOOR, LEANING_FAKE_THRESHOLD,
    MAX_CLUES, METADATA_WEIGHT, PATTERN_WEIGHT, REAL_THRESHOLD,
};

/// Categorical verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// Confidence above the AI-generated threshold
    AiGenerated,
    /// Confidence below the real threshold
    Real,
    /// Anything in between
    Uncertain,
}

impl Label {
    /// Every label, in display order
    pub const ALL: [Self; 3] = [Self::AiGenerated, Self::Real, Self::Uncertain];

    /// Map a confidence onto a label
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > AI_GENERATED_THRESHOLD {
            Self::AiGenerated
        } else if confidence < REAL_THRESHOLD {
            Self::Real
        } else {
            Self::Uncertain
        }
    }

    /// Human-readable label text
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AiGenerated => "AI-generated",
            Self::Real => "Real",
            Self::Uncertain => "Uncertain",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final verdict for one image
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    /// Categorical verdict
    pub label: Label,
    /// Fused confidence in [0.1, 0.95]
    pub confidence: f64,
    /// Fast-path flag: true for AI-generated, false for real, leaning otherwise
    pub is_fake: bool,
    /// Leading clues, metadata first, at most three
    pub clues: Vec<String>,
}

/// Fuse metadata and pattern findings into a verdict
// Fusing the multiply-add would move confidences by an ulp
#[allow(clippy::suboptimal_flops)]
pub fn classify(metadata: AnalyzerFinding, patterns: AnalyzerFinding) -> DetectionResult {
    let fused = metadata.score() * METADATA_WEIGHT + patterns.score() * PATTERN_WEIGHT;
    let confidence = clamp(fused, CONFIDENCE_FLOOR, CONFIDENCE_CEILING);

    let label = Label::from_confidence(confidence);
    let is_fake = match label {
        Label::AiGenerated => true,
        Label::Real => false,
        Label::Uncertain => confidence > LEANING_FAKE_THRESHOLD,
    };

    let clues = metadata
        .into_clues()
        .into_iter()
        .chain(patterns.into_clues())
        .take(MAX_CLUES)
        .collect();

    DetectionResult {
        label,
        confidence,
        is_fake,
        clues,
    }
}

/// Score a decoded image for generative-model artifacts
///
/// Pure: the same pixels and file size always yield the same result.
pub fn score_image(sample: &ImageSample) -> DetectionResult {
    let metadata = analyze_metadata(sample.file_size(), sample.width(), sample.height());
    let patterns = analyze_patterns(sample);
    tracing::debug!(
        metadata = metadata.score(),
        patterns = patterns.score(),
        "analyzers finished"
    );
    classify(metadata, patterns)
}
