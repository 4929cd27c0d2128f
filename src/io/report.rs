//! Plain-text rendering of detection results

use crate::detection::classifier::{DetectionResult, Label};
use crate::io::configuration::CONFIDENCE_BAR_WIDTH;

/// One-line verdict shown after an analysis
pub const fn verdict_message(label: Label) -> &'static str {
    match label {
        Label::AiGenerated => "AI patterns detected!",
        Label::Real => "Likely authentic image",
        Label::Uncertain => "Analysis inconclusive",
    }
}

/// Confidence as a percentage with one decimal, e.g. `78.0%`
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Bar whose filled share is proportional to the confidence
pub fn confidence_bar(confidence: f64, width: usize) -> String {
    let filled = ((confidence.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render a full report block for one image
pub fn render_report(name: &str, result: &DetectionResult) -> String {
    let header = format!(
        "{name}: {} ({} confidence)",
        result.label,
        format_confidence(result.confidence)
    );
    let bar = format!("  {}", confidence_bar(result.confidence, CONFIDENCE_BAR_WIDTH));
    let clues = result.clues.iter().map(|clue| format!("  - {clue}"));
    let verdict = format!("  {}", verdict_message(result.label));

    std::iter::once(header)
        .chain(std::iter::once(bar))
        .chain(clues)
        .chain(std::iter::once(verdict))
        .map(|line| line + "\n")
        .collect()
}

/// Running count of labels across a batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Images labelled AI-generated
    pub ai_generated: usize,
    /// Images labelled real
    pub real: usize,
    /// Images without a clear verdict
    pub uncertain: usize,
    /// Images that could not be analysed
    pub failed: usize,
}

impl BatchSummary {
    /// Count one result
    pub const fn record(&mut self, label: Label) {
        match label {
            Label::AiGenerated => self.ai_generated += 1,
            Label::Real => self.real += 1,
            Label::Uncertain => self.uncertain += 1,
        }
    }

    /// Count one failure
    pub const fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Number of images seen, including failures
    pub const fn total(&self) -> usize {
        self.ai_generated + self.real + self.uncertain + self.failed
    }

    /// Render the counts as a single line
    pub fn render(&self) -> String {
        format!(
            "{} images: {} {}, {} {}, {} {}, {} failed",
            self.total(),
            self.ai_generated,
            Label::AiGenerated,
            self.real,
            Label::Real,
            self.uncertain,
            Label::Uncertain,
            self.failed
        )
    }
}
