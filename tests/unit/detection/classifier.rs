//! Tests for confidence fusion and labelling

#[cfg(test)]
mod tests {
    use crate::{noise, solid};
    use fakescope::analysis::finding::AnalyzerFinding;
    use fakescope::analysis::sample::ImageSample;
    use fakescope::detection::classifier::{Label, classify, score_image};

    fn finding(score: f64, clues: &[&str]) -> AnalyzerFinding {
        AnalyzerFinding::new(score, clues.iter().map(ToString::to_string).collect())
    }

    // Tests the weighted fusion of both findings, rounded as two products and a sum
    // Verified by swapping the metadata and pattern weights, and by fusing with mul_add
    #[test]
    #[allow(clippy::float_cmp)]
    fn test_weighted_fusion() {
        let result = classify(finding(0.9, &[]), finding(0.7, &[]));

        assert_eq!(result.confidence, 0.9 * 0.4 + 0.7 * 0.6);
        assert_eq!(result.label, Label::AiGenerated);
        assert!(result.is_fake);
    }

    // Tests that confidence never leaves [0.1, 0.95]
    // Verified by removing the confidence clamp
    #[test]
    fn test_confidence_clamped() {
        let low = classify(finding(0.0, &[]), finding(0.0, &[]));
        assert!((low.confidence - 0.1).abs() < f64::EPSILON);
        assert_eq!(low.label, Label::Real);
        assert!(!low.is_fake);

        let high = classify(finding(1.0, &[]), finding(1.0, &[]));
        assert!((high.confidence - 0.95).abs() < f64::EPSILON);
        assert_eq!(high.label, Label::AiGenerated);
    }

    // Tests the strict label thresholds
    // Verified by making the thresholds inclusive
    #[test]
    fn test_label_thresholds() {
        assert_eq!(Label::from_confidence(0.71), Label::AiGenerated);
        assert_eq!(Label::from_confidence(0.7), Label::Uncertain);
        assert_eq!(Label::from_confidence(0.3), Label::Uncertain);
        assert_eq!(Label::from_confidence(0.29), Label::Real);
    }

    // Tests the leaning flag inside the uncertain band
    // Verified by always clearing the flag for uncertain results
    #[test]
    fn test_uncertain_band_leaning() {
        let leaning_fake = classify(finding(0.6, &[]), finding(0.5, &[]));
        assert_eq!(leaning_fake.label, Label::Uncertain);
        assert!(leaning_fake.is_fake);

        let leaning_real = classify(finding(0.2, &[]), finding(0.5, &[]));
        assert_eq!(leaning_real.label, Label::Uncertain);
        assert!(!leaning_real.is_fake);
    }

    // Tests that clues keep metadata first and stop at three
    // Verified by sorting clues before truncation
    #[test]
    fn test_clue_order_and_truncation() {
        let result = classify(
            finding(0.2, &["m1", "m2"]),
            finding(0.5, &["p1", "p2", "p3", "p4"]),
        );
        assert_eq!(result.clues, ["m1", "m2", "p1"]);

        let pattern_only = classify(finding(0.0, &[]), finding(0.5, &["p1"]));
        assert_eq!(pattern_only.clues, ["p1"]);
    }

    // Tests label display text
    // Verified by changing the AI label spelling
    #[test]
    fn test_label_display() {
        let rendered: Vec<String> = Label::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["AI-generated", "Real", "Uncertain"]);
    }

    // Tests the end-to-end verdict for a flat generator-sized image
    // Verified by dropping the pattern contribution, and by fusing with mul_add
    #[test]
    #[allow(clippy::float_cmp)]
    fn test_score_flat_generator_tile() {
        let sample = ImageSample::new(solid(1024, 1024, [90, 160, 220]), 50_000).unwrap();
        let result = score_image(&sample);

        assert_eq!(result.confidence, 0.78);
        assert_eq!(result.label, Label::AiGenerated);
        assert!(result.is_fake);
        assert_eq!(result.clues.len(), 3);
        assert!(result.clues.first().is_some_and(|c| c.starts_with("Low compression")));
    }

    // Tests that scoring is repeatable for identical input
    // Verified by caching state between calls
    #[test]
    fn test_score_is_deterministic() {
        let sample = ImageSample::new(noise(300, 200, 17), 150_000).unwrap();

        let first = score_image(&sample);
        let second = score_image(&sample.clone());

        assert_eq!(first, second);
        assert!((0.1..=0.95).contains(&first.confidence));
    }
}
