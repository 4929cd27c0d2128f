//! Tests for the file size and geometry analyzer

#[cfg(test)]
mod tests {
    use fakescope::analysis::metadata::{
        analyze_metadata, matches_aspect_ratio, matches_training_dimension,
    };

    // Tests that an exact generator size fires the dimension and ratio rules
    // Verified by removing 512x512 from the dimension list
    #[test]
    fn test_exact_training_dimension() {
        let finding = analyze_metadata(200_000, 512, 512);

        assert!((finding.score() - 0.6).abs() < 1e-9);
        assert_eq!(
            finding.clues(),
            [
                "Common AI training dimension detected (512×512)",
                "Common AI aspect ratio (1.00)",
            ]
        );
    }

    // Tests that sizes outside the tolerance do not match
    // Verified by widening the tolerance
    #[test]
    fn test_dimension_outside_tolerance() {
        let finding = analyze_metadata(200_000, 600, 600);

        assert!((finding.score() - 0.2).abs() < 1e-9);
        assert!(
            finding
                .clues()
                .iter()
                .all(|clue| !clue.contains("training dimension"))
        );
    }

    // Tests the inclusive five pixel tolerance on each axis
    // Verified by making the tolerance exclusive
    #[test]
    fn test_dimension_tolerance_boundaries() {
        assert!(matches_training_dimension(516, 507));
        assert!(matches_training_dimension(1157, 891));
        assert!(!matches_training_dimension(518, 512));
        assert!(!matches_training_dimension(512, 506));
        assert!(matches_training_dimension(1024, 768));
        assert!(!matches_training_dimension(1024, 512));
    }

    // Tests the exclusive aspect ratio tolerance
    // Verified by removing 1.78 from the ratio list
    #[test]
    fn test_aspect_ratio_matching() {
        assert!(matches_aspect_ratio(1920.0 / 1080.0));
        assert!(matches_aspect_ratio(4.0 / 3.0));
        assert!(matches_aspect_ratio(2.0 / 3.0));
        assert!(!matches_aspect_ratio(2.0));
        assert!(!matches_aspect_ratio(1.25));
    }

    // Tests that only the ratio rule fires for a large well compressed photo
    // Verified by dropping the megapixel requirement
    #[test]
    fn test_widescreen_photo() {
        let finding = analyze_metadata(10_000_000, 1920, 1080);

        assert!((finding.score() - 0.2).abs() < 1e-9);
        assert_eq!(finding.clues(), ["Common AI aspect ratio (1.78)"]);
    }

    // Tests the compression rule on a large, small file
    // Verified by inverting the bytes per megapixel comparison
    #[test]
    fn test_low_compression_high_resolution() {
        let finding = analyze_metadata(100_000, 2000, 1000);

        assert!((finding.score() - 0.3).abs() < 1e-9);
        assert_eq!(
            finding.clues(),
            ["Low compression for high resolution (common in AI images)"]
        );
    }

    // Tests that small images never trigger the compression rule
    // Verified by removing the megapixel requirement
    #[test]
    fn test_compression_rule_needs_over_one_megapixel() {
        let finding = analyze_metadata(10, 1000, 1000);

        assert!(finding.clues().iter().all(|clue| !clue.contains("compression")));
    }

    // Tests the combined score of every rule firing
    // Verified by changing the dimension weight
    #[test]
    fn test_all_rules_fire() {
        let finding = analyze_metadata(50_000, 1024, 1024);

        assert!((finding.score() - 0.9).abs() < 1e-9);
        assert_eq!(finding.clues().len(), 3);
        assert!(finding.clues().iter().any(|c| c.contains("1024×1024")));
    }
}
