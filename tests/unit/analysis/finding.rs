//! Tests for analyzer findings

#[cfg(test)]
mod tests {
    use fakescope::analysis::finding::AnalyzerFinding;

    // Tests that scores are clamped into the unit interval
    // Verified by removing the clamp
    #[test]
    fn test_score_clamped() {
        assert!((AnalyzerFinding::new(1.7, Vec::new()).score() - 1.0).abs() < f64::EPSILON);
        assert!(AnalyzerFinding::new(-0.2, Vec::new()).score().abs() < f64::EPSILON);
        assert!((AnalyzerFinding::new(0.45, Vec::new()).score() - 0.45).abs() < f64::EPSILON);
    }

    // Tests that contributions sum, clamp and keep their clue order
    // Verified by reversing the clue order
    #[test]
    fn test_from_contributions() {
        let finding = AnalyzerFinding::from_contributions(vec![
            (0.4, "first".to_string()),
            (0.5, "second".to_string()),
            (0.3, "third".to_string()),
        ]);

        assert!((finding.score() - 1.0).abs() < f64::EPSILON);
        assert_eq!(finding.clues(), ["first", "second", "third"]);
        assert_eq!(finding.into_clues().len(), 3);
    }

    // Tests that nothing firing yields a clean zero finding
    // Verified by seeding the score with a non-zero value
    #[test]
    fn test_empty_contributions() {
        let finding = AnalyzerFinding::from_contributions(Vec::new());

        assert_eq!(finding, AnalyzerFinding::default());
        assert!(finding.score().abs() < f64::EPSILON);
        assert!(finding.clues().is_empty());
    }
}
