//! Scored, explained output of a single analyzer

use num_traits::clamp;

/// Score in [0, 1] with the clues that produced it, in evaluation order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalyzerFinding {
    score: f64,
    clues: Vec<String>,
}

impl AnalyzerFinding {
    /// Create a finding, clamping the score into [0, 1]
    pub fn new(score: f64, clues: Vec<String>) -> Self {
        Self {
            score: clamp(score, 0.0, 1.0),
            clues,
        }
    }

    /// Accumulate weighted rules that fired, clamping the total
    ///
    /// Each entry is the weight a rule contributes and the clue explaining it.
    pub fn from_contributions<I>(contributions: I) -> Self
    where
        I: IntoIterator<Item = (f64, String)>,
    {
        let (score, clues) = contributions.into_iter().fold(
            (0.0, Vec::new()),
            |(score, mut clues), (weight, clue)| {
                clues.push(clue);
                (score + weight, clues)
            },
        );
        Self::new(score, clues)
    }

    /// Clamped score
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Clues explaining the score
    pub fn clues(&self) -> &[String] {
        &self.clues
    }

    /// Consume the finding, returning its clues
    pub fn into_clues(self) -> Vec<String> {
        self.clues
    }
}
