//! Repeated texture detection by block comparison
//!
//! The plane is cut into a grid of square blocks. Every block is compared
//! against each block lying strictly below and strictly to the right of it.
//! The cost is quadratic in the number of blocks, so callers must bound the
//! plane size first.

use ndarray::{Array2, ArrayView2, Axis, Slice};

use crate::io::configuration::{BLOCK_SIMILARITY_THRESHOLD, BLOCK_SIZE, MAX_BRIGHTNESS};

/// Counts gathered while comparing block pairs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextureRepetition {
    /// Pairs whose similarity exceeded the threshold
    pub similar_pairs: usize,
    /// Pairs compared
    pub total_pairs: usize,
}

impl TextureRepetition {
    /// Compare every eligible block pair of a brightness plane
    pub fn measure(brightness: &Array2<f64>) -> Self {
        let origins = |extent: usize| (0..extent.saturating_sub(BLOCK_SIZE)).step_by(BLOCK_SIZE);
        let (height, width) = brightness.dim();

        let mut counts = Self::default();
        for y1 in origins(height) {
            for x1 in origins(width) {
                for y2 in origins(height).filter(|&y2| y2 > y1) {
                    for x2 in origins(width).filter(|&x2| x2 > x1) {
                        let similarity = compare_blocks(brightness, (y1, x1), (y2, x2));
                        if similarity > BLOCK_SIMILARITY_THRESHOLD {
                            counts.similar_pairs += 1;
                        }
                        counts.total_pairs += 1;
                    }
                }
            }
        }
        counts
    }

    /// Fraction of compared pairs that were similar, 0 if nothing was compared
    pub fn score(&self) -> f64 {
        if self.total_pairs == 0 {
            return 0.0;
        }
        self.similar_pairs as f64 / self.total_pairs as f64
    }
}

/// Similarity in [0, 1] of two blocks given by their `(row, col)` origins
///
/// Both blocks must lie fully inside the plane.
pub fn compare_blocks(
    brightness: &Array2<f64>,
    first: (usize, usize),
    second: (usize, usize),
) -> f64 {
    let a = block(brightness, first);
    let b = block(brightness, second);

    let difference: f64 = a.iter().zip(b.iter()).map(|(p, q)| (p - q).abs()).sum();
    1.0 - difference / ((BLOCK_SIZE * BLOCK_SIZE) as f64 * MAX_BRIGHTNESS)
}

fn block(brightness: &Array2<f64>, (row, col): (usize, usize)) -> ArrayView2<'_, f64> {
    brightness
        .slice_axis(Axis(0), Slice::from(row..row + BLOCK_SIZE))
        .slice_axis_move(Axis(1), Slice::from(col..col + BLOCK_SIZE))
}
