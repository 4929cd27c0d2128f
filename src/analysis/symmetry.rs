//! Left-right mirror similarity

use ndarray::Array2;

use crate::io::configuration::MAX_BRIGHTNESS;

/// Horizontal mirror similarity of a brightness plane in [0, 1]
///
/// Each row's left half is compared against its mirrored right half; the
/// centre column of an odd-width image is not compared. A plane one column
/// wide has nothing to mirror and scores 0.
pub fn analyze_symmetry(brightness: &Array2<f64>) -> f64 {
    let width = brightness.ncols();
    let mut total_difference = 0.0;
    let mut max_difference = 0.0;

    for row in brightness.rows() {
        for x in 0..width / 2 {
            if let (Some(left), Some(right)) = (row.get(x), row.get(width - 1 - x)) {
                total_difference += (left - right).abs();
                max_difference += MAX_BRIGHTNESS;
            }
        }
    }

    if max_difference == 0.0 {
        return 0.0;
    }
    1.0 - total_difference / max_difference
}
