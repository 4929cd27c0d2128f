//! Descriptive statistics over sample values

/// Arithmetic mean, or `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance (divides by n), or `None` for an empty slice
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let squared_deviation: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some(squared_deviation / values.len() as f64)
}

/// Standard deviation divided by mean
///
/// Returns `None` when there are no values or the mean is zero, since the
/// ratio carries no information in either case.
pub fn coefficient_of_variation(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    if mean == 0.0 {
        return None;
    }
    let variance = population_variance(values)?;
    Some(variance.sqrt() / mean)
}

/// Running sum and sum of squares for one channel of 8-bit samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MomentAccumulator {
    count: u64,
    sum: u64,
    sum_of_squares: u64,
}

impl MomentAccumulator {
    /// Add one sample
    pub const fn push(&mut self, value: u8) {
        let value = value as u64;
        self.count += 1;
        self.sum += value;
        self.sum_of_squares += value * value;
    }

    /// Number of samples seen
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// E[x²] − E[x]², or `None` before any sample
    pub fn variance(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        let mean = self.sum as f64 / n;
        Some(self.sum_of_squares as f64 / n - mean * mean)
    }
}
