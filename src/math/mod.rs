//! Numeric helpers shared by the analyzers

/// Mean, variance and dispersion of sample values
pub mod statistics;
