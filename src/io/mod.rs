//! Input/output operations: validation, decoding, reporting and the CLI

/// Command-line interface and batch processing
pub mod cli;
/// Scoring constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Upload validation and image decoding
pub mod image;
/// Diagnostic log setup
pub mod logging;
/// Batch progress display
pub mod progress;
/// Text rendering of detection results
pub mod report;
