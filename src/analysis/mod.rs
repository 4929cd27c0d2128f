//! Independent analyzers feeding the authenticity score

/// Brightness plane extraction
pub mod brightness;
/// Channel variance analyzer
pub mod color;
/// Edge strength dispersion analyzer
pub mod edges;
/// Score and clue container returned by analyzers
pub mod finding;
/// File size and geometry analyzer
pub mod metadata;
/// Downsampling and fusion of the pixel-level analyzers
pub mod patterns;
/// Decoded image input
pub mod sample;
/// Mirror symmetry analyzer
pub mod symmetry;
/// Block repetition analyzer
pub mod texture;
