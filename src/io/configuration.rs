//! Scoring constants and runtime configuration defaults

// Metadata analyzer
/// Bytes per megapixel below which a large image counts as lightly compressed
pub const LOW_COMPRESSION_BYTES_PER_MEGAPIXEL: f64 = 100_000.0;
/// Megapixel count an image must exceed for the compression rule to apply
pub const LOW_COMPRESSION_MIN_MEGAPIXELS: f64 = 1.0;
/// Score added by the compression rule
pub const LOW_COMPRESSION_WEIGHT: f64 = 0.3;

/// Output sizes typical of generative model tiles (width, height)
pub const AI_TRAINING_DIMENSIONS: [(u32, u32); 9] = [
    (512, 512),
    (768, 768),
    (1024, 1024),
    (512, 768),
    (768, 512),
    (1024, 768),
    (768, 1024),
    (896, 1152),
    (1152, 896),
];
/// Per-axis pixel tolerance for dimension matches (inclusive)
pub const DIMENSION_TOLERANCE: u32 = 5;
/// Score added by a dimension match
pub const DIMENSION_WEIGHT: f64 = 0.4;

/// Aspect ratios typical of generative model output
pub const AI_ASPECT_RATIOS: [f64; 7] = [1.0, 1.33, 0.75, 1.78, 0.56, 1.5, 0.67];
/// Aspect ratio tolerance (exclusive)
pub const ASPECT_RATIO_TOLERANCE: f64 = 0.02;
/// Score added by an aspect ratio match
pub const ASPECT_RATIO_WEIGHT: f64 = 0.2;

// Pattern analyzer
/// Canvas cap applied independently to each axis before pixel analysis
pub const ANALYSIS_MAX_DIMENSION: u32 = 400;

/// Average channel variance below which colors look flattened
pub const COLOR_VARIANCE_MIN: f64 = 500.0;
/// Average channel variance above which colors look oversaturated
pub const COLOR_VARIANCE_MAX: f64 = 3000.0;
/// Score added for an unusual color distribution
pub const COLOR_WEIGHT: f64 = 0.2;

/// Gradient magnitude an edge must exceed to be counted
pub const EDGE_NOISE_FLOOR: f64 = 50.0;
/// Edge strength coefficient of variation above which edges look jagged
pub const EDGE_CV_MAX: f64 = 1.2;
/// Edge strength coefficient of variation below which edges look uniform
pub const EDGE_CV_MIN: f64 = 0.3;
/// Score added for unnatural edges
pub const EDGE_WEIGHT: f64 = 0.3;

/// Mirror similarity above which symmetry is suspicious
pub const SYMMETRY_THRESHOLD: f64 = 0.85;
/// Score added for high symmetry
pub const SYMMETRY_WEIGHT: f64 = 0.25;

/// Side length of texture comparison blocks
pub const BLOCK_SIZE: usize = 16;
/// Similarity above which two blocks count as repeated
pub const BLOCK_SIMILARITY_THRESHOLD: f64 = 0.8;
/// Fraction of similar block pairs above which texture repeats
pub const REPETITION_THRESHOLD: f64 = 0.6;
/// Score added for repeated texture
pub const REPETITION_WEIGHT: f64 = 0.25;

/// Largest possible brightness difference between two pixels
pub const MAX_BRIGHTNESS: f64 = 255.0;

// Fusion
/// Weight of the metadata score in the final confidence
pub const METADATA_WEIGHT: f64 = 0.4;
/// Weight of the pattern score in the final confidence
pub const PATTERN_WEIGHT: f64 = 0.6;
/// Lowest confidence ever reported
pub const CONFIDENCE_FLOOR: f64 = 0.1;
/// Highest confidence ever reported
pub const CONFIDENCE_CEILING: f64 = 0.95;
/// Confidence above which an image is labelled AI-generated
pub const AI_GENERATED_THRESHOLD: f64 = 0.7;
/// Confidence below which an image is labelled real
pub const REAL_THRESHOLD: f64 = 0.3;
/// Confidence above which an uncertain image still leans fake
pub const LEANING_FAKE_THRESHOLD: f64 = 0.5;
/// Number of clues kept in a result
pub const MAX_CLUES: usize = 3;

// Upload and output settings
/// Default upload size ceiling in bytes
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
/// Width of rendered confidence bars in characters
pub const CONFIDENCE_BAR_WIDTH: usize = 40;
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
