//! Error types for loading, validating and reporting on images

use std::fmt;
use std::path::PathBuf;

/// Main error type for everything outside the pure scorer
#[derive(Debug)]
pub enum DetectorError {
    /// Failed to decode an image file
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// File is neither recognisable by content nor by extension as an image
    UnsupportedFormat {
        /// Path to the rejected file
        path: PathBuf,
    },

    /// File exceeds the upload ceiling
    FileTooLarge {
        /// Path to the rejected file
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Configured ceiling in bytes
        limit: u64,
    },

    /// Pixel data cannot form a valid sample
    ///
    /// Covers zero-area images and buffers whose length does not match
    /// the declared dimensions
    InvalidSample {
        /// Description of what's wrong with the pixel data
        reason: String,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for DetectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::UnsupportedFormat { path } => {
                write!(f, "'{}' is not a valid image file", path.display())
            }
            Self::FileTooLarge { path, size, limit } => {
                write!(
                    f,
                    "'{}' is {size} bytes, images must be at most {limit} bytes",
                    path.display()
                )
            }
            Self::InvalidSample { reason } => {
                write!(f, "Invalid image sample: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for DetectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for detector results
pub type Result<T> = std::result::Result<T, DetectorError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DetectorError {
    DetectorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid sample error
pub fn invalid_sample(reason: &impl ToString) -> DetectorError {
    DetectorError::InvalidSample {
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to an I/O error
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> DetectorError {
    let path = path.into();
    move |source| DetectorError::FileSystem {
        path,
        operation,
        source,
    }
}
