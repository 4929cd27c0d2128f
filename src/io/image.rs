//! Upload validation and decoding of image files into samples

use std::path::Path;

use image::ImageFormat;

use crate::analysis::sample::ImageSample;
use crate::io::error::{DetectorError, Result, file_system};

/// Identify an image format from file content, falling back to the extension
pub fn detect_format(path: &Path, bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes)
        .ok()
        .or_else(|| ImageFormat::from_path(path).ok())
}

/// Check whether a path names a format this build can decode
///
/// Looks at the extension only, so directories can be filtered without
/// reading every file.
pub fn is_image_path(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok_and(|format| format.reading_enabled())
}

/// Reject files that are not images or exceed the size ceiling
///
/// # Errors
///
/// Returns [`DetectorError::UnsupportedFormat`] if neither content nor
/// extension identifies an image, and [`DetectorError::FileTooLarge`] if
/// the file is larger than `limit` bytes
pub fn validate_upload(path: &Path, bytes: &[u8], limit: u64) -> Result<ImageFormat> {
    let format = detect_format(path, bytes).ok_or_else(|| DetectorError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let size = bytes.len() as u64;
    if size > limit {
        return Err(DetectorError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }

    Ok(format)
}

/// Read, validate and decode an image file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file fails upload validation
/// - The content cannot be decoded
/// - The decoded image has zero width or height
pub fn load_sample<P: AsRef<Path>>(path: P, limit: u64) -> Result<ImageSample> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(file_system(path, "read"))?;
    let format = validate_upload(path, &bytes, limit)?;

    let decoded = image::load_from_memory_with_format(&bytes, format).map_err(|source| {
        DetectorError::ImageLoad {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::debug!(
        path = %path.display(),
        ?format,
        width = decoded.width(),
        height = decoded.height(),
        bytes = bytes.len(),
        "decoded image"
    );

    ImageSample::from_dynamic(&decoded, bytes.len() as u64)
}
