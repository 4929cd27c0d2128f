//! Decoded image input for the scorer

use image::{DynamicImage, RgbaImage};

use crate::io::error::{Result, invalid_sample};

/// Immutable decoded image together with the byte size of the file it came from
///
/// Construction guarantees positive dimensions, so every analyzer can assume
/// at least one pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSample {
    pixels: RgbaImage,
    file_size: u64,
}

impl ImageSample {
    /// Wrap an RGBA buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the image has zero width or height
    pub fn new(pixels: RgbaImage, file_size: u64) -> Result<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(invalid_sample(&format!(
                "image has zero area ({}x{})",
                pixels.width(),
                pixels.height()
            )));
        }
        Ok(Self { pixels, file_size })
    }

    /// Build a sample from a raw row-major RGBA byte buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer length is not `width * height * 4`
    /// or either dimension is zero
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>, file_size: u64) -> Result<Self> {
        let len = data.len();
        let pixels = RgbaImage::from_raw(width, height, data).ok_or_else(|| {
            invalid_sample(&format!(
                "buffer of {len} bytes does not hold a {width}x{height} RGBA image"
            ))
        })?;
        Self::new(pixels, file_size)
    }

    /// Convert any decoded image to RGBA and wrap it
    ///
    /// # Errors
    ///
    /// Returns an error if the image has zero width or height
    pub fn from_dynamic(image: &DynamicImage, file_size: u64) -> Result<Self> {
        Self::new(image.to_rgba8(), file_size)
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Size of the originating file in bytes
    pub const fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Full-resolution pixel buffer
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}
