//! Tests for error formatting and sources

#[cfg(test)]
mod tests {
    use fakescope::io::error::{DetectorError, file_system, invalid_parameter, invalid_sample};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests user-facing messages for rejected uploads
    // Verified by omitting the limit from the message
    #[test]
    fn test_rejection_messages() {
        let too_large = DetectorError::FileTooLarge {
            path: PathBuf::from("big.png"),
            size: 6_000_000,
            limit: 5_242_880,
        };
        assert_eq!(
            too_large.to_string(),
            "'big.png' is 6000000 bytes, images must be at most 5242880 bytes"
        );

        let unsupported = DetectorError::UnsupportedFormat {
            path: PathBuf::from("notes.txt"),
        };
        assert_eq!(unsupported.to_string(), "'notes.txt' is not a valid image file");
    }

    // Tests helper constructors
    // Verified by swapping value and reason
    #[test]
    fn test_helpers() {
        let param = invalid_parameter("max-bytes", &0, &"must be greater than zero");
        assert_eq!(
            param.to_string(),
            "Invalid parameter 'max-bytes' = '0': must be greater than zero"
        );

        let sample = invalid_sample(&"image has zero area (0x3)");
        assert_eq!(
            sample.to_string(),
            "Invalid image sample: image has zero area (0x3)"
        );
        assert!(sample.source().is_none());
    }

    // Tests that wrapped I/O errors keep their source
    // Verified by returning no source for file system errors
    #[test]
    fn test_file_system_source() {
        let wrap = file_system("missing.png", "read");
        let err = wrap(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));

        assert!(err.to_string().contains("during read on 'missing.png'"));
        assert!(err.source().is_some());
    }
}
