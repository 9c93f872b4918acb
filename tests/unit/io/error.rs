//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use lifegrid::LifeError;
    use lifegrid::io::error::{invalid_parameter, out_of_bounds};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = LifeError::FileSystem {
            path: "/tmp/cells.txt".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/cells.txt"));
    }

    // Tests InvalidDimension error formatting
    // Verified by omitting dimensions from message
    #[test]
    fn test_invalid_dimension_error() {
        let error = LifeError::InvalidDimension {
            rows: 0,
            cols: 30,
            reason: "rows and columns must be positive",
        };

        let message = error.to_string();
        assert!(message.contains("0x30"));
        assert!(message.contains("must be positive"));
        assert!(error.source().is_none());
    }

    // Tests OutOfBounds error contains coordinate and grid size
    // Verified by omitting the coordinate from the message
    #[test]
    fn test_out_of_bounds_error() {
        let error = out_of_bounds(-1, 4, (30, 20));
        let message = error.to_string();
        assert!(message.contains("(-1, 4)"));
        assert!(message.contains("30x20"));
    }

    // Tests MalformedCoordinate error names the token
    #[test]
    fn test_malformed_coordinate_error() {
        let error = LifeError::MalformedCoordinate {
            token: "1;2".to_string(),
            reason: "expected exactly two comma-separated values".to_string(),
        };
        assert!(error.to_string().contains("'1;2'"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("cell_size", &0, &"must be at least 1");

        let message = error.to_string();
        assert!(message.contains("cell_size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be at least 1"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = LifeError::ImageExport {
            path: "/restricted/life.png".into(),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/life.png"));
        assert!(message.contains("access denied"), "{message}");
        assert!(error.source().is_some());
    }

    // Tests conversions used by the ? operator
    #[test]
    fn test_from_conversions() {
        let from_io: LifeError = std::io::Error::other("boom").into();
        assert!(matches!(from_io, LifeError::FileSystem { .. }));

        let from_image: LifeError =
            image::ImageError::IoError(std::io::Error::other("boom")).into();
        assert!(matches!(from_image, LifeError::ImageExport { .. }));
    }
}
