//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::io::error::{file_system_error, invalid_parameter};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system_error("/tmp/pattern.svg", "write svg", io_error);

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("write svg"));
        assert!(message.contains("/tmp/pattern.svg"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("points", &"3;4", &"expected x,y");

        let message = error.to_string();
        assert!(message.contains("points"));
        assert!(message.contains("3;4"));
        assert!(message.contains("expected x,y"));
        assert!(error.source().is_none());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = KolamError::ImageExport {
            path: "/out/pattern.gif".into(),
            source: image_error,
        };

        assert!(error.to_string().contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests conversions from library errors
    // Verified by mapping to the wrong variant
    #[test]
    fn test_from_conversions() {
        let io: KolamError = std::io::Error::other("boom").into();
        assert!(matches!(io, KolamError::FileSystem { .. }));

        let json: KolamError = serde_json::from_str::<u8>("{").err().map_or_else(
            || KolamError::EmptyDrawing { operation: "none" },
            Into::into,
        );
        assert!(matches!(json, KolamError::Serialization { .. }));
    }

    // Tests empty drawing message names the operation
    #[test]
    fn test_empty_drawing_error() {
        let error = KolamError::EmptyDrawing {
            operation: "rasterize",
        };
        assert!(error.to_string().contains("rasterize"));
    }
}
