//! Error types for the IO boundary of pattern generation and reconstruction

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible operations
///
/// The pattern core itself never fails: inputs are normalized and degenerate
/// geometry yields conservative answers. Undecodable raster input is reported
/// as a failed reconstruction rather than an error. These variants cover
/// files, encoding and command-line parameters.
#[derive(Debug)]
pub enum KolamError {
    /// Failed to encode or save an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A report could not be serialized
    Serialization {
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// Nothing to rasterize or encode
    EmptyDrawing {
        /// What was being produced
        operation: &'static str,
    },
}

impl fmt::Display for KolamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Serialization { source } => write!(f, "Failed to serialize report: {source}"),
            Self::EmptyDrawing { operation } => {
                write!(f, "Nothing to render during {operation}")
            }
        }
    }
}

impl std::error::Error for KolamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            Self::InvalidParameter { .. } | Self::EmptyDrawing { .. } => None,
        }
    }
}

/// Convenience type alias for fallible results
pub type Result<T> = std::result::Result<T, KolamError>;

impl From<std::io::Error> for KolamError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for KolamError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KolamError {
    KolamError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> KolamError {
    KolamError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
