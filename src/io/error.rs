//! Error types for image conversion

use std::fmt;
use std::path::PathBuf;

/// Main error type for all conversion operations
#[derive(Debug)]
pub enum ConversionError {
    /// Failed to load or decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Pixel data does not form a rectangular RGBA grid
    ///
    /// Raised before any scanning takes place, so no shapes are produced.
    MalformedGrid {
        /// Description of what's wrong with the grid
        reason: String,
    },

    /// Failed to write the SVG document
    SvgExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
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

    /// Command line could not be parsed
    Usage {
        /// Rendered usage message
        message: String,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::MalformedGrid { reason } => {
                write!(f, "Malformed pixel grid: {reason}")
            }
            Self::SvgExport { path, source } => {
                write!(f, "Failed to write SVG to '{}': {source}", path.display())
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
            Self::Usage { message } => f.write_str(message.trim_end()),
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::SvgExport { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::MalformedGrid { .. } | Self::Usage { .. } => None,
        }
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConversionError>;

impl From<image::ImageError> for ConversionError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<clap::Error> for ConversionError {
    fn from(err: clap::Error) -> Self {
        Self::Usage {
            message: err.render().to_string(),
        }
    }
}

/// Create a malformed grid error
pub fn malformed_grid(reason: &impl ToString) -> ConversionError {
    ConversionError::MalformedGrid {
        reason: reason.to_string(),
    }
}
