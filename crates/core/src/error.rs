//! Error types shared by the montage, converter, and slide export tools.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Overflow;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating, composing, converting, or exporting.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The slide specification is not valid JSON.
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Input values have the wrong shape or are out of range.
    #[error("{0}")]
    Validation(String),

    /// One or more input images do not exist. Paths are sorted.
    #[error("The following image files were not found: {}", join_paths(.0))]
    MissingFiles(Vec<PathBuf>),

    /// A required input file does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The converter executable could not be located.
    #[error("The converter '{converter}' could not be found. Install LibreOffice to continue.")]
    ConverterNotFound { converter: String },

    /// The converter ran but exited unsuccessfully.
    #[error("Failed to convert '{}' to images: {message}", .input.display())]
    ConversionFailed { input: PathBuf, message: String },

    /// An external collaborator (image codec, subprocess) failed.
    #[error("{0}")]
    ExternalTool(String),

    /// Slide content extends past the slide bounds.
    #[error("{0}")]
    Overflow(OverflowViolation),
}

/// Abstract classification of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input shape or values, detected before any external call.
    Validation,
    /// A missing file or executable.
    ResourceNotFound,
    /// Failure reported by the filesystem, an image codec, or a subprocess.
    ExternalTool,
    /// Content exceeds its declared bounds.
    Overflow,
}

impl Error {
    /// Shorthand for a [`Error::Validation`] error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::JsonError(_) => ErrorKind::Validation,
            Self::MissingFiles(_) | Self::NotFound(_) | Self::ConverterNotFound { .. } => {
                ErrorKind::ResourceNotFound
            }
            Self::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ErrorKind::ResourceNotFound
            }
            Self::IoError(_) | Self::ConversionFailed { .. } | Self::ExternalTool(_) => {
                ErrorKind::ExternalTool
            }
            Self::Overflow(_) => ErrorKind::Overflow,
        }
    }
}

/// A slide whose elements overflow, with every offending element listed.
#[derive(Debug, Clone, PartialEq)]
pub struct OverflowViolation {
    /// 1-based slide number.
    pub slide: usize,
    /// Overflow records in element order.
    pub overflows: Vec<Overflow>,
}

impl std::fmt::Display for OverflowViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Slide {} contains content that overflows its bounds:",
            self.slide
        )?;
        for overflow in &self.overflows {
            let reasons: Vec<&str> = overflow.reasons.iter().map(|r| r.as_str()).collect();
            write!(
                f,
                " {} (#{}: {})",
                overflow.name,
                overflow.index,
                reasons.join(", ")
            )?;
        }
        Ok(())
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bounds, Edge};

    #[test]
    fn test_missing_files_message() {
        let err = Error::MissingFiles(vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
        assert_eq!(
            err.to_string(),
            "The following image files were not found: a.png, b.png"
        );
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    }

    #[test]
    fn test_overflow_message_lists_elements() {
        let err = Error::Overflow(OverflowViolation {
            slide: 2,
            overflows: vec![Overflow {
                index: 1,
                name: "logo".to_string(),
                bounds: Bounds {
                    left: 10.0,
                    top: 10.0,
                    right: 2000.0,
                    bottom: 1200.0,
                },
                reasons: vec![Edge::Right, Edge::Bottom],
            }],
        });
        assert_eq!(
            err.to_string(),
            "Slide 2 contains content that overflows its bounds: logo (#1: right, bottom)"
        );
        assert_eq!(err.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn test_io_not_found_is_missing_resource() {
        let err = Error::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);

        let err = Error::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind(), ErrorKind::ExternalTool);
    }

    #[test]
    fn test_conversion_failed_message() {
        let err = Error::ConversionFailed {
            input: PathBuf::from("deck.pptx"),
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to convert 'deck.pptx' to images: boom");
        assert_eq!(err.kind(), ErrorKind::ExternalTool);
    }
}
