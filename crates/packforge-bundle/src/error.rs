//! Error types for bundle operations.

use thiserror::Error;

/// Errors that can occur during bundle operations.
#[derive(Debug, Error)]
pub enum BundleError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ZIP archive error while writing.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Directory traversal error.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Input file or directory does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File exists but is not a readable ZIP archive.
    #[error("Invalid archive {path}: {reason}")]
    InvalidArchive { path: String, reason: String },

    /// Embedded descriptor is unparsable or lacks a mandatory field.
    #[error("Malformed descriptor in {path}: {reason}")]
    MalformedDescriptor { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn BundleError___io___displays_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BundleError = io_err.into();

        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn BundleError___file_not_found___displays_path() {
        let err = BundleError::FileNotFound("input/mods-fml/a.jar".to_string());

        assert_eq!(err.to_string(), "File not found: input/mods-fml/a.jar");
    }

    #[test]
    fn BundleError___invalid_archive___displays_all_fields() {
        let err = BundleError::InvalidArchive {
            path: "a.jar".to_string(),
            reason: "invalid Zip archive".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("a.jar"));
        assert!(msg.contains("invalid Zip archive"));
    }

    #[test]
    fn BundleError___malformed_descriptor___displays_all_fields() {
        let err = BundleError::MalformedDescriptor {
            path: "a.jar".to_string(),
            reason: "missing modid".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Malformed descriptor in a.jar: missing modid"
        );
    }

    #[test]
    fn BundleError___from_zip_error___converts() {
        let err: BundleError = zip::result::ZipError::FileNotFound.into();

        assert!(matches!(err, BundleError::Zip(_)));
    }
}
