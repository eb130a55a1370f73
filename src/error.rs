//! Error types for notemerge.
//!
//! All fallible operations in the crate return [`NoteMergeError`]. The driver
//! never lets lower layers print-and-exit on their own; instead it inspects
//! the error's [`FailureClass`] exactly once and maps it to an exit status:
//!
//! - **Validation** — bad user input (missing file, declined overwrite);
//!   message plus exit 1.
//! - **ExternalTool** — the delegated ad-removal step reported failure;
//!   message plus exit 1.
//! - **Interrupted** — the user hit ctrl-c; closing log lines plus exit 1.
//! - **Unclassified** — everything else (corrupt PDF, permission denied,
//!   disk full); logged with a generic line, then re-raised to the runtime.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for notemerge operations.
pub type Result<T> = std::result::Result<T, NoteMergeError>;

/// How the driver should react to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// User-input validation failure; report and exit 1.
    Validation,
    /// The external ad-removal tool reported failure; report and exit 1.
    ExternalTool,
    /// The run was interrupted by the user; close the log and exit 1.
    Interrupted,
    /// Anything else; log a generic line and re-raise.
    Unclassified,
}

/// Main error type for notemerge operations.
#[derive(Debug, Error)]
pub enum NoteMergeError {
    /// A named input file was not found.
    #[error("The file {} does not exist", .path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// An input path exists but is not a regular file.
    #[error("Not a file: {}", .path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Failed to load a PDF file.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// The PDF is corrupted or has invalid structure.
    #[error("Corrupted or invalid PDF: {}\n  Details: {details}", .path.display())]
    CorruptedPdf {
        /// Path to the corrupted PDF.
        path: PathBuf,
        /// Details about the corruption.
        details: String,
    },

    /// The PDF is encrypted and cannot be processed.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        .path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// No input files were provided for merging.
    #[error("No input files specified for merging")]
    NoFilesToMerge,

    /// Failed to create the output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The merge operation itself failed.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// The external ad-removal tool reported failure.
    #[error("Ad removal failed: {reason}")]
    AdRemovalFailed {
        /// Error text reported by the tool.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// The user declined the overwrite confirmation.
    #[error("Operation cancelled by the user")]
    Cancelled,

    /// The user interrupted the run.
    #[error("Operation cancelled by the user")]
    Interrupted,

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for NoteMergeError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl From<anyhow::Error> for NoteMergeError {
    fn from(err: anyhow::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl NoteMergeError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: PathBuf, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path,
            details: details.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an AdRemovalFailed error.
    pub fn ad_removal_failed(reason: impl Into<String>) -> Self {
        Self::AdRemovalFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Classify this error for the driver's single outcome match.
    pub fn class(&self) -> FailureClass {
        match self {
            Self::FileNotFound { .. }
            | Self::NotAFile { .. }
            | Self::NoFilesToMerge
            | Self::InvalidConfig { .. }
            | Self::Cancelled => FailureClass::Validation,
            Self::AdRemovalFailed { .. } => FailureClass::ExternalTool,
            Self::Interrupted => FailureClass::Interrupted,
            _ => FailureClass::Unclassified,
        }
    }

    /// Get the exit code for this error.
    ///
    /// Every classified failure exits with 1; unclassified failures are
    /// re-raised by the driver instead of mapped here.
    pub fn exit_code(&self) -> i32 {
        match self.class() {
            FailureClass::Validation
            | FailureClass::ExternalTool
            | FailureClass::Interrupted
            | FailureClass::Unclassified => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_file_not_found_display() {
        let err = NoteMergeError::file_not_found(PathBuf::from("/tmp/missing.pdf"));
        let msg = format!("{err}");
        assert!(msg.contains("does not exist"));
        assert!(msg.contains("missing.pdf"));
    }

    #[test]
    fn test_failed_to_load_pdf_display() {
        let err =
            NoteMergeError::failed_to_load_pdf(PathBuf::from("bad.pdf"), "Invalid PDF header");
        let msg = format!("{err}");
        assert!(msg.contains("Failed to load PDF"));
        assert!(msg.contains("bad.pdf"));
        assert!(msg.contains("Invalid PDF header"));
    }

    #[test]
    fn test_encrypted_pdf_display() {
        let err = NoteMergeError::encrypted_pdf(PathBuf::from("secret.pdf"));
        let msg = format!("{err}");
        assert!(msg.contains("encrypted"));
        assert!(msg.contains("secret.pdf"));
        assert!(msg.contains("Decrypt")); // Helpful hint
    }

    #[test]
    fn test_cancelled_display() {
        let err = NoteMergeError::Cancelled;
        assert_eq!(format!("{err}"), "Operation cancelled by the user");
    }

    #[test]
    fn test_classes() {
        assert_eq!(
            NoteMergeError::file_not_found(PathBuf::from("x.pdf")).class(),
            FailureClass::Validation
        );
        assert_eq!(
            NoteMergeError::Cancelled.class(),
            FailureClass::Validation
        );
        assert_eq!(
            NoteMergeError::ad_removal_failed("pattern db unavailable").class(),
            FailureClass::ExternalTool
        );
        assert_eq!(NoteMergeError::Interrupted.class(), FailureClass::Interrupted);
        assert_eq!(
            NoteMergeError::failed_to_load_pdf(PathBuf::from("x.pdf"), "trailer").class(),
            FailureClass::Unclassified
        );
        assert_eq!(
            NoteMergeError::from(io::Error::other("disk full")).class(),
            FailureClass::Unclassified
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            NoteMergeError::file_not_found(PathBuf::from("x")).exit_code(),
            1
        );
        assert_eq!(NoteMergeError::Cancelled.exit_code(), 1);
        assert_eq!(NoteMergeError::Interrupted.exit_code(), 1);
        assert_eq!(NoteMergeError::ad_removal_failed("boom").exit_code(), 1);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "not found");
        let err: NoteMergeError = io_err.into();
        assert!(matches!(err, NoteMergeError::Io { .. }));
    }

    #[test]
    fn test_error_source() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = NoteMergeError::Io { source: io_err };
        assert!(err.source().is_some());

        let err = NoteMergeError::NoFilesToMerge;
        assert!(err.source().is_none());
    }

    #[test]
    fn test_builder_methods() {
        let err = NoteMergeError::file_not_found(PathBuf::from("test.pdf"));
        assert!(matches!(err, NoteMergeError::FileNotFound { .. }));

        let err = NoteMergeError::merge_failed("test reason");
        assert!(matches!(err, NoteMergeError::MergeFailed { .. }));

        let err = NoteMergeError::invalid_config("test message");
        assert!(matches!(err, NoteMergeError::InvalidConfig { .. }));

        let err = NoteMergeError::other("generic error");
        assert!(matches!(err, NoteMergeError::Other { .. }));
    }
}
