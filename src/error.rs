//! Error types for guidance-log operations.
//!
//! This module defines [`GuidanceError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Log file writes fail with [`GuidanceError::LogWrite`]; the tracker core
//!   reports and swallows these so a failed write never disturbs the session
//!   state.
//! - Configuration and terminal errors propagate to `main`.
//! - Use `anyhow::Error` (via `GuidanceError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for guidance-log operations.
#[derive(Debug, Error)]
pub enum GuidanceError {
    /// Writing one of the log files failed.
    #[error("Failed to write {path}: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The input stream closed while waiting for an answer.
    #[error("Input closed")]
    InputClosed,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for guidance-log operations.
pub type Result<T> = std::result::Result<T, GuidanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_write_displays_path_and_cause() {
        let err = GuidanceError::LogWrite {
            path: PathBuf::from("/desk/sessions_log.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/desk/sessions_log.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn log_write_exposes_source() {
        use std::error::Error as _;

        let err = GuidanceError::LogWrite {
            path: PathBuf::from("x"),
            source: std::io::Error::other("disk full"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = GuidanceError::ConfigNotFound {
            path: PathBuf::from("/etc/guidance.yml"),
        };
        assert!(err.to_string().contains("/etc/guidance.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = GuidanceError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "unknown field `colour`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("unknown field"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GuidanceError = io_err.into();
        assert!(matches!(err, GuidanceError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: GuidanceError = anyhow::anyhow!("something broke").into();
        assert!(matches!(err, GuidanceError::Other(_)));
        assert_eq!(err.to_string(), "something broke");
    }
}
