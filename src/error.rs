//! Error types for lintgate.
//!
//! Only conditions that abort a validation pass live here. Tool failures and
//! markdown findings are data inside a `ValidationResult`, never errors.

use crate::exit_codes;
use std::time::Duration;
use thiserror::Error;

/// Fatal error for a validation pass or the surrounding CLI plumbing.
#[derive(Error, Debug)]
pub enum LintgateError {
    /// Invalid hook payload, configuration, or arguments.
    #[error("{0}")]
    UserError(String),

    /// The temp file for the pass could not be created or written.
    #[error("failed to stage temp file: {0}")]
    Staging(String),

    /// The pass-wide deadline expired before all tools finished.
    #[error("validation timed out after {}ms", .0.as_millis())]
    DeadlineExceeded(Duration),

    /// Unexpected I/O failure outside staging (e.g. re-reading the staged file).
    #[error("I/O error: {0}")]
    Io(String),
}

impl LintgateError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LintgateError::UserError(_)
            | LintgateError::Staging(_)
            | LintgateError::DeadlineExceeded(_)
            | LintgateError::Io(_) => exit_codes::ERROR,
        }
    }
}

/// Result type alias for lintgate operations.
pub type Result<T> = std::result::Result<T, LintgateError>;
