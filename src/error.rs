//! Error types for `allowlint`
//!
//! File-level failures that prevent validation from running at all.
//! Validation findings themselves are not errors; they are carried in
//! [`ValidationResult`](crate::allowlist::ValidationResult).

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `allowlint` CLI operations.
///
/// Every failure mode (missing file, empty or missing section, duplicates,
/// prefix conflicts) collapses to a single failure code so CI gates can
/// treat the result as a plain pass/fail signal.
pub struct ExitCode;

impl ExitCode {
    /// Validation passed.
    pub const SUCCESS: i32 = 0;

    /// Validation failed, or the input file could not be read.
    pub const FAILURE: i32 = 1;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Errors that prevent the allowlist file from being scanned.
#[derive(Debug, Error)]
pub enum AllowlintError {
    /// The input file does not exist.
    #[error("{} not found", path.display())]
    NotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// The input file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `allowlint` operations.
pub type Result<T> = std::result::Result<T, AllowlintError>;

// ============================================================================
// Tests
// ============================================================================
