//! Check command handler
//!
//! Reads the allowlist file, runs the scanner and validator, and renders
//! the report to stdout in human or JSON form. All report lines go to
//! stdout; tracing diagnostics go to stderr.

use std::path::Path;

use serde::Serialize;
use serde_json::json;

use crate::allowlist::{Scanner, ValidationFailure, ValidationResult, validate};
use crate::cli::args::{Cli, OutputFormat};
use crate::error::{AllowlintError, ExitCode, Result};

/// Validate the allowlist file and report the result.
///
/// Returns the process exit code: 0 on pass, 1 on any failure including
/// a missing or unreadable input file.
#[must_use]
pub fn run(args: &Cli) -> i32 {
    tracing::info!(file = %args.path.display(), "validating allowlist");

    let contents = match load(&args.path) {
        Ok(contents) => contents,
        Err(err) => {
            report_error(args.format, &args.path, &err);
            return ExitCode::FAILURE;
        }
    };

    let outcome = Scanner::new().scan(&contents);
    tracing::debug!(
        entries = outcome.entries.len(),
        duplicates = outcome.duplicates.len(),
        "scan complete"
    );

    let result = validate(&outcome);
    report(args.format, &args.path, &result);

    if result.is_valid() {
        tracing::info!(file = %args.path.display(), "allowlist valid");
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Reads the allowlist file into memory.
///
/// # Errors
///
/// Returns [`AllowlintError::NotFound`] if the file does not exist, or an
/// I/O error if it exists but cannot be read.
fn load(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(AllowlintError::NotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

// ============================================================================
// Report rendering
// ============================================================================

/// JSON report for a completed validation run.
#[derive(Serialize)]
struct JsonReport<'a> {
    status: &'static str,
    path: String,
    #[serde(flatten)]
    failure: Option<&'a ValidationFailure>,
}

/// Renders a validation result to stdout.
fn report(format: OutputFormat, path: &Path, result: &ValidationResult) {
    match format {
        OutputFormat::Human => report_human(path, result),
        OutputFormat::Json => {
            let report = JsonReport {
                status: if result.is_valid() { "pass" } else { "fail" },
                path: path.display().to_string(),
                failure: match result {
                    ValidationResult::Pass => None,
                    ValidationResult::Fail(failure) => Some(failure),
                },
            };
            // Serialization of a string/vec-only struct cannot fail.
            println!("{}", serde_json::to_string(&report).unwrap_or_default());
        }
    }
}

/// Human-readable report, one header line plus one bullet per offending key.
fn report_human(path: &Path, result: &ValidationResult) {
    match result {
        ValidationResult::Pass => println!("{} validation passed", path.display()),
        ValidationResult::Fail(ValidationFailure::SectionMissingOrEmpty) => {
            println!("Error: ExtensionAllowlist section not found or empty");
        }
        ValidationResult::Fail(ValidationFailure::DuplicateKeys(keys)) => {
            println!("Error: Duplicate keys found in ExtensionAllowlist:");
            for key in keys {
                println!("  - {key}");
            }
        }
        ValidationResult::Fail(ValidationFailure::PrefixConflicts(conflicts)) => {
            println!("Error: Keys with dots conflict with existing top-level keys:");
            for conflict in conflicts {
                println!("  - {conflict}");
            }
        }
    }
}

/// Renders a file-level error to stdout.
fn report_error(format: OutputFormat, path: &Path, err: &AllowlintError) {
    tracing::debug!(%err, "failed to read allowlist");
    match format {
        OutputFormat::Human => println!("Error: {err}"),
        OutputFormat::Json => {
            let reason = match err {
                AllowlintError::NotFound { .. } => "not_found",
                AllowlintError::Io(_) => "io_error",
            };
            let report = json!({
                "status": "fail",
                "path": path.display().to_string(),
                "reason": reason,
                "message": err.to_string(),
            });
            println!("{report}");
        }
    }
}
