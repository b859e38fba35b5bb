//! Allowlist validation
//!
//! Turns a [`ScanOutcome`] into a pass/fail verdict. Checks run in a fixed
//! order and each failing check carries the complete list of offending keys,
//! so one run shows every problem of that kind at once.

use std::collections::HashSet;

use serde::Serialize;

use crate::allowlist::ScanOutcome;

// ============================================================================
// Types
// ============================================================================

/// Why validation rejected the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "details")]
pub enum ValidationFailure {
    /// The section header never appeared, or the section had no entries.
    SectionMissingOrEmpty,

    /// At least one key was defined more than once. Details list each
    /// duplicated key once, in order of first detection.
    DuplicateKeys(Vec<String>),

    /// At least one dotted key shares its prefix with a top-level key.
    /// Details are preformatted conflict strings in entry order.
    PrefixConflicts(Vec<String>),
}

/// Outcome of validating a scanned allowlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// All checks passed.
    Pass,
    /// A check failed; no further checks were evaluated.
    Fail(ValidationFailure),
}

impl ValidationResult {
    /// Returns `true` if validation passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validates a scanned allowlist.
///
/// Check order: empty section, then duplicates, then prefix conflicts.
/// Duplicates are reported even when values agree, and they preempt the
/// conflict check since the entry map is not trustworthy once keys repeat.
#[must_use]
pub fn validate(outcome: &ScanOutcome) -> ValidationResult {
    if outcome.is_empty() {
        return ValidationResult::Fail(ValidationFailure::SectionMissingOrEmpty);
    }

    if !outcome.duplicates.is_empty() {
        return ValidationResult::Fail(ValidationFailure::DuplicateKeys(
            outcome.duplicates.clone(),
        ));
    }

    let top_level: HashSet<&str> = outcome
        .entries
        .keys()
        .filter(|key| !key.contains('.'))
        .map(String::as_str)
        .collect();

    let conflicts: Vec<String> = outcome
        .entries
        .keys()
        .filter_map(|key| {
            let (prefix, _) = key.split_once('.')?;
            top_level
                .contains(prefix)
                .then(|| format!("{key} conflicts with top-level key {prefix}"))
        })
        .collect();

    if conflicts.is_empty() {
        ValidationResult::Pass
    } else {
        ValidationResult::Fail(ValidationFailure::PrefixConflicts(conflicts))
    }
}

// ============================================================================
// Tests
// ============================================================================
