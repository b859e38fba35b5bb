//! Line scanner for the allowlist section
//!
//! A two-state machine over the input lines: outside the section only the
//! header line matters; inside it, every four-space-indented `key: value`
//! line becomes an entry until the first dedented content line closes the
//! section. Blank lines and `#` comments are skipped everywhere.
//!
//! The scanner records every problem it sees rather than stopping at the
//! first one, so a single run reports the complete duplicate list.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::allowlist::SECTION_NAME;

// ============================================================================
// Types
// ============================================================================

/// Scanner state: whether the allowlist section header has been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanState {
    /// Before the section header (or the header never appears).
    #[default]
    OutsideSection,
    /// After the header, collecting indented entries.
    InsideSection,
}

/// Everything the scanner extracted from one pass over the file.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// First-occurrence value of every key, in file order.
    ///
    /// Repeated occurrences never overwrite the value recorded here.
    pub entries: IndexMap<String, bool>,

    /// Keys that appeared more than once, in order of first re-occurrence.
    ///
    /// Deduplicated: a key repeated three times is listed once.
    pub duplicates: Vec<String>,
}

impl ScanOutcome {
    /// Returns `true` if the scan captured nothing at all, which means the
    /// section header was missing or the section had no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.duplicates.is_empty()
    }
}

// ============================================================================
// Scanner
// ============================================================================

/// Single-pass scanner for the allowlist section.
#[derive(Debug, Default)]
pub struct Scanner {
    state: ScanState,
    outcome: ScanOutcome,
}

impl Scanner {
    /// Creates a new scanner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans the full file contents and returns the extracted outcome.
    pub fn scan(&mut self, input: &str) -> ScanOutcome {
        self.state = ScanState::OutsideSection;
        self.outcome = ScanOutcome::default();

        let header = format!("{SECTION_NAME}:");

        for line in input.lines() {
            let stripped = line.trim();
            if stripped.is_empty() || stripped.starts_with('#') {
                continue;
            }

            match self.state {
                ScanState::OutsideSection => {
                    // Header must start at column zero; trailing whitespace
                    // is tolerated.
                    if line.trim_end() == header {
                        debug!("allowlist section found");
                        self.state = ScanState::InsideSection;
                    }
                }
                ScanState::InsideSection => {
                    if let Some((key, value)) = parse_entry(line) {
                        self.record(key, value);
                    } else if !line.starts_with(char::is_whitespace) {
                        // Dedent back to top level closes the section; the
                        // rest of the file is irrelevant.
                        debug!("allowlist section ended");
                        break;
                    }
                }
            }
        }

        std::mem::take(&mut self.outcome)
    }

    /// Records one `key: value` occurrence.
    fn record(&mut self, key: &str, value: &str) {
        if self.outcome.entries.contains_key(key) {
            if !self.outcome.duplicates.iter().any(|d| d == key) {
                debug!(key, "duplicate key");
                self.outcome.duplicates.push(key.to_string());
            }
        } else {
            let allowed = parse_bool(value);
            trace!(key, allowed, "entry recorded");
            self.outcome.entries.insert(key.to_string(), allowed);
        }
    }
}

// ============================================================================
// Line-level parsing
// ============================================================================

/// Splits an entry line into trimmed key and value.
///
/// An entry is exactly four leading spaces, at least one character before
/// the first `:`, and at least one character after it (whitespace counts,
/// so `    key: ` is an entry with an empty trimmed value while `    key:`
/// is not an entry at all). Deeper indentation still matches; the extra
/// spaces land in the raw key and are trimmed away.
fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_prefix("    ")?;
    let (raw_key, raw_value) = body.split_once(':')?;
    if raw_key.is_empty() || raw_value.is_empty() {
        return None;
    }
    Some((raw_key.trim(), raw_value.trim()))
}

/// Lenient boolean coercion: `true`/`yes`/`1` (case-insensitive) are `true`,
/// everything else is `false`. Unrecognized spellings are not an error.
#[must_use]
pub fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "1")
}

// ============================================================================
// Tests
// ============================================================================
