//! Allowlist scanning and validation
//!
//! Parses the `ExtensionAllowlist:` section of a constrained YAML-shaped
//! file and checks it for duplicate keys and dotted/top-level prefix
//! conflicts. This is deliberately not a general YAML parser: the accepted
//! grammar is exactly the subset the allowlist file uses.

pub mod scanner;
pub mod validation;

pub use scanner::{ScanOutcome, Scanner, parse_bool};
pub use validation::{ValidationFailure, ValidationResult, validate};

/// Header line that opens the allowlist section (without the trailing colon).
pub const SECTION_NAME: &str = "ExtensionAllowlist";
