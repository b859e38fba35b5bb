//! `allowlint` - Linter for `ExtensionAllowlist.yaml` allow/deny mappings
//!
//! This library provides the scanner and validator behind the `allowlint`
//! binary, kept separate from the CLI so the checks are directly testable.

pub mod allowlist;
pub mod cli;
pub mod error;
pub mod observability;
