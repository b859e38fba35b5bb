//! CLI argument definitions
//!
//! All Clap derive structs for `allowlint` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Default input path, resolved relative to the current working directory.
pub const DEFAULT_ALLOWLIST_PATH: &str = "ExtensionAllowlist.yaml";

// ============================================================================
// Root CLI
// ============================================================================

/// Lint an `ExtensionAllowlist.yaml` allow/deny mapping.
///
/// Checks the `ExtensionAllowlist:` section for duplicate keys and for
/// dotted keys that conflict with a top-level key of the same prefix.
#[derive(Parser, Debug)]
#[command(name = "allowlint", author, version, about)]
pub struct Cli {
    /// Path to the allowlist file to validate.
    #[arg(default_value = DEFAULT_ALLOWLIST_PATH, env = "ALLOWLINT_FILE")]
    pub path: PathBuf,

    /// Output format for the validation report.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-report output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output control for diagnostics.
    #[arg(long, default_value = "auto", env = "ALLOWLINT_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Output format for the validation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

// ============================================================================
// Tests
// ============================================================================
