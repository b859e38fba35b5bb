//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the check handler and returns the
//! process exit code.

pub mod check;

use crate::cli::args::Cli;

/// Dispatch a parsed CLI invocation and return the exit code.
#[must_use]
pub fn dispatch(cli: &Cli) -> i32 {
    check::run(cli)
}
