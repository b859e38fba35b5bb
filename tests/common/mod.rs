//! Shared integration-test harness for running the `allowlint` binary as a
//! child process and capturing its output.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Helpers for spawning the compiled `allowlint` binary.
pub struct AllowlintProcess;

impl AllowlintProcess {
    /// Runs the binary with the given arguments and waits for it to exit.
    ///
    /// Environment overrides are cleared so test results do not depend on
    /// the caller's shell.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_allowlint"))
            .args(args)
            .env_remove("ALLOWLINT_FILE")
            .env_remove("ALLOWLINT_LOG_LEVEL")
            .env_remove("ALLOWLINT_COLOR")
            .output()
            .expect("failed to spawn allowlint")
    }

    /// Like [`spawn_command`](Self::spawn_command) but with an explicit
    /// working directory, for exercising the implicit default path.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_in_dir(dir: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_allowlint"))
            .args(args)
            .current_dir(dir)
            .env_remove("ALLOWLINT_FILE")
            .env_remove("ALLOWLINT_LOG_LEVEL")
            .env_remove("ALLOWLINT_COLOR")
            .output()
            .expect("failed to spawn allowlint")
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}
