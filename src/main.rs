//! `allowlint` - Linter for `ExtensionAllowlist.yaml` allow/deny mappings

use clap::Parser;

use allowlint::cli::args::Cli;
use allowlint::cli::commands;
use allowlint::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.verbose, cli.color);
    }

    std::process::exit(commands::dispatch(&cli));
}
