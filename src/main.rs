//! blfit CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, assemble
//! the baseline-fit process configuration, and exit with a clear message
//! and non-zero status when assembly fails. For programmatic use, prefer
//! the library API (`blfit::ProcessBuilder`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    if let Err(e) = cli::run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
