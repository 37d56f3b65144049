//! CLI binary for `tickler`.
//!
//! This binary is a thin wrapper that parses arguments and delegates to the
//! library.

use std::process::ExitCode;

use clap::Parser;
use tickler::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match tickler::cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
