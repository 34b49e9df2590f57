//! IEDS Binary
//!
//! Eliminates dominated strategies from a two-player game read from CSV files.
//!
//! Options: -w (weak), -v (very weak), --json

use ieds::*;

fn main() -> std::process::ExitCode {
    cli::CLI::run()
}
