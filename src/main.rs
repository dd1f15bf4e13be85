//! itemstore CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, and prints errors to
//! stderr with a non-zero exit code. All setup is delegated to `cli`.

use itemstore::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
