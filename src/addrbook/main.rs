//! # Addrbook CLI
//!
//! The binary only invokes `cli::run()` and turns a startup failure into an
//! exit code. Everything the user sees is produced under `cli/`; everything the
//! menu does goes through `addrbook::api`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
