//! # CLI Layer
//!
//! One possible UI client for the address book. This is the only place that:
//! - Parses arguments (`setup.rs`)
//! - Builds the context and dispatches (`commands.rs`)
//! - Runs the numbered menu (`shell.rs`)
//! - Formats output for humans (`print.rs`)
//!
//! The shell reads from any `BufRead` and writes to any `Write`, so tests feed
//! it scripted input and inspect the text it produced.

mod commands;
mod print;
mod setup;
mod shell;

pub use commands::run;
