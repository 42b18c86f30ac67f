//! wordrev - A CLI tool that reverses the word order of text lines
//!
//! Collects lines either interactively or from arguments and stdin,
//! validates each line's character count against a configurable range,
//! and prints a labeled result per line in input order.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the wordrev CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
