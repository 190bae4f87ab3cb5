//! screener - Screen literature-review articles one at a time
//!
//! Log in as a reviewer, step through the articles assigned to you and record
//! include/exclude decisions against a spreadsheet-backed API.

#![deny(clippy::all, unsafe_code, unused_import_braces)]
#![allow(clippy::module_name_repetitions)]

mod cli;

/// Main entry point for the screener CLI
fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
