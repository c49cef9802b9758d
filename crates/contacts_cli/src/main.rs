//! Command-line client for the contact book.
//!
//! # Responsibility
//! - Parse arguments, load configuration, open the store once.
//! - Print results; all business rules live in `contacts_core`.

mod cli;
mod config;
mod render;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
