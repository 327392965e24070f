//! # Clinic CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Everything the CLI calls into is the UI-agnostic `clinic` library. The CLI
//! owns argument parsing, the interactive menu, logging setup and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
