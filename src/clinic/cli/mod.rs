//! # CLI Layer
//!
//! One client of the `clinic` library. It is the only place that:
//! - parses arguments and reads the terminal
//! - sets up logging
//! - writes to stdout and stderr
//!
//! With no subcommand the interactive menu runs; subcommands do one thing
//! and exit, which is what scripts and the end-to-end tests use.
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, logging and per-command handlers
//! - `menu`: the interactive loop
//! - `render`: text output

mod commands;
mod menu;
mod render;
pub mod setup;

pub use commands::run;
