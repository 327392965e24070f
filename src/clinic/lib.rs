//! # Clinic Architecture
//!
//! A record keeper for a small clinic: patients, doctors and appointments,
//! each kept in a plain text file, with one hard rule: a doctor's time slot
//! can only be booked once.
//!
//! The crate is a UI-agnostic library; the `clinic` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Interactive menu and one-shot subcommands                │
//! │  - Parses raw input into typed values, renders results      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, one method per operation                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Registries (patients, doctors) and the scheduler         │
//! │  - Returns structured `CmdResult` / `ClinicError`           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - One CollectionStore per record type                      │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Cache
//!
//! Every operation reloads what it needs from the files and, if it changes
//! anything, rewrites the whole file before returning. The files are the
//! source of truth.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic
//! - [`store`]: Storage abstraction and implementations
//! - [`codec`]: Line encoding of records
//! - [`model`]: `Patient`, `Doctor`, `Appointment` and request types
//! - [`config`]: `clinic.toml` loading
//! - [`init`]: Context bootstrap for the binary
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
