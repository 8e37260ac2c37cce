//! # Roster Architecture
//!
//! Roster keeps student enrollment records: identity, contact details, course and an
//! optional letter grade. The library owns the records and every rule about them; the
//! `roster` binary is one client that drives it from a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, the numbered menu shell, rendered output    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes raw ID text into StudentId                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user operation, returns CmdResult         │
//! │  - Reports (report.rs) and exports (export.rs) as values    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore: ordered, key-unique records + persistence   │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr and never exits the process.
//! Diagnostics go through `tracing`; whoever runs the library decides where they end up.
//!
//! ## Persistence
//!
//! Every successful mutation rewrites the whole document. If the write fails the
//! in-memory change is rolled back, so memory and disk never disagree after an error.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: Record store plus storage backends
//! - [`model`]: `StudentId`, `Grade`, `StudentRecord` and friends
//! - [`validation`]: Field rules shared by every input path
//! - [`report`]: Grouped views and statistics
//! - [`export`]: Plain-text export files
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the menu shell and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod report;
pub mod store;
pub mod validation;
