//! # CLI Behavior
//!
//! This is **one possible UI client** for roster, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and output
//! formatting. For the overall architecture see the crate-level docs of `roster`.
//!
//! ## Naked Execution (`roster`)
//!
//! Running `roster` with no subcommand opens the numbered menu, same as `roster menu`.
//! The menu reads one line per answer, so it can also be driven from a pipe:
//!
//! ```text
//! printf '2\n\n0\n' | roster
//! ```
//!
//! ## Subcommands
//!
//! Every menu operation has a one-shot subcommand (`add`, `list`, `search`, `update`,
//! `delete`, `grade`, `report`, `export`) plus `config`. `delete` asks for the `YES`
//! confirmation on stdin unless `--yes` is given.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-subcommand handlers
//! - `shell`: the interactive menu session
//! - `render`: output formatting through templates
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styles
//! - `templates`: embedded output templates

mod commands;
mod render;
pub mod setup;
mod shell;
mod styles;
mod templates;

pub use commands::run;
