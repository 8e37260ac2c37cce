//! `roster` binary entry point.
//!
//! The binary is intentionally thin: everything user facing lives in `cli/`, and this
//! file only invokes `cli::run()` and turns an error into exit status 1.

use colored::Colorize;
use std::io::IsTerminal;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        if !std::io::stderr().is_terminal() {
            colored::control::set_override(false);
        }
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
