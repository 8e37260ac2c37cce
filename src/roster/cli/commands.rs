//! # CLI Layer
//!
//! This module is **one possible UI client** for roster. It is the only place that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Parses arguments
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: parse, set up logging, build the context, dispatch
//! - `init_context()`: resolves config and data paths into a `RosterApi<FileStore>`
//! - `handle_*()`: per-subcommand handlers that call the API and print rendered output
//!
//! Errors bubble up to `main`, which prints `Error: ...` and exits with status 1.

use super::render::{
    render_key_values, render_messages, render_records, render_report, stdout_color, RecordDetail,
};
use super::setup::{Cli, Commands, FieldArg, ReportArg};
use super::shell::Shell;
use clap::Parser;
use directories::ProjectDirs;
use roster::api::{CmdMessage, ConfigAction, RosterApi, RosterPaths};
use roster::commands::delete::CONFIRM_TOKEN;
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::model::NewStudent;
use roster::store::fs::FileStore;
use roster::validation;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// Overrides the config directory, mainly for tests and portable setups.
const HOME_ENV: &str = "ROSTER_HOME";

struct AppContext {
    api: RosterApi<FileStore>,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::Add {
            name,
            age,
            email,
            phone,
            course,
        }) => handle_add(&mut ctx, name, age, email, phone, course),
        Some(Commands::List) => handle_list(&mut ctx),
        Some(Commands::Search { term }) => handle_search(&mut ctx, term),
        Some(Commands::Update { id, field, value }) => handle_update(&mut ctx, id, field, value),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Grade { id, grade }) => handle_grade(&mut ctx, id, grade),
        Some(Commands::Report { kind }) => handle_report(&mut ctx, kind),
        Some(Commands::Export { name }) => handle_export(&mut ctx, name),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

/// Logs go to stderr. `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // A second init (only possible in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn config_dir() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".roster"))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir();
    let config = RosterConfig::load(&config_dir)?;

    let data_file = cli
        .data_file
        .clone()
        .unwrap_or_else(|| config.data_file.clone());
    debug!(
        config_dir = %config_dir.display(),
        data_file = %data_file.display(),
        "resolved paths"
    );

    let paths = RosterPaths {
        config_dir,
        export_dir: config.export_dir.clone(),
    };
    Ok(AppContext {
        api: RosterApi::new(FileStore::new(data_file), paths),
        use_color: stdout_color(),
    })
}

fn print_messages(ctx: &AppContext, messages: &[CmdMessage]) {
    print!("{}", render_messages(messages, ctx.use_color));
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let use_color = ctx.use_color;
    Shell::new(&mut ctx.api, stdin.lock(), stdout.lock(), use_color).run()
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    age: String,
    email: String,
    phone: String,
    course: String,
) -> Result<()> {
    let fields = NewStudent {
        name,
        age: validation::parse_age(&age)?,
        email,
        phone,
        course,
    };
    let result = ctx.api.add_student(fields)?;
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_students()?;
    if !result.listed_records.is_empty() {
        let header = format!("Total Students: {}", result.listed_records.len());
        print!(
            "{}",
            render_records(
                Some(&header),
                &result.listed_records,
                RecordDetail::Listing,
                ctx.use_color
            )
        );
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_students(&term)?;
    print_messages(ctx, &result.messages);
    if !result.listed_records.is_empty() {
        print!(
            "{}",
            render_records(
                None,
                &result.listed_records,
                RecordDetail::Search,
                ctx.use_color
            )
        );
    }
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: String, field: FieldArg, value: String) -> Result<()> {
    let result = ctx.api.update_student(&id, field.into(), &value)?;
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: String, yes: bool) -> Result<()> {
    if yes {
        let result = ctx.api.delete_student(&id, CONFIRM_TOKEN)?;
        print_messages(ctx, &result.messages);
        return Ok(());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let use_color = ctx.use_color;
    Shell::new(&mut ctx.api, stdin.lock(), stdout.lock(), use_color).confirm_delete(&id)
}

fn handle_grade(ctx: &mut AppContext, id: String, grade: Option<String>) -> Result<()> {
    let result = ctx.api.assign_grade(&id, grade.as_deref().unwrap_or(""))?;
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_report(ctx: &mut AppContext, kind: ReportArg) -> Result<()> {
    let result = ctx.api.report(kind.into())?;
    let report = result
        .report
        .as_ref()
        .ok_or_else(|| RosterError::Api("Report was not produced".to_string()))?;
    print!("{}", render_report(report, ctx.use_color));
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, name: Option<String>) -> Result<()> {
    let result = ctx.api.export(name.as_deref())?;
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        let pairs = result
            .config
            .as_ref()
            .map(|config| config.list_all())
            .unwrap_or_default();
        print!(
            "{}",
            render_key_values(&pairs, "No configuration values.", ctx.use_color)
        );
    }
    print_messages(ctx, &result.messages);
    Ok(())
}
