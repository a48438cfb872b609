//! tickoff — a to-do list in the terminal.
//!
//! # Usage
//!
//! ```text
//! tickoff add <text...>
//! tickoff list [--filter all|active|completed] [--json]
//! tickoff done <id>
//! tickoff undo <id>
//! tickoff rm <id>
//! tickoff clear
//! tickoff theme [show|toggle|dark|light]
//! tickoff status [--json]
//! ```
//!
//! Data lives in `~/.tickoff/` unless `--data-dir` or `TICKOFF_HOME` says
//! otherwise.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    add::AddArgs, clear::ClearArgs, list::ListArgs, remove::RemoveArgs, status::StatusArgs,
    theme::ThemeArgs, toggle::ToggleArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "tickoff",
    version,
    about = "Keep a to-do list: add, complete, filter, clear",
    long_about = None,
)]
struct Cli {
    /// Directory holding the todos and theme slots. Defaults to ~/.tickoff
    #[arg(long, global = true, env = "TICKOFF_HOME", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a todo. Blank text is ignored.
    Add(AddArgs),

    /// Show the list, optionally filtered.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Mark a todo completed.
    Done(ToggleArgs),

    /// Mark a todo not completed.
    Undo(ToggleArgs),

    /// Delete a todo.
    #[command(alias = "delete")]
    Rm(RemoveArgs),

    /// Delete every completed todo.
    Clear(ClearArgs),

    /// Show or change the colour theme.
    Theme(ThemeArgs),

    /// Remaining / completed / total counts.
    Status(StatusArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let root = commands::resolve_data_dir(cli.data_dir)?;
    tracing::debug!(root = %root.display(), "using data directory");
    match cli.command {
        Commands::Add(args) => args.run(&root),
        Commands::List(args) => args.run(&root),
        Commands::Done(args) => args.run(&root, true),
        Commands::Undo(args) => args.run(&root, false),
        Commands::Rm(args) => args.run(&root),
        Commands::Clear(args) => args.run(&root),
        Commands::Theme(args) => args.run(&root),
        Commands::Status(args) => args.run(&root),
    }
}

/// Diagnostics go to stderr so `--json` output on stdout stays parseable.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
