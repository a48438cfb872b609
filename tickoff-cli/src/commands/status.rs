//! `tickoff status` — counts at a glance.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use tickoff_core::{FilterMode, Theme};

use super::Session;

/// Arguments for `tickoff status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct StatusJson {
    total: usize,
    remaining: usize,
    completed: usize,
    empty: bool,
    theme: Theme,
}

#[derive(Tabled)]
struct StatusTableRow {
    #[tabled(rename = "filter")]
    filter: String,
    #[tabled(rename = "todos")]
    count: usize,
}

impl StatusArgs {
    pub fn run(self, root: &Path) -> Result<()> {
        let session = Session::open(root, FilterMode::All)?;
        let summary = session.store.summary();

        if self.json {
            let payload = StatusJson {
                total: summary.total,
                remaining: summary.remaining,
                completed: summary.completed,
                empty: summary.show_all_clear(),
                theme: session.theme,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("failed to serialize status JSON")?
            );
            return Ok(());
        }

        println!(
            "tickoff v{} | {} todos | {} | theme {}",
            env!("CARGO_PKG_VERSION"),
            summary.total,
            summary.remaining_label(),
            session.theme,
        );
        if summary.show_all_clear() {
            println!("{} All clear, nothing left to do.", "✓".green().bold());
            return Ok(());
        }

        let rows: Vec<StatusTableRow> = FilterMode::all()
            .iter()
            .map(|mode| StatusTableRow {
                filter: mode.to_string(),
                count: mode.apply(session.store.todos()).count(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
