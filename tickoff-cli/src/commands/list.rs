//! `tickoff list [--filter ...] [--json]`

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use tickoff_core::{FilterMode, ListSummary, Todo};

use super::Session;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Which todos to show: all | active | completed.
    #[arg(long, short = 'f', default_value_t = FilterMode::All)]
    pub filter: FilterMode,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListJson<'a> {
    filter: FilterMode,
    todos: Vec<&'a Todo>,
    summary: ListSummary,
}

impl ListArgs {
    pub fn run(self, root: &Path) -> Result<()> {
        let session = Session::open(root, self.filter)?;
        if self.json {
            let payload = ListJson {
                filter: self.filter,
                todos: self.filter.apply(session.store.todos()).collect(),
                summary: session.store.summary(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("failed to serialize list JSON")?
            );
            return Ok(());
        }
        session.print()
    }
}
