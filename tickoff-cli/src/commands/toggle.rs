//! `tickoff done <id>` and `tickoff undo <id>`

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use tickoff_core::FilterMode;

use super::Session;

#[derive(Args, Debug)]
pub struct ToggleArgs {
    /// Todo id, or a unique prefix of it.
    pub id: String,

    /// Filter applied when re-rendering the list.
    #[arg(long, short = 'f', default_value_t = FilterMode::All)]
    pub filter: FilterMode,
}

impl ToggleArgs {
    pub fn run(self, root: &Path, completed: bool) -> Result<()> {
        let mut session = Session::open(root, self.filter)?;
        let Some(id) = session.resolve_id(&self.id)? else {
            println!("No todo matches '{}'; nothing changed.", self.id);
            return Ok(());
        };

        session
            .view
            .toggle(&id, completed, &mut session.store)
            .with_context(|| format!("failed to update '{id}'"))?;
        let verb = if completed { "Completed" } else { "Reopened" };
        println!("{} {verb} {id}", "✓".green());
        session.print()
    }
}
