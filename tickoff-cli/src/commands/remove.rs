//! `tickoff rm <id>`

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use tickoff_core::FilterMode;

use super::Session;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Todo id, or a unique prefix of it.
    pub id: String,
}

impl RemoveArgs {
    pub fn run(self, root: &Path) -> Result<()> {
        let mut session = Session::open(root, FilterMode::All)?;
        let Some(id) = session.resolve_id(&self.id)? else {
            println!("No todo matches '{}'; nothing changed.", self.id);
            return Ok(());
        };

        session
            .view
            .delete(&id, &mut session.store)
            .with_context(|| format!("failed to delete '{id}'"))?;
        println!("{} Deleted {id}", "✓".green());
        session.print()
    }
}
