//! `tickoff add <text...>`

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use tickoff_core::FilterMode;

use super::Session;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Todo text; words are joined with single spaces.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl AddArgs {
    pub fn run(self, root: &Path) -> Result<()> {
        let text = self.text.join(" ");
        let mut session = Session::open(root, FilterMode::All)?;

        let added = session
            .view
            .submit(&text, &mut session.store)
            .context("failed to save todo")?;
        match added {
            Some(id) => println!("{} Added '{}' ({id})", "✓".green(), text.trim()),
            // Blank input is ignored silently.
            None => return Ok(()),
        }
        session.print()
    }
}
