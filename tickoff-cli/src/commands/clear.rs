//! `tickoff clear` — drop every completed todo.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use tickoff_core::FilterMode;

use super::Session;

#[derive(Args, Debug)]
pub struct ClearArgs {}

impl ClearArgs {
    pub fn run(self, root: &Path) -> Result<()> {
        let mut session = Session::open(root, FilterMode::All)?;
        let removed = session
            .view
            .clear_completed(&mut session.store)
            .context("failed to clear completed todos")?;
        match removed {
            0 => println!("Nothing completed to clear."),
            1 => println!("{} Cleared 1 completed todo", "✓".green()),
            n => println!("{} Cleared {n} completed todos", "✓".green()),
        }
        session.print()
    }
}
