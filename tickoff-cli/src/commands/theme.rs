//! `tickoff theme [show|toggle|dark|light]`

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;

use tickoff_core::{theme, FileKvStore, Theme};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ThemeAction {
    /// Print the current theme.
    #[default]
    Show,
    /// Switch between dark and light.
    Toggle,
    Dark,
    Light,
}

#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[arg(value_enum, default_value_t = ThemeAction::Show)]
    pub action: ThemeAction,
}

impl ThemeArgs {
    pub fn run(self, root: &Path) -> Result<()> {
        let mut kv = FileKvStore::new(root);
        let _lock = kv
            .lock()
            .with_context(|| format!("failed to lock data directory '{}'", root.display()))?;
        let current = theme::load_theme(&kv);
        let next = match self.action {
            ThemeAction::Show => {
                println!("{current}");
                return Ok(());
            }
            ThemeAction::Toggle => theme::toggle_theme(&mut kv).context("failed to save theme")?,
            ThemeAction::Dark => set(&mut kv, Theme::Dark)?,
            ThemeAction::Light => set(&mut kv, Theme::Light)?,
        };
        println!("{} Theme: {next}", "✓".green());
        Ok(())
    }
}

fn set(kv: &mut FileKvStore, next: Theme) -> Result<Theme> {
    theme::save_theme(kv, next).context("failed to save theme")?;
    Ok(next)
}
