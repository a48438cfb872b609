//! One module per subcommand; each is a single serialized handler that
//! hydrates the store, mutates, persists, and re-renders.

pub mod add;
pub mod clear;
pub mod list;
pub mod remove;
pub mod status;
pub mod theme;
pub mod toggle;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use tickoff_core::{
    kv, theme as theme_slot, FileKvStore, FilterMode, SlotLock, Theme, TodoId, TodoStore,
};
use tickoff_renderer::{ListView, Renderer};

/// `--data-dir` / `TICKOFF_HOME`, else `~/.tickoff`.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => kv::default_root().context("could not determine data directory"),
    }
}

/// Store, rows, and theme for one handler invocation.
///
/// Holds the data directory's exclusive lock from hydration until drop, so
/// concurrent `tickoff` processes run their handlers one at a time.
pub struct Session {
    root: PathBuf,
    _lock: SlotLock,
    pub store: TodoStore<FileKvStore>,
    pub view: ListView,
    pub theme: Theme,
}

impl Session {
    /// Lock `root`, then hydrate todos and theme; rows are built under `filter`.
    pub fn open(root: &Path, filter: FilterMode) -> Result<Self> {
        let kv = FileKvStore::new(root);
        let lock = kv
            .lock()
            .with_context(|| format!("failed to lock data directory '{}'", root.display()))?;
        let theme = theme_slot::load_theme(&kv);
        let store = TodoStore::open(kv);
        let view = ListView::build(store.todos(), filter);
        Ok(Self {
            root: root.to_path_buf(),
            _lock: lock,
            store,
            view,
            theme,
        })
    }

    /// Rendered list, honouring overrides in `<root>/templates`.
    pub fn render(&self) -> Result<String> {
        let renderer = Renderer::with_overrides(&self.root.join("templates"))
            .context("failed to load list templates")?;
        renderer
            .render(&self.view, self.theme)
            .context("failed to render list")
    }

    pub fn print(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    /// Resolve a user-typed id: exact match, else a unique prefix.
    ///
    /// `Ok(None)` when nothing matches; an ambiguous prefix is an error.
    pub fn resolve_id(&self, needle: &str) -> Result<Option<TodoId>> {
        let needle = needle.trim();
        let todos = self.store.todos();
        if let Some(todo) = todos.iter().find(|t| t.id.as_str() == needle) {
            return Ok(Some(todo.id.clone()));
        }
        if needle.is_empty() {
            return Ok(None);
        }
        let matches: Vec<&TodoId> = todos
            .iter()
            .map(|t| &t.id)
            .filter(|id| id.as_str().starts_with(needle))
            .collect();
        match matches.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some((*only).clone())),
            many => {
                let names: Vec<&str> = many.iter().map(|id| id.as_str()).collect();
                bail!("'{needle}' matches several todos ({}); use more of the id", names.join(", "))
            }
        }
    }
}
