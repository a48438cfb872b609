//! Durable key-value slots.
//!
//! # Storage layout
//!
//! ```text
//! ~/.tickoff/          (mode 0700, created on first write)
//!   todos              JSON array of todo records (mode 0600)
//!   theme              "dark" | "light"          (mode 0600)
//!   .lock              advisory lock held across each read-modify-write
//!   templates/         optional user template overrides
//! ```
//!
//! # API pattern
//!
//! [`FileKvStore::new`] takes an explicit root; tests use a `TempDir`.
//! Only [`default_root`] consults `dirs::home_dir()`.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;

use crate::error::{io_err, StoreError};

/// Key holding the serialized todo collection.
pub const TODOS_KEY: &str = "todos";
/// Key holding the theme preference.
pub const THEME_KEY: &str = "theme";
/// Lock file guarding read-modify-write across processes.
pub const LOCK_FILE: &str = ".lock";

/// A string-valued slot store that survives process restarts.
///
/// `set` must replace the previous value atomically: a reader sees either the
/// old value or the new one, never a torn write.
pub trait KeyValueStore {
    /// The stored value, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `<home>/.tickoff/` — pure, no I/O.
pub fn data_dir_at(home: &Path) -> PathBuf {
    home.join(".tickoff")
}

/// `<home>/.tickoff/` for the current user.
pub fn default_root() -> Result<PathBuf, StoreError> {
    dirs::home_dir()
        .map(|home| data_dir_at(&home))
        .ok_or(StoreError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// 2. File-backed store
// ---------------------------------------------------------------------------

/// One file per key under `root`.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<key>` — pure, no I/O.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Take the exclusive cross-process lock on `<root>/.lock`, blocking until
    /// it is free. Hydrate and mutate only while holding the returned guard.
    pub fn lock(&self) -> Result<SlotLock, StoreError> {
        self.ensure_root()?;
        let path = self.root.join(LOCK_FILE);
        let file = File::options()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|e| io_err(&path, e))?;
        FileExt::lock_exclusive(&file).map_err(|e| io_err(&path, e))?;
        tracing::debug!(path = %path.display(), "slot lock acquired");
        Ok(SlotLock { _file: file })
    }

    fn ensure_root(&self) -> Result<(), StoreError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| io_err(&self.root, e))?;
            set_dir_permissions(&self.root)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_err(path, e)),
        }
    }

    /// Write flow: value → `<key>.<pid>.tmp` sibling → `chmod 0600` → `rename`.
    /// `.tmp` is always in the same directory as the target (same filesystem)
    /// and named per process, so concurrent writers never share one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.ensure_root()?;
        let path = self.path_for(key);
        let tmp = self
            .root
            .join(format!("{key}.{}.tmp", std::process::id()));

        std::fs::write(&tmp, value).map_err(|e| io_err(&tmp, e))?;
        set_file_permissions(&tmp)?;
        std::fs::rename(&tmp, &path).map_err(|e| io_err(&path, e))?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }
}

/// Exclusive hold on a [`FileKvStore`] root; released on drop.
#[derive(Debug)]
pub struct SlotLock {
    _file: File,
}

// ---------------------------------------------------------------------------
// 3. In-memory store
// ---------------------------------------------------------------------------

/// Process-local slots; nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    slots: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded with `key = value`.
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
