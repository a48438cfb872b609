//! Persistence-backed CRUD authority over the todo collection.
//!
//! The store is hydrated once at construction ([`TodoStore::open`]). Every
//! mutation edits the in-memory collection and then overwrites the whole
//! `todos` slot with a single [`KeyValueStore::set`]. If that write fails the
//! in-memory collection is rolled back, so memory and slot never diverge.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::StoreError;
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::kv::{KeyValueStore, TODOS_KEY};
use crate::summary::ListSummary;
use crate::types::{Todo, TodoId};

// ---------------------------------------------------------------------------
// 1. Load
// ---------------------------------------------------------------------------

/// Persisted entry before validation. `completed` may be absent in hand-edited
/// payloads and defaults to `false`; `id` and `text` are required.
#[derive(Debug, Deserialize)]
struct RawTodo {
    id: String,
    text: String,
    #[serde(default)]
    completed: bool,
}

/// Read the persisted collection from `kv`.
///
/// Never fails: a missing slot, an unreadable slot, or an unparseable payload
/// all yield an empty collection.
pub fn load_all<K: KeyValueStore + ?Sized>(kv: &K) -> Vec<Todo> {
    match kv.get(TODOS_KEY) {
        Ok(Some(payload)) => parse_todos(&payload),
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::warn!(error = %err, "todos slot unreadable; starting empty");
            Vec::new()
        }
    }
}

/// Validate a persisted payload entry by entry.
///
/// A non-array payload yields nothing. Individual entries are discarded when
/// they do not have the record shape, when their trimmed text or id is empty,
/// or when their id repeats an earlier entry (first occurrence wins).
pub fn parse_todos(payload: &str) -> Vec<Todo> {
    let value: serde_json::Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "todos payload is not JSON; starting empty");
            return Vec::new();
        }
    };
    let serde_json::Value::Array(entries) = value else {
        tracing::warn!("todos payload is not an array; starting empty");
        return Vec::new();
    };

    let mut seen = HashSet::with_capacity(entries.len());
    let mut todos = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let raw: RawTodo = match serde_json::from_value(entry) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(index, error = %err, "discarding malformed todo entry");
                continue;
            }
        };
        let text = raw.text.trim();
        if raw.id.is_empty() || text.is_empty() {
            tracing::warn!(index, "discarding todo entry with empty id or text");
            continue;
        }
        if !seen.insert(raw.id.clone()) {
            tracing::warn!(index, id = %raw.id, "discarding todo entry with duplicate id");
            continue;
        }
        todos.push(Todo {
            id: TodoId(raw.id),
            text: text.to_owned(),
            completed: raw.completed,
        });
    }
    todos
}

// ---------------------------------------------------------------------------
// 2. Store
// ---------------------------------------------------------------------------

/// Ordered todo collection with injected persistence and id source.
#[derive(Debug)]
pub struct TodoStore<K, G = UuidIdGenerator> {
    kv: K,
    ids: G,
    todos: Vec<Todo>,
}

impl<K: KeyValueStore> TodoStore<K, UuidIdGenerator> {
    /// Hydrate from `kv`, generating uuid-based ids.
    pub fn open(kv: K) -> Self {
        Self::with_ids(kv, UuidIdGenerator)
    }
}

impl<K: KeyValueStore, G: IdGenerator> TodoStore<K, G> {
    /// Hydrate from `kv` using `ids` for new records.
    pub fn with_ids(kv: K, ids: G) -> Self {
        let todos = load_all(&kv);
        tracing::debug!(count = todos.len(), "todo store hydrated");
        Self { kv, ids, todos }
    }

    /// Re-read the persisted collection. Does not touch the in-memory state.
    pub fn load_all(&self) -> Vec<Todo> {
        load_all(&self.kv)
    }

    /// The collection in display order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn summary(&self) -> ListSummary {
        ListSummary::of(&self.todos)
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Append a new incomplete todo.
    ///
    /// `text` is trimmed; whitespace-only input is ignored and yields
    /// `Ok(None)` with nothing written.
    pub fn add(&mut self, text: &str) -> Result<Option<Todo>, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let mut id = self.ids.next_id();
        while self.get(&id).is_some() {
            tracing::debug!(%id, "generated id already in use; drawing another");
            id = self.ids.next_id();
        }

        let todo = Todo::new(id, text);
        let snapshot = self.todos.clone();
        self.todos.push(todo.clone());
        self.commit(snapshot)?;
        tracing::debug!(id = %todo.id, "todo added");
        Ok(Some(todo))
    }

    /// Remove the todo with `id`. Returns `false` (and writes nothing) when no
    /// such todo exists.
    pub fn remove(&mut self, id: &TodoId) -> Result<bool, StoreError> {
        let Some(index) = self.todos.iter().position(|t| &t.id == id) else {
            return Ok(false);
        };
        let snapshot = self.todos.clone();
        self.todos.remove(index);
        self.commit(snapshot)?;
        tracing::debug!(%id, "todo removed");
        Ok(true)
    }

    /// Assign the completion flag. Returns `false` when no such todo exists.
    pub fn set_completed(&mut self, id: &TodoId, completed: bool) -> Result<bool, StoreError> {
        let Some(index) = self.todos.iter().position(|t| &t.id == id) else {
            return Ok(false);
        };
        let snapshot = self.todos.clone();
        self.todos[index].completed = completed;
        self.commit(snapshot)?;
        tracing::debug!(%id, completed, "todo completion set");
        Ok(true)
    }

    /// Remove every completed todo, keeping the rest in order. Returns how
    /// many were removed.
    pub fn clear_completed(&mut self) -> Result<usize, StoreError> {
        let snapshot = self.todos.clone();
        self.todos.retain(|t| !t.completed);
        let removed = snapshot.len() - self.todos.len();
        self.commit(snapshot)?;
        tracing::debug!(removed, "completed todos cleared");
        Ok(removed)
    }

    fn commit(&mut self, snapshot: Vec<Todo>) -> Result<(), StoreError> {
        let result = serde_json::to_string(&self.todos)
            .map_err(StoreError::from)
            .and_then(|payload| self.kv.set(TODOS_KEY, &payload));
        if let Err(err) = result {
            tracing::warn!(error = %err, "persisting todos failed; rolling back");
            self.todos = snapshot;
            return Err(err);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
