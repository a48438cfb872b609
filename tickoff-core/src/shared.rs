//! Mutex-guarded store handle for hosts that run handlers concurrently.
//!
//! Each [`SharedTodoStore::with`] call holds the lock across the whole
//! read-modify-write, so at most one writer touches the `todos` slot at a time.

use std::sync::{Arc, Mutex, PoisonError};

use crate::ids::UuidIdGenerator;
use crate::store::TodoStore;
use crate::types::Todo;

pub struct SharedTodoStore<K, G = UuidIdGenerator> {
    inner: Arc<Mutex<TodoStore<K, G>>>,
}

impl<K, G> Clone for SharedTodoStore<K, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, G> SharedTodoStore<K, G> {
    pub fn new(store: TodoStore<K, G>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// A panic inside an earlier handler does not wedge the store: the store
    /// rolls back failed writes itself, so the poisoned guard is recovered.
    pub fn with<R>(&self, f: impl FnOnce(&mut TodoStore<K, G>) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl<K, G> SharedTodoStore<K, G>
where
    K: crate::kv::KeyValueStore,
    G: crate::ids::IdGenerator,
{
    /// Copy of the current collection.
    pub fn snapshot(&self) -> Vec<Todo> {
        self.with(|store| store.todos().to_vec())
    }
}
