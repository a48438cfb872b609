//! tickoff core library — todo records, slot persistence, derivations.
//!
//! - [`types`] — [`Todo`], [`TodoId`], [`Theme`]
//! - [`kv`] — [`KeyValueStore`] and its file / memory implementations
//! - [`store`] — [`TodoStore`], the CRUD authority over the collection
//! - [`theme`] — theme preference load / toggle
//! - [`filter`], [`summary`] — pure view-side derivations

pub mod error;
pub mod filter;
pub mod ids;
pub mod kv;
pub mod shared;
pub mod store;
pub mod summary;
pub mod theme;
pub mod types;

pub use error::StoreError;
pub use filter::FilterMode;
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use kv::{FileKvStore, KeyValueStore, MemoryKvStore, SlotLock};
pub use shared::SharedTodoStore;
pub use store::TodoStore;
pub use summary::ListSummary;
pub use types::{Theme, Todo, TodoId};
