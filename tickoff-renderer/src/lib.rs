//! # tickoff-renderer
//!
//! The view side of tickoff: [`ListView`] keeps one [`Row`] per todo and
//! applies the selected filter; [`Renderer`] turns it into text with tera.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tickoff_core::{FileKvStore, FilterMode, Theme, TodoStore};
//! use tickoff_renderer::{ListView, Renderer};
//!
//! fn show(root: &std::path::Path) {
//!     let mut store = TodoStore::open(FileKvStore::new(root));
//!     let mut view = ListView::build(store.todos(), FilterMode::Active);
//!     if let Ok(Some(_)) = view.submit("water the plants", &mut store) {
//!         if let Ok(renderer) = Renderer::new() {
//!             if let Ok(text) = renderer.render(&view, Theme::Light) {
//!                 print!("{text}");
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod view;

pub use context::ViewContext;
pub use engine::{Renderer, TemplateEngine};
pub use error::RenderError;
pub use view::{ListView, Row};
