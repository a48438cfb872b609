//! Rendered rows and the filter applied over them.
//!
//! A [`ListView`] mirrors the store: after any handler returns, there is one
//! [`Row`] per todo, in collection order. Handlers that change records go
//! through the store first and only then touch the rows.

use serde::Serialize;

use tickoff_core::{
    FilterMode, IdGenerator, KeyValueStore, ListSummary, StoreError, Todo, TodoId, TodoStore,
};

/// Visual representation of one todo: a completion toggle (`checked`), a text
/// label, and a delete affordance addressed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: TodoId,
    pub label: String,
    pub checked: bool,
    /// Set by the current filter.
    pub visible: bool,
}

impl Row {
    fn from_todo(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            label: todo.text.clone(),
            checked: todo.completed,
            visible: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListView {
    rows: Vec<Row>,
    selected: FilterMode,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows for `todos`, filtered by `mode`.
    pub fn build(todos: &[Todo], mode: FilterMode) -> Self {
        let mut view = Self {
            rows: Vec::new(),
            selected: mode,
        };
        view.sync(todos);
        view
    }

    /// Rebuild rows from the records, then re-apply the selected filter.
    pub fn sync(&mut self, todos: &[Todo]) {
        self.rows = todos.iter().map(Row::from_todo).collect();
        self.apply_filter(self.selected);
    }

    /// Submit handler: add through the store and append the row.
    ///
    /// Blank input creates nothing and leaves the rows untouched.
    pub fn submit<K, G>(
        &mut self,
        text: &str,
        store: &mut TodoStore<K, G>,
    ) -> Result<Option<TodoId>, StoreError>
    where
        K: KeyValueStore,
        G: IdGenerator,
    {
        let Some(todo) = store.add(text)? else {
            return Ok(None);
        };
        let mut row = Row::from_todo(&todo);
        row.visible = self.selected.matches(&todo);
        self.rows.push(row);
        Ok(Some(todo.id))
    }

    /// Toggle handler: assign `completed` through the store, then mirror it.
    ///
    /// If the record and its row disagree (either one is missing) the view
    /// went stale and the rows are resynced from the store.
    pub fn toggle<K, G>(
        &mut self,
        id: &TodoId,
        completed: bool,
        store: &mut TodoStore<K, G>,
    ) -> Result<bool, StoreError>
    where
        K: KeyValueStore,
        G: IdGenerator,
    {
        if !store.set_completed(id, completed)? {
            self.sync(store.todos());
            return Ok(false);
        }
        match self.rows.iter_mut().find(|r| &r.id == id) {
            Some(row) => {
                row.checked = completed;
                self.apply_filter(self.selected);
            }
            // Record exists but its row does not: the view went stale.
            None => self.sync(store.todos()),
        }
        Ok(true)
    }

    /// Delete handler: remove through the store, then drop the row.
    pub fn delete<K, G>(
        &mut self,
        id: &TodoId,
        store: &mut TodoStore<K, G>,
    ) -> Result<bool, StoreError>
    where
        K: KeyValueStore,
        G: IdGenerator,
    {
        let removed = store.remove(id)?;
        self.rows.retain(|r| &r.id != id);
        Ok(removed)
    }

    /// Clear-completed handler.
    pub fn clear_completed<K, G>(&mut self, store: &mut TodoStore<K, G>) -> Result<usize, StoreError>
    where
        K: KeyValueStore,
        G: IdGenerator,
    {
        let removed = store.clear_completed()?;
        self.sync(store.todos());
        Ok(removed)
    }

    /// Show or hide each row for `mode` and mark `mode` as selected.
    pub fn apply_filter(&mut self, mode: FilterMode) {
        self.selected = mode;
        for row in &mut self.rows {
            row.visible = mode.shows(row.checked);
        }
    }

    pub fn selected(&self) -> FilterMode {
        self.selected
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter().filter(|r| r.visible)
    }

    pub fn row(&self, id: &TodoId) -> Option<&Row> {
        self.rows.iter().find(|r| &r.id == id)
    }

    /// Counts over all rows, regardless of the filter.
    pub fn summary(&self) -> ListSummary {
        let remaining = self.rows.iter().filter(|r| !r.checked).count();
        ListSummary {
            total: self.rows.len(),
            remaining,
            completed: self.rows.len() - remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickoff_core::{MemoryKvStore, SequentialIdGenerator};

    type Store = TodoStore<MemoryKvStore, SequentialIdGenerator>;

    fn store_with(texts: &[&str]) -> Store {
        let mut store = TodoStore::with_ids(MemoryKvStore::new(), SequentialIdGenerator::new());
        for text in texts {
            store.add(text).unwrap();
        }
        store
    }

    fn visible_labels(view: &ListView) -> Vec<&str> {
        view.visible_rows().map(|r| r.label.as_str()).collect()
    }

    fn assert_mirrors(view: &ListView, store: &Store) {
        let row_ids: Vec<&TodoId> = view.rows().iter().map(|r| &r.id).collect();
        let todo_ids: Vec<&TodoId> = store.todos().iter().map(|t| &t.id).collect();
        assert_eq!(row_ids, todo_ids);
    }

    #[test]
    fn active_filter_shows_incomplete_rows() {
        let mut store = store_with(&["A", "B", "C"]);
        store.set_completed(&TodoId::from("todo-2"), true).unwrap();

        let view = ListView::build(store.todos(), FilterMode::Active);
        assert_eq!(visible_labels(&view), ["A", "C"]);
        assert_eq!(view.rows().len(), 3);
        assert_eq!(view.selected(), FilterMode::Active);
    }

    #[test]
    fn filtering_never_touches_the_store() {
        let store = store_with(&["A", "B"]);
        let before = store.todos().to_vec();
        let mut view = ListView::build(store.todos(), FilterMode::All);
        for mode in FilterMode::all() {
            view.apply_filter(*mode);
        }
        assert_eq!(store.todos(), before.as_slice());
        assert_eq!(store.load_all(), before);
    }

    #[test]
    fn submit_appends_row_and_respects_filter() {
        let mut store = store_with(&["A"]);
        let mut view = ListView::build(store.todos(), FilterMode::Completed);

        let id = view.submit(" B ", &mut store).unwrap().expect("created");
        assert_mirrors(&view, &store);
        assert!(!view.row(&id).unwrap().visible);
        assert_eq!(view.submit("   ", &mut store).unwrap(), None);
        assert_eq!(view.rows().len(), 2);
    }

    #[test]
    fn toggle_updates_store_and_row() {
        let mut store = store_with(&["A", "B"]);
        let mut view = ListView::build(store.todos(), FilterMode::Active);
        let id = TodoId::from("todo-1");

        assert!(view.toggle(&id, true, &mut store).unwrap());
        assert!(store.get(&id).unwrap().completed);
        assert!(view.row(&id).unwrap().checked);
        assert_eq!(visible_labels(&view), ["B"]);
        assert_eq!(view.summary().remaining, 1);
    }

    #[test]
    fn stale_row_is_dropped_on_toggle_miss() {
        let mut store = store_with(&["A", "B"]);
        let mut view = ListView::build(store.todos(), FilterMode::All);
        store.remove(&TodoId::from("todo-1")).unwrap();

        assert!(!view.toggle(&TodoId::from("todo-1"), true, &mut store).unwrap());
        assert_mirrors(&view, &store);
    }

    #[test]
    fn toggle_restores_missing_row() {
        let mut store = store_with(&["A"]);
        let mut view = ListView::build(store.todos(), FilterMode::All);
        store.add("B").unwrap();

        assert!(view.toggle(&TodoId::from("todo-2"), true, &mut store).unwrap());
        assert_mirrors(&view, &store);
        assert!(view.row(&TodoId::from("todo-2")).unwrap().checked);
    }

    #[test]
    fn delete_removes_record_then_row() {
        let mut store = store_with(&["A", "B"]);
        let mut view = ListView::build(store.todos(), FilterMode::All);

        assert!(view.delete(&TodoId::from("todo-1"), &mut store).unwrap());
        assert_mirrors(&view, &store);
        // Double-click on an already-deleted row is harmless.
        assert!(!view.delete(&TodoId::from("todo-1"), &mut store).unwrap());
        assert_mirrors(&view, &store);
    }

    #[test]
    fn clear_completed_resyncs_rows() {
        let mut store = store_with(&["A", "B", "C"]);
        let mut view = ListView::build(store.todos(), FilterMode::All);
        view.toggle(&TodoId::from("todo-2"), true, &mut store).unwrap();

        assert_eq!(view.clear_completed(&mut store).unwrap(), 1);
        assert_mirrors(&view, &store);
        assert_eq!(visible_labels(&view), ["A", "C"]);
        assert!(view.summary().show_list_controls());
    }
}
