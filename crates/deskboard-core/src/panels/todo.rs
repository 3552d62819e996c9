//! Task list panel.

use super::PanelError;
use crate::records::{NewTodo, Todo, TodoPatch};
use crate::storage::TaskStore;
use crate::suggest::suggest_for_task;

/// A user's task list as shown in a todo widget.
///
/// Local state only changes after the store confirms a write.
#[derive(Debug, Clone, Default)]
pub struct TodoPanel {
    user_id: String,
    todos: Vec<Todo>,
    loaded: bool,
    last_error: Option<String>,
}

impl TodoPanel {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Message from the most recent failed operation.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Tasks not yet completed.
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub async fn load(&mut self, store: &dyn TaskStore) -> Result<(), PanelError> {
        let result = store.list_todos(&self.user_id).await;
        self.loaded = true;
        let todos = self.check("fetching todos", result)?;
        self.todos = todos;
        Ok(())
    }

    /// Create a task titled `title`, seeded with heuristic suggestions.
    ///
    /// Blank titles are rejected without touching the store.
    pub async fn add(&mut self, store: &dyn TaskStore, title: &str) -> Result<&Todo, PanelError> {
        if title.trim().is_empty() {
            return Err(PanelError::EmptyTitle);
        }
        let suggestions = suggest_for_task(title, &self.todos);
        let new = NewTodo::with_suggestions(&self.user_id, title, suggestions);
        let result = store.insert_todo(new).await;
        let todo = self.check("adding todo", result)?;
        log::info!("Added todo {} ({})", todo.id, todo.priority_label());
        self.todos.insert(0, todo);
        Ok(&self.todos[0])
    }

    pub async fn set_completed(
        &mut self,
        store: &dyn TaskStore,
        id: &str,
        completed: bool,
    ) -> Result<(), PanelError> {
        let result = store.update_todo(id, TodoPatch::completed(completed)).await;
        let updated = self.check("updating todo", result)?;
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            *todo = updated;
        }
        Ok(())
    }

    pub async fn delete(&mut self, store: &dyn TaskStore, id: &str) -> Result<(), PanelError> {
        let result = store.delete_todo(id).await;
        self.check("deleting todo", result)?;
        self.todos.retain(|t| t.id != id);
        Ok(())
    }

    fn check<T, E: Into<PanelError>>(&mut self, action: &str, result: Result<T, E>) -> Result<T, PanelError> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Ok(value)
            }
            Err(e) => {
                let e = e.into();
                log::error!("Error {}: {}", action, e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::tests::OfflineStore;
    use crate::storage::MemoryStore;
    use crate::testing::block_on;

    #[test]
    fn test_add_prepends_and_uses_suggestions() {
        let store = MemoryStore::new();
        let mut panel = TodoPanel::new("u1");
        block_on(panel.load(&store)).unwrap();

        block_on(panel.add(&store, "Water the garden")).unwrap();
        let added = block_on(panel.add(&store, "urgent: call the bank")).unwrap().clone();

        assert_eq!(added.priority, 1);
        assert_eq!(added.ai_priority_score, 0.9);
        assert_eq!(added.tags, ["meeting"]);
        assert_eq!(panel.todos()[0].id, added.id);
        assert_eq!(panel.active_count(), 2);
    }

    #[test]
    fn test_blank_title_never_reaches_store() {
        let store = OfflineStore;
        let mut panel = TodoPanel::new("u1");
        let result = block_on(panel.add(&store, "   "));
        assert!(matches!(result, Err(PanelError::EmptyTitle)));
        assert!(panel.last_error().is_none());
    }

    #[test]
    fn test_toggle_and_delete() {
        let store = MemoryStore::new();
        let mut panel = TodoPanel::new("u1");
        let id = block_on(panel.add(&store, "Fold laundry")).unwrap().id.clone();

        block_on(panel.set_completed(&store, &id, true)).unwrap();
        assert_eq!(panel.active_count(), 0);

        block_on(panel.delete(&store, &id)).unwrap();
        assert!(panel.todos().is_empty());
        assert!(block_on(store.list_todos("u1")).unwrap().is_empty());
    }

    #[test]
    fn test_load_orders_newest_first() {
        let store = MemoryStore::new();
        let mut writer = TodoPanel::new("u1");
        block_on(writer.add(&store, "first")).unwrap();
        block_on(writer.add(&store, "second")).unwrap();

        let mut reader = TodoPanel::new("u1");
        block_on(reader.load(&store)).unwrap();
        let titles: Vec<_> = reader.todos().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["second", "first"]);
    }

    #[test]
    fn test_store_failure_leaves_state_unchanged() {
        let good = MemoryStore::new();
        let mut panel = TodoPanel::new("u1");
        let id = block_on(panel.add(&good, "Keep me")).unwrap().id.clone();
        let before = panel.todos().to_vec();

        let offline = OfflineStore;
        assert!(block_on(panel.add(&offline, "Lost")).is_err());
        assert!(block_on(panel.set_completed(&offline, &id, true)).is_err());
        assert!(block_on(panel.delete(&offline, &id)).is_err());

        assert_eq!(panel.todos(), before.as_slice());
        assert!(panel.last_error().is_some());
    }
}
