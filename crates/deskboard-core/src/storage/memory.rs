//! In-memory storage implementation.

use super::{
    BoxFuture, NoteStore, StorageError, StorageResult, StoreClock, TaskStore, lock_error,
    newest_first,
};
use crate::records::{NewNote, NewTodo, Note, NotePatch, Todo, TodoPatch};
use std::sync::RwLock;

/// In-memory task and note store for tests and offline use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: RwLock<Vec<Todo>>,
    notes: RwLock<Vec<Note>>,
    clock: StoreClock,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for MemoryStore {
    fn list_todos(&self, user_id: &str) -> BoxFuture<'_, StorageResult<Vec<Todo>>> {
        let user_id = user_id.to_string();
        Box::pin(async move {
            let todos = self.todos.read().map_err(lock_error)?;
            let owned = todos.iter().filter(|t| t.user_id == user_id).cloned().collect();
            Ok(newest_first(owned, |t: &Todo| t.created_at))
        })
    }

    fn insert_todo(&self, new: NewTodo) -> BoxFuture<'_, StorageResult<Todo>> {
        Box::pin(async move {
            let todo = Todo::create(new, self.clock.now());
            self.todos.write().map_err(lock_error)?.push(todo.clone());
            Ok(todo)
        })
    }

    fn update_todo(&self, id: &str, patch: TodoPatch) -> BoxFuture<'_, StorageResult<Todo>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut todos = self.todos.write().map_err(lock_error)?;
            let todo = todos
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| StorageError::NotFound(id.clone()))?;
            todo.apply(&patch, self.clock.now());
            Ok(todo.clone())
        })
    }

    fn delete_todo(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            self.todos.write().map_err(lock_error)?.retain(|t| t.id != id);
            Ok(())
        })
    }
}

impl NoteStore for MemoryStore {
    fn list_notes(&self, user_id: &str) -> BoxFuture<'_, StorageResult<Vec<Note>>> {
        let user_id = user_id.to_string();
        Box::pin(async move {
            let notes = self.notes.read().map_err(lock_error)?;
            let owned = notes.iter().filter(|n| n.user_id == user_id).cloned().collect();
            Ok(newest_first(owned, |n: &Note| n.updated_at))
        })
    }

    fn insert_note(&self, new: NewNote) -> BoxFuture<'_, StorageResult<Note>> {
        Box::pin(async move {
            let note = Note::create(new, self.clock.now());
            self.notes.write().map_err(lock_error)?.push(note.clone());
            Ok(note)
        })
    }

    fn update_note(&self, id: &str, patch: NotePatch) -> BoxFuture<'_, StorageResult<Note>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut notes = self.notes.write().map_err(lock_error)?;
            let note = notes
                .iter_mut()
                .find(|n| n.id == id)
                .ok_or_else(|| StorageError::NotFound(id.clone()))?;
            note.apply(&patch, self.clock.now());
            Ok(note.clone())
        })
    }

    fn delete_note(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            self.notes.write().map_err(lock_error)?.retain(|n| n.id != id);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{NewNote, TaskSuggestions};
    use crate::testing::block_on;

    fn new_todo(user: &str, title: &str) -> NewTodo {
        NewTodo::with_suggestions(user, title, TaskSuggestions::default())
    }

    #[test]
    fn test_todos_newest_first() {
        let store = MemoryStore::new();
        block_on(store.insert_todo(new_todo("u1", "first"))).unwrap();
        block_on(store.insert_todo(new_todo("u1", "second"))).unwrap();
        block_on(store.insert_todo(new_todo("u2", "other user"))).unwrap();

        let titles: Vec<_> = block_on(store.list_todos("u1"))
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["second", "first"]);
    }

    #[test]
    fn test_update_missing_todo() {
        let store = MemoryStore::new();
        let result = block_on(store.update_todo("nope", TodoPatch::completed(true)));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_delete_todo() {
        let store = MemoryStore::new();
        let todo = block_on(store.insert_todo(new_todo("u1", "gone"))).unwrap();
        block_on(store.delete_todo(&todo.id)).unwrap();
        assert!(block_on(store.list_todos("u1")).unwrap().is_empty());
    }

    #[test]
    fn test_note_update_moves_it_to_front() {
        let store = MemoryStore::new();
        let older = block_on(store.insert_note(NewNote::blank("u1"))).unwrap();
        let newer = block_on(store.insert_note(NewNote::blank("u1"))).unwrap();

        let listed = block_on(store.list_notes("u1")).unwrap();
        assert_eq!(listed[0].id, newer.id);

        let updated = block_on(store.update_note(&older.id, NotePatch::title("Edited"))).unwrap();
        assert!(updated.updated_at > older.updated_at);

        let listed = block_on(store.list_notes("u1")).unwrap();
        assert_eq!(listed[0].id, older.id);
        assert_eq!(listed[0].title, "Edited");
    }
}
