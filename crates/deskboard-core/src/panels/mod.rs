//! Content controllers for the todo and notes widgets.

mod notes;
mod todo;

pub use notes::NotesPanel;
pub use todo::TodoPanel;

use crate::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("No note with id {0}")]
    UnknownNote(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::records::{NewNote, NewTodo, Note, NotePatch, Todo, TodoPatch};
    use crate::storage::{BoxFuture, NoteStore, StorageError, StorageResult, TaskStore};

    /// Store whose every call fails.
    pub(crate) struct OfflineStore;

    fn offline<T>() -> StorageResult<T> {
        Err(StorageError::Other("offline".to_string()))
    }

    impl TaskStore for OfflineStore {
        fn list_todos(&self, _user_id: &str) -> BoxFuture<'_, StorageResult<Vec<Todo>>> {
            Box::pin(async { offline() })
        }

        fn insert_todo(&self, _new: NewTodo) -> BoxFuture<'_, StorageResult<Todo>> {
            Box::pin(async { offline() })
        }

        fn update_todo(&self, _id: &str, _patch: TodoPatch) -> BoxFuture<'_, StorageResult<Todo>> {
            Box::pin(async { offline() })
        }

        fn delete_todo(&self, _id: &str) -> BoxFuture<'_, StorageResult<()>> {
            Box::pin(async { offline() })
        }
    }

    impl NoteStore for OfflineStore {
        fn list_notes(&self, _user_id: &str) -> BoxFuture<'_, StorageResult<Vec<Note>>> {
            Box::pin(async { offline() })
        }

        fn insert_note(&self, _new: NewNote) -> BoxFuture<'_, StorageResult<Note>> {
            Box::pin(async { offline() })
        }

        fn update_note(&self, _id: &str, _patch: NotePatch) -> BoxFuture<'_, StorageResult<Note>> {
            Box::pin(async { offline() })
        }

        fn delete_note(&self, _id: &str) -> BoxFuture<'_, StorageResult<()>> {
            Box::pin(async { offline() })
        }
    }
}
