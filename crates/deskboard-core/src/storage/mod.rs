//! Task and note persistence.

mod autosave;
mod file;
mod memory;

pub use autosave::{DEFAULT_AUTOSAVE_DEBOUNCE_MS, NoteAutoSaver};
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::records::{NewNote, NewTodo, Note, NotePatch, Todo, TodoPatch};
use chrono::{DateTime, Duration, Utc};
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for collaborator calls.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Persistence for a user's tasks.
pub trait TaskStore: Send + Sync {
    /// Tasks owned by `user_id`, newest first by creation time.
    fn list_todos(&self, user_id: &str) -> BoxFuture<'_, StorageResult<Vec<Todo>>>;

    fn insert_todo(&self, new: NewTodo) -> BoxFuture<'_, StorageResult<Todo>>;

    fn update_todo(&self, id: &str, patch: TodoPatch) -> BoxFuture<'_, StorageResult<Todo>>;

    fn delete_todo(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;
}

/// Persistence for a user's notes.
pub trait NoteStore: Send + Sync {
    /// Notes owned by `user_id`, most recently updated first.
    fn list_notes(&self, user_id: &str) -> BoxFuture<'_, StorageResult<Vec<Note>>>;

    fn insert_note(&self, new: NewNote) -> BoxFuture<'_, StorageResult<Note>>;

    /// Merge `patch` into the note and bump its `updated_at`.
    fn update_note(&self, id: &str, patch: NotePatch) -> BoxFuture<'_, StorageResult<Note>>;

    fn delete_note(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;
}

/// Wall clock that never repeats or goes backwards within one store,
/// so timestamp ordering matches call order.
#[derive(Debug, Default)]
pub(crate) struct StoreClock {
    last: Mutex<Option<DateTime<Utc>>>,
}

impl StoreClock {
    pub(crate) fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        let Ok(mut last) = self.last.lock() else {
            return now;
        };
        let stamp = match *last {
            Some(prev) if now <= prev => prev + Duration::microseconds(1),
            _ => now,
        };
        *last = Some(stamp);
        stamp
    }
}

/// Newest first by `key`; ties go to the later insertion.
pub(crate) fn newest_first<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    items.reverse();
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}
