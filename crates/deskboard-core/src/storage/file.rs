//! File-based storage implementation.

use super::{
    BoxFuture, NoteStore, StorageError, StorageResult, StoreClock, TaskStore, lock_error,
    newest_first,
};
use crate::records::{NewNote, NewTodo, Note, NotePatch, Todo, TodoPatch};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const TODOS_FILE: &str = "todos.json";
const NOTES_FILE: &str = "notes.json";

/// File-based store.
///
/// Keeps each collection as one JSON array in the base directory and
/// rewrites the whole file on every change.
#[derive(Debug)]
pub struct FileStore {
    /// Base directory for the collection files.
    base_path: PathBuf,
    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
    clock: StoreClock,
}

impl FileStore {
    /// Create a store rooted at `base_path`, creating the directory if needed.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self {
            base_path,
            write_lock: Mutex::new(()),
            clock: StoreClock::default(),
        })
    }

    /// Create a store in the default location.
    ///
    /// On Unix: `~/.local/share/deskboard/`
    /// On Windows: `%LOCALAPPDATA%\deskboard\`
    pub fn default_location() -> StorageResult<Self> {
        Self::new(Self::default_path()?)
    }

    pub fn default_path() -> StorageResult<PathBuf> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;
        Ok(base.join("deskboard"))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn read_all<T: DeserializeOwned>(&self, name: &str) -> StorageResult<Vec<T>> {
        let path = self.base_path.join(name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&path).map_err(|e| {
            StorageError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&json).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn write_all<T: Serialize>(&self, name: &str, items: &[T]) -> StorageResult<()> {
        let path = self.base_path.join(name);
        let json = serde_json::to_string_pretty(items)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&path, json).map_err(|e| {
            StorageError::Io(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    /// Load `name`, let `f` change it, and write it back.
    fn modify<T, R>(&self, name: &str, f: impl FnOnce(&mut Vec<T>) -> StorageResult<R>) -> StorageResult<R>
    where
        T: Serialize + DeserializeOwned,
    {
        let _guard = self.write_lock.lock().map_err(lock_error)?;
        let mut items = self.read_all(name)?;
        let result = f(&mut items)?;
        self.write_all(name, &items)?;
        Ok(result)
    }
}

impl TaskStore for FileStore {
    fn list_todos(&self, user_id: &str) -> BoxFuture<'_, StorageResult<Vec<Todo>>> {
        let user_id = user_id.to_string();
        Box::pin(async move {
            let mut todos: Vec<Todo> = self.read_all(TODOS_FILE)?;
            todos.retain(|t| t.user_id == user_id);
            Ok(newest_first(todos, |t: &Todo| t.created_at))
        })
    }

    fn insert_todo(&self, new: NewTodo) -> BoxFuture<'_, StorageResult<Todo>> {
        Box::pin(async move {
            let todo = Todo::create(new, self.clock.now());
            self.modify(TODOS_FILE, |todos: &mut Vec<Todo>| {
                todos.push(todo.clone());
                Ok(())
            })?;
            Ok(todo)
        })
    }

    fn update_todo(&self, id: &str, patch: TodoPatch) -> BoxFuture<'_, StorageResult<Todo>> {
        let id = id.to_string();
        Box::pin(async move {
            let now = self.clock.now();
            self.modify(TODOS_FILE, |todos: &mut Vec<Todo>| {
                let todo = todos
                    .iter_mut()
                    .find(|t| t.id == id)
                    .ok_or_else(|| StorageError::NotFound(id.clone()))?;
                todo.apply(&patch, now);
                Ok(todo.clone())
            })
        })
    }

    fn delete_todo(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            self.modify(TODOS_FILE, |todos: &mut Vec<Todo>| {
                todos.retain(|t| t.id != id);
                Ok(())
            })
        })
    }
}

impl NoteStore for FileStore {
    fn list_notes(&self, user_id: &str) -> BoxFuture<'_, StorageResult<Vec<Note>>> {
        let user_id = user_id.to_string();
        Box::pin(async move {
            let mut notes: Vec<Note> = self.read_all(NOTES_FILE)?;
            notes.retain(|n| n.user_id == user_id);
            Ok(newest_first(notes, |n: &Note| n.updated_at))
        })
    }

    fn insert_note(&self, new: NewNote) -> BoxFuture<'_, StorageResult<Note>> {
        Box::pin(async move {
            let note = Note::create(new, self.clock.now());
            self.modify(NOTES_FILE, |notes: &mut Vec<Note>| {
                notes.push(note.clone());
                Ok(())
            })?;
            Ok(note)
        })
    }

    fn update_note(&self, id: &str, patch: NotePatch) -> BoxFuture<'_, StorageResult<Note>> {
        let id = id.to_string();
        Box::pin(async move {
            let now = self.clock.now();
            self.modify(NOTES_FILE, |notes: &mut Vec<Note>| {
                let note = notes
                    .iter_mut()
                    .find(|n| n.id == id)
                    .ok_or_else(|| StorageError::NotFound(id.clone()))?;
                note.apply(&patch, now);
                Ok(note.clone())
            })
        })
    }

    fn delete_note(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            self.modify(NOTES_FILE, |notes: &mut Vec<Note>| {
                notes.retain(|n| n.id != id);
                Ok(())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::TaskSuggestions;
    use crate::richtext::RichDoc;
    use crate::testing::block_on;
    use tempfile::tempdir;

    #[test]
    fn test_todos_survive_reopen() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        let new = NewTodo::with_suggestions("u1", "Pay rent", TaskSuggestions::default());
        let todo = block_on(store.insert_todo(new)).unwrap();
        drop(store);

        let reopened = FileStore::new(dir.path().to_path_buf()).unwrap();
        let todos = block_on(reopened.list_todos("u1")).unwrap();
        assert_eq!(todos, vec![todo]);
    }

    #[test]
    fn test_missing_files_list_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested")).unwrap();
        assert!(block_on(store.list_todos("u1")).unwrap().is_empty());
        assert!(block_on(store.list_notes("u1")).unwrap().is_empty());
    }

    #[test]
    fn test_note_update_and_delete() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        let note = block_on(store.insert_note(NewNote::blank("u1"))).unwrap();

        let doc = RichDoc::from_plain_text("Meeting notes for Monday");
        let updated = block_on(store.update_note(&note.id, NotePatch::content(doc))).unwrap();
        assert_eq!(updated.plain_text, "Meeting notes for Monday");
        assert_eq!(updated.word_count, 4);

        block_on(store.delete_note(&note.id)).unwrap();
        assert!(block_on(store.list_notes("u1")).unwrap().is_empty());
    }

    #[test]
    fn test_update_missing_note() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        let result = block_on(store.update_note("missing", NotePatch::favorite(true)));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(TODOS_FILE), "not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        let result = block_on(store.list_todos("u1"));
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }
}
