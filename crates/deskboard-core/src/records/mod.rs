//! Records exchanged with the task and note stores.

mod note;
mod todo;

pub use note::{NEW_NOTE_TITLE, NewNote, Note, NoteInsights, NotePatch};
pub use todo::{
    NewTodo, PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM, TaskSuggestions, Todo, TodoPatch,
    priority_label,
};
