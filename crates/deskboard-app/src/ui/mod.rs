//! UI components using egui.
//!
//! Render functions draw from read-only state plus [`UiState`] (form buffers
//! and menus) and return [`UiAction`]s; the app applies them afterwards.

mod canvas_view;
mod header;
mod login;
mod notes_view;
mod sidebar;
mod todo_view;

pub use canvas_view::render_canvas;
pub use header::render_header;
pub use login::render_login;
pub use sidebar::render_sidebar;

use deskboard_core::auth::Credentials;
use deskboard_core::records::Note;
use deskboard_core::{WidgetId, WidgetKind};
use std::collections::HashMap;

/// Whether the login form signs in or registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
}

/// Login form buffers and feedback.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub mode: LoginMode,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    /// Confirmation shown after a sign-up.
    pub message: Option<String>,
}

/// New-task input of one todo widget.
#[derive(Debug, Clone, Default)]
pub struct TodoForm {
    pub title: String,
    pub error: Option<String>,
}

/// Editor buffers of one notes widget, bound to the open note.
#[derive(Debug, Clone, Default)]
pub struct NoteEditor {
    pub note_id: Option<String>,
    pub title: String,
    pub body: String,
    pub search: String,
}

impl NoteEditor {
    /// Rebind the buffers when the open note changes.
    pub fn sync(&mut self, draft: Option<&Note>) {
        let id = draft.map(|n| n.id.as_str());
        if self.note_id.as_deref() == id {
            return;
        }
        self.note_id = id.map(str::to_string);
        self.title = draft.map(|n| n.title.clone()).unwrap_or_default();
        self.body = draft.map(|n| n.plain_text.clone()).unwrap_or_default();
    }
}

/// Transient UI state.
#[derive(Debug, Default)]
pub struct UiState {
    pub login: LoginForm,
    pub user_menu_open: bool,
    pub todo_forms: HashMap<WidgetId, TodoForm>,
    pub note_editors: HashMap<WidgetId, NoteEditor>,
}

impl UiState {
    /// Forget buffers of widgets that are gone.
    pub fn retain_widgets(&mut self, alive: impl Fn(&WidgetId) -> bool) {
        self.todo_forms.retain(|id, _| alive(id));
        self.note_editors.retain(|id, _| alive(id));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    Add(String),
    SetCompleted(String, bool),
    Delete(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotesAction {
    Create,
    Select(String),
    CloseEditor,
    Search(String),
    EditTitle(String, String),
    EditBody(String, String),
    ToggleFavorite(String),
    Delete(String),
    /// Writing suggestions for the editor text.
    Suggest(String),
    /// Summary, tags and insights for a saved note.
    Analyze(String),
    /// Save pending edits now.
    Flush,
}

/// Actions that can be triggered by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    SignIn(Credentials),
    SignUp(Credentials),
    SignOut,
    ToggleSidebar,
    CloseSidebar,
    AddWidget(WidgetKind),
    ToggleMinimized(WidgetId),
    ToggleFullScreen(WidgetId),
    RemoveWidget(WidgetId),
    Todo(WidgetId, TodoAction),
    Notes(WidgetId, NotesAction),
}
