//! Deskboard Application
//!
//! The desktop shell: login screen, dashboard header, add-widget sidebar and
//! the canvas view hosting the task and note widgets.

mod app;
mod backend;
mod event_handler;
mod shortcuts;
mod ui;

pub use app::{AppConfig, DeskboardApp, WidgetPanels};
pub use backend::Backend;
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{LoginMode, NotesAction, TodoAction, UiAction, UiState};
