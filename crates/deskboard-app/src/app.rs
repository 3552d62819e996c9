//! Application state and the eframe frame loop.

use crate::backend::Backend;
use crate::event_handler::{CanvasFrame, translate};
use crate::shortcuts::{SAVE_NOTES, TOGGLE_SIDEBAR};
use crate::ui::{
    LoginMode, NotesAction, TodoAction, UiAction, UiState, render_canvas, render_header, render_login,
    render_sidebar,
};
use deskboard_core::records::NotePatch;
use deskboard_core::richtext::RichDoc;
use deskboard_core::{
    CanvasEvent, CaptureCounter, ContentDescriptor, Dashboard, DashboardConfig, EntryRoute, NotesPanel,
    PanelError, TodoPanel, UserIdentity, WidgetId, resolve_entry,
};
use deskboard_widgets::theme;
use pollster::block_on;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Window settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Deskboard".to_string(),
            width: 1280,
            height: 800,
            min_width: 640,
            min_height: 480,
        }
    }
}

/// Content controllers of the todo and notes widgets, keyed by widget.
#[derive(Debug, Default)]
pub struct WidgetPanels {
    pub todos: HashMap<WidgetId, TodoPanel>,
    pub notes: HashMap<WidgetId, NotesPanel>,
}

struct DashboardScreen {
    dashboard: Dashboard,
    panels: WidgetPanels,
}

enum Screen {
    Login,
    Dashboard(Box<DashboardScreen>),
}

pub struct DeskboardApp {
    config: DashboardConfig,
    backend: Backend,
    capture: Arc<CaptureCounter>,
    screen: Screen,
    ui_state: UiState,
}

impl DeskboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig, app_config: AppConfig) -> Self {
        theme::apply(&cc.egui_ctx);
        log::debug!("Window {}x{} ({})", app_config.width, app_config.height, app_config.title);
        let backend = Backend::from_config(&config);
        Self::with_backend(config, backend)
    }

    /// Start on the dashboard if the provider has a session, else on login.
    pub fn with_backend(config: DashboardConfig, backend: Backend) -> Self {
        let mut app = Self {
            config,
            backend,
            capture: Arc::new(CaptureCounter::new()),
            screen: Screen::Login,
            ui_state: UiState::default(),
        };
        match block_on(resolve_entry(&*app.backend.identity)) {
            EntryRoute::Dashboard(user) => app.mount(user),
            EntryRoute::Login => log::info!("No session, showing login"),
        }
        app
    }

    fn mount(&mut self, user: UserIdentity) {
        let mut dashboard = Dashboard::mount(user, &self.config);
        dashboard.canvas_mut().set_capture_surface(self.capture.clone());
        self.screen = Screen::Dashboard(Box::new(DashboardScreen {
            dashboard,
            panels: WidgetPanels::default(),
        }));
        self.ui_state = UiState::default();
        self.sync_panels();
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.screen, Screen::Dashboard(_))
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match &self.screen {
            Screen::Dashboard(screen) => Some(&screen.dashboard),
            Screen::Login => None,
        }
    }

    pub fn panels(&self) -> Option<&WidgetPanels> {
        match &self.screen {
            Screen::Dashboard(screen) => Some(&screen.panels),
            Screen::Login => None,
        }
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    /// Create and load panels for new todo/notes widgets; flush and drop the
    /// panels of widgets that are gone.
    fn sync_panels(&mut self) {
        let Screen::Dashboard(screen) = &mut self.screen else {
            return;
        };
        let DashboardScreen { dashboard, panels } = &mut **screen;

        for widget in dashboard.canvas().list() {
            match dashboard.content(&widget.id) {
                Some(ContentDescriptor::TodoContent { user_id }) if !panels.todos.contains_key(&widget.id) => {
                    let mut panel = TodoPanel::new(user_id);
                    // A failed load stays visible through the panel's last error.
                    let _ = block_on(panel.load(&*self.backend.tasks));
                    panels.todos.insert(widget.id.clone(), panel);
                }
                Some(ContentDescriptor::NotesContent { user_id }) if !panels.notes.contains_key(&widget.id) => {
                    let mut panel = NotesPanel::new(user_id).with_autosave_delay(self.config.autosave_delay());
                    let _ = block_on(panel.load(&*self.backend.notes));
                    panels.notes.insert(widget.id.clone(), panel);
                }
                _ => {}
            }
        }

        let canvas = dashboard.canvas();
        panels.todos.retain(|id, _| canvas.get(id).is_some());
        let orphaned: Vec<WidgetId> = panels
            .notes
            .keys()
            .filter(|id| canvas.get(id).is_none())
            .cloned()
            .collect();
        for id in orphaned {
            if let Some(mut panel) = panels.notes.remove(&id) {
                if let Err(e) = block_on(panel.flush(&*self.backend.notes)) {
                    log::warn!("Dropping unsaved edits of {}: {}", id, e);
                }
            }
        }
        self.ui_state.retain_widgets(|id| canvas.get(id).is_some());
    }

    /// Save note edits whose window has elapsed. Returns when the next one is due.
    pub fn save_due_notes(&mut self, now: Instant) -> Option<Instant> {
        let Screen::Dashboard(screen) = &mut self.screen else {
            return None;
        };
        let mut next: Option<Instant> = None;
        for panel in screen.panels.notes.values_mut() {
            if panel.next_save_due().is_some_and(|due| due <= now) {
                if let Err(e) = block_on(panel.save_due(&*self.backend.notes, now)) {
                    log::debug!("Autosave incomplete: {}", e);
                }
            }
            if let Some(due) = panel.next_save_due() {
                next = Some(next.map_or(due, |n| n.min(due)));
            }
        }
        next
    }

    /// Save every pending note edit now.
    pub fn flush_notes(&mut self) {
        let Screen::Dashboard(screen) = &mut self.screen else {
            return;
        };
        for panel in screen.panels.notes.values_mut() {
            if panel.has_unsaved_edits() {
                if let Err(e) = block_on(panel.flush(&*self.backend.notes)) {
                    log::warn!("Flushing note edits failed: {}", e);
                }
            }
        }
    }

    pub fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::SignIn(credentials) => match block_on(self.backend.identity.sign_in(&credentials)) {
                Ok(user) => self.mount(user),
                Err(e) => {
                    log::warn!("Sign in failed: {}", e);
                    self.ui_state.login.error = Some(e.to_string());
                }
            },
            UiAction::SignUp(credentials) => match block_on(self.backend.identity.sign_up(&credentials)) {
                Ok(message) => {
                    let login = &mut self.ui_state.login;
                    login.message = Some(message);
                    login.error = None;
                    login.mode = LoginMode::SignIn;
                    login.password.clear();
                }
                Err(e) => {
                    log::warn!("Sign up failed: {}", e);
                    self.ui_state.login.error = Some(e.to_string());
                }
            },
            UiAction::SignOut => {
                self.flush_notes();
                if let Err(e) = block_on(self.backend.identity.sign_out()) {
                    log::error!("Error signing out: {}", e);
                }
                self.screen = Screen::Login;
                self.ui_state = UiState::default();
            }
            UiAction::Todo(id, action) => self.handle_todo(&id, action),
            UiAction::Notes(id, action) => self.handle_notes(&id, action),
            action => self.handle_canvas(action),
        }
    }

    fn handle_canvas(&mut self, action: UiAction) {
        let Screen::Dashboard(screen) = &mut self.screen else {
            return;
        };
        let dashboard = &mut screen.dashboard;
        match action {
            UiAction::ToggleSidebar => dashboard.toggle_sidebar(),
            UiAction::CloseSidebar => dashboard.close_sidebar(),
            UiAction::AddWidget(kind) => {
                dashboard.add_widget(kind);
            }
            UiAction::ToggleMinimized(id) => {
                dashboard.canvas_mut().toggle_minimized(&id);
            }
            UiAction::ToggleFullScreen(id) => {
                dashboard.canvas_mut().toggle_full_screen(&id);
            }
            UiAction::RemoveWidget(id) => {
                dashboard.canvas_mut().remove(&id);
            }
            _ => return,
        }
        self.sync_panels();
    }

    fn handle_todo(&mut self, id: &WidgetId, action: TodoAction) {
        let Screen::Dashboard(screen) = &mut self.screen else {
            return;
        };
        let Some(panel) = screen.panels.todos.get_mut(id) else {
            return;
        };
        let store = &*self.backend.tasks;
        let form = self.ui_state.todo_forms.entry(id.clone()).or_default();
        match action {
            TodoAction::Add(title) => match block_on(panel.add(store, &title)) {
                Ok(_) => {
                    form.title.clear();
                    form.error = None;
                }
                Err(e @ PanelError::EmptyTitle) => form.error = Some(e.to_string()),
                // Store failures are reported by the panel.
                Err(_) => form.error = None,
            },
            TodoAction::SetCompleted(todo_id, completed) => {
                let _ = block_on(panel.set_completed(store, &todo_id, completed));
            }
            TodoAction::Delete(todo_id) => {
                let _ = block_on(panel.delete(store, &todo_id));
            }
        }
    }

    fn handle_notes(&mut self, id: &WidgetId, action: NotesAction) {
        let Screen::Dashboard(screen) = &mut self.screen else {
            return;
        };
        let Some(panel) = screen.panels.notes.get_mut(id) else {
            return;
        };
        let store = &*self.backend.notes;
        let result = match action {
            NotesAction::Create => block_on(panel.create(store)).map(|_| ()),
            NotesAction::Select(note_id) => {
                panel.select(&note_id);
                Ok(())
            }
            NotesAction::CloseEditor => {
                panel.close_editor();
                Ok(())
            }
            NotesAction::Search(query) => {
                panel.set_search(query);
                Ok(())
            }
            NotesAction::EditTitle(note_id, title) => panel.edit(&note_id, NotePatch::title(title)),
            NotesAction::EditBody(note_id, body) => {
                panel.edit(&note_id, NotePatch::content(RichDoc::from_plain_text(&body)))
            }
            NotesAction::ToggleFavorite(note_id) => block_on(panel.toggle_favorite(store, &note_id)),
            NotesAction::Delete(note_id) => block_on(panel.delete(store, &note_id)),
            NotesAction::Suggest(text) => {
                panel.request_suggestions(&text);
                Ok(())
            }
            NotesAction::Analyze(note_id) => block_on(panel.analyze(store, &note_id)),
            NotesAction::Flush => block_on(panel.flush(store)).map(|_| ()),
        };
        if let Err(e) = result {
            log::debug!("Notes action on {} failed: {}", id, e);
        }
    }

    fn dashboard_frame(ctx: &egui::Context, screen: &mut DashboardScreen, state: &mut UiState, captured: bool) -> Vec<UiAction> {
        let mut actions = Vec::new();

        if TOGGLE_SIDEBAR.pressed(ctx) {
            actions.push(UiAction::ToggleSidebar);
        }
        if SAVE_NOTES.pressed(ctx) {
            actions.extend(
                screen
                    .panels
                    .notes
                    .keys()
                    .map(|id| UiAction::Notes(id.clone(), NotesAction::Flush)),
            );
        }

        actions.extend(render_header(ctx, &screen.dashboard, state));
        actions.extend(render_sidebar(ctx, screen.dashboard.is_sidebar_open()));

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::CANVAS_BG))
            .show(ctx, |ui| {
                let frame = CanvasFrame::new(ui.max_rect());
                let canvas = screen.dashboard.canvas_mut();
                canvas.set_viewport_size(frame.rect.width() as f64, frame.rect.height() as f64);

                let input = ui.input(|i| translate(&i.events, frame, captured));
                for event in input.pointer {
                    match canvas.handle_pointer_event(event) {
                        CanvasEvent::Ignored | CanvasEvent::Moved(..) | CanvasEvent::Resized(..) => {}
                        other => log::debug!("{:?}", other),
                    }
                }
                for key in &input.keys {
                    if let CanvasEvent::FullScreenToggled(id, on) = canvas.handle_key_event(key) {
                        log::debug!("Full-screen {} for {}", on, id);
                    }
                }

                actions.extend(render_canvas(ui, frame, &screen.dashboard, &screen.panels, state));
            });

        actions
    }
}

impl eframe::App for DeskboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actions: Vec<UiAction> = match &mut self.screen {
            Screen::Login => render_login(ctx, &mut self.ui_state.login).into_iter().collect(),
            Screen::Dashboard(screen) => {
                Self::dashboard_frame(ctx, screen, &mut self.ui_state, self.capture.is_active())
            }
        };
        for action in actions {
            self.handle_action(action);
        }

        if let Some(due) = self.save_due_notes(Instant::now()) {
            ctx.request_repaint_after(due.saturating_duration_since(Instant::now()).max(Duration::from_millis(10)));
        }
        if ctx.input(|i| i.viewport().close_requested()) {
            self.flush_notes();
        }
    }
}
