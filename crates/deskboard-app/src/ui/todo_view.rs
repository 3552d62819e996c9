//! Task list widget body.

use super::{TodoAction, TodoForm, UiAction};
use deskboard_core::TodoPanel;
use deskboard_core::records::Todo;
use deskboard_core::WidgetId;
use deskboard_widgets::{ActionButton, GlyphButton, badge, priority_colors, theme};
use egui::{RichText, ScrollArea, TextEdit, Ui};

pub(super) fn render_todo(ui: &mut Ui, id: &WidgetId, panel: &TodoPanel, form: &mut TodoForm) -> Option<UiAction> {
    let mut action = None;
    let wrap = |a: TodoAction| Some(UiAction::Todo(id.clone(), a));

    ui.horizontal(|ui| {
        let input = ui.add(
            TextEdit::singleline(&mut form.title)
                .hint_text("Add a task...")
                .desired_width(ui.available_width() - 64.0),
        );
        let entered = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ActionButton::new("Add").show(ui) || entered {
            action = wrap(TodoAction::Add(form.title.clone()));
        }
    });

    if let Some(error) = form.error.as_deref().or(panel.last_error()) {
        ui.label(RichText::new(error).size(11.0).color(theme::DANGER));
    }
    ui.add_space(6.0);

    if !panel.is_loaded() {
        ui.spinner();
        return action;
    }
    if panel.todos().is_empty() {
        ui.label(RichText::new("No tasks yet").color(theme::TEXT_MUTED));
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height(ui.available_height() - 24.0)
        .show(ui, |ui| {
            for todo in panel.todos() {
                if let Some(a) = todo_row(ui, todo) {
                    action = wrap(a);
                }
            }
        });

    ui.label(
        RichText::new(format!("{} active", panel.active_count()))
            .size(11.0)
            .color(theme::TEXT_MUTED),
    );
    action
}

fn todo_row(ui: &mut Ui, todo: &Todo) -> Option<TodoAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        let mut done = todo.completed;
        if ui.checkbox(&mut done, "").changed() {
            action = Some(TodoAction::SetCompleted(todo.id.clone(), done));
        }

        let mut title = RichText::new(&todo.title);
        title = if todo.completed {
            title.strikethrough().color(theme::TEXT_MUTED)
        } else {
            title.color(theme::TEXT)
        };
        ui.label(title);

        let (fill, color) = priority_colors(todo.priority);
        badge(ui, todo.priority_label(), fill, color);
        for tag in &todo.tags {
            badge(ui, tag, theme::HOVER_BG, theme::TEXT_MUTED);
        }
        if let Some(minutes) = todo.estimated_duration {
            ui.label(RichText::new(format!("{minutes}m")).size(10.0).color(theme::TEXT_MUTED));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if GlyphButton::new("🗑", "Delete task").danger().show(ui) {
                action = Some(TodoAction::Delete(todo.id.clone()));
            }
        });
    });
    action
}
