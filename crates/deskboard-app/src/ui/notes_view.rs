//! Note browser and editor widget body.

use super::{NoteEditor, NotesAction, UiAction};
use deskboard_core::records::Note;
use deskboard_core::{NotesPanel, WidgetId};
use deskboard_widgets::{ActionButton, GlyphButton, badge, section_label, separator, theme};
use egui::{RichText, ScrollArea, TextEdit, Ui};

pub(super) fn render_notes(ui: &mut Ui, id: &WidgetId, panel: &NotesPanel, editor: &mut NoteEditor) -> Vec<UiAction> {
    let draft = panel.draft();
    editor.sync(draft.as_ref());

    let actions = match &draft {
        Some(note) => render_editor(ui, panel, note, editor),
        None => render_list(ui, panel, editor),
    };

    if let Some(error) = panel.last_error() {
        ui.label(RichText::new(error).size(11.0).color(theme::DANGER));
    }
    actions
        .into_iter()
        .map(|a| UiAction::Notes(id.clone(), a))
        .collect()
}

fn render_list(ui: &mut Ui, panel: &NotesPanel, editor: &mut NoteEditor) -> Vec<NotesAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        let search = ui.add(
            TextEdit::singleline(&mut editor.search)
                .hint_text("Search notes...")
                .desired_width(ui.available_width() - 64.0),
        );
        if search.changed() {
            actions.push(NotesAction::Search(editor.search.clone()));
        }
        if ActionButton::new("New").show(ui) {
            actions.push(NotesAction::Create);
        }
    });
    ui.add_space(6.0);

    if !panel.is_loaded() {
        ui.spinner();
        return actions;
    }
    let notes = panel.filtered();
    if notes.is_empty() {
        let empty = if panel.search().is_empty() {
            "No notes yet"
        } else {
            "No matching notes"
        };
        ui.label(RichText::new(empty).color(theme::TEXT_MUTED));
    }

    ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for note in notes {
            if let Some(a) = note_row(ui, note) {
                actions.push(a);
            }
        }
    });
    actions
}

fn note_row(ui: &mut Ui, note: &Note) -> Option<NotesAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        let star = if note.is_favorite { "★" } else { "☆" };
        if GlyphButton::new(star, "Favorite").header().show(ui) {
            action = Some(NotesAction::ToggleFavorite(note.id.clone()));
        }
        let title = ui.add(
            egui::Label::new(RichText::new(&note.title).color(theme::TEXT))
                .truncate()
                .sense(egui::Sense::click()),
        );
        if title.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
            action = Some(NotesAction::Select(note.id.clone()));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if GlyphButton::new("🗑", "Delete note").danger().show(ui) {
                action = Some(NotesAction::Delete(note.id.clone()));
            }
            ui.label(
                RichText::new(format!("{} words", note.word_count))
                    .size(10.0)
                    .color(theme::TEXT_MUTED),
            );
        });
    });
    action
}

fn render_editor(ui: &mut Ui, panel: &NotesPanel, note: &Note, editor: &mut NoteEditor) -> Vec<NotesAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        if GlyphButton::new("⬅", "Back to notes").header().show(ui) {
            actions.push(NotesAction::Flush);
            actions.push(NotesAction::CloseEditor);
        }
        let title = ui.add(
            TextEdit::singleline(&mut editor.title)
                .font(egui::TextStyle::Heading)
                .desired_width(ui.available_width() - 60.0),
        );
        if title.changed() {
            actions.push(NotesAction::EditTitle(note.id.clone(), editor.title.clone()));
        }
        let star = if note.is_favorite { "★" } else { "☆" };
        if GlyphButton::new(star, "Favorite").header().show(ui) {
            actions.push(NotesAction::ToggleFavorite(note.id.clone()));
        }
    });

    let status = if panel.has_unsaved_edits() { "Saving..." } else { "Saved" };
    ui.label(
        RichText::new(format!("{} · {} words · {} min read", status, note.word_count, note.reading_time))
            .size(10.0)
            .color(theme::TEXT_MUTED),
    );

    let body_height = (ui.available_height() - 120.0).max(80.0);
    ScrollArea::vertical()
        .id_salt("note_body")
        .max_height(body_height)
        .show(ui, |ui| {
            let body = ui.add_sized(
                [ui.available_width(), body_height],
                TextEdit::multiline(&mut editor.body).hint_text("Start writing..."),
            );
            if body.changed() {
                actions.push(NotesAction::EditBody(note.id.clone(), editor.body.clone()));
            }
        });

    ui.horizontal(|ui| {
        if ActionButton::new("Suggest").enabled(!editor.body.trim().is_empty()).show(ui) {
            actions.push(NotesAction::Suggest(editor.body.clone()));
        }
        if ActionButton::new("Analyze").fill(theme::HOVER_BG).show(ui) {
            actions.push(NotesAction::Flush);
            actions.push(NotesAction::Analyze(note.id.clone()));
        }
    });

    if !panel.suggestions().is_empty() || note.ai_summary.is_some() {
        ui.add_space(4.0);
        separator(ui);
    }
    if !panel.suggestions().is_empty() {
        section_label(ui, "Suggestions");
        for suggestion in panel.suggestions() {
            ui.label(RichText::new(format!("• {suggestion}")).size(11.0).color(theme::TEXT));
        }
    }
    if let Some(summary) = &note.ai_summary {
        section_label(ui, "Summary");
        ui.label(RichText::new(summary).size(11.0).color(theme::TEXT));
    }
    if !note.ai_tags.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for tag in &note.ai_tags {
                badge(ui, tag, theme::HOVER_BG, theme::TEXT_MUTED);
            }
        });
    }
    actions
}
