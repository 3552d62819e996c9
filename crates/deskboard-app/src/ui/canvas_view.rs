//! The widget canvas: frames, header controls, resize grips and bodies.

use super::notes_view::render_notes;
use super::sidebar::kind_glyph;
use super::todo_view::render_todo;
use super::{UiAction, UiState};
use crate::app::WidgetPanels;
use crate::event_handler::CanvasFrame;
use deskboard_core::content::{GENERIC_CONTENT, Placeholder};
use deskboard_core::widget::{HEADER_CONTROL_GAP, HEADER_CONTROLS_MARGIN, HEADER_HEIGHT, ResizeHandle};
use deskboard_core::{Canvas, ContentDescriptor, Dashboard, HitRegion, InteractionKind, Widget};
use deskboard_widgets::{GlyphButton, accent, theme, widget_frame};
use egui::{Align, CursorIcon, Layout, Pos2, Rect, RichText, Stroke, Ui, UiBuilder, Vec2};

const BODY_PADDING: f32 = 12.0;

pub fn render_canvas(
    ui: &mut Ui,
    frame: CanvasFrame,
    dashboard: &Dashboard,
    panels: &WidgetPanels,
    state: &mut UiState,
) -> Vec<UiAction> {
    let canvas = dashboard.canvas();
    let mut actions = Vec::new();

    ui.painter().rect_filled(frame.rect, 0.0, theme::CANVAS_BG);
    if canvas.is_empty() {
        ui.painter().text(
            frame.rect.center(),
            egui::Align2::CENTER_CENTER,
            "Open the sidebar to add widgets",
            egui::FontId::proportional(14.0),
            theme::TEXT_MUTED,
        );
    }

    for widget in canvas.render_order() {
        let Some(rect) = canvas.effective_rect(&widget.id) else {
            continue;
        };
        let screen = frame.rect_to_screen(rect);
        let active = canvas.is_dragging(&widget.id) || canvas.is_resizing(&widget.id);

        ui.scope_builder(
            UiBuilder::new().max_rect(screen).id_salt(widget.id.as_str()),
            |ui| {
                ui.set_clip_rect(screen.intersect(frame.rect));
                widget_frame(active).show(ui, |ui| {
                    ui.set_min_size(ui.available_size());
                    actions.extend(render_header(ui, widget, screen.right()));
                    if !widget.is_minimized {
                        let content = dashboard.content(&widget.id);
                        actions.extend(render_body(ui, widget, content, panels, state));
                    }
                });
                if Canvas::offers_resize(widget) {
                    paint_grip(ui, screen);
                }
            },
        );
    }

    update_cursor(ui, frame, canvas);
    actions
}

fn render_header(ui: &mut Ui, widget: &Widget, frame_right: f32) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let width = ui.available_width();
    let stroke_inset = frame_right - ui.max_rect().right();
    ui.allocate_ui_with_layout(
        Vec2::new(width, HEADER_HEIGHT as f32),
        Layout::left_to_right(Align::Center),
        |ui| {
            ui.add_space(BODY_PADDING);
            let entry = widget.kind.catalog();
            ui.label(RichText::new(kind_glyph(widget.kind)).color(accent(entry.accent)));
            ui.label(RichText::new(&widget.title).strong().color(theme::TEXT));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // Must stay within the core's header-control hit region.
                ui.spacing_mut().item_spacing.x = HEADER_CONTROL_GAP as f32;
                ui.add_space((HEADER_CONTROLS_MARGIN as f32 - stroke_inset).max(0.0));
                if GlyphButton::new("✖", "Remove").danger().show(ui) {
                    actions.push(UiAction::RemoveWidget(widget.id.clone()));
                }
                let (glyph, tip) = if widget.is_full_screen {
                    ("🗗", "Exit full-screen")
                } else {
                    ("🗖", "Full-screen")
                };
                if GlyphButton::new(glyph, tip).header().show(ui) {
                    actions.push(UiAction::ToggleFullScreen(widget.id.clone()));
                }
                let tip = if widget.is_minimized { "Restore" } else { "Minimize" };
                if GlyphButton::new("🗕", tip).header().show(ui) {
                    actions.push(UiAction::ToggleMinimized(widget.id.clone()));
                }
            });
        },
    );
    let line_y = ui.min_rect().top() + HEADER_HEIGHT as f32;
    let x = ui.min_rect().x_range();
    ui.painter()
        .hline(x, line_y, Stroke::new(1.0, theme::BORDER));
    actions
}

fn render_body(
    ui: &mut Ui,
    widget: &Widget,
    content: Option<ContentDescriptor>,
    panels: &WidgetPanels,
    state: &mut UiState,
) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let body = ui.available_rect_before_wrap().shrink(BODY_PADDING);
    ui.scope_builder(UiBuilder::new().max_rect(body), |ui| match content {
        Some(ContentDescriptor::TodoContent { .. }) => match panels.todos.get(&widget.id) {
            Some(panel) => {
                let form = state.todo_forms.entry(widget.id.clone()).or_default();
                actions.extend(render_todo(ui, &widget.id, panel, form));
            }
            None => {
                ui.spinner();
            }
        },
        Some(ContentDescriptor::NotesContent { .. }) => match panels.notes.get(&widget.id) {
            Some(panel) => {
                let editor = state.note_editors.entry(widget.id.clone()).or_default();
                actions.extend(render_notes(ui, &widget.id, panel, editor));
            }
            None => {
                ui.spinner();
            }
        },
        Some(ContentDescriptor::Loading { .. }) => {
            ui.centered_and_justified(|ui| ui.spinner());
        }
        Some(ContentDescriptor::CalendarPlaceholder(p)) | Some(ContentDescriptor::FilesPlaceholder(p)) => {
            render_placeholder(ui, &p);
        }
        Some(ContentDescriptor::Generic) | None => {
            ui.label(RichText::new(GENERIC_CONTENT).color(theme::TEXT_MUTED));
        }
    });
    actions
}

fn render_placeholder(ui: &mut Ui, placeholder: &Placeholder) {
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() / 2.0 - 48.0).max(0.0));
        ui.label(
            RichText::new(placeholder.heading)
                .size(18.0)
                .strong()
                .color(accent(placeholder.accent)),
        );
        ui.label(RichText::new(placeholder.blurb).color(theme::TEXT_MUTED));
        ui.add_space(8.0);
        ui.label(RichText::new(placeholder.footer).size(11.0).color(theme::TEXT_MUTED));
    });
}

/// Diagonal grip in the bottom-right corner.
fn paint_grip(ui: &Ui, screen: Rect) {
    let corner = screen.right_bottom() - Vec2::splat(4.0);
    let stroke = Stroke::new(1.0, theme::TEXT_MUTED);
    for offset in [4.0, 8.0] {
        ui.painter().line_segment(
            [
                Pos2::new(corner.x - offset, corner.y),
                Pos2::new(corner.x, corner.y - offset),
            ],
            stroke,
        );
    }
}

/// Cursor for what the pointer is over, or for the interaction in progress.
fn update_cursor(ui: &Ui, frame: CanvasFrame, canvas: &Canvas) {
    let region = match canvas.interaction_kind() {
        Some(InteractionKind::Dragging { .. }) => Some(HitRegion::Header),
        Some(InteractionKind::Resizing { handle, .. }) => Some(HitRegion::Resize(handle)),
        None => ui
            .ctx()
            .pointer_hover_pos()
            .filter(|pos| frame.rect.contains(*pos))
            .and_then(|pos| canvas.hit_test(frame.to_canvas(pos)))
            .map(|(_, region)| region),
    };
    let icon = match region {
        Some(HitRegion::Header) if canvas.is_interacting() => CursorIcon::Grabbing,
        Some(HitRegion::Header) => CursorIcon::Grab,
        Some(HitRegion::Resize(ResizeHandle::Corner)) => CursorIcon::ResizeNwSe,
        Some(HitRegion::Resize(ResizeHandle::Right)) => CursorIcon::ResizeHorizontal,
        Some(HitRegion::Resize(ResizeHandle::Bottom)) => CursorIcon::ResizeVertical,
        _ => return,
    };
    ui.ctx().set_cursor_icon(icon);
}

#[cfg(test)]
mod tests {
    use deskboard_core::widget::HEADER_CONTROL_SIZE;
    use deskboard_widgets::GlyphButtonStyle;

    #[test]
    fn test_header_buttons_match_control_hit_region() {
        let style = GlyphButtonStyle::header();
        assert_eq!(style.size.x as f64, HEADER_CONTROL_SIZE);
        assert_eq!(GlyphButtonStyle::danger().size.x as f64, HEADER_CONTROL_SIZE);
    }
}
