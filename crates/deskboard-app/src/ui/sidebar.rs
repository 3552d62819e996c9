//! Add-widget sidebar listing the widget catalog.

use super::UiAction;
use deskboard_core::WidgetKind;
use deskboard_widgets::{GlyphButton, accent, card_frame, section_label, sizing, theme};
use egui::{Context, CornerRadius, CursorIcon, RichText, Sense, Stroke, StrokeKind};

pub const SIDEBAR_WIDTH: f32 = 280.0;

pub(crate) fn kind_glyph(kind: WidgetKind) -> &'static str {
    match kind {
        WidgetKind::Todo => "✔",
        WidgetKind::Notes => "✏",
        WidgetKind::Calendar => "📅",
        WidgetKind::Files => "📁",
    }
}

/// Draw the sidebar if open. Picking an entry adds a widget and leaves the
/// sidebar open.
pub fn render_sidebar(ctx: &Context, open: bool) -> Option<UiAction> {
    let mut action = None;

    egui::SidePanel::left("sidebar")
        .exact_width(SIDEBAR_WIDTH)
        .resizable(false)
        .frame(
            egui::Frame::new()
                .fill(theme::PANEL_BG)
                .stroke(Stroke::new(1.0, theme::BORDER))
                .inner_margin(egui::Margin::same(16)),
        )
        .show_animated(ctx, open, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Add Widgets").size(16.0).strong().color(theme::TEXT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if GlyphButton::new("✖", "Close").header().show(ui) {
                        action = Some(UiAction::CloseSidebar);
                    }
                });
            });
            ui.add_space(8.0);
            section_label(ui, "Widgets");
            ui.add_space(4.0);

            for kind in WidgetKind::ALL {
                let entry = kind.catalog();
                let card = card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(kind_glyph(kind)).size(20.0).color(accent(entry.accent)));
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(entry.label).strong().color(theme::TEXT));
                            ui.label(RichText::new(entry.description).size(11.0).color(theme::TEXT_MUTED));
                        });
                    });
                });
                let response = ui.interact(card.response.rect, ui.id().with(kind.as_str()), Sense::click());
                if response.hovered() {
                    ui.painter().rect_stroke(
                        card.response.rect,
                        CornerRadius::same(sizing::PANEL_RADIUS),
                        Stroke::new(1.0, accent(entry.accent)),
                        StrokeKind::Inside,
                    );
                }
                if response.on_hover_cursor(CursorIcon::PointingHand).clicked() {
                    action = Some(UiAction::AddWidget(kind));
                }
                ui.add_space(8.0);
            }
        });

    action
}
