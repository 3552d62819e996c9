//! Dashboard header: sidebar toggle, title and the user menu.

use super::{UiAction, UiState};
use crate::shortcuts::{ShortcutRegistry, TOGGLE_SIDEBAR};
use deskboard_core::Dashboard;
use deskboard_widgets::{GlyphButton, menu_item, menu_separator, panel_frame, theme};
use egui::{Align, Align2, Color32, Context, Layout, Pos2, Rect, RichText, Sense, Vec2};

pub const HEADER_HEIGHT: f32 = 56.0;
const AVATAR_SIZE: f32 = 32.0;
const MENU_WIDTH: f32 = 220.0;

pub fn render_header(ctx: &Context, dashboard: &Dashboard, state: &mut UiState) -> Option<UiAction> {
    let mut action = None;
    let mut avatar_rect = Rect::NOTHING;

    egui::TopBottomPanel::top("header")
        .exact_height(HEADER_HEIGHT)
        .frame(
            egui::Frame::new()
                .fill(theme::PANEL_BG)
                .stroke(egui::Stroke::new(1.0, theme::BORDER))
                .inner_margin(egui::Margin::symmetric(16, 0)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                let hint = ShortcutRegistry::hint(TOGGLE_SIDEBAR.description).unwrap_or_default();
                let glyph = if dashboard.is_sidebar_open() { "✖" } else { "☰" };
                if GlyphButton::new(glyph, "Add widgets").shortcut(&hint).show(ui) {
                    action = Some(UiAction::ToggleSidebar);
                }
                ui.add_space(8.0);
                ui.label(RichText::new("Deskboard").size(18.0).strong().color(theme::TEXT));

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let (rect, response) = ui.allocate_exact_size(Vec2::splat(AVATAR_SIZE), Sense::click());
                    avatar_rect = rect;
                    let fill = if state.user_menu_open || response.hovered() {
                        theme::ACCENT
                    } else {
                        theme::ACCENT.gamma_multiply(0.8)
                    };
                    ui.painter().circle_filled(rect.center(), AVATAR_SIZE / 2.0, fill);
                    ui.painter().text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        dashboard.user_initial(),
                        egui::FontId::proportional(15.0),
                        Color32::WHITE,
                    );
                    if response.on_hover_text(dashboard.user().email.as_str()).clicked() {
                        state.user_menu_open = !state.user_menu_open;
                    }
                });
            });
        });

    if state.user_menu_open {
        let menu_pos = Pos2::new(avatar_rect.right() - MENU_WIDTH, avatar_rect.bottom() + 8.0);
        let menu = egui::Area::new(egui::Id::new("user_menu"))
            .fixed_pos(menu_pos)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                panel_frame().show(ui, |ui| {
                    ui.set_width(MENU_WIDTH - 16.0);
                    ui.label(RichText::new("Signed in as").size(11.0).color(theme::TEXT_MUTED));
                    ui.label(RichText::new(&dashboard.user().email).color(theme::TEXT));
                    menu_separator(ui);
                    if menu_item(ui, "Sign out", "") {
                        action = Some(UiAction::SignOut);
                        state.user_menu_open = false;
                    }
                });
            });

        // Close when clicking anywhere else.
        if ctx.input(|i| i.pointer.any_click()) {
            if let Some(pos) = ctx.input(|i| i.pointer.interact_pos()) {
                if !avatar_rect.contains(pos) && !menu.response.rect.contains(pos) {
                    state.user_menu_open = false;
                }
            }
        }
    }

    action
}
