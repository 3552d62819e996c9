//! Menu components and frames.

use egui::{Align2, Color32, CornerRadius, CursorIcon, FontId, Frame, Margin, Pos2, Sense, Stroke, Ui, vec2};

use crate::{sizing, theme};

/// Show a menu item with label and optional shortcut.
pub fn menu_item(ui: &mut Ui, label: &str, shortcut: &str) -> bool {
    menu_item_enabled(ui, label, shortcut, true)
}

/// Show a menu item that can be disabled.
pub fn menu_item_enabled(ui: &mut Ui, label: &str, shortcut: &str, enabled: bool) -> bool {
    let size = vec2(ui.available_width().max(160.0), 28.0);
    let sense = if enabled { Sense::click() } else { Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(size, sense);

    if ui.is_rect_visible(rect) {
        if enabled && response.hovered() {
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), theme::HOVER_BG);
        }
        let text_color = if enabled { theme::TEXT } else { theme::BORDER };
        ui.painter().text(
            Pos2::new(rect.left() + 12.0, rect.center().y),
            Align2::LEFT_CENTER,
            label,
            FontId::proportional(13.0),
            text_color,
        );
        if !shortcut.is_empty() {
            ui.painter().text(
                Pos2::new(rect.right() - 12.0, rect.center().y),
                Align2::RIGHT_CENTER,
                shortcut,
                FontId::proportional(12.0),
                theme::TEXT_MUTED,
            );
        }
    }

    let clicked = enabled && response.clicked();
    if enabled {
        response.on_hover_cursor(CursorIcon::PointingHand);
    }
    clicked
}

/// Draw a menu separator line.
pub fn menu_separator(ui: &mut Ui) {
    ui.add_space(4.0);
    let rect = ui.available_rect_before_wrap();
    let y = rect.top();
    ui.painter().line_segment(
        [Pos2::new(rect.left() + 8.0, y), Pos2::new(rect.right() - 8.0, y)],
        Stroke::new(1.0, theme::BORDER),
    );
    ui.add_space(4.0);
}

fn shadow(blur: u8, alpha: u8) -> egui::epaint::Shadow {
    egui::epaint::Shadow {
        spread: 0,
        blur,
        offset: [0, 4],
        color: Color32::from_black_alpha(alpha),
    }
}

/// Floating panel frame (menus, login card).
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(shadow(12, 60))
        .inner_margin(Margin::same(8))
}

/// Sidebar catalog card.
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(theme::WIDGET_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(Margin::same(12))
}

/// Frame for a widget on the canvas; the active one gets the accent border.
pub fn widget_frame(active: bool) -> Frame {
    let stroke = if active {
        Stroke::new(1.5, theme::ACCENT)
    } else {
        Stroke::new(1.0, theme::BORDER)
    };
    Frame::new()
        .fill(theme::WIDGET_BG)
        .corner_radius(CornerRadius::same(sizing::WIDGET_RADIUS))
        .stroke(stroke)
        .shadow(shadow(if active { 24 } else { 12 }, 90))
}
