//! Layout helpers: separators, section labels, badges.

use egui::{Color32, CornerRadius, FontId, Pos2, Sense, Stroke, Ui, vec2};

use crate::{sizing, theme};

/// Draw a horizontal separator line.
pub fn separator(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 4.0;
    ui.painter().line_segment(
        [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
        Stroke::new(1.0, theme::BORDER),
    );
    ui.add_space(8.0);
}

/// Draw a section label (small, muted, uppercase).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(10.0)
            .color(theme::TEXT_MUTED),
    );
}

/// A small pill with text, e.g. a priority or tag.
pub fn badge(ui: &mut Ui, text: &str, fill: Color32, color: Color32) {
    let font_id = FontId::proportional(10.0);
    let galley = ui.painter().layout_no_wrap(text.to_string(), font_id, color);
    let size = vec2(galley.size().x + 12.0, galley.size().y + 4.0);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter()
            .rect_filled(rect, CornerRadius::same(sizing::PANEL_RADIUS), fill);
        ui.painter()
            .galley(rect.center() - galley.size() / 2.0, galley, color);
    }
}
