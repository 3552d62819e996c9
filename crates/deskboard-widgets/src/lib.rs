//! Styled egui components for the Deskboard dashboard.
//!
//! - **Buttons**: glyph buttons for widget headers, filled action buttons
//! - **Colors**: the Tailwind families the dashboard draws with
//! - **Menu**: menu items, separators, panel and card frames
//! - **Layout**: section labels, separators, badges

pub mod buttons;
pub mod colors;
pub mod layout;
pub mod menu;

pub use buttons::{ActionButton, GlyphButton, GlyphButtonStyle};
pub use colors::{PALETTE, TailwindColor, accent, by_name, priority_colors};
pub use layout::{badge, section_label, separator};
pub use menu::{card_frame, menu_item, menu_item_enabled, menu_separator, panel_frame, widget_frame};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Header control size
    pub const SMALL: f32 = 20.0;
    /// Toolbar button size
    pub const MEDIUM: f32 = 28.0;
    pub const CORNER_RADIUS: u8 = 4;
    pub const PANEL_RADIUS: u8 = 8;
    /// Widget card corner radius
    pub const WIDGET_RADIUS: u8 = 12;
}

/// Dark slate theme.
pub mod theme {
    use crate::colors::{EMERALD, RED, SLATE};
    use egui::Color32;

    pub const TEXT: Color32 = SLATE.shade(200);
    pub const TEXT_MUTED: Color32 = SLATE.shade(400);
    pub const BORDER: Color32 = SLATE.shade(700);
    pub const ACCENT: Color32 = EMERALD.shade(500);
    pub const DANGER: Color32 = RED.shade(400);
    pub const HOVER_BG: Color32 = SLATE.shade(700);
    /// Canvas backdrop
    pub const CANVAS_BG: Color32 = SLATE.shade(950);
    pub const PANEL_BG: Color32 = SLATE.shade(900);
    pub const WIDGET_BG: Color32 = SLATE.shade(800);
    pub const INPUT_BG: Color32 = SLATE.shade(900);

    /// Apply the dark slate look to an egui context.
    pub fn apply(ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = PANEL_BG;
        visuals.window_fill = WIDGET_BG;
        visuals.extreme_bg_color = INPUT_BG;
        visuals.override_text_color = Some(TEXT);
        visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
        visuals.selection.stroke.color = ACCENT;
        visuals.widgets.noninteractive.bg_stroke.color = BORDER;
        visuals.widgets.inactive.weak_bg_fill = WIDGET_BG;
        visuals.widgets.hovered.weak_bg_fill = HOVER_BG;
        ctx.set_visuals(visuals);
    }
}
