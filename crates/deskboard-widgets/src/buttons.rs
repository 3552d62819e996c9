//! Button components: glyph buttons and filled action buttons.

use egui::{Align2, Color32, CornerRadius, CursorIcon, FontId, Sense, Ui, Vec2, vec2};

use crate::{sizing, theme};

/// Style configuration for glyph buttons.
#[derive(Clone)]
pub struct GlyphButtonStyle {
    pub size: Vec2,
    pub font_size: f32,
    pub corner_radius: u8,
    pub hover_color: Color32,
    pub glyph_color: Color32,
    pub hover_glyph_color: Color32,
}

impl Default for GlyphButtonStyle {
    fn default() -> Self {
        Self {
            size: vec2(sizing::MEDIUM, sizing::MEDIUM),
            font_size: 15.0,
            corner_radius: sizing::CORNER_RADIUS,
            hover_color: theme::HOVER_BG,
            glyph_color: theme::TEXT_MUTED,
            hover_glyph_color: theme::TEXT,
        }
    }
}

impl GlyphButtonStyle {
    /// Widget header controls (minimize, full-screen, remove).
    pub fn header() -> Self {
        Self {
            size: vec2(sizing::SMALL + 4.0, sizing::SMALL + 4.0),
            font_size: 12.0,
            ..Default::default()
        }
    }

    /// Red on hover, for destructive controls.
    pub fn danger() -> Self {
        Self {
            hover_glyph_color: theme::DANGER,
            ..Self::header()
        }
    }
}

/// A button drawing a single text glyph, with a hover tooltip.
pub struct GlyphButton<'a> {
    glyph: &'a str,
    tooltip: &'a str,
    shortcut: Option<&'a str>,
    style: GlyphButtonStyle,
}

impl<'a> GlyphButton<'a> {
    pub fn new(glyph: &'a str, tooltip: &'a str) -> Self {
        Self {
            glyph,
            tooltip,
            shortcut: None,
            style: GlyphButtonStyle::default(),
        }
    }

    pub fn header(mut self) -> Self {
        self.style = GlyphButtonStyle::header();
        self
    }

    pub fn danger(mut self) -> Self {
        self.style = GlyphButtonStyle::danger();
        self
    }

    /// Keyboard shortcut shown in the tooltip.
    pub fn shortcut(mut self, shortcut: &'a str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(self.style.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let hovered = response.hovered();
            if hovered {
                ui.painter().rect_filled(
                    rect,
                    CornerRadius::same(self.style.corner_radius),
                    self.style.hover_color,
                );
            }
            let color = if hovered {
                self.style.hover_glyph_color
            } else {
                self.style.glyph_color
            };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.glyph,
                FontId::proportional(self.style.font_size),
                color,
            );
        }

        let clicked = response.clicked();
        let response = match self.shortcut {
            Some(shortcut) => response.on_hover_ui(|ui| {
                ui.horizontal(|ui| {
                    ui.label(self.tooltip);
                    ui.label(
                        egui::RichText::new(format!("({shortcut})"))
                            .color(theme::TEXT_MUTED)
                            .small(),
                    );
                });
            }),
            None => response.on_hover_text(self.tooltip),
        };
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// A filled button in an accent color, used for primary actions.
pub struct ActionButton<'a> {
    label: &'a str,
    fill: Color32,
    enabled: bool,
    min_width: f32,
}

impl<'a> ActionButton<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            fill: theme::ACCENT,
            enabled: true,
            min_width: 0.0,
        }
    }

    pub fn fill(mut self, fill: Color32) -> Self {
        self.fill = fill;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Stretch to at least this width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width;
        self
    }

    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = FontId::proportional(13.0);
        let galley = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font_id.clone(), Color32::PLACEHOLDER);
        let width = (galley.size().x + 24.0).max(self.min_width);
        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(vec2(width, 32.0), sense);

        if ui.is_rect_visible(rect) {
            let fill = if !self.enabled {
                self.fill.gamma_multiply(0.4)
            } else if response.hovered() {
                self.fill.gamma_multiply(0.85)
            } else {
                self.fill
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::PANEL_RADIUS), fill);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                font_id,
                Color32::WHITE,
            );
        }

        let clicked = self.enabled && response.clicked();
        if self.enabled {
            response.on_hover_cursor(CursorIcon::PointingHand);
        }
        clicked
    }
}
