//! Dashboard color palette.
//!
//! The Tailwind families the dashboard uses: slate for surfaces and text,
//! one accent per widget kind, and the traffic-light trio for priorities.

use egui::Color32;

/// A Tailwind color with all shade variants (50-950).
#[derive(Clone, Copy, Debug)]
pub struct TailwindColor {
    /// Color name (e.g., "Slate", "Emerald")
    pub name: &'static str,
    /// Shades from 50 to 950 (11 total)
    pub shades: [Color32; 11],
}

impl TailwindColor {
    pub const fn new(name: &'static str, shades: [(u8, u8, u8); 11]) -> Self {
        let mut out = [Color32::BLACK; 11];
        let mut i = 0;
        while i < 11 {
            out[i] = Color32::from_rgb(shades[i].0, shades[i].1, shades[i].2);
            i += 1;
        }
        Self { name, shades: out }
    }

    /// Shade by Tailwind number (50, 100, ..., 900, 950). Unknown numbers give 500.
    pub const fn shade(&self, level: u16) -> Color32 {
        let index = match level {
            50 => 0,
            100 => 1,
            200 => 2,
            300 => 3,
            400 => 4,
            600 => 6,
            700 => 7,
            800 => 8,
            900 => 9,
            950 => 10,
            _ => 5,
        };
        self.shades[index]
    }

    /// Icon and accent text shade.
    pub const fn accent(&self) -> Color32 {
        self.shade(400)
    }

    /// `bg-<color>-500/20` style translucent fill.
    pub fn tint(&self, alpha: u8) -> Color32 {
        let c = self.shade(500);
        Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), alpha)
    }
}

pub const SLATE: TailwindColor = TailwindColor::new("Slate", [
    (248, 250, 252), (241, 245, 249), (226, 232, 240), (203, 213, 225),
    (148, 163, 184), (100, 116, 139), (71, 85, 105), (51, 65, 85),
    (30, 41, 59), (15, 23, 42), (2, 6, 23),
]);

pub const RED: TailwindColor = TailwindColor::new("Red", [
    (254, 242, 242), (254, 226, 226), (254, 202, 202), (252, 165, 165),
    (248, 113, 113), (239, 68, 68), (220, 38, 38), (185, 28, 28),
    (153, 27, 27), (127, 29, 29), (69, 10, 10),
]);

pub const ORANGE: TailwindColor = TailwindColor::new("Orange", [
    (255, 247, 237), (255, 237, 213), (254, 215, 170), (253, 186, 116),
    (251, 146, 60), (249, 115, 22), (234, 88, 12), (194, 65, 12),
    (154, 52, 18), (124, 45, 18), (67, 20, 7),
]);

pub const YELLOW: TailwindColor = TailwindColor::new("Yellow", [
    (254, 252, 232), (254, 249, 195), (254, 240, 138), (253, 224, 71),
    (250, 204, 21), (234, 179, 8), (202, 138, 4), (161, 98, 7),
    (133, 77, 14), (113, 63, 18), (66, 32, 6),
]);

pub const GREEN: TailwindColor = TailwindColor::new("Green", [
    (240, 253, 244), (220, 252, 231), (187, 247, 208), (134, 239, 172),
    (74, 222, 128), (34, 197, 94), (22, 163, 74), (21, 128, 61),
    (22, 101, 52), (20, 83, 45), (5, 46, 22),
]);

pub const EMERALD: TailwindColor = TailwindColor::new("Emerald", [
    (236, 253, 245), (209, 250, 229), (167, 243, 208), (110, 231, 183),
    (52, 211, 153), (16, 185, 129), (5, 150, 105), (4, 120, 87),
    (6, 95, 70), (6, 78, 59), (2, 44, 34),
]);

pub const CYAN: TailwindColor = TailwindColor::new("Cyan", [
    (236, 254, 255), (207, 250, 254), (165, 243, 252), (103, 232, 249),
    (34, 211, 238), (6, 182, 212), (8, 145, 178), (14, 116, 144),
    (21, 94, 117), (22, 78, 99), (8, 51, 68),
]);

pub const PURPLE: TailwindColor = TailwindColor::new("Purple", [
    (250, 245, 255), (243, 232, 255), (233, 213, 255), (216, 180, 254),
    (192, 132, 252), (168, 85, 247), (147, 51, 234), (126, 34, 206),
    (107, 33, 168), (88, 28, 135), (59, 7, 100),
]);

pub const PALETTE: &[TailwindColor] = &[SLATE, RED, ORANGE, YELLOW, GREEN, EMERALD, CYAN, PURPLE];

/// Look up a palette family by name (case-insensitive).
pub fn by_name(name: &str) -> Option<&'static TailwindColor> {
    PALETTE.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Accent shade for a family name, slate when unknown.
pub fn accent(name: &str) -> Color32 {
    by_name(name).unwrap_or(&SLATE).accent()
}

/// Badge colors for a task priority: (fill, text).
pub fn priority_colors(priority: u8) -> (Color32, Color32) {
    let family = match priority {
        1 => &RED,
        2 => &YELLOW,
        3 => &GREEN,
        _ => &SLATE,
    };
    (family.tint(51), family.accent())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_lookup() {
        assert_eq!(SLATE.shade(900), Color32::from_rgb(15, 23, 42));
        assert_eq!(EMERALD.accent(), Color32::from_rgb(52, 211, 153));
        assert_eq!(CYAN.shade(123), CYAN.shade(500));
    }

    #[test]
    fn test_by_name_ignores_case() {
        assert_eq!(by_name("purple").map(|c| c.name), Some("Purple"));
        assert!(by_name("Magenta").is_none());
        assert_eq!(accent("Magenta"), SLATE.accent());
    }

    #[test]
    fn test_priority_colors() {
        assert_eq!(priority_colors(1).1, RED.accent());
        assert_eq!(priority_colors(3).1, GREEN.accent());
        assert_eq!(priority_colors(9).1, SLATE.accent());
    }
}
