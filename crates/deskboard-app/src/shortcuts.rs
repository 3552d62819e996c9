//! Keyboard shortcut registry and documentation.

use egui::{Key, Modifiers};

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, ctrl: bool, shift: bool, description: &'static str) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+B").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Whether `key` with `modifiers` triggers this shortcut.
    pub fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        key.name() == self.key && modifiers.command == self.ctrl && modifiers.shift == self.shift
    }

    /// Whether this shortcut was pressed during the current frame.
    pub fn pressed(&self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            i.events.iter().any(|event| {
                matches!(
                    event,
                    egui::Event::Key { key, pressed: true, repeat: false, modifiers, .. }
                        if self.matches(*key, *modifiers)
                )
            })
        })
    }
}

pub const TOGGLE_SIDEBAR: Shortcut = Shortcut::new("B", true, false, "Toggle the add-widget sidebar");
pub const EXIT_FULL_SCREEN: Shortcut = Shortcut::new("Escape", false, false, "Leave full-screen");
pub const SAVE_NOTES: Shortcut = Shortcut::new("S", true, false, "Save note edits now");

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    pub fn all() -> Vec<Shortcut> {
        vec![
            TOGGLE_SIDEBAR,
            EXIT_FULL_SCREEN,
            SAVE_NOTES,
            Shortcut::new("Double-click", false, false, "Toggle full-screen on a widget body"),
        ]
    }

    /// Shortcut with `description`, for tooltips.
    pub fn hint(description: &str) -> Option<String> {
        Self::all()
            .into_iter()
            .find(|s| s.description == description)
            .map(|s| s.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(TOGGLE_SIDEBAR.format(), "Ctrl+B");
        assert_eq!(EXIT_FULL_SCREEN.format(), "Escape");
    }

    #[test]
    fn test_matches_requires_modifiers() {
        assert!(TOGGLE_SIDEBAR.matches(Key::B, Modifiers::COMMAND));
        assert!(!TOGGLE_SIDEBAR.matches(Key::B, Modifiers::NONE));
        assert!(EXIT_FULL_SCREEN.matches(Key::Escape, Modifiers::NONE));
    }

    #[test]
    fn test_hint_lookup() {
        assert_eq!(ShortcutRegistry::hint("Save note edits now").as_deref(), Some("Ctrl+S"));
        assert_eq!(ShortcutRegistry::hint("nothing"), None);
    }
}
