//! Widget kinds and their catalog metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of widget kinds a dashboard can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Todo,
    Notes,
    Calendar,
    Files,
}

/// Returned when a widget type name does not match any [`WidgetKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown widget type: {0}")]
pub struct UnknownWidgetKind(pub String);

/// Sidebar entry describing a widget kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: WidgetKind,
    /// Label shown in the "add widget" sidebar.
    pub label: &'static str,
    pub description: &'static str,
    /// Tailwind color family used for the icon tint.
    pub accent: &'static str,
}

impl WidgetKind {
    /// All kinds, in sidebar order.
    pub const ALL: [WidgetKind; 4] = [
        WidgetKind::Todo,
        WidgetKind::Notes,
        WidgetKind::Calendar,
        WidgetKind::Files,
    ];

    /// Stable lowercase name, also used as the id prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Todo => "todo",
            WidgetKind::Notes => "notes",
            WidgetKind::Calendar => "calendar",
            WidgetKind::Files => "files",
        }
    }

    /// Canonical title given to newly added widgets.
    pub fn title(&self) -> &'static str {
        match self {
            WidgetKind::Todo => "Tasks",
            WidgetKind::Notes => "Notes",
            WidgetKind::Calendar => "Calendar",
            WidgetKind::Files => "Files",
        }
    }

    /// Catalog metadata for the add-widget panel.
    pub fn catalog(&self) -> CatalogEntry {
        match self {
            WidgetKind::Todo => CatalogEntry {
                kind: *self,
                label: "Todo List",
                description: "AI-powered task management",
                accent: "Emerald",
            },
            WidgetKind::Notes => CatalogEntry {
                kind: *self,
                label: "Notes",
                description: "Rich text editor with AI",
                accent: "Cyan",
            },
            WidgetKind::Calendar => CatalogEntry {
                kind: *self,
                label: "Calendar",
                description: "Smart scheduling assistant",
                accent: "Purple",
            },
            WidgetKind::Files => CatalogEntry {
                kind: *self,
                label: "File Manager",
                description: "Intelligent file organization",
                accent: "Orange",
            },
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = UnknownWidgetKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownWidgetKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        for kind in WidgetKind::ALL {
            assert_eq!(kind.as_str().parse::<WidgetKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "weather".parse::<WidgetKind>().unwrap_err();
        assert_eq!(err, UnknownWidgetKind("weather".to_string()));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&WidgetKind::Calendar).unwrap();
        assert_eq!(json, "\"calendar\"");
    }

    #[test]
    fn test_catalog_labels() {
        assert_eq!(WidgetKind::Files.catalog().label, "File Manager");
        assert_eq!(WidgetKind::Todo.title(), "Tasks");
    }
}
