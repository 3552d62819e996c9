//! Widget data: identity, geometry and display flags.

use super::kind::WidgetKind;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest width or height a resize can produce.
pub const MIN_WIDGET_SIZE: f64 = 200.0;

/// Size given to every newly created widget.
pub const DEFAULT_WIDGET_SIZE: Size = Size::new(400.0, 300.0);

/// Opaque widget identifier, unique within a canvas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A positioned, resizable panel on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: WidgetId,
    pub kind: WidgetKind,
    pub title: String,
    /// Top-left corner in canvas coordinates.
    pub position: Point,
    pub size: Size,
    pub is_minimized: bool,
    pub is_full_screen: bool,
}

impl Widget {
    /// Create a widget with explicit geometry; flags start cleared.
    pub fn new(id: WidgetId, kind: WidgetKind, title: impl Into<String>, position: Point, size: Size) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            position,
            size,
            is_minimized: false,
            is_full_screen: false,
        }
    }

    /// Stored geometry, ignoring minimize and full-screen overrides.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Merge the fields present in `patch`.
    pub fn apply(&mut self, patch: &WidgetPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(minimized) = patch.is_minimized {
            self.is_minimized = minimized;
        }
        if let Some(full_screen) = patch.is_full_screen {
            self.is_full_screen = full_screen;
        }
    }
}

/// Partial widget update. `id` and `kind` are fixed for a widget's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_minimized: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_full_screen: Option<bool>,
}

impl WidgetPatch {
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn size(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn minimized(minimized: bool) -> Self {
        Self {
            is_minimized: Some(minimized),
            ..Default::default()
        }
    }

    pub fn full_screen(full_screen: bool) -> Self {
        Self {
            is_full_screen: Some(full_screen),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
