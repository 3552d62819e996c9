//! Widget registry: the data model and factory for dashboard panels.
//!
//! - Kinds and their catalog metadata
//! - The widget record and partial updates
//! - Default geometry and id assignment
//! - Frame hit regions and resize handles
//!
//! Widgets are plain data. The canvas owns the collection and the
//! interaction state that moves them.

mod handles;
mod kind;
mod registry;
mod state;

pub use handles::{
    CORNER_HANDLE_SIZE, EDGE_HANDLE_THICKNESS, HEADER_CONTROL_COUNT, HEADER_CONTROL_GAP,
    HEADER_CONTROL_SIZE, HEADER_CONTROLS_MARGIN, HEADER_CONTROLS_WIDTH, HEADER_HEIGHT, Handle, HitRegion, ResizeHandle, header_rect, hit_test, resize_handles,
};
pub use kind::{CatalogEntry, UnknownWidgetKind, WidgetKind};
pub use registry::{DEFAULT_PLACEMENT_RANGE, WidgetRegistry};
pub use state::{DEFAULT_WIDGET_SIZE, MIN_WIDGET_SIZE, Widget, WidgetId, WidgetPatch};
