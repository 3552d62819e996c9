//! Drag and resize interactions.
//!
//! A canvas holds at most one [`Interaction`] at a time. The interaction
//! records where the gesture started and turns each subsequent pointer
//! position into a geometry patch; it never touches the widget collection
//! itself.

use crate::capture::PointerCapture;
use crate::widget::{ResizeHandle, Widget, WidgetId, WidgetPatch};
use kurbo::{Point, Size, Vec2};

/// What the active interaction is doing and where it started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionKind {
    Dragging {
        /// Pointer offset from the widget's top-left at press time.
        anchor: Vec2,
    },
    Resizing {
        handle: ResizeHandle,
        pointer_start: Point,
        size_start: Size,
    },
}

/// The single in-flight drag or resize on a canvas.
#[derive(Debug)]
pub struct Interaction {
    widget_id: WidgetId,
    kind: InteractionKind,
    /// Held for the interaction's lifetime; dropping it detaches listeners.
    _capture: PointerCapture,
}

impl Interaction {
    /// Begin dragging `widget` from `pointer`.
    pub fn drag(widget: &Widget, pointer: Point, capture: PointerCapture) -> Self {
        Self {
            widget_id: widget.id.clone(),
            kind: InteractionKind::Dragging {
                anchor: pointer - widget.position,
            },
            _capture: capture,
        }
    }

    /// Begin resizing `widget` with `handle` from `pointer`.
    pub fn resize(widget: &Widget, handle: ResizeHandle, pointer: Point, capture: PointerCapture) -> Self {
        Self {
            widget_id: widget.id.clone(),
            kind: InteractionKind::Resizing {
                handle,
                pointer_start: pointer,
                size_start: widget.size,
            },
            _capture: capture,
        }
    }

    pub fn widget_id(&self) -> &WidgetId {
        &self.widget_id
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.kind, InteractionKind::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.kind, InteractionKind::Resizing { .. })
    }

    /// Geometry update for the pointer at `pointer`, given the widget's current size.
    pub fn patch_for(&self, pointer: Point, current_size: Size, min_size: f64) -> WidgetPatch {
        match self.kind {
            InteractionKind::Dragging { anchor } => WidgetPatch::position(drag_position(pointer, anchor)),
            InteractionKind::Resizing {
                handle,
                pointer_start,
                size_start,
            } => WidgetPatch::size(resize_size(
                handle,
                size_start,
                current_size,
                pointer - pointer_start,
                min_size,
            )),
        }
    }
}

/// New top-left for a drag: `pointer - anchor`, floored at zero on each axis.
///
/// There is no upper bound; widgets may leave the viewport to the right or bottom.
pub fn drag_position(pointer: Point, anchor: Vec2) -> Point {
    Point::new((pointer.x - anchor.x).max(0.0), (pointer.y - anchor.y).max(0.0))
}

/// New size for a resize: `start + delta` on the handle's axes, floored at `min_size`.
///
/// Axes the handle does not control keep `current`.
pub fn resize_size(handle: ResizeHandle, start: Size, current: Size, delta: Vec2, min_size: f64) -> Size {
    let width = if handle.affects_width() {
        (start.width + delta.x).max(min_size)
    } else {
        current.width
    };
    let height = if handle.affects_height() {
        (start.height + delta.y).max(min_size)
    } else {
        current.height
    };
    Size::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::MIN_WIDGET_SIZE;

    #[test]
    fn test_drag_position_follows_pointer() {
        let anchor = Vec2::new(10.0, 10.0);
        assert_eq!(drag_position(Point::new(60.0, 70.0), anchor), Point::new(50.0, 60.0));
    }

    #[test]
    fn test_drag_position_floors_at_zero() {
        let anchor = Vec2::new(30.0, 30.0);
        assert_eq!(drag_position(Point::new(5.0, 100.0), anchor), Point::new(0.0, 70.0));
        assert_eq!(drag_position(Point::new(-500.0, -1.0), anchor), Point::ZERO);
    }

    #[test]
    fn test_drag_position_has_no_upper_bound() {
        let p = drag_position(Point::new(1e6, 1e6), Vec2::ZERO);
        assert_eq!(p, Point::new(1e6, 1e6));
    }

    #[test]
    fn test_corner_resize_exact_then_floor() {
        let start = Size::new(400.0, 300.0);
        let size = resize_size(ResizeHandle::Corner, start, start, Vec2::new(-60.0, -60.0), MIN_WIDGET_SIZE);
        assert_eq!(size, Size::new(340.0, 240.0));

        let size = resize_size(ResizeHandle::Corner, start, size, Vec2::new(-310.0, -210.0), MIN_WIDGET_SIZE);
        assert_eq!(size, Size::new(200.0, 200.0));
    }

    #[test]
    fn test_edge_resize_touches_one_axis() {
        let start = Size::new(400.0, 300.0);
        let right = resize_size(ResizeHandle::Right, start, start, Vec2::new(50.0, 80.0), MIN_WIDGET_SIZE);
        assert_eq!(right, Size::new(450.0, 300.0));

        let bottom = resize_size(ResizeHandle::Bottom, start, start, Vec2::new(50.0, 80.0), MIN_WIDGET_SIZE);
        assert_eq!(bottom, Size::new(400.0, 380.0));
    }
}
