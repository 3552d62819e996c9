//! Hit regions and resize handles on a widget's frame.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Height of the draggable header strip.
pub const HEADER_HEIGHT: f64 = 48.0;
/// Side of one header control button.
pub const HEADER_CONTROL_SIZE: f64 = 24.0;
/// Gap between adjacent header control buttons.
pub const HEADER_CONTROL_GAP: f64 = 4.0;
/// Space between the last header control and the frame's right edge.
pub const HEADER_CONTROLS_MARGIN: f64 = 8.0;
/// Number of header controls (minimize, full-screen, remove).
pub const HEADER_CONTROL_COUNT: usize = 3;
/// Width of the header's right-hand control cluster.
pub const HEADER_CONTROLS_WIDTH: f64 = HEADER_CONTROLS_MARGIN
    + HEADER_CONTROL_COUNT as f64 * HEADER_CONTROL_SIZE
    + (HEADER_CONTROL_COUNT - 1) as f64 * HEADER_CONTROL_GAP;
/// Thickness of the right and bottom edge handles.
pub const EDGE_HANDLE_THICKNESS: f64 = 8.0;
/// Side of the square bottom-right corner handle.
pub const CORNER_HANDLE_SIZE: f64 = 16.0;

/// Which resize affordance is being used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeHandle {
    /// Bottom-right corner: both axes.
    Corner,
    /// Right edge: width only.
    Right,
    /// Bottom edge: height only.
    Bottom,
}

impl ResizeHandle {
    pub fn affects_width(&self) -> bool {
        matches!(self, ResizeHandle::Corner | ResizeHandle::Right)
    }

    pub fn affects_height(&self) -> bool {
        matches!(self, ResizeHandle::Corner | ResizeHandle::Bottom)
    }
}

/// The part of a widget under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRegion {
    /// Header strip; a press here starts a drag.
    Header,
    /// Buttons inside the header; presses are left to the control.
    HeaderControl,
    /// Content area.
    Body,
    Resize(ResizeHandle),
}

/// A resize handle with its rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub kind: ResizeHandle,
    pub rect: Rect,
}

impl Handle {
    pub fn new(kind: ResizeHandle, rect: Rect) -> Self {
        Self { kind, rect }
    }

    pub fn hit_test(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}

/// Resize handles for a widget frame, corner first so it wins overlaps.
pub fn resize_handles(frame: Rect) -> [Handle; 3] {
    [
        Handle::new(
            ResizeHandle::Corner,
            Rect::new(
                frame.x1 - CORNER_HANDLE_SIZE,
                frame.y1 - CORNER_HANDLE_SIZE,
                frame.x1,
                frame.y1,
            ),
        ),
        Handle::new(
            ResizeHandle::Right,
            Rect::new(
                frame.x1 - EDGE_HANDLE_THICKNESS,
                (frame.y0 + HEADER_HEIGHT).min(frame.y1),
                frame.x1,
                frame.y1,
            ),
        ),
        Handle::new(
            ResizeHandle::Bottom,
            Rect::new(frame.x0, frame.y1 - EDGE_HANDLE_THICKNESS, frame.x1, frame.y1),
        ),
    ]
}

/// Header strip of a frame (clipped to the frame height).
pub fn header_rect(frame: Rect) -> Rect {
    Rect::new(frame.x0, frame.y0, frame.x1, (frame.y0 + HEADER_HEIGHT).min(frame.y1))
}

/// Classify `point` against a widget frame.
///
/// `offers_resize` is false for minimized and full-screen widgets, in which
/// case the edges fall through to the body or header.
pub fn hit_test(frame: Rect, point: Point, offers_resize: bool) -> Option<HitRegion> {
    if !frame.contains(point) {
        return None;
    }
    if offers_resize {
        if let Some(handle) = resize_handles(frame).iter().find(|h| h.hit_test(point)) {
            return Some(HitRegion::Resize(handle.kind));
        }
    }
    let header = header_rect(frame);
    if header.contains(point) {
        if point.x >= header.x1 - HEADER_CONTROLS_WIDTH {
            return Some(HitRegion::HeaderControl);
        }
        return Some(HitRegion::Header);
    }
    Some(HitRegion::Body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 300.0)
    }

    #[test]
    fn test_header_hit() {
        assert_eq!(hit_test(frame(), Point::new(10.0, 10.0), true), Some(HitRegion::Header));
    }

    #[test]
    fn test_header_controls_hit() {
        assert_eq!(
            hit_test(frame(), Point::new(390.0, 10.0), true),
            Some(HitRegion::HeaderControl)
        );
    }

    #[test]
    fn test_header_controls_width_fits_buttons() {
        assert_eq!(HEADER_CONTROLS_WIDTH, 88.0);
    }

    #[test]
    fn test_corner_wins_over_edges() {
        assert_eq!(
            hit_test(frame(), Point::new(398.0, 298.0), true),
            Some(HitRegion::Resize(ResizeHandle::Corner))
        );
    }

    #[test]
    fn test_edge_handles() {
        assert_eq!(
            hit_test(frame(), Point::new(397.0, 150.0), true),
            Some(HitRegion::Resize(ResizeHandle::Right))
        );
        assert_eq!(
            hit_test(frame(), Point::new(200.0, 297.0), true),
            Some(HitRegion::Resize(ResizeHandle::Bottom))
        );
    }

    #[test]
    fn test_no_resize_when_not_offered() {
        assert_eq!(hit_test(frame(), Point::new(398.0, 298.0), false), Some(HitRegion::Body));
    }

    #[test]
    fn test_outside_frame() {
        assert_eq!(hit_test(frame(), Point::new(410.0, 310.0), true), None);
    }

    #[test]
    fn test_handle_axes() {
        assert!(ResizeHandle::Corner.affects_width() && ResizeHandle::Corner.affects_height());
        assert!(ResizeHandle::Right.affects_width() && !ResizeHandle::Right.affects_height());
        assert!(!ResizeHandle::Bottom.affects_width() && ResizeHandle::Bottom.affects_height());
    }
}
