//! Scoped pointer capture.
//!
//! While a drag or resize is active the shell listens for pointer moves and
//! releases on the whole input surface, not just on the widget. A
//! [`PointerCapture`] represents that registration: it attaches on creation
//! and detaches when dropped, so every way out of an interaction releases it.

use crate::widget::WidgetId;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Something that can route global pointer events to the canvas.
pub trait CaptureSurface: Send + Sync + fmt::Debug {
    /// Start delivering global move/up events on behalf of `owner`.
    fn attach(&self, owner: &WidgetId);
    /// Stop delivering them.
    fn detach(&self, owner: &WidgetId);
}

/// Live pointer capture; detaches from its surface on drop.
#[derive(Debug)]
pub struct PointerCapture {
    surface: Arc<dyn CaptureSurface>,
    owner: WidgetId,
}

impl PointerCapture {
    pub fn acquire(surface: Arc<dyn CaptureSurface>, owner: WidgetId) -> Self {
        surface.attach(&owner);
        log::trace!("pointer capture attached for {}", owner);
        Self { surface, owner }
    }

    pub fn owner(&self) -> &WidgetId {
        &self.owner
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.surface.detach(&self.owner);
        log::trace!("pointer capture released for {}", self.owner);
    }
}

/// Capture surface that only counts registrations.
///
/// The desktop shell polls [`CaptureCounter::is_active`] each frame to decide
/// whether to forward pointer motion outside widget bounds.
#[derive(Debug, Default)]
pub struct CaptureCounter {
    active: AtomicUsize,
    acquired_total: AtomicUsize,
}

impl CaptureCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of captures currently held.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    pub fn is_active(&self) -> bool {
        self.active() > 0
    }

    /// Number of captures ever acquired.
    pub fn acquired_total(&self) -> usize {
        self.acquired_total.load(Ordering::SeqCst)
    }
}

impl CaptureSurface for CaptureCounter {
    fn attach(&self, _owner: &WidgetId) {
        self.active.fetch_add(1, Ordering::SeqCst);
        self.acquired_total.fetch_add(1, Ordering::SeqCst);
    }

    fn detach(&self, _owner: &WidgetId) {
        // Saturates at zero.
        let _ = self
            .active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_released_on_drop() {
        let counter = Arc::new(CaptureCounter::new());
        {
            let _capture = PointerCapture::acquire(counter.clone(), WidgetId::from("todo-1"));
            assert_eq!(counter.active(), 1);
        }
        assert_eq!(counter.active(), 0);
        assert_eq!(counter.acquired_total(), 1);
    }

    #[test]
    fn test_detach_saturates() {
        let counter = CaptureCounter::new();
        counter.detach(&WidgetId::from("x"));
        assert_eq!(counter.active(), 0);
    }
}
