//! Deskboard Core Library
//!
//! Platform-agnostic core data structures and logic for the Deskboard widget canvas.

pub mod auth;
pub mod canvas;
pub mod capture;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod input;
pub mod interaction;
pub mod panels;
pub mod records;
pub mod richtext;
pub mod storage;
pub mod suggest;
pub mod widget;

pub use auth::{AuthError, Credentials, EntryRoute, IdentityProvider, MemoryIdentityProvider, UserIdentity, resolve_entry};
pub use canvas::{Canvas, CanvasEvent};
pub use capture::{CaptureCounter, CaptureSurface, PointerCapture};
pub use config::{ConfigError, DashboardConfig};
pub use content::{ContentDescriptor, Placeholder};
pub use dashboard::Dashboard;
pub use input::{InputState, KeyEvent, MouseButton, PointerEvent};
pub use interaction::{Interaction, InteractionKind};
pub use panels::{NotesPanel, PanelError, TodoPanel};
pub use richtext::RichDoc;
pub use storage::{FileStore, MemoryStore, NoteAutoSaver, NoteStore, StorageError, TaskStore};
pub use widget::{HitRegion, ResizeHandle, Widget, WidgetId, WidgetKind, WidgetPatch, WidgetRegistry};

#[cfg(test)]
pub(crate) mod testing {
    /// Minimal executor for the store futures, which never actually suspend.
    pub(crate) fn block_on<F: std::future::Future>(f: F) -> F::Output {
        use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

        fn dummy_raw_waker() -> RawWaker {
            fn no_op(_: *const ()) {}
            fn clone(_: *const ()) -> RawWaker {
                dummy_raw_waker()
            }
            static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
            RawWaker::new(std::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);

        loop {
            if let Poll::Ready(result) = f.as_mut().poll(&mut cx) {
                return result;
            }
        }
    }
}
