//! The widget canvas: owns the widget collection and the interaction slot.

use crate::capture::{CaptureCounter, CaptureSurface, PointerCapture};
use crate::input::{InputState, KEY_ESCAPE, KeyEvent, MouseButton, PointerEvent};
use crate::interaction::{Interaction, InteractionKind};
use crate::widget::{
    HEADER_HEIGHT, HitRegion, MIN_WIDGET_SIZE, ResizeHandle, Widget, WidgetId, WidgetKind,
    WidgetPatch, WidgetRegistry, hit_test,
};
use kurbo::{Point, Rect, Size};
use std::sync::Arc;

/// Default viewport used until the shell reports its real size.
pub const DEFAULT_VIEWPORT: Size = Size::new(1280.0, 800.0);

/// What a pointer or key event did to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// Nothing changed.
    Ignored,
    DragStarted(WidgetId),
    ResizeStarted(WidgetId, ResizeHandle),
    Moved(WidgetId, Point),
    Resized(WidgetId, Size),
    /// The drag or resize on this widget finished or was cancelled.
    InteractionEnded(WidgetId),
    FullScreenToggled(WidgetId, bool),
    /// A press landed on a header control; the control handles it.
    ControlPressed(WidgetId),
    /// A single press on widget content.
    BodyPressed(WidgetId),
}

/// Free-form canvas of dashboard widgets.
///
/// Widgets render in insertion order, later ones on top. All mutations go
/// through [`Canvas::add`], [`Canvas::update`] and [`Canvas::remove`];
/// interactions compute geometry and apply it through `update`.
#[derive(Debug)]
pub struct Canvas {
    widgets: Vec<Widget>,
    registry: WidgetRegistry,
    /// The single in-flight drag or resize, if any.
    interaction: Option<Interaction>,
    capture_surface: Arc<dyn CaptureSurface>,
    input: InputState,
    viewport_size: Size,
    min_widget_size: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::with_registry(WidgetRegistry::new())
    }

    /// Create an empty canvas that builds widgets with `registry`.
    pub fn with_registry(registry: WidgetRegistry) -> Self {
        Self {
            widgets: Vec::new(),
            registry,
            interaction: None,
            capture_surface: Arc::new(CaptureCounter::new()),
            input: InputState::new(),
            viewport_size: DEFAULT_VIEWPORT,
            min_widget_size: MIN_WIDGET_SIZE,
        }
    }

    /// Create a canvas seeded with the registry's initial layout.
    pub fn with_initial_layout(registry: WidgetRegistry) -> Self {
        let mut canvas = Self::with_registry(registry);
        canvas.widgets = canvas.registry.initial_layout();
        canvas
    }

    /// Route pointer capture through `surface`.
    pub fn set_capture_surface(&mut self, surface: Arc<dyn CaptureSurface>) {
        self.cancel_interaction();
        self.capture_surface = surface;
    }

    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport_size = Size::new(width, height);
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Raise the resize floor. Values below [`MIN_WIDGET_SIZE`] are clamped up to it.
    pub fn set_min_widget_size(&mut self, min: f64) {
        self.min_widget_size = min.max(MIN_WIDGET_SIZE);
    }

    pub fn min_widget_size(&self) -> f64 {
        self.min_widget_size
    }

    pub fn registry_mut(&mut self) -> &mut WidgetRegistry {
        &mut self.registry
    }

    // --- Collection ---------------------------------------------------------

    /// Append a new default widget of `kind`.
    pub fn add(&mut self, kind: WidgetKind) -> WidgetId {
        let widget = self.registry.create_default(kind);
        let id = widget.id.clone();
        log::info!("Added {} widget {} at {:?}", kind, id, widget.position);
        self.widgets.push(widget);
        id
    }

    /// Append a prebuilt widget. Returns false if its id is already taken.
    pub fn insert(&mut self, widget: Widget) -> bool {
        if self.get(&widget.id).is_some() {
            log::warn!("Refusing duplicate widget id {}", widget.id);
            return false;
        }
        self.widgets.push(widget);
        true
    }

    /// Merge `patch` into the widget with `id`.
    ///
    /// Returns false, changing nothing, if no such widget exists. Positions
    /// are floored at zero and sizes at the minimum widget size. Entering
    /// full-screen cancels any interaction and leaves full-screen on every
    /// other widget; minimizing the target of a resize cancels the resize.
    pub fn update(&mut self, id: &WidgetId, patch: WidgetPatch) -> bool {
        let Some(index) = self.index_of(id) else {
            log::debug!("Ignoring update for unknown widget {}", id);
            return false;
        };

        let mut patch = patch;
        if let Some(position) = patch.position.as_mut() {
            position.x = position.x.max(0.0);
            position.y = position.y.max(0.0);
        }
        if let Some(size) = patch.size.as_mut() {
            size.width = size.width.max(self.min_widget_size);
            size.height = size.height.max(self.min_widget_size);
        }

        if let Some(full_screen) = patch.is_full_screen {
            if full_screen != self.widgets[index].is_full_screen {
                self.cancel_interaction();
            }
            if full_screen {
                for (i, widget) in self.widgets.iter_mut().enumerate() {
                    if i != index {
                        widget.is_full_screen = false;
                    }
                }
            }
        }
        if patch.is_minimized == Some(true) {
            let resizing_target = self
                .interaction
                .as_ref()
                .is_some_and(|i| i.is_resizing() && i.widget_id() == id);
            if resizing_target {
                self.cancel_interaction();
            }
        }

        self.widgets[index].apply(&patch);
        true
    }

    /// Remove the widget with `id`, cancelling its interaction if it had one.
    pub fn remove(&mut self, id: &WidgetId) -> Option<Widget> {
        let index = self.index_of(id)?;
        if self.interaction.as_ref().is_some_and(|i| i.widget_id() == id) {
            self.cancel_interaction();
        }
        let widget = self.widgets.remove(index);
        log::info!("Removed widget {}", id);
        Some(widget)
    }

    /// Widgets in insertion order.
    pub fn list(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn get(&self, id: &WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| &w.id == id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn index_of(&self, id: &WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| &w.id == id)
    }

    // --- Toggles ------------------------------------------------------------

    /// Flip the minimized flag. Geometry is untouched.
    pub fn toggle_minimized(&mut self, id: &WidgetId) -> bool {
        let Some(current) = self.get(id).map(|w| w.is_minimized) else {
            return false;
        };
        self.update(id, WidgetPatch::minimized(!current))
    }

    /// Flip the full-screen flag. Any interaction on the canvas is cancelled.
    pub fn toggle_full_screen(&mut self, id: &WidgetId) -> bool {
        let Some(current) = self.get(id).map(|w| w.is_full_screen) else {
            return false;
        };
        log::debug!("Full-screen {} -> {}", id, !current);
        self.update(id, WidgetPatch::full_screen(!current))
    }

    /// Leave full-screen on whichever widget holds it.
    pub fn exit_full_screen(&mut self) -> Option<WidgetId> {
        let id = self.full_screen_widget()?.id.clone();
        self.update(&id, WidgetPatch::full_screen(false));
        Some(id)
    }

    pub fn full_screen_widget(&self) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.is_full_screen)
    }

    // --- Interaction --------------------------------------------------------

    /// Start dragging `id` from `pointer`.
    ///
    /// Refused while another interaction is active or the widget is full-screen.
    pub fn begin_drag(&mut self, id: &WidgetId, pointer: Point) -> bool {
        if self.interaction.is_some() {
            return false;
        }
        let Some(widget) = self.get(id) else {
            return false;
        };
        if widget.is_full_screen {
            return false;
        }
        let capture = PointerCapture::acquire(self.capture_surface.clone(), id.clone());
        let interaction = Interaction::drag(widget, pointer, capture);
        log::debug!("Drag started on {} at {:?}", id, pointer);
        self.interaction = Some(interaction);
        true
    }

    /// Start resizing `id` with `handle` from `pointer`.
    ///
    /// Refused while another interaction is active or the widget is
    /// minimized or full-screen.
    pub fn begin_resize(&mut self, id: &WidgetId, handle: ResizeHandle, pointer: Point) -> bool {
        if self.interaction.is_some() {
            return false;
        }
        let Some(widget) = self.get(id) else {
            return false;
        };
        if !Self::offers_resize(widget) {
            return false;
        }
        let capture = PointerCapture::acquire(self.capture_surface.clone(), id.clone());
        let interaction = Interaction::resize(widget, handle, pointer, capture);
        log::debug!("Resize ({:?}) started on {} at {:?}", handle, id, pointer);
        self.interaction = Some(interaction);
        true
    }

    /// Feed a pointer position to the active interaction.
    pub fn pointer_move(&mut self, pointer: Point) -> CanvasEvent {
        let Some(interaction) = self.interaction.as_ref() else {
            return CanvasEvent::Ignored;
        };
        let id = interaction.widget_id().clone();
        let Some(widget) = self.get(&id) else {
            self.cancel_interaction();
            return CanvasEvent::InteractionEnded(id);
        };
        let patch = interaction.patch_for(pointer, widget.size, self.min_widget_size);
        self.update(&id, patch);

        match self.get(&id) {
            Some(widget) if self.is_dragging(&id) => CanvasEvent::Moved(id, widget.position),
            Some(widget) => CanvasEvent::Resized(id, widget.size),
            None => CanvasEvent::Ignored,
        }
    }

    /// Finish the active interaction, wherever the pointer is.
    pub fn pointer_up(&mut self) -> CanvasEvent {
        match self.cancel_interaction() {
            Some(id) => CanvasEvent::InteractionEnded(id),
            None => CanvasEvent::Ignored,
        }
    }

    /// Drop the active interaction, releasing its pointer capture.
    pub fn cancel_interaction(&mut self) -> Option<WidgetId> {
        let interaction = self.interaction.take()?;
        let id = interaction.widget_id().clone();
        log::debug!("Interaction on {} ended", id);
        Some(id)
    }

    pub fn active_interaction(&self) -> Option<&Interaction> {
        self.interaction.as_ref()
    }

    pub fn is_interacting(&self) -> bool {
        self.interaction.is_some()
    }

    pub fn is_dragging(&self, id: &WidgetId) -> bool {
        self.interaction
            .as_ref()
            .is_some_and(|i| i.is_dragging() && i.widget_id() == id)
    }

    pub fn is_resizing(&self, id: &WidgetId) -> bool {
        self.interaction
            .as_ref()
            .is_some_and(|i| i.is_resizing() && i.widget_id() == id)
    }

    /// Resize handles are offered only on normal (not minimized, not full-screen) widgets.
    pub fn offers_resize(widget: &Widget) -> bool {
        !widget.is_minimized && !widget.is_full_screen
    }

    // --- Layout -------------------------------------------------------------

    /// Rendered geometry of a widget.
    ///
    /// Full-screen fills the viewport; minimized collapses to the header.
    pub fn effective_rect(&self, id: &WidgetId) -> Option<Rect> {
        self.get(id).map(|w| self.frame_of(w))
    }

    fn frame_of(&self, widget: &Widget) -> Rect {
        if widget.is_full_screen {
            Rect::from_origin_size(Point::ZERO, self.viewport_size)
        } else if widget.is_minimized {
            Rect::from_origin_size(widget.position, Size::new(widget.size.width, HEADER_HEIGHT))
        } else {
            widget.rect()
        }
    }

    /// Widgets back to front.
    ///
    /// Insertion order, with the full-screen widget raised above the rest and
    /// an actively dragged widget raised above everything.
    pub fn render_order(&self) -> Vec<&Widget> {
        let mut order: Vec<&Widget> = self.widgets.iter().collect();
        if let Some(pos) = order.iter().position(|w| w.is_full_screen) {
            let widget = order.remove(pos);
            order.push(widget);
        }
        let dragged = self
            .interaction
            .as_ref()
            .filter(|i| i.is_dragging())
            .map(|i| i.widget_id().clone());
        if let Some(dragged) = dragged {
            if let Some(pos) = order.iter().position(|w| w.id == dragged) {
                let widget = order.remove(pos);
                order.push(widget);
            }
        }
        order
    }

    /// Topmost widget under `point` and the region hit.
    pub fn hit_test(&self, point: Point) -> Option<(WidgetId, HitRegion)> {
        self.render_order().into_iter().rev().find_map(|widget| {
            hit_test(self.frame_of(widget), point, Self::offers_resize(widget))
                .map(|region| (widget.id.clone(), region))
        })
    }

    // --- Event routing ------------------------------------------------------

    /// Route a raw pointer event through hit testing and the interaction slot.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> CanvasEvent {
        self.input.handle_pointer_event(event);
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => self.press(position),
            PointerEvent::Down { .. } => CanvasEvent::Ignored,
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up {
                button: MouseButton::Left,
                ..
            } => self.pointer_up(),
            PointerEvent::Up { .. } => CanvasEvent::Ignored,
        }
    }

    fn press(&mut self, position: Point) -> CanvasEvent {
        if self.interaction.is_some() {
            return CanvasEvent::Ignored;
        }
        let Some((id, region)) = self.hit_test(position) else {
            return CanvasEvent::Ignored;
        };
        match region {
            HitRegion::Header => {
                if self.begin_drag(&id, position) {
                    CanvasEvent::DragStarted(id)
                } else {
                    CanvasEvent::Ignored
                }
            }
            HitRegion::Resize(handle) => {
                if self.begin_resize(&id, handle, position) {
                    CanvasEvent::ResizeStarted(id, handle)
                } else {
                    CanvasEvent::Ignored
                }
            }
            HitRegion::HeaderControl => CanvasEvent::ControlPressed(id),
            HitRegion::Body if self.input.is_double_click() => {
                self.toggle_full_screen(&id);
                let full_screen = self.get(&id).is_some_and(|w| w.is_full_screen);
                CanvasEvent::FullScreenToggled(id, full_screen)
            }
            HitRegion::Body => CanvasEvent::BodyPressed(id),
        }
    }

    /// Route a key event. Escape leaves full-screen.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> CanvasEvent {
        self.input.handle_key_event(event);
        match event {
            KeyEvent::Pressed(key) if key == KEY_ESCAPE => match self.exit_full_screen() {
                Some(id) => CanvasEvent::FullScreenToggled(id, false),
                None => CanvasEvent::Ignored,
            },
            _ => CanvasEvent::Ignored,
        }
    }

    /// Kind of the active interaction, if any.
    pub fn interaction_kind(&self) -> Option<InteractionKind> {
        self.interaction.as_ref().map(|i| i.kind())
    }
}
