//! Widget factory: fresh ids, canonical titles, default geometry.

use super::kind::WidgetKind;
use super::state::{DEFAULT_WIDGET_SIZE, MIN_WIDGET_SIZE, Widget, WidgetId};
use kurbo::{Point, Size};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Upper bound (exclusive) of the random offset given to added widgets.
pub const DEFAULT_PLACEMENT_RANGE: f64 = 200.0;

/// Creates widgets with default presentation metadata.
///
/// Added widgets land at a random offset in `[0, placement_range)` on both
/// axes. Nothing prevents two widgets from landing on the same spot.
#[derive(Debug, Clone)]
pub struct WidgetRegistry {
    default_size: Size,
    placement_range: f64,
    rng: StdRng,
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self {
            default_size: DEFAULT_WIDGET_SIZE,
            placement_range: DEFAULT_PLACEMENT_RANGE,
            rng: StdRng::from_entropy(),
        }
    }

    /// Registry with a fixed placement seed, for reproducible layouts.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    /// Size given to new widgets, floored at [`MIN_WIDGET_SIZE`] on both axes.
    pub fn set_default_size(&mut self, size: Size) {
        self.default_size = Size::new(size.width.max(MIN_WIDGET_SIZE), size.height.max(MIN_WIDGET_SIZE));
    }

    pub fn default_size(&self) -> Size {
        self.default_size
    }

    pub fn set_placement_range(&mut self, range: f64) {
        self.placement_range = range.max(0.0);
    }

    pub fn placement_range(&self) -> f64 {
        self.placement_range
    }

    /// Create a widget of `kind` at a random starting offset.
    pub fn create_default(&mut self, kind: WidgetKind) -> Widget {
        let position = self.random_position();
        self.create_at(kind, position)
    }

    /// Create a widget of `kind` at a fixed position.
    pub fn create_at(&mut self, kind: WidgetKind, position: Point) -> Widget {
        let id = WidgetId::new(format!("{}-{}", kind.as_str(), Uuid::new_v4().simple()));
        Widget::new(id, kind, kind.title(), position, self.default_size)
    }

    /// The four widgets a fresh dashboard starts with, in a 2x2 arrangement.
    pub fn initial_layout(&self) -> Vec<Widget> {
        let size = self.default_size;
        let slot = |kind: WidgetKind, title: &str, x: f64, y: f64| {
            Widget::new(
                WidgetId::new(format!("{}-1", kind.as_str())),
                kind,
                title,
                Point::new(x, y),
                size,
            )
        };
        vec![
            slot(WidgetKind::Todo, "My Tasks", 0.0, 0.0),
            slot(WidgetKind::Notes, "Quick Notes", 420.0, 0.0),
            slot(WidgetKind::Calendar, "Calendar", 0.0, 320.0),
            slot(WidgetKind::Files, "File Manager", 420.0, 320.0),
        ]
    }

    fn random_position(&mut self) -> Point {
        if self.placement_range <= 0.0 {
            return Point::ZERO;
        }
        let range = 0.0..self.placement_range;
        Point::new(
            self.rng.gen_range(range.clone()),
            self.rng.gen_range(range),
        )
    }
}
