//! Translation of egui input into canvas events.

use deskboard_core::{KeyEvent, MouseButton, PointerEvent};
use egui::{Event, PointerButton, Pos2, Rect, Vec2};
use kurbo::Point;

/// Where the canvas sits in the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    pub rect: Rect,
}

impl CanvasFrame {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn to_canvas(&self, pos: Pos2) -> Point {
        Point::new((pos.x - self.rect.min.x) as f64, (pos.y - self.rect.min.y) as f64)
    }

    pub fn to_screen(&self, point: Point) -> Pos2 {
        self.rect.min + Vec2::new(point.x as f32, point.y as f32)
    }

    pub fn rect_to_screen(&self, rect: kurbo::Rect) -> Rect {
        Rect::from_min_max(
            self.to_screen(Point::new(rect.x0, rect.y0)),
            self.to_screen(Point::new(rect.x1, rect.y1)),
        )
    }
}

/// Canvas-bound input extracted from one frame of egui events.
#[derive(Debug, Default, PartialEq)]
pub struct CanvasInput {
    pub pointer: Vec<PointerEvent>,
    pub keys: Vec<KeyEvent>,
}

fn mouse_button(button: PointerButton) -> Option<MouseButton> {
    match button {
        PointerButton::Primary => Some(MouseButton::Left),
        PointerButton::Secondary => Some(MouseButton::Right),
        PointerButton::Middle => Some(MouseButton::Middle),
        PointerButton::Extra1 | PointerButton::Extra2 => None,
    }
}

/// Pick out the events the canvas cares about, in order.
///
/// Presses and motion outside the canvas are dropped unless a widget holds
/// pointer capture, in which case motion is forwarded wherever it happens.
/// Releases are always forwarded so an interaction can end off-canvas.
pub fn translate(events: &[Event], frame: CanvasFrame, captured: bool) -> CanvasInput {
    let mut input = CanvasInput::default();
    for event in events {
        match event {
            Event::PointerMoved(pos) if captured || frame.rect.contains(*pos) => {
                input.pointer.push(PointerEvent::Move {
                    position: frame.to_canvas(*pos),
                });
            }
            Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                let Some(button) = mouse_button(*button) else {
                    continue;
                };
                let position = frame.to_canvas(*pos);
                if *pressed {
                    if frame.rect.contains(*pos) {
                        input.pointer.push(PointerEvent::Down { position, button });
                    }
                } else {
                    input.pointer.push(PointerEvent::Up { position, button });
                }
            }
            Event::Key {
                key,
                pressed,
                repeat: false,
                ..
            } => {
                let name = key.name().to_string();
                input.keys.push(if *pressed {
                    KeyEvent::Pressed(name)
                } else {
                    KeyEvent::Released(name)
                });
            }
            _ => {}
        }
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Key, Modifiers, pos2};

    fn frame() -> CanvasFrame {
        CanvasFrame::new(Rect::from_min_max(pos2(0.0, 64.0), pos2(800.0, 600.0)))
    }

    fn button(x: f32, y: f32, pressed: bool) -> Event {
        Event::PointerButton {
            pos: pos2(x, y),
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_coordinates_are_canvas_relative() {
        let f = frame();
        assert_eq!(f.to_canvas(pos2(10.0, 74.0)), Point::new(10.0, 10.0));
        assert_eq!(f.to_screen(Point::new(10.0, 10.0)), pos2(10.0, 74.0));
    }

    #[test]
    fn test_press_outside_canvas_is_dropped() {
        let input = translate(&[button(10.0, 20.0, true), button(10.0, 20.0, false)], frame(), false);
        assert_eq!(
            input.pointer,
            [PointerEvent::Up {
                position: Point::new(10.0, -44.0),
                button: MouseButton::Left,
            }]
        );
    }

    #[test]
    fn test_motion_outside_needs_capture() {
        let events = [Event::PointerMoved(pos2(900.0, 100.0))];
        assert!(translate(&events, frame(), false).pointer.is_empty());
        assert_eq!(
            translate(&events, frame(), true).pointer,
            [PointerEvent::Move {
                position: Point::new(900.0, 36.0)
            }]
        );
    }

    #[test]
    fn test_keys_skip_repeats() {
        let key = |pressed, repeat| Event::Key {
            key: Key::Escape,
            physical_key: None,
            pressed,
            repeat,
            modifiers: Modifiers::NONE,
        };
        let input = translate(&[key(true, false), key(true, true), key(false, false)], frame(), false);
        assert_eq!(
            input.keys,
            [
                KeyEvent::Pressed("Escape".to_string()),
                KeyEvent::Released("Escape".to_string())
            ]
        );
    }
}
