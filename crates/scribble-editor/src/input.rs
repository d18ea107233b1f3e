//! Input abstraction layer.
//!
//! Normalizes DOM pointer events into a unified `InputEvent` enum consumed
//! by the surface controller. Coordinates are client-relative CSS pixels.

use scribble_core::Point;

/// A normalized input event from any pointing device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start, pen contact).
    PointerDown { x: f64, y: f64 },

    /// Pointer moved.
    PointerMove { x: f64, y: f64 },

    /// Pointer released.
    PointerUp { x: f64, y: f64 },
}

impl InputEvent {
    /// Map a DOM event type (`"pointerdown"`, …) to an event.
    /// Returns `None` for anything the surface does not listen to.
    pub fn from_dom(kind: &str, x: f64, y: f64) -> Option<Self> {
        match kind {
            "pointerdown" => Some(Self::PointerDown { x, y }),
            "pointermove" => Some(Self::PointerMove { x, y }),
            "pointerup" => Some(Self::PointerUp { x, y }),
            _ => None,
        }
    }

    pub fn position(&self) -> Point {
        match *self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                Point::new(x, y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_dom_maps_pointer_events() {
        assert_eq!(
            InputEvent::from_dom("pointerdown", 1.0, 2.0),
            Some(InputEvent::PointerDown { x: 1.0, y: 2.0 })
        );
        assert_eq!(
            InputEvent::from_dom("pointermove", 3.0, 4.0),
            Some(InputEvent::PointerMove { x: 3.0, y: 4.0 })
        );
        assert_eq!(
            InputEvent::from_dom("pointerup", 5.0, 6.0),
            Some(InputEvent::PointerUp { x: 5.0, y: 6.0 })
        );
        assert_eq!(InputEvent::from_dom("wheel", 0.0, 0.0), None);
    }

    #[test]
    fn position_extracts_coordinates() {
        let ev = InputEvent::PointerMove { x: 12.5, y: 40.0 };
        assert_eq!(ev.position(), Point::new(12.5, 40.0));
    }
}
