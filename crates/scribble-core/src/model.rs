//! Core data model for the drawing surface.
//!
//! Both entities live for one page session and are only ever reset by a
//! reload: the viewport is captured once at setup, the interaction state is
//! mutated by the pointer handlers.

use kurbo::{Point, Rect};

/// Default brush radius in CSS pixels.
pub const DEFAULT_BRUSH_SIZE: f64 = 5.0;

/// The window's inner dimensions, captured once when the canvas is created.
///
/// The canvas pixel size always equals this; there is no resize handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The full drawing surface, origin at the top-left corner.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Canvas element dimensions. The DOM only accepts whole pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (to_pixels(self.width), to_pixels(self.height))
    }
}

fn to_pixels(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.round().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Brush position and drag flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    /// Most recent pointer position relevant to the last handled event.
    pub brush: Point,
    /// Dot radius; strokes are twice this wide.
    pub brush_size: f64,
    /// True between a pointer-down outside the clear button and the next
    /// pointer-up or clear.
    pub mouse_down: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(DEFAULT_BRUSH_SIZE)
    }
}

impl InteractionState {
    pub fn new(brush_size: f64) -> Self {
        Self {
            brush: Point::ZERO,
            brush_size,
            mouse_down: false,
        }
    }

    /// Width of a stroke segment.
    pub fn stroke_width(&self) -> f64 {
        self.brush_size * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn viewport_bounds_cover_whole_surface() {
        let vp = ViewportSize::new(1280.0, 720.0);
        assert_eq!(vp.bounds(), Rect::new(0.0, 0.0, 1280.0, 720.0));
    }

    #[test]
    fn pixel_size_rounds_and_clamps() {
        assert_eq!(ViewportSize::new(1024.4, 767.6).pixel_size(), (1024, 768));
        assert_eq!(ViewportSize::new(-5.0, f64::NAN).pixel_size(), (0, 0));
    }

    #[test]
    fn interaction_state_starts_idle() {
        let state = InteractionState::default();
        assert_eq!(state.brush, Point::ZERO);
        assert_eq!(state.brush_size, 5.0);
        assert!(!state.mouse_down);
        assert_eq!(state.stroke_width(), 10.0);
    }
}
