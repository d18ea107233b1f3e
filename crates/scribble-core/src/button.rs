//! The on-canvas "Clear" button.
//!
//! The button has no state. It is a fixed region that gets repainted on top
//! of the ink after every draw, and a hit region checked on pointer down/up.
//!
//! The hit region (`x < 100 && y < 50`) is not the same as the painted frame
//! (`(3,3)`–`(103,53)`): the thin strips on the right and bottom edges of the
//! frame draw ink, and anything above/left of the canvas origin clears.

use crate::ops::DrawOp;
use kurbo::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearButton {
    /// Painted box, in canvas coordinates.
    pub frame: Rect,
    /// Exclusive upper limits of the hit region on each axis.
    pub hit_limit: Point,
    /// Baseline origin of the label.
    pub label_origin: Point,
}

impl Default for ClearButton {
    fn default() -> Self {
        Self::new()
    }
}

impl ClearButton {
    pub const LABEL: &'static str = "Clear";
    pub const FONT: &'static str = "20px sans-serif";
    pub const FILL: &'static str = "white";
    pub const BORDER: &'static str = "black";
    pub const BORDER_WIDTH: f64 = 2.0;
    pub const TEXT_COLOR: &'static str = "black";

    pub const fn new() -> Self {
        Self {
            frame: Rect::new(3.0, 3.0, 103.0, 53.0),
            hit_limit: Point::new(100.0, 50.0),
            label_origin: Point::new(25.0, 35.0),
        }
    }

    /// Whether a pointer at `p` activates the button.
    pub fn hit(&self, p: Point) -> bool {
        p.x < self.hit_limit.x && p.y < self.hit_limit.y
    }

    /// Ops that paint the button. Repeating them is idempotent.
    pub fn draw_ops(&self) -> Vec<DrawOp> {
        vec![DrawOp::Button(*self)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn frame_matches_fixed_bounds() {
        let button = ClearButton::new();
        assert_eq!(button.frame.origin(), Point::new(3.0, 3.0));
        assert_eq!(button.frame.width(), 100.0);
        assert_eq!(button.frame.height(), 50.0);
    }

    #[test]
    fn hit_inside_region() {
        let button = ClearButton::new();
        assert!(button.hit(Point::new(0.0, 0.0)));
        assert!(button.hit(Point::new(10.0, 10.0)));
        assert!(button.hit(Point::new(99.9, 49.9)));
        // Off-canvas coordinates still count
        assert!(button.hit(Point::new(-4.0, 20.0)));
    }

    #[test]
    fn hit_boundaries_are_exclusive() {
        let button = ClearButton::new();
        assert!(!button.hit(Point::new(100.0, 10.0)));
        assert!(!button.hit(Point::new(10.0, 50.0)));
        assert!(!button.hit(Point::new(100.0, 50.0)));
    }

    #[test]
    fn painted_edge_outside_hit_region() {
        let button = ClearButton::new();
        // Inside the painted frame but past the hit limit
        let p = Point::new(101.0, 20.0);
        assert!(button.frame.contains(p));
        assert!(!button.hit(p));
    }

    #[test]
    fn draw_ops_is_single_button_op() {
        let button = ClearButton::new();
        assert_eq!(button.draw_ops(), vec![DrawOp::Button(button)]);
        assert_eq!(button.draw_ops(), button.draw_ops());
    }
}
