//! Immediate-mode draw operations.
//!
//! The controller never touches a rendering context directly. It emits a
//! list of `DrawOp`s in paint order and the host replays them against its
//! 2D context (see `scribble-wasm`'s `render2d`).

use crate::button::ClearButton;
use kurbo::{Point, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Filled circle.
    Dot {
        center: Point,
        radius: f64,
        color: String,
    },
    /// Straight segment with round caps.
    Stroke {
        from: Point,
        to: Point,
        width: f64,
        color: String,
    },
    /// Reset a region to transparent.
    ClearRect(Rect),
    /// Paint the clear button affordance.
    Button(ClearButton),
}

impl DrawOp {
    /// Short name for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dot { .. } => "dot",
            Self::Stroke { .. } => "stroke",
            Self::ClearRect(_) => "clear",
            Self::Button(_) => "button",
        }
    }

    /// Whether this op puts ink on the surface.
    pub fn is_ink(&self) -> bool {
        matches!(self, Self::Dot { .. } | Self::Stroke { .. })
    }
}
