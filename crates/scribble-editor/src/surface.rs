//! Drawing surface controller.
//!
//! Owns the viewport, the brush/drag state, and the clear button, and
//! translates `InputEvent`s into `DrawOp`s. Every handler runs to completion
//! and returns its ops in paint order; the host replays them immediately.
//!
//! | Event | Inside clear region | Elsewhere |
//! |-------|--------------------|-----------|
//! | down  | Clear | start drag, dot |
//! | up    | Clear | end drag, dot |
//! | move  | stroke if dragging | stroke if dragging |

use crate::input::InputEvent;
use scribble_core::{ClearButton, DrawOp, InteractionState, Point, SketchConfig, ViewportSize};

pub struct SurfaceController {
    viewport: ViewportSize,
    state: InteractionState,
    button: ClearButton,
    ink_color: String,
}

impl SurfaceController {
    pub fn new(viewport: ViewportSize) -> Self {
        Self::with_config(viewport, SketchConfig::default())
    }

    pub fn with_config(viewport: ViewportSize, config: SketchConfig) -> Self {
        Self {
            viewport,
            state: InteractionState::new(config.brush_size),
            button: ClearButton::new(),
            ink_color: config.ink_color,
        }
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn button(&self) -> &ClearButton {
        &self.button
    }

    pub fn is_drawing(&self) -> bool {
        self.state.mouse_down
    }

    /// Ops painted once right after the canvas is attached.
    pub fn startup(&self) -> Vec<DrawOp> {
        self.draw_clear_button()
    }

    pub fn handle(&mut self, event: &InputEvent) -> Vec<DrawOp> {
        match *event {
            InputEvent::PointerDown { x, y } => self.pointer_down(Point::new(x, y)),
            InputEvent::PointerUp { x, y } => self.pointer_up(Point::new(x, y)),
            InputEvent::PointerMove { x, y } => self.pointer_move(Point::new(x, y)),
        }
    }

    pub fn pointer_down(&mut self, p: Point) -> Vec<DrawOp> {
        if self.button.hit(p) {
            return self.clear();
        }
        log::debug!("drag start at ({}, {})", p.x, p.y);
        self.state.mouse_down = true;
        self.state.brush = p;
        self.draw_dot(p)
    }

    /// Same hit test as pointer down: releasing over the button clears even
    /// when the drag started elsewhere.
    pub fn pointer_up(&mut self, p: Point) -> Vec<DrawOp> {
        if self.button.hit(p) {
            return self.clear();
        }
        if self.state.mouse_down {
            log::debug!("drag end at ({}, {})", p.x, p.y);
        }
        self.state.mouse_down = false;
        self.state.brush = p;
        self.draw_dot(p)
    }

    /// No hit test here, so a drag through the button inks over it until the
    /// button is repainted at the end of the op list.
    pub fn pointer_move(&mut self, p: Point) -> Vec<DrawOp> {
        if !self.state.mouse_down {
            return Vec::new();
        }
        let from = self.state.brush;
        let ops = self.draw_stroke(from, p);
        self.state.brush = p;
        ops
    }

    pub fn draw_dot(&self, center: Point) -> Vec<DrawOp> {
        let mut ops = vec![DrawOp::Dot {
            center,
            radius: self.state.brush_size,
            color: self.ink_color.clone(),
        }];
        ops.extend(self.draw_clear_button());
        ops
    }

    pub fn draw_stroke(&self, from: Point, to: Point) -> Vec<DrawOp> {
        let mut ops = vec![DrawOp::Stroke {
            from,
            to,
            width: self.state.stroke_width(),
            color: self.ink_color.clone(),
        }];
        ops.extend(self.draw_clear_button());
        ops
    }

    pub fn clear(&mut self) -> Vec<DrawOp> {
        log::debug!("clear");
        self.state.mouse_down = false;
        let mut ops = vec![DrawOp::ClearRect(self.viewport.bounds())];
        ops.extend(self.draw_clear_button());
        ops
    }

    pub fn draw_clear_button(&self) -> Vec<DrawOp> {
        self.button.draw_ops()
    }
}
