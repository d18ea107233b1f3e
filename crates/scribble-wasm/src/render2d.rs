//! Canvas2D replay of `DrawOp`s.
//!
//! Each op maps onto the immediate-mode calls of `CanvasRenderingContext2d`.
//! Styles are set per op, so replay order is the only state that matters.

use scribble_core::{ClearButton, DrawOp, Point, Rect};
use web_sys::CanvasRenderingContext2d;

/// Paint a batch of ops in order.
pub fn paint_ops(ctx: &CanvasRenderingContext2d, ops: &[DrawOp]) {
    for op in ops {
        paint_op(ctx, op);
    }
}

pub fn paint_op(ctx: &CanvasRenderingContext2d, op: &DrawOp) {
    log::trace!("PAINT {}", op.label());
    match op {
        DrawOp::Dot {
            center,
            radius,
            color,
        } => draw_dot(ctx, *center, *radius, color),
        DrawOp::Stroke {
            from,
            to,
            width,
            color,
        } => draw_stroke(ctx, *from, *to, *width, color),
        DrawOp::ClearRect(rect) => clear_rect(ctx, *rect),
        DrawOp::Button(button) => draw_button(ctx, button),
    }
}

// ─── Drawing primitives ─────────────────────────────────────────────────

fn draw_dot(ctx: &CanvasRenderingContext2d, center: Point, radius: f64, color: &str) {
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    let _ = ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
    ctx.fill();
    ctx.close_path();
}

fn draw_stroke(ctx: &CanvasRenderingContext2d, from: Point, to: Point, width: f64, color: &str) {
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.set_line_cap("round");
    ctx.set_line_width(width);
    ctx.set_stroke_style_str(color);
    ctx.stroke();
    ctx.close_path();
}

fn clear_rect(ctx: &CanvasRenderingContext2d, rect: Rect) {
    ctx.clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
}

fn draw_button(ctx: &CanvasRenderingContext2d, button: &ClearButton) {
    let frame = button.frame;

    // Box
    ctx.begin_path();
    ctx.rect(frame.x0, frame.y0, frame.width(), frame.height());
    ctx.set_fill_style_str(ClearButton::FILL);
    ctx.fill();
    ctx.set_line_width(ClearButton::BORDER_WIDTH);
    ctx.set_stroke_style_str(ClearButton::BORDER);
    ctx.stroke();
    ctx.close_path();

    // Label
    ctx.begin_path();
    ctx.set_font(ClearButton::FONT);
    ctx.set_fill_style_str(ClearButton::TEXT_COLOR);
    let _ = ctx.fill_text(
        ClearButton::LABEL,
        button.label_origin.x,
        button.label_origin.y,
    );
    ctx.close_path();
}
