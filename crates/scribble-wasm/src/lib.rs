//! WASM bridge for Scribble: mounts the drawing surface in the browser.
//!
//! Compiled via `wasm-pack build --target web` and loaded by `web/index.html`,
//! which calls [`mount`] once the module has initialized.

mod render2d;

use std::cell::RefCell;
use std::rc::Rc;

use scribble_core::{InteractionState, SketchConfig, ViewportSize};
use scribble_editor::input::InputEvent;
use scribble_editor::surface::SurfaceController;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent, Window};

/// Pointer events the surface listens to on the window.
const POINTER_EVENTS: [&str; 3] = ["pointerdown", "pointerup", "pointermove"];

/// Controller plus the context its ops are replayed onto.
struct SketchPad {
    ctx: CanvasRenderingContext2d,
    controller: SurfaceController,
}

impl SketchPad {
    fn dispatch(&mut self, event: &InputEvent) {
        let ops = self.controller.handle(event);
        render2d::paint_ops(&self.ctx, &ops);
    }

    fn clear(&mut self) {
        let ops = self.controller.clear();
        render2d::paint_ops(&self.ctx, &ops);
    }
}

/// Handle returned to JavaScript after mounting.
///
/// Listeners and the frame loop keep their own references to the pad, so
/// dropping this handle on the JS side does not unmount anything.
#[wasm_bindgen]
pub struct SketchHandle {
    pad: Rc<RefCell<SketchPad>>,
}

#[wasm_bindgen]
impl SketchHandle {
    /// Whether a drag is in progress.
    pub fn is_drawing(&self) -> bool {
        self.pad.borrow().controller.is_drawing()
    }

    pub fn brush_x(&self) -> f64 {
        self.pad.borrow().controller.state().brush.x
    }

    pub fn brush_y(&self) -> f64 {
        self.pad.borrow().controller.state().brush.y
    }

    pub fn width(&self) -> f64 {
        self.pad.borrow().controller.viewport().width
    }

    pub fn height(&self) -> f64 {
        self.pad.borrow().controller.viewport().height
    }

    /// Interaction state as JSON:
    /// `{"brushX":f64,"brushY":f64,"brushSize":f64,"mouseDown":bool}`
    pub fn state_json(&self) -> String {
        state_json(self.pad.borrow().controller.state())
    }

    /// Same effect as pressing the on-canvas button.
    pub fn clear(&self) {
        self.pad.borrow_mut().clear();
    }
}

// ─── Entry points ────────────────────────────────────────────────────────

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook_setup();
    console_logger_setup();
}

/// Create the full-window canvas with the default brush.
#[wasm_bindgen]
pub fn mount() -> Result<SketchHandle, JsValue> {
    initialize(SketchConfig::default())
}

/// Create the canvas with a JSON config, e.g. `{"brushSize":8,"inkColor":"navy"}`.
#[wasm_bindgen]
pub fn mount_with_config(config_json: &str) -> Result<SketchHandle, JsValue> {
    let config = SketchConfig::from_json(config_json).map_err(|e| setup_error(&e))?;
    initialize(config)
}

fn initialize(config: SketchConfig) -> Result<SketchHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| setup_error("no global `window`"))?;
    let document = window
        .document()
        .ok_or_else(|| setup_error("window has no document"))?;
    let body = document
        .body()
        .ok_or_else(|| setup_error("document has no body"))?;

    let viewport = ViewportSize::new(
        window_dimension(window.inner_width(), "innerWidth")?,
        window_dimension(window.inner_height(), "innerHeight")?,
    );

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| setup_error("created element is not a canvas"))?;
    let (width, height) = viewport.pixel_size();
    canvas.set_width(width);
    canvas.set_height(height);
    body.append_child(&canvas)?;

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| setup_error("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| setup_error("2d context has an unexpected type"))?;

    let controller = SurfaceController::with_config(viewport, config);
    render2d::paint_ops(&ctx, &controller.startup());

    let pad = Rc::new(RefCell::new(SketchPad { ctx, controller }));
    for kind in POINTER_EVENTS {
        listen(&window, kind, &pad)?;
    }
    request_frame(&window)?;

    log::info!("sketch surface mounted ({width}x{height})");
    Ok(SketchHandle { pad })
}

// ─── Event wiring ────────────────────────────────────────────────────────

/// Register a window listener that feeds `kind` events to the pad.
/// The closure lives for the rest of the page.
fn listen(window: &Window, kind: &'static str, pad: &Rc<RefCell<SketchPad>>) -> Result<(), JsValue> {
    let pad = Rc::clone(pad);
    let cb = Closure::<dyn FnMut(PointerEvent)>::new(move |e: PointerEvent| {
        let x = f64::from(e.client_x());
        let y = f64::from(e.client_y());
        let Some(event) = InputEvent::from_dom(kind, x, y) else {
            return;
        };
        match pad.try_borrow_mut() {
            Ok(mut pad) => pad.dispatch(&event),
            Err(_) => log::warn!("dropped {kind}: surface busy"),
        }
    });
    window.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Perpetual animation-frame hook. Each tick only schedules the next one;
/// all drawing happens in the pointer handlers.
fn request_frame(window: &Window) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let slot_for_cb = Rc::clone(&slot);
    let window_for_cb = window.clone();

    *slot.borrow_mut() = Some(Closure::new(move |_ts: f64| {
        if let Some(cb) = slot_for_cb.borrow().as_ref()
            && let Err(e) = window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref())
        {
            log::error!("failed to schedule next frame: {e:?}");
        }
    }));

    if let Some(cb) = slot.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn window_dimension(value: Result<JsValue, JsValue>, name: &str) -> Result<f64, JsValue> {
    value?
        .as_f64()
        .ok_or_else(|| setup_error(&format!("window.{name} is not a number")))
}

fn setup_error(msg: &str) -> JsValue {
    log::error!("sketch setup failed: {msg}");
    js_sys::Error::new(msg).into()
}

fn state_json(state: &InteractionState) -> String {
    serde_json::json!({
        "brushX": state.brush.x,
        "brushY": state.brush.y,
        "brushSize": state.brush_size,
        "mouseDown": state.mouse_down,
    })
    .to_string()
}

// ─── Panic hook and logger for WASM debugging ────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Scribble WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

fn console_logger_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"Scribble: logger already initialized".into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scribble_core::Point;

    #[test]
    fn state_json_reports_idle_state() {
        let json: serde_json::Value =
            serde_json::from_str(&state_json(&InteractionState::default())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "brushX": 0.0,
                "brushY": 0.0,
                "brushSize": 5.0,
                "mouseDown": false,
            })
        );
    }

    #[test]
    fn state_json_tracks_drag() {
        let state = InteractionState {
            brush: Point::new(250.0, 260.0),
            brush_size: 5.0,
            mouse_down: true,
        };
        let json: serde_json::Value = serde_json::from_str(&state_json(&state)).unwrap();
        assert_eq!(json["brushX"], 250.0);
        assert_eq!(json["brushY"], 260.0);
        assert_eq!(json["mouseDown"], true);
    }

    #[test]
    fn pointer_event_names_map_to_input() {
        for kind in POINTER_EVENTS {
            assert!(InputEvent::from_dom(kind, 0.0, 0.0).is_some(), "{kind}");
        }
    }
}
