pub mod button;
pub mod config;
pub mod model;
pub mod ops;

pub use button::ClearButton;
pub use config::SketchConfig;
pub use model::{InteractionState, ViewportSize};
pub use ops::DrawOp;

// Re-export kurbo geometry so downstream crates don't need a direct dependency
pub use kurbo::{Point, Rect};
