//! Brush configuration supplied by the host page.

use crate::model::DEFAULT_BRUSH_SIZE;
use serde::{Deserialize, Serialize};

/// Tunables for the drawing surface.
///
/// Every field has a default, so a page can pass `{}` or only the keys it
/// wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SketchConfig {
    /// Dot radius in CSS pixels. Strokes are drawn twice as wide.
    pub brush_size: f64,
    /// CSS color used for dots and strokes.
    pub ink_color: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            brush_size: DEFAULT_BRUSH_SIZE,
            ink_color: "black".to_string(),
        }
    }
}

impl SketchConfig {
    /// Parse and validate a JSON config object.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("invalid sketch config: {e}"))?;
        config.validate()?;
        log::debug!("sketch config: {config:?}");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.brush_size.is_finite() || self.brush_size <= 0.0 {
            return Err(format!(
                "brush size must be a positive number, got {}",
                self.brush_size
            ));
        }
        if self.ink_color.trim().is_empty() {
            return Err("ink color must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SketchConfig::from_json("{}").unwrap();
        assert_eq!(config, SketchConfig::default());
        assert_eq!(config.brush_size, 5.0);
        assert_eq!(config.ink_color, "black");
    }

    #[test]
    fn partial_override() {
        let config = SketchConfig::from_json(r#"{"brushSize": 8}"#).unwrap();
        assert_eq!(config.brush_size, 8.0);
        assert_eq!(config.ink_color, "black");

        let config = SketchConfig::from_json(r##"{"inkColor": "#c0392b"}"##).unwrap();
        assert_eq!(config.ink_color, "#c0392b");
    }

    #[test]
    fn rejects_bad_brush_size() {
        let err = SketchConfig::from_json(r#"{"brushSize": 0}"#).unwrap_err();
        assert!(err.contains("brush size"), "unexpected error: {err}");
        assert!(SketchConfig::from_json(r#"{"brushSize": -3.5}"#).is_err());
    }

    #[test]
    fn rejects_blank_color_and_malformed_json() {
        assert!(SketchConfig::from_json(r#"{"inkColor": "  "}"#).is_err());
        let err = SketchConfig::from_json("{brushSize: 4").unwrap_err();
        assert!(err.starts_with("invalid sketch config"), "unexpected error: {err}");
    }
}
