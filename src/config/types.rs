//! Configuration type definitions.

use crate::draw::Color;
use crate::draw::color::BLACK;
use crate::input::Tool;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stroke and surface settings for a drawing widget.
///
/// Read-only to the widget; a new value may be swapped in between strokes and
/// takes effect on the next committed segment. `width` and `height` are only
/// read when the surface is allocated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StrokeConfig {
    /// Active tool: "pen" draws lines, "eraser" clears to transparent
    #[serde(default)]
    pub mode: Tool,

    /// Stroke color - a named color (black, white, red, green, blue, yellow, orange,
    /// pink, transparent) or a hex string like "#ff0000"
    #[serde(default = "default_color")]
    pub color: String,

    /// Pen line width in surface units
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Surface width in pixels
    #[serde(default = "default_width")]
    pub width: i32,

    /// Surface height in pixels
    #[serde(default = "default_height")]
    pub height: i32,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            mode: Tool::default(),
            color: default_color(),
            line_width: default_line_width(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl StrokeConfig {
    /// Resolves the configured color string.
    ///
    /// Unknown colors fall back to black with a warning.
    pub fn stroke_color(&self) -> Color {
        Color::parse(&self.color).unwrap_or_else(|| {
            warn!("Unknown color '{}', using black", self.color);
            BLACK
        })
    }
}

fn default_color() -> String {
    "black".to_string()
}

fn default_line_width() -> f64 {
    5.0
}

fn default_width() -> i32 {
    400
}

fn default_height() -> i32 {
    400
}
