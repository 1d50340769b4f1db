//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool decides what a pointer segment does to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Opaque straight line between consecutive pointer samples (default)
    #[default]
    Pen,
    /// Clears a round patch to transparent at the previous pointer sample
    Eraser,
}
