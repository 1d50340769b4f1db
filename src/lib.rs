//! Freehand drawing surface with pen and eraser tools.
//!
//! The [`widget::DrawingSurface`] owns a Cairo raster, turns press/move/release/leave
//! pointer events into line segments (pen) or erased discs (eraser), and reads its
//! stroke settings from a [`config::StrokeConfig`].

pub mod config;
pub mod draw;
pub mod input;
pub mod util;
pub mod widget;

pub use config::{Config, StrokeConfig};
pub use widget::{DrawingSurface, FixedTarget, MountTarget};
