//! Rendering primitives (Cairo-based).
//!
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Surface`]: the raster the widget paints into, with its 2-D context state
//! - [`commit_segment`]: pen/eraser dispatch for a single pointer segment

pub mod color;
pub mod render;
pub mod surface;

pub use color::Color;
pub use render::{ERASER_RADIUS, Mark, commit_segment};
pub use surface::{Compositing, Pixel, Surface, SurfaceError};

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
