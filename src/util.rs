//! Geometry helpers for translating device coordinates into surface space.

/// Immutable point in surface-local coordinates (origin at the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen placement of the surface, in the same space as the raw pointer
/// coordinates (`client_x` / `client_y`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    /// Left edge in device coordinates
    pub left: f64,
    /// Top edge in device coordinates
    pub top: f64,
    /// Width in device units
    pub width: f64,
    /// Height in device units
    pub height: f64,
}

impl BoundingRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Converts raw device coordinates into a surface-local [`Point`] by
    /// subtracting the rect's top-left offset.
    pub fn to_local(&self, client_x: f64, client_y: f64) -> Point {
        Point::new(client_x - self.left, client_y - self.top)
    }
}
