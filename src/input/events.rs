//! Generic pointer event types delivered by the host.

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Primary button pressed over the surface
    Press,
    /// Pointer moved over the surface
    Move,
    /// Button released
    Release,
    /// Pointer left the surface bounds
    Leave,
}

/// A raw pointer event in device coordinates.
///
/// Coordinates are in the host's client space; the widget translates them
/// into surface-local points using the mount target's bounding rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, client_x: f64, client_y: f64) -> Self {
        Self {
            kind,
            client_x,
            client_y,
        }
    }

    pub fn press(client_x: f64, client_y: f64) -> Self {
        Self::new(PointerEventKind::Press, client_x, client_y)
    }

    pub fn moved(client_x: f64, client_y: f64) -> Self {
        Self::new(PointerEventKind::Move, client_x, client_y)
    }

    pub fn release(client_x: f64, client_y: f64) -> Self {
        Self::new(PointerEventKind::Release, client_x, client_y)
    }

    pub fn leave(client_x: f64, client_y: f64) -> Self {
        Self::new(PointerEventKind::Leave, client_x, client_y)
    }
}
