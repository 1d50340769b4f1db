//! Input handling and the pointer interaction state machine.
//!
//! This module turns raw pointer events (press, move, release, leave) into
//! segments that the widget commits to its surface. It holds no drawing state
//! of its own beyond whether a gesture is in progress and where it last was.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerEvent, PointerEventKind};
pub use state::{InteractionState, Segment};
pub use tool::Tool;
