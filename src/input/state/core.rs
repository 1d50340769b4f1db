//! Interaction state machine for a single pointer gesture.

use crate::util::Point;

/// Pair of consecutive pointer samples to be committed as one line or disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Sample the pointer was at before this move
    pub prev: Point,
    /// Sample delivered by this move
    pub curr: Point,
}

/// Current gesture state.
///
/// Tracking carries the last sample explicitly, so a segment can only be
/// produced while a gesture is live and a previous point exists. A point at
/// the surface origin is an ordinary point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No gesture in progress; moves are ignored
    #[default]
    Idle,
    /// Button held down over the surface
    Tracking {
        /// Most recent sample of the gesture
        last_point: Point,
    },
}

impl InteractionState {
    /// Returns `true` while a gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self, InteractionState::Tracking { .. })
    }

    /// Most recent sample of the current gesture, if any.
    pub fn last_point(&self) -> Option<Point> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Tracking { last_point } => Some(*last_point),
        }
    }
}
