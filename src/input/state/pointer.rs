use crate::util::Point;
use log::debug;

use super::{InteractionState, Segment};

impl InteractionState {
    /// Processes a press at `point`.
    ///
    /// # Behavior
    /// - While Idle: starts tracking with `point` as the last sample
    /// - While already Tracking: re-anchors the gesture at `point` without
    ///   producing a segment between the old and new press points
    pub fn on_press(&mut self, point: Point) {
        if let InteractionState::Tracking { last_point } = self {
            debug!(
                "Press while tracking; re-anchoring from ({:.1}, {:.1}) to ({:.1}, {:.1})",
                last_point.x, last_point.y, point.x, point.y
            );
        }
        *self = InteractionState::Tracking { last_point: point };
    }

    /// Processes a move to `point`.
    ///
    /// # Returns
    /// - `Some(Segment)` from the previous sample to `point` while Tracking;
    ///   `point` becomes the new last sample
    /// - `None` while Idle
    pub fn on_move(&mut self, point: Point) -> Option<Segment> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Tracking { last_point } => {
                let segment = Segment {
                    prev: *last_point,
                    curr: point,
                };
                *last_point = point;
                Some(segment)
            }
        }
    }

    /// Processes a button release, ending any gesture in progress.
    pub fn on_release(&mut self) {
        self.finish("release");
    }

    /// Processes the pointer leaving the surface, ending any gesture in progress.
    pub fn on_leave(&mut self) {
        self.finish("leave");
    }

    fn finish(&mut self, reason: &str) {
        if self.is_drawing() {
            debug!("Gesture ended by {}", reason);
            *self = InteractionState::Idle;
        }
    }
}
