mod core;
mod pointer;

pub use core::{InteractionState, Segment};
