//! Per-sketch state driven by the motion primitives.
//!
//! Each sketch owns its melodies outright and is updated with the frame delta; nothing here
//! lives in process-wide statics.

pub mod poke;
pub mod various_motion;
