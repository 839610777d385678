//! melody animates values over time.
//!
//! A [`Movement`] interpolates one value from a start to an end over a fixed duration,
//! shaped by a [`Curve`]. A [`Melody`] chains movements (of the same or different value
//! types) into one animation: when a step overshoots the current stage, the leftover time
//! is applied to the next stage in the same call, so a melody lasts exactly the sum of its
//! stages no matter how irregular the frame deltas are. [`loop_`] and [`Looping`] restart a
//! finished motion with that leftover time to repeat without drift.
//!
//! Everything is driven by the caller once per frame with a [`Duration`](std::time::Duration);
//! nothing blocks, spawns or fails. Only loading a [`Score`] from JSON can return an error.
//!
//! ```
//! use std::time::Duration;
//! use melody::{Curve, Melody, Movement, loop_current};
//!
//! let half = Duration::from_millis(500);
//! let mut back_and_forth = Melody::new([
//!     Movement::with_curve(0.0f64, 1.0, half, Curve::Quadratic),
//!     Movement::with_curve(1.0f64, 0.0, half, Curve::Quadratic),
//! ]);
//!
//! let mut block = 0.0;
//! let wrapped = loop_current(&mut block, &mut back_and_forth, Duration::from_millis(1030));
//! assert!(wrapped);
//! assert_eq!(back_and_forth.stages()[0].elapsed(), Duration::from_millis(30));
//! ```
#![forbid(unsafe_code)]

mod animation;
mod foundation;

pub mod sketch;

pub use animation::curve::Curve;
pub use animation::looping::{Looping, loop_, loop_current, loop_with};
pub use animation::melody::{Melody, MelodyAdvance, Stages, UniformStages};
pub use animation::movement::{Advance, Motion, Movement, Stage};
pub use animation::score::{
    MAX_SAMPLED_FRAMES, Score, ScorePlayer, ScoreSample, ScoreStage, sample_score,
};
pub use foundation::core::{Fps, Lerp, Point, Vec2};
pub use foundation::error::{MelodyError, MelodyResult};
