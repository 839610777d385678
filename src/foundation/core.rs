use std::time::Duration;

use crate::foundation::error::{MelodyError, MelodyResult};

pub use kurbo::{Point, Vec2};

/// Values that can be linearly interpolated between two endpoints.
///
/// `t == 0.0` must return `a` and `t == 1.0` must return `b`, exactly.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` by `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a * (1.0 - t) + b * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        <f64 as Lerp>::lerp(&f64::from(*a), &f64::from(*b), t) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(
            <f64 as Lerp>::lerp(&a.x, &b.x, t),
            <f64 as Lerp>::lerp(&a.y, &b.y, t),
        )
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(
            <f64 as Lerp>::lerp(&a.x, &b.x, t),
            <f64 as Lerp>::lerp(&a.y, &b.y, t),
        )
    }
}

/// Frame rate as a rational `num / den` frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator, frames.
    pub num: u32,
    /// Denominator, seconds. Must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a frame rate, rejecting zero parts.
    pub fn new(num: u32, den: u32) -> MelodyResult<Self> {
        if den == 0 {
            return Err(MelodyError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(MelodyError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Wall-clock length of one frame, truncated to whole nanoseconds.
    pub fn frame_duration(self) -> Duration {
        Duration::from_nanos(1_000_000_000 * u64::from(self.den) / u64::from(self.num))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
