use std::time::Duration;

use crate::animation::curve::Curve;
use crate::foundation::core::Lerp;
use crate::foundation::math::{overrun, ratio};

/// Outcome of applying a time step to a [`Stage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    /// `true` while the stage still has time left to consume.
    pub success: bool,
    /// Portion of the step past the stage's end. Only meaningful when `success` is `false`.
    pub remaining: Duration,
}

impl Advance {
    /// The step was absorbed and the stage keeps going.
    pub fn running() -> Self {
        Self {
            success: true,
            remaining: Duration::ZERO,
        }
    }

    /// The stage reached its end with `remaining` left over.
    pub fn finished(remaining: Duration) -> Self {
        Self {
            success: false,
            remaining,
        }
    }

    /// Whether the stage is still in motion.
    pub fn is_running(self) -> bool {
        self.success
    }

    /// Whether the stage reached its end during this step.
    pub fn is_finished(self) -> bool {
        !self.success
    }
}

/// Anything that consumes time until it is done.
///
/// Object safe, so sequencers can drive heterogeneous stages through `&mut dyn Stage`.
pub trait Stage {
    /// Consume `delta`; see [`Advance`].
    fn advance(&mut self, delta: Duration) -> Advance;
    /// Whether all of this stage's time has been consumed.
    fn done(&self) -> bool;
    /// Rewind to the beginning.
    fn reset(&mut self);
}

/// A [`Stage`] that produces a value and can write it into caller-owned storage.
pub trait Motion: Stage {
    /// What the motion produces.
    type Value;

    /// Current value.
    fn value(&self) -> Self::Value;

    /// Advance by `delta` and write the resulting value(s) into `target`.
    fn drive(&mut self, target: &mut Self::Value, delta: Duration) -> Advance;
}

/// One time-bounded interpolation from `start` to `end`, shaped by a [`Curve`].
#[derive(Clone, Debug)]
pub struct Movement<T> {
    start: T,
    end: T,
    total: Duration,
    elapsed: Duration, // 0 <= elapsed <= total
    curve: Curve,
}

impl<T> Movement<T> {
    /// Linear movement over `total`.
    pub fn new(start: T, end: T, total: Duration) -> Self {
        Self::with_curve(start, end, total, Curve::Linear)
    }

    /// Movement over `total` shaped by `curve`.
    pub fn with_curve(start: T, end: T, total: Duration, curve: Curve) -> Self {
        Self {
            start,
            end,
            total,
            elapsed: Duration::ZERO,
            curve,
        }
    }

    /// Replace the curve.
    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Value at zero elapsed time.
    pub fn start(&self) -> &T {
        &self.start
    }

    /// Value once the full duration has elapsed.
    pub fn end(&self) -> &T {
        &self.end
    }

    /// Nominal duration; zero means instantaneous.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Time consumed so far, never more than [`Movement::total`].
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Shaped progress in `[0, 1]`; zero-length movements report `0`.
    pub fn progress(&self) -> f64 {
        self.curve.apply(ratio(self.elapsed, self.total))
    }

    /// Whether the elapsed time has reached the total.
    pub fn done(&self) -> bool {
        self.elapsed >= self.total
    }

    /// Add `delta` to the elapsed time, clamping at `total` and reporting any overrun.
    pub fn advance(&mut self, delta: Duration) -> Advance {
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.done() {
            let remaining = overrun(self.elapsed, self.total);
            self.elapsed = self.total;
            return Advance::finished(remaining);
        }
        Advance::running()
    }

    /// Rewind to `start`. Endpoints, duration and curve are untouched.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

impl<T: Lerp> Movement<T> {
    /// `start` interpolated towards `end` by the shaped progress.
    pub fn value(&self) -> T {
        T::lerp(&self.start, &self.end, self.progress())
    }

    /// Advance by `delta` and store the new value in `target`.
    ///
    /// Returns `true` while the movement continues and `false` once it has completed.
    pub fn move_to(&mut self, target: &mut T, delta: Duration) -> bool {
        let step = self.advance(delta);
        *target = self.value();
        step.is_running()
    }
}

impl<T> Stage for Movement<T> {
    fn advance(&mut self, delta: Duration) -> Advance {
        Movement::advance(self, delta)
    }

    fn done(&self) -> bool {
        Movement::done(self)
    }

    fn reset(&mut self) {
        Movement::reset(self);
    }
}

impl<T: Lerp> Motion for Movement<T> {
    type Value = T;

    fn value(&self) -> T {
        Movement::value(self)
    }

    fn drive(&mut self, target: &mut T, delta: Duration) -> Advance {
        let step = Movement::advance(self, delta);
        *target = Movement::value(self);
        step
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/movement.rs"]
mod tests;
