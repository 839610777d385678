use std::time::Duration;

use crate::animation::melody::{Melody, UniformStages};
use crate::animation::movement::{Advance, Motion, Stage};

/// Restart `motion` whenever `drive` reports completion, feeding the overrun into the new
/// cycle so repeated playback does not drift.
///
/// `drive` performs the per-tick advance (and any writes into caller storage). Returns
/// whether a loop boundary was crossed.
pub fn loop_with<M, F>(motion: &mut M, delta: Duration, drive: F) -> bool
where
    M: Stage + ?Sized,
    F: FnOnce(&mut M, Duration) -> Advance,
{
    let step = drive(&mut *motion, delta);
    if step.is_running() {
        return false;
    }
    motion.reset();
    motion.advance(step.remaining);
    tracing::trace!(carried = ?step.remaining, "motion looped");
    true
}

/// Drive `motion` into `target`, restarting it with the leftover time when it completes.
///
/// The target keeps the value written by the completing step; the carried-over time is
/// only visible through the motion until the next call.
pub fn loop_<M: Motion>(target: &mut M::Value, motion: &mut M, delta: Duration) -> bool {
    loop_with(motion, delta, |motion, delta| motion.drive(target, delta))
}

/// [`loop_`] for a uniform melody driving a single target with its current stage.
pub fn loop_current<S: UniformStages>(
    target: &mut S::Item,
    melody: &mut Melody<S>,
    delta: Duration,
) -> bool {
    loop_with(melody, delta, |melody, delta| {
        melody.move_current(target, delta).into()
    })
}

/// Owns a motion and loops it forever, counting completed cycles.
#[derive(Clone, Debug)]
pub struct Looping<M> {
    motion: M,
    cycles: u64,
}

impl<M: Motion> Looping<M> {
    pub fn new(motion: M) -> Self {
        Self { motion, cycles: 0 }
    }

    /// Advance by `delta` into `target`; returns whether a cycle just ended.
    pub fn tick(&mut self, target: &mut M::Value, delta: Duration) -> bool {
        let looped = loop_(target, &mut self.motion, delta);
        if looped {
            self.cycles += 1;
        }
        looped
    }

    /// Number of completed cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn motion(&self) -> &M {
        &self.motion
    }

    pub fn motion_mut(&mut self) -> &mut M {
        &mut self.motion
    }

    pub fn into_inner(self) -> M {
        self.motion
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/looping.rs"]
mod tests;
