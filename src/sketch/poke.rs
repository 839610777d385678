use std::time::Duration;

use crate::animation::curve::Curve;
use crate::animation::melody::Melody;
use crate::animation::movement::Movement;
use crate::foundation::core::Vec2;

const HALF: Duration = Duration::from_millis(100);

/// A short out-and-back jolt, e.g. a nose recoiling from a click.
#[derive(Clone, Debug)]
pub struct Poke {
    melody: Melody<[Movement<Vec2>; 2]>,
}

impl Default for Poke {
    /// Settled: both stages are zero-length at the origin.
    fn default() -> Self {
        Self {
            melody: Melody::new([
                Movement::new(Vec2::ZERO, Vec2::ZERO, Duration::ZERO),
                Movement::new(Vec2::ZERO, Vec2::ZERO, Duration::ZERO),
            ]),
        }
    }
}

impl Poke {
    /// Restart the jolt towards half of `offset`, replacing any jolt in progress.
    pub fn poke(&mut self, offset: Vec2) {
        let peak = offset / 2.0;
        self.melody = Melody::new([
            Movement::with_curve(Vec2::ZERO, peak, HALF, Curve::Quadratic),
            Movement::with_curve(peak, Vec2::ZERO, HALF, Curve::Quadratic),
        ]);
    }

    /// Displacement after advancing by `delta`.
    pub fn update(&mut self, delta: Duration) -> Vec2 {
        let mut displacement = Vec2::ZERO;
        self.melody.move_current(&mut displacement, delta);
        displacement
    }

    pub fn is_settled(&self) -> bool {
        self.melody.done()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/poke.rs"]
mod tests;
