use std::time::Duration;

use crate::animation::curve::Curve;
use crate::animation::looping::{loop_current, loop_with};
use crate::animation::melody::Melody;
use crate::animation::movement::Movement;
use crate::foundation::core::{Point, Vec2};

const LEG: Duration = Duration::from_millis(500);

/// Units a block moves per unit of animated value.
pub const BLOCK_TRAVEL: f64 = 20.0;

fn leg(from: f64, to: f64) -> Movement<f64> {
    Movement::with_curve(from, to, LEG, Curve::Quadratic)
}

/// Two blocks looping forever: one back and forth along the diagonal, one around a square.
#[derive(Clone, Debug)]
pub struct VariousMotion {
    block: f64,
    block2: Vec2,
    back_and_forth: Melody<[Movement<f64>; 2]>,
    // x, y, x, y
    square_around: Melody<[Movement<f64>; 4]>,
    square_slots: [f64; 4],
}

impl Default for VariousMotion {
    fn default() -> Self {
        Self::new()
    }
}

impl VariousMotion {
    pub fn new() -> Self {
        Self {
            block: 0.0,
            block2: Vec2::ZERO,
            back_and_forth: Melody::new([leg(0.0, 1.0), leg(1.0, 0.0)]),
            square_around: Melody::new([leg(0.0, 1.0), leg(0.0, 1.0), leg(1.0, 0.0), leg(1.0, 0.0)]),
            square_slots: [0.0; 4],
        }
    }

    /// Advance both blocks by one frame. Returns which of them wrapped around.
    pub fn update(&mut self, delta: Duration) -> (bool, bool) {
        let diagonal = loop_current(&mut self.block, &mut self.back_and_forth, delta);

        let slots = &mut self.square_slots;
        let block2 = &mut self.block2;
        let square = loop_with(&mut self.square_around, delta, |melody, delta| {
            let step = melody.move_to(slots, delta);
            for index in step.updated.clone() {
                if index % 2 == 0 {
                    block2.x = slots[index];
                } else {
                    block2.y = slots[index];
                }
            }
            step.into()
        });

        (diagonal, square)
    }

    /// Progress of the diagonal block in `[0, 1]`.
    pub fn block(&self) -> f64 {
        self.block
    }

    /// Progress of the square block, per axis, in `[0, 1]`.
    pub fn block2(&self) -> Vec2 {
        self.block2
    }

    /// Top-left corner of the diagonal block.
    pub fn block_origin(&self) -> Point {
        Point::new(10.0, 10.0) + Vec2::new(self.block, self.block) * BLOCK_TRAVEL
    }

    /// Top-left corner of the square block, drawn below the diagonal one.
    pub fn block2_origin(&self) -> Point {
        Point::new(10.0, 40.0) + self.block2 * BLOCK_TRAVEL
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/various_motion.rs"]
mod tests;
