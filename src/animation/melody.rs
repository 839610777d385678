use std::ops::Range;
use std::time::Duration;

use crate::animation::movement::{Advance, Motion, Stage};
use crate::foundation::error::{MelodyError, MelodyResult};

/// Outcome of advancing a [`Melody`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MelodyAdvance {
    /// `true` while the melody still has time left to consume.
    pub success: bool,
    /// Overrun past the final stage. Only meaningful when `success` is `false`.
    pub remaining: Duration,
    /// Stage indices that received time during this advance.
    pub updated: Range<usize>,
}

impl MelodyAdvance {
    /// Whether the melody still has time left to consume.
    pub fn is_running(&self) -> bool {
        self.success
    }

    /// Whether the final stage completed during this advance.
    pub fn is_finished(&self) -> bool {
        !self.success
    }
}

impl From<MelodyAdvance> for Advance {
    fn from(step: MelodyAdvance) -> Self {
        Self {
            success: step.success,
            remaining: step.remaining,
        }
    }
}

/// A fixed-size ordered collection of stages that a [`Melody`] walks through.
///
/// Implemented for tuples of up to eight (possibly different) [`Motion`]s, for arrays and
/// for `Vec`s of one motion type.
pub trait Stages {
    /// Values of every stage, in stage order.
    type Values;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn stage(&self, index: usize) -> &dyn Stage;

    /// Mutable stage at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn stage_mut(&mut self, index: usize) -> &mut dyn Stage;

    fn values(&self) -> Self::Values;

    /// Write the value of every stage in `updated`, in index order, into the matching slot
    /// of `targets`. Other slots are left alone.
    fn write_values(&self, updated: Range<usize>, targets: &mut Self::Values);
}

/// [`Stages`] whose stages all produce the same value type.
pub trait UniformStages: Stages {
    type Item;

    /// Value of the stage at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn value_at(&self, index: usize) -> Self::Item;
}

fn out_of_range(index: usize, len: usize) -> ! {
    panic!("stage index {index} out of range for {len} stages")
}

macro_rules! impl_stages_for_tuple {
    ($len:expr; $($idx:tt => $m:ident),+) => {
        impl<$($m: Motion),+> Stages for ($($m,)+) {
            type Values = ($($m::Value,)+);

            fn len(&self) -> usize {
                $len
            }

            fn stage(&self, index: usize) -> &dyn Stage {
                match index {
                    $($idx => &self.$idx as &dyn Stage,)+
                    _ => out_of_range(index, $len),
                }
            }

            fn stage_mut(&mut self, index: usize) -> &mut dyn Stage {
                match index {
                    $($idx => &mut self.$idx as &mut dyn Stage,)+
                    _ => out_of_range(index, $len),
                }
            }

            fn values(&self) -> Self::Values {
                ($(self.$idx.value(),)+)
            }

            fn write_values(&self, updated: Range<usize>, targets: &mut Self::Values) {
                for index in updated {
                    match index {
                        $($idx => targets.$idx = self.$idx.value(),)+
                        _ => out_of_range(index, $len),
                    }
                }
            }
        }
    };
}

impl_stages_for_tuple!(1; 0 => A);
impl_stages_for_tuple!(2; 0 => A, 1 => B);
impl_stages_for_tuple!(3; 0 => A, 1 => B, 2 => C);
impl_stages_for_tuple!(4; 0 => A, 1 => B, 2 => C, 3 => D);
impl_stages_for_tuple!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
impl_stages_for_tuple!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
impl_stages_for_tuple!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
impl_stages_for_tuple!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);

impl<M: Motion, const N: usize> Stages for [M; N] {
    type Values = [M::Value; N];

    fn len(&self) -> usize {
        N
    }

    fn stage(&self, index: usize) -> &dyn Stage {
        &self[index]
    }

    fn stage_mut(&mut self, index: usize) -> &mut dyn Stage {
        &mut self[index]
    }

    fn values(&self) -> Self::Values {
        std::array::from_fn(|i| self[i].value())
    }

    fn write_values(&self, updated: Range<usize>, targets: &mut Self::Values) {
        for index in updated {
            targets[index] = self[index].value();
        }
    }
}

impl<M: Motion, const N: usize> UniformStages for [M; N] {
    type Item = M::Value;

    fn value_at(&self, index: usize) -> M::Value {
        self[index].value()
    }
}

impl<M: Motion> Stages for Vec<M> {
    type Values = Vec<M::Value>;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn stage(&self, index: usize) -> &dyn Stage {
        &self[index]
    }

    fn stage_mut(&mut self, index: usize) -> &mut dyn Stage {
        &mut self[index]
    }

    fn values(&self) -> Self::Values {
        self.iter().map(Motion::value).collect()
    }

    // A short `targets` grows to fit rather than panicking.
    fn write_values(&self, updated: Range<usize>, targets: &mut Self::Values) {
        for index in updated {
            let value = self[index].value();
            match targets.get_mut(index) {
                Some(slot) => *slot = value,
                None => {
                    while targets.len() < index {
                        targets.push(self[targets.len()].value());
                    }
                    targets.push(value);
                }
            }
        }
    }
}

impl<M: Motion> UniformStages for Vec<M> {
    type Item = M::Value;

    fn value_at(&self, index: usize) -> M::Value {
        self[index].value()
    }
}

/// An ordered chain of stages advanced as one animation.
///
/// Time past the end of one stage is carried into the next within the same advance, so the
/// total length of a melody is exactly the sum of its stages regardless of step size.
#[derive(Clone, Debug)]
pub struct Melody<S> {
    stages: S,
    current_index: usize, // < stages.len() unless empty
}

impl<S: Stages> Melody<S> {
    /// Wrap `stages`, starting at the first one.
    ///
    /// An empty collection is accepted and behaves as an already finished melody that hands
    /// every step straight back as overrun; see [`Melody::try_new`] to reject it instead.
    pub fn new(stages: S) -> Self {
        Self {
            stages,
            current_index: 0,
        }
    }

    /// Like [`Melody::new`], but rejects an empty collection.
    pub fn try_new(stages: S) -> MelodyResult<Self> {
        if stages.is_empty() {
            return Err(MelodyError::validation("Melody needs at least one stage"));
        }
        Ok(Self::new(stages))
    }

    /// The wrapped stages.
    pub fn stages(&self) -> &S {
        &self.stages
    }

    pub fn into_stages(self) -> S {
        self.stages
    }

    /// Index of the stage that receives the next advance.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Whether the final stage has consumed all of its time.
    pub fn done(&self) -> bool {
        match self.stages.len() {
            0 => true,
            len => self.stages.stage(len - 1).done(),
        }
    }

    /// Apply `delta` to the current stage, carrying any overrun into the following stages.
    ///
    /// The current index never moves past the last stage; once that stage completes, the
    /// overrun is handed back in [`MelodyAdvance::remaining`].
    pub fn advance(&mut self, delta: Duration) -> MelodyAdvance {
        let len = self.stages.len();
        if len == 0 {
            return MelodyAdvance {
                success: false,
                remaining: delta,
                updated: 0..0,
            };
        }

        let first = self.current_index;
        let mut delta = delta;
        loop {
            let step = self.stages.stage_mut(self.current_index).advance(delta);
            let updated = first..self.current_index + 1;
            if step.is_running() {
                return MelodyAdvance {
                    success: true,
                    remaining: Duration::ZERO,
                    updated,
                };
            }

            if self.current_index == len - 1 {
                tracing::trace!(remaining = ?step.remaining, "melody finished");
                return MelodyAdvance {
                    success: false,
                    remaining: step.remaining,
                    updated,
                };
            }

            self.current_index += 1;
            tracing::trace!(
                index = self.current_index,
                carried = ?step.remaining,
                "melody entered next stage"
            );

            if step.remaining.is_zero() {
                return MelodyAdvance {
                    success: true,
                    remaining: Duration::ZERO,
                    updated,
                };
            }
            delta = step.remaining;
        }
    }

    /// Values of every stage, not just the current one.
    pub fn value(&self) -> S::Values {
        self.stages.values()
    }

    /// Advance by `delta`, then write the value of every stage touched by this advance into
    /// the matching slot of `targets`.
    pub fn move_to(&mut self, targets: &mut S::Values, delta: Duration) -> MelodyAdvance {
        let step = self.advance(delta);
        self.stages.write_values(step.updated.clone(), targets);
        step
    }

    /// Rewind every stage and return to the first one.
    pub fn reset(&mut self) {
        for index in 0..self.stages.len() {
            self.stages.stage_mut(index).reset();
        }
        self.current_index = 0;
    }
}

impl<S: UniformStages> Melody<S> {
    /// Advance by `delta`, then write the value of the stage now current into `target`.
    pub fn move_current(&mut self, target: &mut S::Item, delta: Duration) -> MelodyAdvance {
        let step = self.advance(delta);
        if !self.stages.is_empty() {
            *target = self.stages.value_at(self.current_index);
        }
        step
    }

    /// Value of the stage currently receiving time.
    pub fn current_value(&self) -> Option<S::Item> {
        (!self.stages.is_empty()).then(|| self.stages.value_at(self.current_index))
    }
}

impl<S: Stages> Stage for Melody<S> {
    fn advance(&mut self, delta: Duration) -> Advance {
        Melody::advance(self, delta).into()
    }

    fn done(&self) -> bool {
        Melody::done(self)
    }

    fn reset(&mut self) {
        Melody::reset(self);
    }
}

impl<S: Stages> Motion for Melody<S> {
    type Value = S::Values;

    fn value(&self) -> S::Values {
        Melody::value(self)
    }

    fn drive(&mut self, target: &mut S::Values, delta: Duration) -> Advance {
        self.move_to(target, delta).into()
    }
}

/// Build a [`Melody`] over a tuple of motions.
///
/// ```
/// use std::time::Duration;
/// use melody::{Curve, Movement, melody};
///
/// let half = Duration::from_millis(500);
/// let mut m = melody!(
///     Movement::with_curve(0.0f64, 1.0, half, Curve::Quadratic),
///     Movement::with_curve(1.0f64, 0.0, half, Curve::Quadratic),
/// );
/// m.advance(Duration::from_millis(700));
/// assert_eq!(m.current_index(), 1);
/// ```
#[macro_export]
macro_rules! melody {
    ($($stage:expr),+ $(,)?) => {
        $crate::Melody::new(($($stage,)+))
    };
}

#[cfg(test)]
#[path = "../../tests/unit/animation/melody.rs"]
mod tests;
