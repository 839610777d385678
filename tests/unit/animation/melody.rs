use super::*;
use crate::animation::curve::Curve;
use crate::animation::movement::Movement;
use crate::foundation::core::Vec2;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn up_down(curve: Curve) -> Melody<(Movement<f64>, Movement<f64>)> {
    Melody::new((
        Movement::with_curve(0.0, 1.0, ms(500), curve),
        Movement::with_curve(1.0, 0.0, ms(500), curve),
    ))
}

#[test]
fn overrun_carries_into_next_stage() {
    let mut m = up_down(Curve::Quadratic);
    let step = m.advance(ms(700));

    assert!(step.is_running());
    assert_eq!(step.remaining, Duration::ZERO);
    assert_eq!(step.updated, 0..2);
    assert_eq!(m.current_index(), 1);
    assert_eq!(m.stages().0.elapsed(), ms(500));
    assert!(m.stages().0.done());
    assert_eq!(m.stages().1.elapsed(), ms(200));
    assert!(!m.stages().1.done());

    let (a, b) = m.value();
    assert_eq!(a, 1.0);
    let expected = <f64 as crate::foundation::core::Lerp>::lerp(&1.0, &0.0, Curve::Quadratic.apply(0.4));
    assert!((b - expected).abs() < 1e-12);
}

#[test]
fn step_within_stage_touches_only_current() {
    let mut m = up_down(Curve::Linear);
    let step = m.advance(ms(100));
    assert_eq!(step.updated, 0..1);
    assert_eq!(m.current_index(), 0);
}

#[test]
fn exact_stage_boundary_moves_index_without_touching_next() {
    let mut m = up_down(Curve::Linear);
    let step = m.advance(ms(500));
    assert!(step.is_running());
    assert_eq!(step.updated, 0..1);
    assert_eq!(m.current_index(), 1);
    assert_eq!(m.stages().1.elapsed(), Duration::ZERO);
}

#[test]
fn one_step_can_cross_several_stages() {
    let mut m = Melody::new([
        Movement::new(0.0f64, 1.0, ms(100)),
        Movement::new(1.0, 2.0, ms(100)),
        Movement::new(2.0, 3.0, ms(100)),
        Movement::new(3.0, 4.0, ms(100)),
    ]);
    let step = m.advance(ms(250));
    assert_eq!(step.updated, 0..3);
    assert_eq!(m.current_index(), 2);
    assert_eq!(m.current_value(), Some(2.5));
}

#[test]
fn last_stage_hands_back_overrun_and_index_stays() {
    let mut m = up_down(Curve::Linear);
    m.advance(ms(900));
    let step = m.advance(ms(250));
    assert!(step.is_finished());
    assert_eq!(step.remaining, ms(150));
    assert_eq!(step.updated, 1..2);
    assert_eq!(m.current_index(), 1);
    assert!(m.done());

    let again = m.advance(ms(10));
    assert!(again.is_finished());
    assert_eq!(again.remaining, ms(10));
    assert_eq!(m.current_index(), 1);
}

#[test]
fn done_tracks_only_the_final_stage() {
    let mut m = up_down(Curve::Linear);
    m.advance(ms(600));
    assert!(m.stages().0.done());
    assert!(!m.done());
    m.advance(ms(399));
    assert!(!m.done());
    m.advance(ms(1));
    assert!(m.done());
}

#[test]
fn zero_length_stages_are_skipped_by_overrun() {
    let mut m = Melody::new((
        Movement::new(0.0f64, 1.0, ms(100)),
        Movement::new(5.0f64, 5.0, Duration::ZERO),
        Movement::new(Vec2::ZERO, Vec2::new(10.0, 0.0), ms(100)),
    ));
    let step = m.advance(ms(150));
    assert!(step.is_running());
    assert_eq!(step.updated, 0..3);
    assert_eq!(m.current_index(), 2);
    assert_eq!(m.value().2, Vec2::new(5.0, 0.0));
}

#[test]
fn move_to_writes_only_updated_slots() {
    let mut m = Melody::new([
        Movement::new(0.0f64, 1.0, ms(100)),
        Movement::new(1.0, 2.0, ms(100)),
        Movement::new(2.0, 3.0, ms(100)),
    ]);
    let mut targets = [-1.0; 3];

    let step = m.move_to(&mut targets, ms(50));
    assert_eq!(step.updated, 0..1);
    assert_eq!(targets, [0.5, -1.0, -1.0]);

    let step = m.move_to(&mut targets, ms(100));
    assert_eq!(step.updated, 0..2);
    assert_eq!(targets, [1.0, 1.5, -1.0]);
}

#[test]
fn move_to_heterogeneous_tuple() {
    let mut m = Melody::new((
        Movement::new(0.0f32, 2.0, ms(100)),
        Movement::new(Vec2::ZERO, Vec2::new(4.0, 4.0), ms(100)),
    ));
    let mut targets = (0.0f32, Vec2::new(-1.0, -1.0));
    m.move_to(&mut targets, ms(50));
    assert_eq!(targets, (1.0, Vec2::new(-1.0, -1.0)));
    m.move_to(&mut targets, ms(100));
    assert_eq!(targets, (2.0, Vec2::new(2.0, 2.0)));
}

#[test]
fn move_current_writes_stage_now_current() {
    let mut m = Melody::new([
        Movement::with_curve(Vec2::ZERO, Vec2::new(8.0, 0.0), ms(100), Curve::Linear),
        Movement::with_curve(Vec2::new(8.0, 0.0), Vec2::ZERO, ms(100), Curve::Linear),
    ]);
    let mut poke = Vec2::new(99.0, 99.0);
    m.move_current(&mut poke, ms(50));
    assert_eq!(poke, Vec2::new(4.0, 0.0));
    m.move_current(&mut poke, ms(75));
    assert_eq!(poke, Vec2::new(6.0, 0.0));
    let step = m.move_current(&mut poke, ms(500));
    assert!(step.is_finished());
    assert_eq!(poke, Vec2::ZERO);
}

#[test]
fn reset_is_idempotent() {
    let mut m = up_down(Curve::Cubic);
    m.advance(ms(800));
    m.reset();
    assert_eq!(m.current_index(), 0);
    assert_eq!(m.stages().0.elapsed(), Duration::ZERO);
    assert_eq!(m.stages().1.elapsed(), Duration::ZERO);
    m.reset();
    assert_eq!(m.current_index(), 0);
    assert_eq!(m.value(), (0.0, 1.0));
}

#[test]
fn total_length_is_additive_regardless_of_step() {
    for step_ms in [1u64, 7, 16, 33, 100, 333] {
        let mut m = up_down(Curve::Linear);
        let mut elapsed = Duration::ZERO;
        loop {
            let step = m.advance(ms(step_ms));
            if step.is_finished() {
                elapsed += ms(step_ms) - step.remaining;
                break;
            }
            elapsed += ms(step_ms);
        }
        assert_eq!(elapsed, ms(1000), "step {step_ms}ms");
    }
}

#[test]
fn melodies_nest() {
    let inner = Melody::new([
        Movement::new(0.0f64, 1.0, ms(100)),
        Movement::new(1.0, 0.0, ms(100)),
    ]);
    let mut outer = Melody::new((inner, Movement::new(0.0f64, 10.0, ms(100))));
    outer.advance(ms(250));
    assert_eq!(outer.current_index(), 1);
    let (inner_values, tail) = outer.value();
    assert_eq!(inner_values, [1.0, 0.0]);
    assert_eq!(tail, 5.0);
}

#[test]
fn empty_melody_is_finished() {
    let mut m: Melody<Vec<Movement<f64>>> = Melody::new(Vec::new());
    assert!(m.done());
    let step = m.advance(ms(5));
    assert!(step.is_finished());
    assert_eq!(step.remaining, ms(5));
    assert_eq!(step.updated, 0..0);
    assert_eq!(m.current_value(), None);
    assert!(Melody::<Vec<Movement<f64>>>::try_new(Vec::new()).is_err());
}

#[test]
fn vec_targets_grow_to_fit() {
    let mut m = Melody::try_new(vec![
        Movement::new(0.0f64, 1.0, ms(100)),
        Movement::new(1.0, 2.0, ms(100)),
    ])
    .unwrap();
    let mut targets = Vec::new();
    m.move_to(&mut targets, ms(150));
    assert_eq!(targets, vec![1.0, 1.5]);
}

#[test]
fn macro_builds_tuple_melody() {
    let mut m = crate::melody!(
        Movement::new(0.0f64, 1.0, ms(10)),
        Movement::new(1.0f64, 0.0, ms(10)),
    );
    m.advance(ms(15));
    assert_eq!(m.current_index(), 1);
}
