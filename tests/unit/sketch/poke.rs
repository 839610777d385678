use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn default_is_settled_at_origin() {
    let mut poke = Poke::default();
    assert!(poke.is_settled());
    assert_eq!(poke.update(ms(16)), Vec2::ZERO);
}

#[test]
fn jolt_goes_out_to_half_offset_and_back() {
    let mut poke = Poke::default();
    poke.poke(Vec2::new(8.0, -4.0));
    assert!(!poke.is_settled());

    assert_eq!(poke.update(ms(50)), Vec2::new(1.0, -0.5));
    assert_eq!(poke.update(ms(50)), Vec2::new(4.0, -2.0));
    assert_eq!(poke.update(ms(100)), Vec2::ZERO);
    assert!(poke.is_settled());
}

#[test]
fn poking_again_restarts() {
    let mut poke = Poke::default();
    poke.poke(Vec2::new(8.0, 0.0));
    poke.update(ms(150));
    poke.poke(Vec2::new(0.0, 8.0));
    assert_eq!(poke.update(ms(50)), Vec2::new(0.0, 1.0));
}
