use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn blocks_follow_their_paths_and_wrap() {
    let mut sketch = VariousMotion::new();
    let mut diagonal_wraps = Vec::new();
    let mut square_wraps = Vec::new();

    for frame in 1..=80 {
        let (diagonal, square) = sketch.update(ms(25));
        if diagonal {
            diagonal_wraps.push(frame);
        }
        if square {
            square_wraps.push(frame);
        }

        match frame {
            20 => {
                assert_eq!(sketch.block(), 1.0);
                assert_eq!(sketch.block2(), Vec2::new(1.0, 0.0));
                assert_eq!(sketch.block_origin(), Point::new(30.0, 30.0));
            }
            40 => assert_eq!(sketch.block2(), Vec2::new(1.0, 1.0)),
            60 => assert_eq!(sketch.block2(), Vec2::new(0.0, 1.0)),
            80 => assert_eq!(sketch.block2(), Vec2::new(0.0, 0.0)),
            _ => {}
        }
        assert!((0.0..=1.0).contains(&sketch.block()));
    }

    assert_eq!(diagonal_wraps, vec![40, 80]);
    assert_eq!(square_wraps, vec![80]);
}

#[test]
fn large_frame_skips_do_not_lose_time() {
    let mut coarse = VariousMotion::new();
    let mut fine = VariousMotion::new();
    coarse.update(ms(700));
    for _ in 0..28 {
        fine.update(ms(25));
    }
    assert_eq!(coarse.block(), fine.block());
    assert_eq!(coarse.block2(), fine.block2());
}
