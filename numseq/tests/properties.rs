//! Randomized checks of the sequence and doubling laws

use numseq::{double_or_reject, produce, NumseqError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 500;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x6e75_6d73)
}

#[test]
fn non_positive_bound_is_empty() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let n: i64 = rng.gen_range(i64::MIN..=0);
        assert_eq!(produce(n).next(), None, "bound {n}");
    }
}

#[test]
fn positive_bound_counts_up() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let n: i32 = rng.gen_range(1..=2_000);
        let items: Vec<i32> = produce(n).collect();
        assert_eq!(items.len(), n as usize);
        assert!(items.iter().copied().eq(0..n));
    }
}

#[test]
fn non_negative_input_doubles() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let x: i64 = rng.gen_range(0..=i64::MAX / 2);
        assert_eq!(double_or_reject(x), Ok(2 * x));

        let y: f64 = rng.gen_range(0.0..1e12);
        assert_eq!(double_or_reject(y), Ok(2.0 * y));
    }
}

#[test]
fn negative_input_is_rejected() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let x: i32 = rng.gen_range(i32::MIN..0);
        let err = double_or_reject(x).unwrap_err();
        assert_eq!(err, NumseqError::Negative);
        assert_eq!(err.to_string(), "negative");

        let y: f64 = rng.gen_range(-1e12..-f64::EPSILON);
        assert_eq!(double_or_reject(y), Err(NumseqError::Negative));
    }
}

#[test]
fn zero_is_accepted() {
    assert_eq!(double_or_reject(0i8), Ok(0));
    assert_eq!(double_or_reject(0u128), Ok(0));
    assert_eq!(double_or_reject(0.0f32), Ok(0.0));
}

#[test]
fn documented_scenarios() {
    assert_eq!(produce(3).collect::<Vec<_>>(), [0, 1, 2]);
    assert_eq!(produce(0).collect::<Vec<i32>>(), Vec::<i32>::new());
    assert_eq!(double_or_reject(4), Ok(8));
    assert_eq!(double_or_reject(-1), Err(NumseqError::Negative));
    assert_eq!(double_or_reject(0), Ok(0));
}

#[test]
fn repeated_calls_are_independent() {
    let first: Vec<_> = produce(5).collect();
    let second: Vec<_> = produce(5).collect();
    assert_eq!(first, [0, 1, 2, 3, 4]);
    assert_eq!(first, second);
}
