// File: crates/axis-core/tests/equality.rs
// Purpose: Precision-aware equality and hashing of numeric values, including hash quality.

use std::collections::{HashMap, HashSet};
use std::hash::BuildHasher;

use axis_core::{NumericKind, NumericValue};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn hash_of(state: &impl BuildHasher, value: &NumericValue) -> u64 { state.hash_one(value) }

#[test]
fn decimal_values_compare_by_rounded_representation() {
    let a = NumericValue::decimal(1.234_49, 2);
    let b = NumericValue::decimal(1.234_51, 2);
    assert_eq!(a, b);
    assert_eq!(a.rounded(), Some(123));

    let state = std::collections::hash_map::RandomState::new();
    assert_eq!(hash_of(&state, &a), hash_of(&state, &b));

    assert_ne!(NumericValue::decimal(1.234, 2), NumericValue::decimal(1.236, 2));
    assert_ne!(NumericValue::decimal(1.0, 2), NumericValue::decimal(1.0, 3), "precision is part of identity");
}

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(NumericValue::decimal(2.5, 0).rounded(), Some(3));
    assert_eq!(NumericValue::decimal(-2.5, 0).rounded(), Some(-3));
    assert_eq!(NumericValue::decimal(0.125, 2).rounded(), Some(13));
}

#[test]
fn float32_values_round_in_their_own_kind() {
    let a = NumericValue::from(0.501f32).with_precision(Some(1));
    let b = NumericValue::from(0.549f32).with_precision(Some(1));
    assert_eq!(a, b);
    assert_ne!(a, NumericValue::decimal(0.5, 1), "kinds differ");
}

#[test]
fn without_precision_equality_is_exact() {
    assert_ne!(NumericValue::from(1.234_49f64), NumericValue::from(1.234_51f64));
    assert_eq!(NumericValue::from(0.0f64), NumericValue::from(-0.0f64));
    assert_eq!(NumericValue::from(f64::NAN), NumericValue::from(f64::NAN));
    assert_ne!(NumericValue::decimal(1.0, 2), NumericValue::from(1.0f64));

    let set: HashSet<NumericValue> =
        [0.0f64, -0.0, 1.5, 1.5, f64::NAN, f64::NAN].into_iter().map(NumericValue::from).collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn integral_values_ignore_precision() {
    let a = NumericValue::from(1_000i32).with_precision(Some(2));
    assert_eq!(a.precision(), None);
    assert_eq!(a, NumericValue::from(1_000i32));
    assert_ne!(NumericValue::from(1_000i32), NumericValue::from(1_001i32));
    assert_ne!(NumericValue::from(7i8), NumericValue::from(7i16));
}

#[test]
fn parse_then_compare() {
    let parsed = NumericKind::Float64.parse_value(" 3.14159 ").expect("parse").with_precision(Some(3));
    assert_eq!(parsed, NumericValue::decimal(3.1416, 3));
    assert_eq!(parsed.to_string(), "3.14159");
}

/// Fraction of samples that share a hash with some unequal sample.
fn unequal_collision_rate(values: &[NumericValue]) -> f64 {
    let state = std::collections::hash_map::RandomState::new();
    let mut buckets: HashMap<u64, Vec<NumericValue>> = HashMap::new();
    for v in values {
        buckets.entry(hash_of(&state, v)).or_default().push(*v);
    }
    let colliding: usize = buckets
        .values()
        .filter(|bucket| bucket.iter().any(|v| *v != bucket[0]))
        .map(Vec::len)
        .sum();
    colliding as f64 / values.len() as f64
}

#[test]
fn hashes_spread_uniform_samples() {
    const SAMPLES: usize = 100_000;
    let mut rng = SmallRng::seed_from_u64(7);

    for precision in [None, Some(0), Some(3)] {
        let values: Vec<NumericValue> = (0..SAMPLES)
            .map(|_| NumericValue::from(rng.random_range(-1.0e4..1.0e4f64)).with_precision(precision))
            .collect();
        let rate = unequal_collision_rate(&values);
        assert!(rate < 0.05, "precision {precision:?}: {rate}");
    }

    let ints: Vec<NumericValue> = (0..SAMPLES).map(|_| NumericValue::from(rng.random::<i32>())).collect();
    assert!(unequal_collision_rate(&ints) < 0.05);

    let narrow: Vec<NumericValue> = (0..SAMPLES).map(|_| NumericValue::from(rng.random::<i8>())).collect();
    assert_eq!(unequal_collision_rate(&narrow), 0.0);
}
