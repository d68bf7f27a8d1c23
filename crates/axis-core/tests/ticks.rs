// File: crates/axis-core/tests/ticks.rs
// Purpose: Tick generation across all kinds: counts, ordering, clamping, labels, log spacing, errors.

use axis_core::{
    generate_ticks, AxisBounds, AxisError, Number, NumericKind, NumericValue, TickCountGenerator,
    TickGenerationConfig, TickGenerator, TickSet,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn bounds<T: Into<NumericValue>>(min: T, max: T) -> AxisBounds {
    AxisBounds::new(min.into(), max.into()).expect("valid bounds")
}

fn assert_well_formed(set: &TickSet, b: &AxisBounds, expected_len: usize) {
    assert_eq!(set.len(), expected_len, "tick count for {b:?}");
    assert_eq!(set.kind(), b.kind());
    let first = set.first().expect("first tick");
    let last = set.last().expect("last tick");
    assert_eq!(first.value, b.min());
    assert_eq!(last.value, b.max());
    assert!(first.label.is_some() && last.label.is_some(), "boundary labels present");
    for pair in set.ticks().windows(2) {
        let ord = pair[0].value.numeric_cmp(&pair[1].value).expect("comparable");
        assert!(ord.is_le(), "ticks must be weakly increasing: {:?} then {:?}", pair[0].value, pair[1].value);
    }
}

fn random_bounds(rng: &mut SmallRng, kind: NumericKind) -> AxisBounds {
    let (a, b): (NumericValue, NumericValue) = match kind {
        NumericKind::Int8 => (rng.random::<i8>().into(), rng.random::<i8>().into()),
        NumericKind::Int16 => (rng.random::<i16>().into(), rng.random::<i16>().into()),
        NumericKind::Int32 => (rng.random::<i32>().into(), rng.random::<i32>().into()),
        NumericKind::Int64 => (rng.random::<i64>().into(), rng.random::<i64>().into()),
        NumericKind::Float32 => (
            rng.random_range(-1.0e6f32..1.0e6).into(),
            rng.random_range(-1.0e6f32..1.0e6).into(),
        ),
        NumericKind::Float64 => (
            rng.random_range(-1.0e12f64..1.0e12).into(),
            rng.random_range(-1.0e12f64..1.0e12).into(),
        ),
    };
    match a.numeric_cmp(&b) {
        Some(o) if o.is_le() => AxisBounds::new(a, b),
        _ => AxisBounds::new(b, a),
    }
    .expect("ordered bounds")
}

#[test]
fn every_kind_produces_well_formed_ticks() {
    let mut rng = SmallRng::seed_from_u64(0xA515);
    for kind in NumericKind::ALL {
        for _ in 0..200 {
            let b = random_bounds(&mut rng, kind);
            let requested = rng.random_range(0..12usize);
            let clamped = kind.is_integral() && (b.span() as u128) < requested as u128;
            let expected_interior = if clamped { (b.span() as usize).saturating_sub(1) } else { requested };

            for log in [false, true] {
                let config = TickGenerationConfig::labelled(requested).with_log_scale(log);
                let set = generate_ticks(&b, &config);
                assert_well_formed(&set, &b, expected_interior + 2);
                if clamped && b.span() > 0.0 {
                    assert_eq!(set.distinct_count(), set.len(), "log={log} {b:?}");
                }
            }
        }
    }
}

#[test]
fn small_int8_range_clamps_to_every_value() {
    let b = bounds(0i8, 10i8);
    let set = generate_ticks(&b, &TickGenerationConfig::labelled(20));

    assert_eq!(set.len(), 11);
    assert_eq!(set.interior_count(), 9);
    let expected: Vec<NumericValue> = (0i8..=10).map(NumericValue::from).collect();
    assert_eq!(set.values(), expected);
    assert_eq!(set.labels()[5], Some("5"));
}

#[test]
fn clamped_integral_ticks_are_distinct() {
    for (min, max, n) in [(0i32, 3, 10), (-5, 5, 40), (100, 101, 7), (7, 7, 3)] {
        let b = bounds(min, max);
        let set = generate_ticks(&b, &TickGenerationConfig::unlabelled(n));
        let span = (max - min) as usize;
        assert_eq!(set.interior_count(), span.saturating_sub(1));
        if span > 0 {
            assert_eq!(set.distinct_count(), set.len(), "{min}..{max} produced duplicates");
        }
    }
}

#[test]
fn degenerate_range_keeps_both_boundaries() {
    let b = bounds(42i16, 42i16);
    let set = generate_ticks(&b, &TickGenerationConfig::labelled(5));
    assert_eq!(set.len(), 2);
    assert_eq!(set.values(), vec![NumericValue::from(42i16); 2]);

    let f = bounds(1.5f64, 1.5f64);
    let set = generate_ticks(&f, &TickGenerationConfig::labelled(3));
    assert_eq!(set.len(), 5, "floating kinds never clamp");
}

#[test]
fn linear_integral_placement_rounds_half_away_from_zero() {
    // step 2.5: 2.5 -> 3, 5, 7.5 -> 8
    let set = generate_ticks(&bounds(0i32, 10), &TickGenerationConfig::labelled(3));
    let values: Vec<NumericValue> = [0i32, 3, 5, 8, 10].into_iter().map(NumericValue::from).collect();
    assert_eq!(set.values(), values);
}

#[test]
fn float_interior_labels_use_four_significant_digits() {
    let set = generate_ticks(&bounds(0.0f64, 1.0), &TickGenerationConfig::labelled(3));
    assert_eq!(set.labels(), vec![Some("0"), Some("0.2500"), Some("0.5000"), Some("0.7500"), Some("1")]);

    let set = generate_ticks(&bounds(0.0f32, 30_000.0), &TickGenerationConfig::labelled(1));
    assert_eq!(set.labels()[1], Some("1.500e+04"));
}

#[test]
fn label_mask_selects_interior_labels() {
    let config = TickGenerationConfig::new(3, vec![true, false, true], false).expect("mask matches");
    let set = generate_ticks(&bounds(0i64, 400), &config);
    assert_eq!(set.labels(), vec![Some("0"), Some("100"), None, Some("300"), Some("400")]);
}

#[test]
fn log_spacing_grows_toward_max() {
    let config = TickGenerationConfig::unlabelled(3).with_log_scale(true);
    let set = generate_ticks(&bounds(0.0f64, 900.0), &config);
    let values: Vec<f64> = set.values().iter().map(NumericValue::as_f64).collect();

    for (i, v) in values[1..4].iter().enumerate() {
        let expected = (10f64.powf((i + 1) as f64 / 4.0) - 1.0) / 9.0 * 900.0;
        assert!((v - expected).abs() < 1e-9, "tick {i}: {v} vs {expected}");
    }
    let gaps: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    assert!(gaps.windows(2).all(|g| g[1] > g[0]), "log gaps should widen: {gaps:?}");
}

#[test]
fn int64_full_range_does_not_overflow() {
    let b = bounds(i64::MIN, i64::MAX);
    let set = generate_ticks(&b, &TickGenerationConfig::labelled(4));
    assert_well_formed(&set, &b, 6);
    assert_eq!(set.distinct_count(), 6);

    let log = generate_ticks(&b, &TickGenerationConfig::labelled(4).with_log_scale(true));
    assert_well_formed(&log, &b, 6);
}

#[test]
fn generation_is_idempotent() {
    let generator = TickGenerator::new(&bounds(-3.25f32, 17.5));
    let config = TickGenerationConfig::labelled(6).with_log_scale(true);
    assert_eq!(generator.generate(&config), generator.generate(&config));
}

#[test]
fn tick_length_is_five_percent_of_span() {
    let g = TickGenerator::new(&bounds(0.0f64, 50.0));
    assert_eq!(g.tick_length(), NumericValue::from(2.5f64));

    let g = TickGenerator::new(&bounds(0i32, 1000));
    assert_eq!(g.tick_length(), NumericValue::from(50i32));

    // floored, but never below one unit
    let g = TickGenerator::new(&bounds(0i8, 10));
    assert_eq!(g.tick_length(), NumericValue::from(1i8));
    let g = TickGenerator::new(&bounds(5i16, 5));
    assert_eq!(g.tick_length(), NumericValue::from(1i16));

    let typed = TickCountGenerator::new(0i64, 39).expect("valid");
    assert_eq!(typed.tick_length(), 1);
}

#[test]
fn mismatched_label_mask_is_rejected() {
    let err = TickGenerationConfig::new(4, vec![true; 3], false).unwrap_err();
    assert_eq!(err, AxisError::Configuration { requested: 4, mask_len: 3 });
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = AxisBounds::new(10i32.into(), 1i32.into()).unwrap_err();
    assert!(matches!(err, AxisError::InvalidBounds { .. }), "{err:?}");

    assert!(TickCountGenerator::new(2.0f32, 1.0).is_err());
    assert!(AxisBounds::new(f64::NAN.into(), 1.0f64.into()).is_err());
    assert!(AxisBounds::new(0.0f64.into(), f64::INFINITY.into()).is_err());
}

#[test]
fn dispatch_selects_the_sample_kind() {
    for kind in NumericKind::ALL {
        let b = AxisBounds::new(kind.parse_value("1").unwrap(), kind.parse_value("9").unwrap()).unwrap();
        let sample = kind.parse_value("4").unwrap();
        let g = TickGenerator::for_sample(&sample, &b).expect("same kind");
        assert_eq!(g.kind(), kind);
        assert_eq!(g.generate(&TickGenerationConfig::default()).kind(), kind);
    }

    let err = TickGenerator::for_sample(&NumericValue::from(1i8), &bounds(0i16, 2)).unwrap_err();
    assert_eq!(err, AxisError::KindMismatch { expected: NumericKind::Int8, found: NumericKind::Int16 });
    assert!(AxisBounds::new(1i8.into(), 2i16.into()).is_err());
}

#[test]
fn dispatch_by_name() {
    let g = TickGenerator::for_kind_name("short", "-4", "4").expect("supported");
    assert_eq!(g.kind(), NumericKind::Int16);
    let set = g.generate(&TickGenerationConfig::labelled(1));
    assert!(matches!(set.values()[1].number(), Number::Int16(0)));

    let err = TickGenerator::for_kind_name("decimal128", "0", "1").unwrap_err();
    assert_eq!(err, AxisError::UnsupportedKind("decimal128".into()));

    let err = TickGenerator::for_kind_name("int8", "0", "300").unwrap_err();
    assert!(matches!(err, AxisError::ParseValue { kind: NumericKind::Int8, .. }), "{err:?}");
}

#[test]
fn precision_carries_onto_ticks() {
    let b = AxisBounds::new(NumericValue::decimal(0.0, 1), NumericValue::from(1.0f64)).expect("valid");
    assert_eq!(b.precision(), Some(1));
    let set = generate_ticks(&b, &TickGenerationConfig::unlabelled(2));
    assert!(set.iter().all(|t| t.value.precision() == Some(1)));
    assert_eq!(set.values()[1], NumericValue::decimal(0.3, 1));
}

#[test]
fn clamped_log_range_emits_every_integer() {
    let b = bounds(0i8, 10i8);
    let set = generate_ticks(&b, &TickGenerationConfig::labelled(20).with_log_scale(true));
    let expected: Vec<NumericValue> = (0i8..=10).map(NumericValue::from).collect();
    assert_eq!(set.values(), expected);
    assert_eq!(set.distinct_count(), 11);

    let set = generate_ticks(&bounds(-3i64, 3), &TickGenerationConfig::unlabelled(50).with_log_scale(true));
    assert_eq!(set.distinct_count(), 7);
}

#[test]
fn bounds_contain_their_closed_range() {
    let b = bounds(-5i32, 5);
    assert!(b.contains(&NumericValue::from(-5i32)));
    assert!(b.contains(&NumericValue::from(5i32)));
    assert!(!b.contains(&NumericValue::from(6i32)));
    assert!(b.contains(&NumericValue::from(0.5f64)), "containment compares across kinds");
    assert!(!b.contains(&NumericValue::from(f64::NAN)));
}

#[test]
fn typed_generator_precision_overrides_bounds() {
    let g = TickCountGenerator::new(0.0f64, 1.0).expect("valid").with_precision(Some(1));
    let set = g.generate(&TickGenerationConfig::unlabelled(2));
    assert!(set.iter().all(|t| t.value.precision() == Some(1)));
    assert_eq!(set.values()[2], NumericValue::decimal(0.7, 1));

    let exact = g.with_precision(None).generate(&TickGenerationConfig::unlabelled(2));
    assert_eq!(exact.values()[1], NumericValue::from(1.0f64 / 3.0));
}
