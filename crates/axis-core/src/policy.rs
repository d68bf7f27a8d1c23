// File: crates/axis-core/src/policy.rs
// Summary: Per-kind policies for tick generation (span, clamping, placement, labels).

//! Everything the tick algorithm needs to know about a numeric kind.
//!
//! The placement algorithm in [`crate::tick`] is written once; this module
//! supplies the three places where kinds differ:
//!
//! - the span `max - min`, computed in a wider type for `i8`/`i16`/`i32` and
//!   as an unsigned distance for `i64`, which has no wider primitive;
//! - rounding of interior positions (integral kinds round half away from
//!   zero, floating kinds do not round);
//! - label text (plain decimal for integral kinds, four significant digits
//!   in general format for floating kinds).

use std::fmt;

use crate::num;
use crate::types::{Number, NumericKind};

pub trait KindPolicy: Copy + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// Distance between two bounds of this kind.
    type Span: Copy + fmt::Debug;

    const KIND: NumericKind;

    /// `max - min` without overflow. Callers guarantee `min <= max`.
    fn span(min: Self, max: Self) -> Self::Span;

    fn span_to_f64(span: Self::Span) -> f64;

    /// Interior tick count actually produced for `requested` over `span`.
    fn interior_count(span: Self::Span, requested: usize) -> usize;

    /// `min + offset`, rounded as the kind requires and kept within `[min, max]`.
    fn place(min: Self, max: Self, offset: f64) -> Self;

    /// Five percent of the span: the grid-line spacing hint.
    fn tick_length(span: Self::Span) -> Self;

    fn boundary_label(value: Self) -> String;

    fn interior_label(value: Self) -> String;

    fn into_number(self) -> Number;

    /// Clamped conversion from any kind.
    fn from_number(number: Number) -> Self;
}

/// Integral interior count: a span shorter than the request leaves room for
/// `span - 1` distinct interior values at most.
fn integral_interior_count(span: u64, requested: usize) -> usize {
    if u128::from(span) < requested as u128 {
        usize::try_from(span.saturating_sub(1)).unwrap_or(usize::MAX)
    } else {
        requested
    }
}

fn integral_tick_length(span: u64) -> u64 { (span / 20).max(1) }

macro_rules! widening_integral_policy {
    ($t:ty, $wide:ty, $kind:ident) => {
        impl KindPolicy for $t {
            type Span = u64;

            const KIND: NumericKind = NumericKind::$kind;

            fn span(min: $t, max: $t) -> u64 {
                let wide = <$wide>::from(max) - <$wide>::from(min);
                u64::try_from(wide).unwrap_or(0)
            }

            fn span_to_f64(span: u64) -> f64 { span as f64 }

            fn interior_count(span: u64, requested: usize) -> usize {
                integral_interior_count(span, requested)
            }

            fn place(min: $t, max: $t, offset: f64) -> $t {
                // `as` saturates; offsets never exceed the span.
                let step = offset.round() as $wide;
                let value = <$wide>::from(min).saturating_add(step);
                let clamped = value.clamp(<$wide>::from(min), <$wide>::from(max));
                <$t>::try_from(clamped).unwrap_or(max)
            }

            fn tick_length(span: u64) -> $t {
                <$t>::try_from(integral_tick_length(span)).unwrap_or(<$t>::MAX)
            }

            fn boundary_label(value: $t) -> String { value.to_string() }

            fn interior_label(value: $t) -> String { value.to_string() }

            fn into_number(self) -> Number { Number::$kind(self) }

            fn from_number(number: Number) -> $t { num::saturating_int(number) }
        }
    };
}

widening_integral_policy!(i8, i16, Int8);
widening_integral_policy!(i16, i32, Int16);
widening_integral_policy!(i32, i64, Int32);

impl KindPolicy for i64 {
    type Span = u64;

    const KIND: NumericKind = NumericKind::Int64;

    fn span(min: i64, max: i64) -> u64 {
        if max < min {
            return 0;
        }
        max.abs_diff(min)
    }

    fn span_to_f64(span: u64) -> f64 { span as f64 }

    fn interior_count(span: u64, requested: usize) -> usize { integral_interior_count(span, requested) }

    fn place(min: i64, max: i64, offset: f64) -> i64 {
        let step = offset.round() as u64;
        min.checked_add_unsigned(step).map_or(max, |v| v.min(max))
    }

    fn tick_length(span: u64) -> i64 { i64::try_from(integral_tick_length(span)).unwrap_or(i64::MAX) }

    fn boundary_label(value: i64) -> String { value.to_string() }

    fn interior_label(value: i64) -> String { value.to_string() }

    fn into_number(self) -> Number { Number::Int64(self) }

    fn from_number(number: Number) -> i64 { num::saturating_int(number) }
}

impl KindPolicy for f32 {
    type Span = f64;

    const KIND: NumericKind = NumericKind::Float32;

    fn span(min: f32, max: f32) -> f64 { f64::from(max) - f64::from(min) }

    fn span_to_f64(span: f64) -> f64 { span }

    fn interior_count(_span: f64, requested: usize) -> usize { requested }

    fn place(min: f32, max: f32, offset: f64) -> f32 {
        let value = (f64::from(min) + offset) as f32;
        value.clamp(min, max)
    }

    fn tick_length(span: f64) -> f32 { (span * 0.05) as f32 }

    fn boundary_label(value: f32) -> String { value.to_string() }

    fn interior_label(value: f32) -> String { format_general(f64::from(value), 4) }

    fn into_number(self) -> Number { Number::Float32(self) }

    fn from_number(number: Number) -> f32 { num::saturating_f32(number) }
}

impl KindPolicy for f64 {
    type Span = f64;

    const KIND: NumericKind = NumericKind::Float64;

    fn span(min: f64, max: f64) -> f64 { max - min }

    fn span_to_f64(span: f64) -> f64 { span }

    fn interior_count(_span: f64, requested: usize) -> usize { requested }

    fn place(min: f64, max: f64, offset: f64) -> f64 { (min + offset).clamp(min, max) }

    fn tick_length(span: f64) -> f64 { span * 0.05 }

    fn boundary_label(value: f64) -> String { value.to_string() }

    fn interior_label(value: f64) -> String { format_general(value, 4) }

    fn into_number(self) -> Number { Number::Float64(self) }

    fn from_number(number: Number) -> f64 { number.as_f64() }
}

/// Format `value` with `significant` significant digits, `%g` style:
/// fixed notation when the rounded decimal exponent lies in
/// `[-4, significant)`, scientific (`1.235e+04`) otherwise. Trailing zeros are kept.
pub fn format_general(value: f64, significant: usize) -> String {
    let significant = significant.max(1);
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", significant - 1, 0.0);
    }
    let scientific = format!("{:.*e}", significant - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };
    let digits = significant as i32;
    if exponent < -4 || exponent >= digits {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    } else {
        let decimals = usize::try_from(digits - 1 - exponent).unwrap_or(0);
        format!("{value:.decimals$}")
    }
}
