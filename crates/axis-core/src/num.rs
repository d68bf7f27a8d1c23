// File: crates/axis-core/src/num.rs
// Summary: Cross-kind arithmetic: promotion, saturating casts, add/sub/multiply, min/max.

//! Operations over operands of possibly different kinds.
//!
//! Binary operations promote both operands to the wider kind
//! (`Int8 < Int16 < Int32 < Int64 < Float32 < Float64`) and then use the
//! native arithmetic of that kind: integral kinds wrap on overflow, floating
//! kinds follow IEEE 754. Casts into a narrower kind clamp to the target's
//! representable range instead of wrapping.

use std::cmp::Ordering;

use num_traits::{Float, NumCast, PrimInt, WrappingAdd, WrappingMul, WrappingSub};

use crate::types::{Number, NumericKind, NumericValue};

/// Both operands converted to one common kind.
#[derive(Clone, Copy, Debug)]
enum Pair {
    Int8(i8, i8),
    Int16(i16, i16),
    Int32(i32, i32),
    Int64(i64, i64),
    Float32(f32, f32),
    Float64(f64, f64),
}

fn promote_pair(a: Number, b: Number) -> Pair {
    match a.kind().wider(b.kind()) {
        NumericKind::Int8 => Pair::Int8(saturating_int(a), saturating_int(b)),
        NumericKind::Int16 => Pair::Int16(saturating_int(a), saturating_int(b)),
        NumericKind::Int32 => Pair::Int32(saturating_int(a), saturating_int(b)),
        NumericKind::Int64 => Pair::Int64(saturating_int(a), saturating_int(b)),
        NumericKind::Float32 => Pair::Float32(saturating_f32(a), saturating_f32(b)),
        NumericKind::Float64 => Pair::Float64(a.as_f64(), b.as_f64()),
    }
}

/// Convert to an integral primitive, clamping out-of-range values to the
/// nearest bound. Fractional parts truncate toward zero; NaN becomes zero.
pub(crate) fn saturating_int<T: PrimInt>(number: Number) -> T {
    let cast: Option<T> = match number {
        Number::Int8(v) => NumCast::from(v),
        Number::Int16(v) => NumCast::from(v),
        Number::Int32(v) => NumCast::from(v),
        Number::Int64(v) => NumCast::from(v),
        Number::Float32(v) => NumCast::from(v),
        Number::Float64(v) => NumCast::from(v),
    };
    cast.unwrap_or_else(|| {
        if number.is_nan() {
            T::zero()
        } else if number.is_negative() {
            T::min_value()
        } else {
            T::max_value()
        }
    })
}

/// Convert to `f32`, clamping finite `f64` magnitudes beyond `f32::MAX`.
pub(crate) fn saturating_f32(number: Number) -> f32 {
    match number {
        Number::Float64(v) if v.is_finite() => v.clamp(<f64 as From<f32>>::from(f32::MIN), <f64 as From<f32>>::from(f32::MAX)) as f32,
        Number::Float64(v) => v as f32,
        Number::Float32(v) => v,
        other => other.as_f64() as f32,
    }
}

/// Convert `number` into `kind`, clamping rather than wrapping.
pub fn cast_to_kind(number: Number, kind: NumericKind) -> Number {
    match kind {
        NumericKind::Int8 => Number::Int8(saturating_int(number)),
        NumericKind::Int16 => Number::Int16(saturating_int(number)),
        NumericKind::Int32 => Number::Int32(saturating_int(number)),
        NumericKind::Int64 => Number::Int64(saturating_int(number)),
        NumericKind::Float32 => Number::Float32(saturating_f32(number)),
        NumericKind::Float64 => Number::Float64(number.as_f64()),
    }
}

/// Convert `sample` into the kind of `target`, keeping the target's precision.
///
/// ```
/// use axis_core::num::cast_to_type;
/// use axis_core::{Number, NumericValue};
///
/// let witness = NumericValue::from(0i8);
/// let cast = cast_to_type(Number::Int32(384), &witness);
/// assert_eq!(cast, NumericValue::from(i8::MAX));
/// ```
pub fn cast_to_type(sample: Number, target: &NumericValue) -> NumericValue {
    NumericValue::new(cast_to_kind(sample, target.kind())).with_precision(target.precision())
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Add,
    Sub,
    Mul,
}

impl Op {
    fn int<T: WrappingAdd + WrappingSub + WrappingMul>(self, a: T, b: T) -> T {
        match self {
            Op::Add => a.wrapping_add(&b),
            Op::Sub => a.wrapping_sub(&b),
            Op::Mul => a.wrapping_mul(&b),
        }
    }

    fn float<T: Float>(self, a: T, b: T) -> T {
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
        }
    }

    fn apply(self, a: Number, b: Number) -> Number {
        match promote_pair(a, b) {
            Pair::Int8(x, y) => Number::Int8(self.int(x, y)),
            Pair::Int16(x, y) => Number::Int16(self.int(x, y)),
            Pair::Int32(x, y) => Number::Int32(self.int(x, y)),
            Pair::Int64(x, y) => Number::Int64(self.int(x, y)),
            Pair::Float32(x, y) => Number::Float32(self.float(x, y)),
            Pair::Float64(x, y) => Number::Float64(self.float(x, y)),
        }
    }
}

pub fn add(a: Number, b: Number) -> Number { Op::Add.apply(a, b) }

pub fn sub(a: Number, b: Number) -> Number { Op::Sub.apply(a, b) }

pub fn multiply(a: Number, b: Number) -> Number { Op::Mul.apply(a, b) }

/// Compare two numbers in their wider kind. `None` when either side is NaN.
pub fn numeric_cmp(a: Number, b: Number) -> Option<Ordering> {
    match promote_pair(a, b) {
        Pair::Int8(x, y) => Some(x.cmp(&y)),
        Pair::Int16(x, y) => Some(x.cmp(&y)),
        Pair::Int32(x, y) => Some(x.cmp(&y)),
        Pair::Int64(x, y) => Some(x.cmp(&y)),
        Pair::Float32(x, y) => x.partial_cmp(&y),
        Pair::Float64(x, y) => x.partial_cmp(&y),
    }
}

fn widest_kind(values: &[NumericValue]) -> Option<NumericKind> {
    values.iter().map(NumericValue::kind).max()
}

/// Pick the first value that is extremal in direction `wanted` once every
/// operand is promoted to the widest kind present. NaN loses to any number.
fn extremum(values: &[NumericValue], wanted: Ordering) -> Option<NumericValue> {
    let widest = widest_kind(values)?;
    let mut best: Option<(NumericValue, Number)> = None;
    for value in values {
        let promoted = cast_to_kind(value.number(), widest);
        let replace = match best {
            None => true,
            Some((_, current)) => {
                (current.is_nan() && !promoted.is_nan())
                    || numeric_cmp(promoted, current) == Some(wanted)
            }
        };
        if replace {
            best = Some((*value, promoted));
        }
    }
    best.map(|(value, _)| value)
}

/// Smallest value of a mixed-kind list, returned in its own kind.
pub fn min(values: &[NumericValue]) -> Option<NumericValue> { extremum(values, Ordering::Less) }

/// Largest value of a mixed-kind list, returned in its own kind.
pub fn max(values: &[NumericValue]) -> Option<NumericValue> { extremum(values, Ordering::Greater) }

/// Smallest value expressed in the widest kind of the list.
pub fn min_promoted(values: &[NumericValue]) -> Option<NumericValue> {
    let widest = widest_kind(values)?;
    min(values).map(|v| NumericValue::new(cast_to_kind(v.number(), widest)).with_precision(v.precision()))
}

/// Largest value expressed in the widest kind of the list.
pub fn max_promoted(values: &[NumericValue]) -> Option<NumericValue> {
    let widest = widest_kind(values)?;
    max(values).map(|v| NumericValue::new(cast_to_kind(v.number(), widest)).with_precision(v.precision()))
}
