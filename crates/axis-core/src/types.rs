// File: crates/axis-core/src/types.rs
// Summary: Numeric kinds, raw tagged numbers, and precision-aware value identity.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{AxisError, Result};
use crate::num;

/// The six supported numeric domains, declared in promotion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericKind {
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl NumericKind {
    pub const ALL: [NumericKind; 6] = [
        NumericKind::Int8,
        NumericKind::Int16,
        NumericKind::Int32,
        NumericKind::Int64,
        NumericKind::Float32,
        NumericKind::Float64,
    ];

    pub const fn is_integral(self) -> bool {
        matches!(self, NumericKind::Int8 | NumericKind::Int16 | NumericKind::Int32 | NumericKind::Int64)
    }

    pub const fn is_decimal(self) -> bool { !self.is_integral() }

    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::Int8 => "int8",
            NumericKind::Int16 => "int16",
            NumericKind::Int32 => "int32",
            NumericKind::Int64 => "int64",
            NumericKind::Float32 => "float32",
            NumericKind::Float64 => "float64",
        }
    }

    /// Result kind of a binary operation between `self` and `other`.
    pub fn wider(self, other: NumericKind) -> NumericKind { self.max(other) }

    /// Parse `input` as a raw number of this kind.
    pub fn parse_value(self, input: &str) -> Result<NumericValue> {
        let text = input.trim();
        let err = || AxisError::ParseValue { kind: self, input: input.to_string() };
        let number = match self {
            NumericKind::Int8 => Number::Int8(text.parse().map_err(|_| err())?),
            NumericKind::Int16 => Number::Int16(text.parse().map_err(|_| err())?),
            NumericKind::Int32 => Number::Int32(text.parse().map_err(|_| err())?),
            NumericKind::Int64 => Number::Int64(text.parse().map_err(|_| err())?),
            NumericKind::Float32 => Number::Float32(text.parse().map_err(|_| err())?),
            NumericKind::Float64 => Number::Float64(text.parse().map_err(|_| err())?),
        };
        Ok(NumericValue::new(number))
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for NumericKind {
    type Err = AxisError;

    /// Accepts the canonical names, Rust primitive names and the usual JVM-style aliases.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        let aliases: [(&[&str], NumericKind); 6] = [
            (&["int8", "i8", "byte"], NumericKind::Int8),
            (&["int16", "i16", "short"], NumericKind::Int16),
            (&["int32", "i32", "int", "integer"], NumericKind::Int32),
            (&["int64", "i64", "long"], NumericKind::Int64),
            (&["float32", "f32", "float"], NumericKind::Float32),
            (&["float64", "f64", "double"], NumericKind::Float64),
        ];
        for (names, kind) in aliases {
            if names.iter().any(|n| n.eq_ignore_ascii_case(name)) { return Ok(kind); }
        }
        Err(AxisError::UnsupportedKind(name.to_string()))
    }
}

/// A raw number tagged with its kind.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
}

impl Number {
    pub const fn kind(self) -> NumericKind {
        match self {
            Number::Int8(_) => NumericKind::Int8,
            Number::Int16(_) => NumericKind::Int16,
            Number::Int32(_) => NumericKind::Int32,
            Number::Int64(_) => NumericKind::Int64,
            Number::Float32(_) => NumericKind::Float32,
            Number::Float64(_) => NumericKind::Float64,
        }
    }

    /// Lossy view as `f64` (exact for every kind except large `Int64` magnitudes).
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int8(v) => f64::from(v),
            Number::Int16(v) => f64::from(v),
            Number::Int32(v) => f64::from(v),
            Number::Int64(v) => v as f64,
            Number::Float32(v) => f64::from(v),
            Number::Float64(v) => v,
        }
    }

    pub fn is_nan(self) -> bool {
        match self {
            Number::Float32(v) => v.is_nan(),
            Number::Float64(v) => v.is_nan(),
            _ => false,
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Number::Int8(v) => v < 0,
            Number::Int16(v) => v < 0,
            Number::Int32(v) => v < 0,
            Number::Int64(v) => v < 0,
            Number::Float32(v) => v < 0.0,
            Number::Float64(v) => v < 0.0,
        }
    }

    /// Numeric comparison after promoting both operands to the wider kind.
    pub fn numeric_cmp(self, other: Number) -> Option<Ordering> { num::numeric_cmp(self, other) }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int8(v) => fmt::Display::fmt(v, f),
            Number::Int16(v) => fmt::Display::fmt(v, f),
            Number::Int32(v) => fmt::Display::fmt(v, f),
            Number::Int64(v) => fmt::Display::fmt(v, f),
            Number::Float32(v) => fmt::Display::fmt(v, f),
            Number::Float64(v) => fmt::Display::fmt(v, f),
        }
    }
}

macro_rules! number_from {
    ($t:ty, $variant:ident) => {
        impl From<$t> for Number {
            fn from(v: $t) -> Self { Number::$variant(v) }
        }

        impl From<$t> for NumericValue {
            fn from(v: $t) -> Self { NumericValue::new(Number::$variant(v)) }
        }
    };
}

number_from!(i8, Int8);
number_from!(i16, Int16);
number_from!(i32, Int32);
number_from!(i64, Int64);
number_from!(f32, Float32);
number_from!(f64, Float64);

/// A sample wrapped with its kind and an optional display precision.
///
/// For decimal kinds with a precision `P`, identity is the rounded
/// representation `round(raw * 10^P)` (half away from zero): two values are
/// equal and hash alike iff kind, precision and rounded representation match.
/// Without a precision, decimal identity is the raw bit pattern with `-0.0`
/// folded onto `0.0` and every NaN folded onto one NaN. Integral kinds ignore
/// precision and compare their raw values exactly. Values of different kinds
/// are never equal; use [`NumericValue::numeric_cmp`] for cross-kind order.
#[derive(Clone, Copy, Debug)]
pub struct NumericValue {
    number: Number,
    precision: Option<u32>,
    rounded: Option<i64>,
}

impl NumericValue {
    pub fn new(number: Number) -> Self { Self { number, precision: None, rounded: None } }

    /// A `Float64` value compared at `precision` fractional digits.
    pub fn decimal(raw: f64, precision: u32) -> Self { Self::from(raw).with_precision(Some(precision)) }

    /// Attach (or clear) the display precision. Integral kinds stay exact.
    pub fn with_precision(self, precision: Option<u32>) -> Self {
        if self.number.kind().is_integral() {
            return Self::new(self.number);
        }
        let rounded = precision.map(|p| rounded_representation(self.number.as_f64(), p));
        Self { number: self.number, precision, rounded }
    }

    pub fn number(&self) -> Number { self.number }
    pub fn kind(&self) -> NumericKind { self.number.kind() }
    pub fn precision(&self) -> Option<u32> { self.precision }
    /// The equality key of a decimal value with a precision.
    pub fn rounded(&self) -> Option<i64> { self.rounded }
    pub fn as_f64(&self) -> f64 { self.number.as_f64() }

    pub fn numeric_cmp(&self, other: &NumericValue) -> Option<Ordering> {
        num::numeric_cmp(self.number, other.number)
    }

    fn identity(&self) -> (NumericKind, Identity) {
        let id = match self.number {
            Number::Int8(v) => Identity::Exact(i64::from(v)),
            Number::Int16(v) => Identity::Exact(i64::from(v)),
            Number::Int32(v) => Identity::Exact(i64::from(v)),
            Number::Int64(v) => Identity::Exact(v),
            Number::Float32(_) | Number::Float64(_) => match (self.precision, self.rounded) {
                (Some(precision), Some(rounded)) => Identity::Rounded { precision, rounded },
                _ => Identity::Raw(raw_bits(self.number.as_f64())),
            },
        };
        (self.kind(), id)
    }
}

#[derive(PartialEq, Eq, Hash)]
enum Identity {
    Exact(i64),
    Rounded { precision: u32, rounded: i64 },
    Raw(u64),
}

fn rounded_representation(raw: f64, precision: u32) -> i64 {
    let scale = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    // `as` saturates at the i64 range; NaN maps to 0.
    (raw * scale).round() as i64
}

fn raw_bits(raw: f64) -> u64 {
    if raw.is_nan() {
        f64::NAN.to_bits()
    } else if raw == 0.0 {
        0f64.to_bits()
    } else {
        raw.to_bits()
    }
}

impl PartialEq for NumericValue {
    fn eq(&self, other: &Self) -> bool { self.identity() == other.identity() }
}

impl Eq for NumericValue {}

impl Hash for NumericValue {
    fn hash<H: Hasher>(&self, state: &mut H) { self.identity().hash(state) }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.number.fmt(f) }
}

impl From<Number> for NumericValue {
    fn from(number: Number) -> Self { NumericValue::new(number) }
}
