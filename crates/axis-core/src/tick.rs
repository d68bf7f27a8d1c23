// File: crates/axis-core/src/tick.rs
// Summary: Axis bounds, tick configuration, tick sets, and the fixed-count tick generator.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::{AxisError, Result};
use crate::num;
use crate::policy::KindPolicy;
use crate::types::{NumericKind, NumericValue};

/// Validated `[min, max]` range of one kind.
///
/// Both ends share the kind and the precision (the first one present wins).
/// Decimal bounds must be finite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisBounds {
    min: NumericValue,
    max: NumericValue,
}

impl AxisBounds {
    pub fn new(min: NumericValue, max: NumericValue) -> Result<Self> {
        if min.kind() != max.kind() {
            return Err(AxisError::KindMismatch { expected: min.kind(), found: max.kind() });
        }
        let ordered = matches!(
            min.numeric_cmp(&max),
            Some(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)
        );
        let finite = min.as_f64().is_finite() && max.as_f64().is_finite();
        if !ordered || !finite {
            return Err(AxisError::InvalidBounds { min: min.to_string(), max: max.to_string() });
        }
        let precision = min.precision().or(max.precision());
        Ok(Self { min: min.with_precision(precision), max: max.with_precision(precision) })
    }

    /// Bounds spanning every sample. All samples must share one kind.
    pub fn from_samples(samples: &[NumericValue]) -> Result<Self> {
        let first = samples.first().ok_or(AxisError::EmptyDataSet)?;
        if let Some(other) = samples.iter().find(|s| s.kind() != first.kind()) {
            return Err(AxisError::KindMismatch { expected: first.kind(), found: other.kind() });
        }
        let min = num::min(samples).ok_or(AxisError::EmptyDataSet)?;
        let max = num::max(samples).ok_or(AxisError::EmptyDataSet)?;
        Self::new(min, max)
    }

    pub fn min(&self) -> NumericValue { self.min }
    pub fn max(&self) -> NumericValue { self.max }
    pub fn kind(&self) -> NumericKind { self.min.kind() }
    pub fn precision(&self) -> Option<u32> { self.min.precision() }

    /// `max - min` as `f64`.
    pub fn span(&self) -> f64 { self.max.as_f64() - self.min.as_f64() }

    pub fn contains(&self, value: &NumericValue) -> bool {
        let above = matches!(value.numeric_cmp(&self.min), Some(o) if o.is_ge());
        let below = matches!(value.numeric_cmp(&self.max), Some(o) if o.is_le());
        above && below
    }
}

/// How many interior ticks to place, which of them carry labels, and the spacing mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickGenerationConfig {
    interior_count: usize,
    show_interior_label: Vec<bool>,
    log_scaled: bool,
}

impl TickGenerationConfig {
    /// Fails with [`AxisError::Configuration`] unless the mask has one entry per interior tick.
    pub fn new(interior_count: usize, show_interior_label: Vec<bool>, log_scaled: bool) -> Result<Self> {
        if show_interior_label.len() != interior_count {
            return Err(AxisError::Configuration {
                requested: interior_count,
                mask_len: show_interior_label.len(),
            });
        }
        Ok(Self { interior_count, show_interior_label, log_scaled })
    }

    /// `interior_count` ticks, every one labelled, linear spacing.
    pub fn labelled(interior_count: usize) -> Self {
        Self { interior_count, show_interior_label: vec![true; interior_count], log_scaled: false }
    }

    /// `interior_count` ticks without interior labels, linear spacing.
    pub fn unlabelled(interior_count: usize) -> Self {
        Self { interior_count, show_interior_label: vec![false; interior_count], log_scaled: false }
    }

    pub fn with_log_scale(mut self, log_scaled: bool) -> Self {
        self.log_scaled = log_scaled;
        self
    }

    pub fn interior_count(&self) -> usize { self.interior_count }
    pub fn show_interior_label(&self) -> &[bool] { &self.show_interior_label }
    pub fn is_log_scaled(&self) -> bool { self.log_scaled }

    /// Whether the `index`-th interior tick (0-based) is labelled. Ticks beyond
    /// the mask (never produced by the generator) are unlabelled.
    pub fn shows_label(&self, index: usize) -> bool {
        self.show_interior_label.get(index).copied().unwrap_or(false)
    }
}

impl Default for TickGenerationConfig {
    fn default() -> Self { Self::labelled(4) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub value: NumericValue,
    pub label: Option<String>,
}

/// Ticks of one axis: weakly increasing, first = min and last = max, both labelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickSet {
    kind: NumericKind,
    ticks: Vec<Tick>,
}

impl TickSet {
    pub fn kind(&self) -> NumericKind { self.kind }
    pub fn len(&self) -> usize { self.ticks.len() }
    /// Always `false`: a tick set holds at least both boundaries.
    pub fn is_empty(&self) -> bool { self.ticks.is_empty() }
    pub fn interior_count(&self) -> usize { self.ticks.len().saturating_sub(2) }
    pub fn ticks(&self) -> &[Tick] { &self.ticks }
    pub fn iter(&self) -> std::slice::Iter<'_, Tick> { self.ticks.iter() }

    pub fn values(&self) -> Vec<NumericValue> { self.ticks.iter().map(|t| t.value).collect() }

    pub fn labels(&self) -> Vec<Option<&str>> { self.ticks.iter().map(|t| t.label.as_deref()).collect() }

    pub fn first(&self) -> Option<&Tick> { self.ticks.first() }
    pub fn last(&self) -> Option<&Tick> { self.ticks.last() }

    /// Number of distinct tick values under [`NumericValue`] identity.
    pub fn distinct_count(&self) -> usize {
        self.ticks.iter().map(|t| t.value).collect::<HashSet<_>>().len()
    }
}

impl<'a> IntoIterator for &'a TickSet {
    type Item = &'a Tick;
    type IntoIter = std::slice::Iter<'a, Tick>;

    fn into_iter(self) -> Self::IntoIter { self.ticks.iter() }
}

/// Fixed-count tick generator for one primitive kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickCountGenerator<T: KindPolicy> {
    min: T,
    max: T,
    precision: Option<u32>,
}

impl<T: KindPolicy> TickCountGenerator<T> {
    pub fn new(min: T, max: T) -> Result<Self> {
        let bounds = AxisBounds::new(min.into_number().into(), max.into_number().into())?;
        Ok(Self::from_bounds(&bounds))
    }

    /// Caller guarantees `bounds.kind() == T::KIND`.
    fn from_bounds(bounds: &AxisBounds) -> Self {
        Self {
            min: T::from_number(bounds.min().number()),
            max: T::from_number(bounds.max().number()),
            precision: bounds.precision(),
        }
    }

    pub fn with_precision(mut self, precision: Option<u32>) -> Self {
        self.precision = precision;
        self
    }

    pub fn min(&self) -> T { self.min }
    pub fn max(&self) -> T { self.max }

    fn value(&self, raw: T) -> NumericValue {
        NumericValue::new(raw.into_number()).with_precision(self.precision)
    }

    pub fn tick_length(&self) -> T { T::tick_length(T::span(self.min, self.max)) }

    /// Boundaries plus `effective` interior ticks placed linearly
    /// (`min + i * span / (effective + 1)`) or logarithmically
    /// (`min + (10^(i / (effective + 1)) - 1) / 9 * span`).
    pub fn generate(&self, config: &TickGenerationConfig) -> TickSet {
        let span = T::span(self.min, self.max);
        let requested = config.interior_count();
        let effective = T::interior_count(span, requested);
        if effective != requested {
            debug!(kind = %T::KIND, requested, effective, ?span, "interior tick count clamped to span");
        }

        // A clamped integral range emits every integer in [min, max], log or not.
        let log_scaled = config.is_log_scaled() && effective == requested;
        let span = T::span_to_f64(span);
        let divisions = effective as f64 + 1.0;
        let step = span / divisions;

        let mut ticks = Vec::with_capacity(effective + 2);
        ticks.push(Tick { value: self.value(self.min), label: Some(T::boundary_label(self.min)) });
        for i in 1..=effective {
            let offset = if log_scaled {
                (10f64.powf(i as f64 / divisions) - 1.0) / 9.0 * span
            } else {
                i as f64 * step
            };
            let raw = T::place(self.min, self.max, offset);
            let label = config.shows_label(i - 1).then(|| T::interior_label(raw));
            ticks.push(Tick { value: self.value(raw), label });
        }
        ticks.push(Tick { value: self.value(self.max), label: Some(T::boundary_label(self.max)) });

        trace!(kind = %T::KIND, count = ticks.len(), log = config.is_log_scaled(), "generated ticks");
        TickSet { kind: T::KIND, ticks }
    }
}

/// Tick generator dispatched once, at construction, on the bounds' kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickGenerator {
    Int8(TickCountGenerator<i8>),
    Int16(TickCountGenerator<i16>),
    Int32(TickCountGenerator<i32>),
    Int64(TickCountGenerator<i64>),
    Float32(TickCountGenerator<f32>),
    Float64(TickCountGenerator<f64>),
}

impl TickGenerator {
    pub fn new(bounds: &AxisBounds) -> Self {
        match bounds.kind() {
            NumericKind::Int8 => TickGenerator::Int8(TickCountGenerator::from_bounds(bounds)),
            NumericKind::Int16 => TickGenerator::Int16(TickCountGenerator::from_bounds(bounds)),
            NumericKind::Int32 => TickGenerator::Int32(TickCountGenerator::from_bounds(bounds)),
            NumericKind::Int64 => TickGenerator::Int64(TickCountGenerator::from_bounds(bounds)),
            NumericKind::Float32 => TickGenerator::Float32(TickCountGenerator::from_bounds(bounds)),
            NumericKind::Float64 => TickGenerator::Float64(TickCountGenerator::from_bounds(bounds)),
        }
    }

    /// Generator for the kind of `sample`; `bounds` must be of the same kind.
    pub fn for_sample(sample: &NumericValue, bounds: &AxisBounds) -> Result<Self> {
        if sample.kind() != bounds.kind() {
            return Err(AxisError::KindMismatch { expected: sample.kind(), found: bounds.kind() });
        }
        Ok(Self::new(bounds))
    }

    /// Generator for a kind named at runtime (`"int16"`, `"double"`, ...).
    /// Both bounds are parsed as that kind.
    pub fn for_kind_name(kind: &str, min: &str, max: &str) -> Result<Self> {
        let kind: NumericKind = kind.parse()?;
        let bounds = AxisBounds::new(kind.parse_value(min)?, kind.parse_value(max)?)?;
        Ok(Self::new(&bounds))
    }

    pub fn kind(&self) -> NumericKind {
        match self {
            TickGenerator::Int8(_) => NumericKind::Int8,
            TickGenerator::Int16(_) => NumericKind::Int16,
            TickGenerator::Int32(_) => NumericKind::Int32,
            TickGenerator::Int64(_) => NumericKind::Int64,
            TickGenerator::Float32(_) => NumericKind::Float32,
            TickGenerator::Float64(_) => NumericKind::Float64,
        }
    }

    pub fn generate(&self, config: &TickGenerationConfig) -> TickSet {
        match self {
            TickGenerator::Int8(g) => g.generate(config),
            TickGenerator::Int16(g) => g.generate(config),
            TickGenerator::Int32(g) => g.generate(config),
            TickGenerator::Int64(g) => g.generate(config),
            TickGenerator::Float32(g) => g.generate(config),
            TickGenerator::Float64(g) => g.generate(config),
        }
    }

    /// Grid-line spacing hint: 5% of the span (integral kinds: floored, at least 1).
    pub fn tick_length(&self) -> NumericValue {
        match self {
            TickGenerator::Int8(g) => g.value(g.tick_length()),
            TickGenerator::Int16(g) => g.value(g.tick_length()),
            TickGenerator::Int32(g) => g.value(g.tick_length()),
            TickGenerator::Int64(g) => g.value(g.tick_length()),
            TickGenerator::Float32(g) => g.value(g.tick_length()),
            TickGenerator::Float64(g) => g.value(g.tick_length()),
        }
    }
}

/// Generate the tick set for `bounds` under `config`.
pub fn generate_ticks(bounds: &AxisBounds, config: &TickGenerationConfig) -> TickSet {
    TickGenerator::new(bounds).generate(config)
}
