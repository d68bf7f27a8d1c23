// File: crates/axis-core/src/axis.rs
// Summary: Axis model: label, validated bounds, and the tick set generated for them.

use crate::error::Result;
use crate::tick::{AxisBounds, TickGenerationConfig, TickGenerator, TickSet};
use crate::types::{NumericKind, NumericValue};

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    bounds: AxisBounds,
    ticks: TickSet,
    tick_length: NumericValue,
}

impl Axis {
    pub fn new(label: impl Into<String>, bounds: AxisBounds, config: &TickGenerationConfig) -> Self {
        let generator = TickGenerator::new(&bounds);
        Self {
            label: label.into(),
            bounds,
            ticks: generator.generate(config),
            tick_length: generator.tick_length(),
        }
    }

    /// Axis spanning `samples`, which must all share one kind.
    pub fn from_samples(
        label: impl Into<String>,
        samples: &[NumericValue],
        config: &TickGenerationConfig,
    ) -> Result<Self> {
        Ok(Self::new(label, AxisBounds::from_samples(samples)?, config))
    }

    pub fn min(&self) -> NumericValue { self.bounds.min() }
    pub fn max(&self) -> NumericValue { self.bounds.max() }
    pub fn bounds(&self) -> &AxisBounds { &self.bounds }
    pub fn kind(&self) -> NumericKind { self.bounds.kind() }
    pub fn ticks(&self) -> &TickSet { &self.ticks }
    pub fn tick_length(&self) -> NumericValue { self.tick_length }
}
