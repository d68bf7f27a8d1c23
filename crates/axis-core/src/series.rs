// File: crates/axis-core/src/series.rs
// Summary: Data set model: 3D sample points with a mapped value, one kind per column.

use std::collections::HashSet;

use crate::error::{AxisError, Result};
use crate::tick::AxisBounds;
use crate::types::{NumericKind, NumericValue};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    X,
    Y,
    Z,
    Value,
}

impl Column {
    pub const AXES: [Column; 3] = [Column::X, Column::Y, Column::Z];

    const fn index(self) -> usize {
        match self {
            Column::X => 0,
            Column::Y => 1,
            Column::Z => 2,
            Column::Value => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DataPoint {
    pub x: NumericValue,
    pub y: NumericValue,
    pub z: NumericValue,
    /// Sample mapped to color.
    pub value: NumericValue,
}

impl DataPoint {
    pub fn new(x: NumericValue, y: NumericValue, z: NumericValue, value: NumericValue) -> Self {
        Self { x, y, z, value }
    }

    pub fn get(&self, column: Column) -> NumericValue {
        match column {
            Column::X => self.x,
            Column::Y => self.y,
            Column::Z => self.z,
            Column::Value => self.value,
        }
    }

    fn kinds(&self) -> [NumericKind; 4] { [self.x.kind(), self.y.kind(), self.z.kind(), self.value.kind()] }
}

/// Points whose columns each keep one kind (the first point's).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    points: Vec<DataPoint>,
}

impl DataSet {
    pub fn new() -> Self { Self::default() }

    pub fn from_points(points: impl IntoIterator<Item = DataPoint>) -> Result<Self> {
        let mut set = Self::new();
        for p in points {
            set.try_push(p)?;
        }
        Ok(set)
    }

    /// Append `point`, rejecting a column whose kind differs from earlier points.
    pub fn try_push(&mut self, point: DataPoint) -> Result<()> {
        if let Some(first) = self.points.first() {
            let expected = first.kinds();
            let found = point.kinds();
            if let Some(i) = (0..4).find(|&i| expected[i] != found[i]) {
                return Err(AxisError::KindMismatch { expected: expected[i], found: found[i] });
            }
        }
        self.points.push(point);
        Ok(())
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> &[DataPoint] { &self.points }

    pub fn kind(&self, column: Column) -> Option<NumericKind> {
        self.points.first().map(|p| p.kinds()[column.index()])
    }

    pub fn column(&self, column: Column) -> Vec<NumericValue> {
        self.points.iter().map(|p| p.get(column)).collect()
    }

    pub fn column_bounds(&self, column: Column) -> Result<AxisBounds> {
        AxisBounds::from_samples(&self.column(column))
    }

    /// Points with duplicates removed under precision-aware identity, first occurrence kept.
    pub fn distinct_points(&self) -> Vec<DataPoint> {
        let mut seen = HashSet::with_capacity(self.points.len());
        self.points.iter().copied().filter(|p| seen.insert(*p)).collect()
    }
}
