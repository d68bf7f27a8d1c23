// File: crates/axis-core/src/view.rs
// Summary: View state: data extent of a 3D point cloud and the axes, grid and colors derived from it.

use crate::axis::Axis;
use crate::error::Result;
use crate::grid::Grid;
use crate::series::{Column, DataSet};
use crate::theme::ColorScale;
use crate::tick::{AxisBounds, TickGenerationConfig};

pub const AXIS_LABELS: [&str; 3] = ["X", "Y", "Z"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x: AxisBounds,
    pub y: AxisBounds,
    pub z: AxisBounds,
    pub value: AxisBounds,
}

impl ViewState {
    /// Extent of every column; fails on an empty data set.
    pub fn from_dataset(data: &DataSet) -> Result<Self> {
        Ok(Self {
            x: data.column_bounds(Column::X)?,
            y: data.column_bounds(Column::Y)?,
            z: data.column_bounds(Column::Z)?,
            value: data.column_bounds(Column::Value)?,
        })
    }

    pub fn axes(&self, config: &TickGenerationConfig) -> [Axis; 3] {
        [
            Axis::new(AXIS_LABELS[0], self.x, config),
            Axis::new(AXIS_LABELS[1], self.y, config),
            Axis::new(AXIS_LABELS[2], self.z, config),
        ]
    }

    pub fn grid(&self, config: &TickGenerationConfig) -> Grid {
        let [x, y, z] = self.axes(config);
        Grid::from_ticks([&x, &y, &z])
    }

    pub fn color_scale(&self) -> ColorScale { ColorScale::from_bounds(&self.value) }
}
