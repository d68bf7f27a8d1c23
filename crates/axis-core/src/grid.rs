// File: crates/axis-core/src/grid.rs
// Summary: Wireframe grid derived from the tick sets of three axes, plus spacing helpers.

use tracing::trace;

use crate::axis::Axis;
use crate::geometry::Point3;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub start: Point3,
    pub end: Point3,
}

impl GridLine {
    /// `[x0, y0, z0, x1, y1, z1]`.
    pub fn to_array(&self) -> [f64; 6] {
        let [x0, y0, z0] = self.start.to_array();
        let [x1, y1, z1] = self.end.to_array();
        [x0, y0, z0, x1, y1, z1]
    }
}

/// Grid lines for an x/y/z axis triple.
///
/// For axis `a` and each of its tick values `v`, two segments run from the
/// global min corner to the global max corner with coordinate `a` pinned to
/// `v` at both ends. The first segment also pins coordinate `(a + 1) % 3` of
/// its end point to that axis's minimum, the second pins `(a + 2) % 3`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    lines: Vec<GridLine>,
}

impl Grid {
    pub fn from_ticks(axes: [&Axis; 3]) -> Self {
        let mins = axes.map(|a| a.min().as_f64());
        let maxs = axes.map(|a| a.max().as_f64());
        let total: usize = axes.iter().map(|a| a.ticks().len()).sum();
        let mut lines = Vec::with_capacity(2 * total);

        for (a, axis) in axes.iter().enumerate() {
            for tick in axis.ticks() {
                let v = tick.value.as_f64();
                for other in [(a + 1) % 3, (a + 2) % 3] {
                    let mut start = mins;
                    let mut end = maxs;
                    start[a] = v;
                    end[a] = v;
                    end[other] = mins[other];
                    lines.push(GridLine { start: Point3::from_array(start), end: Point3::from_array(end) });
                }
            }
        }

        trace!(lines = lines.len(), "derived grid from ticks");
        Self { lines }
    }

    pub fn lines(&self) -> &[GridLine] { &self.lines }
    pub fn len(&self) -> usize { self.lines.len() }
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Six scalars per line, in line order, ready for a vertex buffer.
    pub fn to_vertices(&self) -> Vec<f64> {
        self.lines.iter().flat_map(|l| l.to_array()).collect()
    }
}

pub fn grid_from_ticks(axes: [&Axis; 3]) -> Vec<GridLine> { Grid::from_ticks(axes).lines }
