// File: crates/axis-core/src/lib.rs
// Summary: Core library entry point; exports the numeric kinds, tick generation, grid and color API.

//! Cross-kind numeric axis engine for 3D scatter views.
//!
//! Samples arrive as one of six primitive kinds ([`NumericKind`]). Bounds of a
//! kind select a [`TickGenerator`], which places a fixed count of ticks
//! linearly or logarithmically; three axes yield a wireframe [`Grid`], and a
//! [`ColorProvider`] maps sample values to colors.

pub mod axis;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod num;
pub mod policy;
pub mod series;
pub mod theme;
pub mod tick;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use error::{AxisError, Result};
pub use geometry::Point3;
pub use grid::{grid_from_ticks, Grid, GridLine};
pub use policy::KindPolicy;
pub use series::{Column, DataPoint, DataSet};
pub use theme::{Color, ColorProvider, ColorScale, ColorScheme, HueColorProvider};
pub use tick::{generate_ticks, AxisBounds, Tick, TickCountGenerator, TickGenerationConfig, TickGenerator, TickSet};
pub use types::{Number, NumericKind, NumericValue};
pub use view::ViewState;
