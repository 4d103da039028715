//! Layout contracts & policies for viewtree

mod axis;
mod constraint;
mod dimension;
mod geometry;
mod resolve;
mod strategy;

pub use axis::*;
pub use constraint::*;
pub use dimension::*;
pub use geometry::*;
pub use resolve::*;
pub use strategy::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::constraint::{Constraint, MeasureMode};
    pub use crate::dimension::{DimensionSpec, LayoutParams};
    pub use crate::geometry::{Frame, IntSize};
    pub use crate::strategy::{LayoutStrategy, MeasureScope, PlacementScope, VerticalStack};
}
