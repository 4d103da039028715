//! Requested sizes a node declares for each axis

use crate::Axis;
use std::fmt;

/// What a node wants its size to be along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DimensionSpec {
    /// A fixed size, still overridden by a parent that dictates `Exactly`.
    Exact(u32),
    /// Consume all the space the parent offers.
    FillParent,
    /// Size to the node's own content, capped by any parent bound.
    #[default]
    FitContent,
}

impl fmt::Display for DimensionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionSpec::Exact(value) => write!(f, "{value}"),
            DimensionSpec::FillParent => f.write_str("MP"),
            DimensionSpec::FitContent => f.write_str("WC"),
        }
    }
}

/// A pair of dimension specs, one per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayoutParams {
    pub width: DimensionSpec,
    pub height: DimensionSpec,
}

impl LayoutParams {
    pub const fn new(width: DimensionSpec, height: DimensionSpec) -> Self {
        Self { width, height }
    }

    /// FitContent on both axes; what a container gives a child attached without params.
    pub const fn wrap_content() -> Self {
        Self::new(DimensionSpec::FitContent, DimensionSpec::FitContent)
    }

    pub fn get(&self, axis: Axis) -> DimensionSpec {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn set(&mut self, axis: Axis, spec: DimensionSpec) {
        match axis {
            Axis::Horizontal => self.width = spec,
            Axis::Vertical => self.height = spec,
        }
    }
}

impl fmt::Display for LayoutParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
