//! Container layout strategies

use crate::{
    child_constraint, resolve_desired_size, Axis, Constraint, Frame, IntSize, LayoutParams,
};

/// Children of a container as seen during the measure pass.
///
/// Indices follow insertion order.
pub trait MeasureScope {
    /// Number of children in the container.
    fn child_count(&self) -> usize;

    /// Layout params of the child at `index`.
    fn child_params(&self, index: usize) -> LayoutParams;

    /// Measures the child at `index` and returns its measured size.
    fn measure_child(&mut self, index: usize, width: Constraint, height: Constraint) -> IntSize;
}

/// Children of a container as seen during the layout pass.
pub trait PlacementScope {
    /// Number of children in the container.
    fn child_count(&self) -> usize;

    /// Size the child at `index` got in the last measure pass.
    fn child_size(&self, index: usize) -> IntSize;

    /// Lays out the child at `index` in the container's local coordinates.
    fn place_child(&mut self, index: usize, frame: Frame);
}

/// Policy that measures and places the children of a container.
pub trait LayoutStrategy {
    /// Measures every child once, in order, and returns the container's size.
    fn measure_children(
        &self,
        scope: &mut dyn MeasureScope,
        width: Constraint,
        height: Constraint,
    ) -> IntSize;

    /// Places every child once, in order, inside `frame`.
    fn place_children(&self, scope: &mut dyn PlacementScope, frame: Frame);

    fn debug_name(&self) -> &str {
        "LayoutStrategy"
    }
}

/// Stacks children top to bottom.
///
/// The container is as wide as its widest child and as tall as all children
/// together, before its own constraint is applied. Children sit at the left
/// edge with no spacing between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerticalStack;

impl VerticalStack {
    /// Axis children are stacked along.
    pub const MAIN_AXIS: Axis = Axis::Vertical;

    pub fn new() -> Self {
        Self
    }
}

impl LayoutStrategy for VerticalStack {
    fn measure_children(
        &self,
        scope: &mut dyn MeasureScope,
        width: Constraint,
        height: Constraint,
    ) -> IntSize {
        let mut max_child_width = 0u32;
        let mut total_child_height = 0u32;

        for index in 0..scope.child_count() {
            let params = scope.child_params(index);
            let child_width = child_constraint(width, params.get(Self::MAIN_AXIS.cross_axis()));
            let child_height = child_constraint(height, params.get(Self::MAIN_AXIS));

            let size = scope.measure_child(index, child_width, child_height);
            max_child_width = max_child_width.max(size.width);
            total_child_height = total_child_height.saturating_add(size.height);
        }

        IntSize::new(
            resolve_desired_size(max_child_width, width),
            resolve_desired_size(total_child_height, height),
        )
    }

    fn place_children(&self, scope: &mut dyn PlacementScope, _frame: Frame) {
        let mut cursor = 0i32;
        for index in 0..scope.child_count() {
            let size = scope.child_size(index);
            let frame = Frame::from_origin_size(0, cursor, size);
            scope.place_child(index, frame);
            cursor = frame.bottom;
        }
    }

    fn debug_name(&self) -> &str {
        "VerticalStack"
    }
}

#[cfg(test)]
#[path = "tests/strategy_tests.rs"]
mod tests;
