//! Size resolution rules shared by leaves and containers.
//!
//! Three small functions carry the whole protocol:
//!
//! - [`resolve_size`] reconciles what a node asks for with what its parent allows.
//! - [`resolve_desired_size`] does the same for a container whose wish is the
//!   aggregate of its children rather than its own [`DimensionSpec`].
//! - [`child_constraint`] turns a parent's constraint and a child's spec into the
//!   constraint the child is measured with.

use crate::{Constraint, DimensionSpec, MeasureMode};

/// Resolves one axis of a node from its content size, its spec and the
/// constraint its parent passed down.
pub fn resolve_size(content_size: u32, spec: DimensionSpec, constraint: Constraint) -> u32 {
    let size = constraint.size();
    match (spec, constraint.mode()) {
        (_, MeasureMode::Exactly) => size,
        (DimensionSpec::FillParent, MeasureMode::AtMost) => size,
        (DimensionSpec::FillParent, MeasureMode::Unspecified) => content_size,
        (DimensionSpec::FitContent, MeasureMode::AtMost) => content_size.min(size),
        (DimensionSpec::FitContent, MeasureMode::Unspecified) => content_size,
        (DimensionSpec::Exact(value), MeasureMode::AtMost) => value.min(size),
        (DimensionSpec::Exact(value), MeasureMode::Unspecified) => value,
    }
}

/// Resolves a container's size from the size its children add up to.
pub fn resolve_desired_size(desired: u32, constraint: Constraint) -> u32 {
    match constraint.mode() {
        MeasureMode::Exactly => constraint.size(),
        MeasureMode::AtMost => desired.min(constraint.size()),
        MeasureMode::Unspecified => desired,
    }
}

/// Derives the constraint a child is measured with.
///
/// A fixed-size child is always told `Exactly` its own value. Fill and fit
/// children inherit the parent's size, tightened to `Exactly` or loosened to
/// `AtMost` when the parent is bounded, and are left unbounded otherwise.
pub fn child_constraint(parent: Constraint, child_spec: DimensionSpec) -> Constraint {
    match (child_spec, parent.is_bounded()) {
        (DimensionSpec::Exact(value), _) => Constraint::exactly(value),
        (DimensionSpec::FillParent, true) => Constraint::exactly(parent.size()),
        (DimensionSpec::FitContent, true) => Constraint::at_most(parent.size()),
        (DimensionSpec::FillParent | DimensionSpec::FitContent, false) => {
            Constraint::unspecified(0)
        }
    }
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
