//! Node tree and two-pass measure/layout for viewtree
//!
//! Nodes live in a [`LayoutTree`] arena and are addressed by [`NodeId`].
//! A caller builds the tree, attaches [`LayoutParams`], then runs
//! [`LayoutTree::measure`] followed by [`LayoutTree::layout`] on the root.

mod debug;
mod error;
mod node;
mod tree;

pub use debug::*;
pub use error::*;
pub use node::*;
pub use tree::*;

pub use viewtree_layout::{
    Axis, Constraint, ConstraintError, DimensionSpec, Frame, IntSize, LayoutParams,
    LayoutStrategy, MeasureMode, VerticalStack,
};

pub mod prelude {
    pub use crate::node::{LayoutNode, NodeId, NodePhase};
    pub use crate::tree::LayoutTree;
    pub use viewtree_layout::prelude::*;
}
