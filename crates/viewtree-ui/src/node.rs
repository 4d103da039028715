//! Single layout participants stored in the tree arena

use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;
use viewtree_layout::{
    resolve_size, Axis, Constraint, Frame, IntSize, LayoutParams, LayoutStrategy,
};

pub type NodeId = usize;

/// Where a node is in its measure/layout lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodePhase {
    #[default]
    Constructed,
    Measured,
    LaidOut,
}

pub(crate) type ChildList = SmallVec<[NodeId; 4]>;

pub(crate) enum NodeKind {
    Leaf,
    Container {
        children: ChildList,
        strategy: Rc<dyn LayoutStrategy>,
    },
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Leaf => f.write_str("Leaf"),
            NodeKind::Container { children, strategy } => f
                .debug_struct("Container")
                .field("children", children)
                .field("strategy", &strategy.debug_name())
                .finish(),
        }
    }
}

#[derive(Debug)]
pub struct LayoutNode {
    label: String,
    pub(crate) layout_params: Option<LayoutParams>,
    pub(crate) content_size: IntSize,
    pub(crate) measured: IntSize,
    pub(crate) frame: Frame,
    pub(crate) phase: NodePhase,
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

impl LayoutNode {
    pub(crate) fn new(label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            label: label.into(),
            layout_params: None,
            content_size: IntSize::ZERO,
            measured: IntSize::ZERO,
            frame: Frame::default(),
            phase: NodePhase::Constructed,
            parent: None,
            kind,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Layout params as set by the caller, `None` if never set.
    pub fn layout_params(&self) -> Option<LayoutParams> {
        self.layout_params
    }

    /// Layout params used for measurement; unset params mean fit content.
    pub fn effective_params(&self) -> LayoutParams {
        self.layout_params.unwrap_or_else(LayoutParams::wrap_content)
    }

    /// Size a leaf takes when nothing constrains it.
    pub fn content_size(&self) -> IntSize {
        self.content_size
    }

    pub fn measured_size(&self) -> IntSize {
        self.measured
    }

    pub fn measured_width(&self) -> u32 {
        self.measured.width
    }

    pub fn measured_height(&self) -> u32 {
        self.measured.height
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn phase(&self) -> NodePhase {
        self.phase
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Container { .. })
    }

    /// Children in insertion order; empty for leaves.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Leaf => &[],
            NodeKind::Container { children, .. } => children,
        }
    }

    /// Measures a leaf against its own content size.
    pub(crate) fn measure_leaf(&self, width: Constraint, height: Constraint) -> IntSize {
        let params = self.effective_params();
        let resolve = |axis: Axis, constraint: Constraint| {
            resolve_size(self.content_size.get(axis), params.get(axis), constraint)
        };
        IntSize::new(
            resolve(Axis::Horizontal, width),
            resolve(Axis::Vertical, height),
        )
    }

    pub(crate) fn set_measured_dimension(&mut self, size: IntSize) {
        self.measured = size;
        self.phase = NodePhase::Measured;
    }
}
