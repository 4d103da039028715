//! Arena of layout nodes and the measure/layout passes that walk it.

use std::rc::Rc;
use viewtree_layout::{
    Axis, Constraint, DimensionSpec, Frame, IntSize, LayoutParams, LayoutStrategy, MeasureScope,
    PlacementScope, VerticalStack,
};

use crate::node::{ChildList, LayoutNode, NodeId, NodeKind, NodePhase};
use crate::NodeError;

/// Owns every node of one or more layout trees.
///
/// Containers refer to their children by [`NodeId`]; each node has at most
/// one parent, so the edges always form a strict ownership tree.
#[derive(Debug, Default)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a leaf node with a zero content size.
    pub fn create_node(&mut self, label: impl Into<String>) -> NodeId {
        self.insert(LayoutNode::new(label, NodeKind::Leaf))
    }

    /// Creates a container that stacks its children vertically.
    pub fn create_container(&mut self, label: impl Into<String>) -> NodeId {
        self.create_container_with(label, Rc::new(VerticalStack::new()))
    }

    pub fn create_container_with(
        &mut self,
        label: impl Into<String>,
        strategy: Rc<dyn LayoutStrategy>,
    ) -> NodeId {
        self.insert(LayoutNode::new(
            label,
            NodeKind::Container {
                children: ChildList::new(),
                strategy,
            },
        ))
    }

    fn insert(&mut self, node: LayoutNode) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(id)
    }

    pub fn get(&self, id: NodeId) -> Result<&LayoutNode, NodeError> {
        self.nodes.get(id).ok_or(NodeError::Missing { id })
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode, NodeError> {
        self.nodes.get_mut(id).ok_or(NodeError::Missing { id })
    }

    pub fn set_layout_params(&mut self, id: NodeId, params: LayoutParams) -> Result<(), NodeError> {
        self.get_mut(id)?.layout_params = Some(params);
        Ok(())
    }

    /// Sets the spec of one axis; the other axis defaults to fit content if
    /// the node had no params yet.
    pub fn set_dimension_spec(
        &mut self,
        id: NodeId,
        axis: Axis,
        spec: DimensionSpec,
    ) -> Result<(), NodeError> {
        self.get_mut(id)?
            .layout_params
            .get_or_insert_with(LayoutParams::wrap_content)
            .set(axis, spec);
        Ok(())
    }

    pub fn set_content_size(&mut self, id: NodeId, size: IntSize) -> Result<(), NodeError> {
        self.get_mut(id)?.content_size = size;
        Ok(())
    }

    /// Appends `child` to the end of `parent`'s children.
    ///
    /// A child without layout params gets fit content on both axes.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), NodeError> {
        if let Err(err) = self.check_attach(parent, child) {
            log::warn!("rejected add_child: {err}");
            return Err(err);
        }

        let child_node = &mut self.nodes[child];
        child_node.parent = Some(parent);
        child_node
            .layout_params
            .get_or_insert_with(LayoutParams::wrap_content);

        if let NodeKind::Container { children, .. } = &mut self.nodes[parent].kind {
            children.push(child);
        }
        Ok(())
    }

    fn check_attach(&self, parent: NodeId, child: NodeId) -> Result<(), NodeError> {
        let parent_node = self.get(parent)?;
        let child_node = self.get(child)?;
        if !parent_node.is_container() {
            return Err(NodeError::NotAContainer { id: parent });
        }
        if let Some(existing) = child_node.parent {
            return Err(NodeError::AlreadyAttached {
                id: child,
                parent: existing,
            });
        }
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(NodeError::Cycle { parent, child });
            }
            cursor = self.nodes[id].parent;
        }
        Ok(())
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], NodeError> {
        Ok(self.get(id)?.children())
    }

    pub fn measured_width(&self, id: NodeId) -> Result<u32, NodeError> {
        Ok(self.get(id)?.measured_width())
    }

    pub fn measured_height(&self, id: NodeId) -> Result<u32, NodeError> {
        Ok(self.get(id)?.measured_height())
    }

    pub fn frame(&self, id: NodeId) -> Result<Frame, NodeError> {
        Ok(self.get(id)?.frame())
    }

    /// Runs the measure pass on the subtree rooted at `id`.
    ///
    /// Every node in the subtree is measured exactly once and its previous
    /// measurement is overwritten.
    pub fn measure(
        &mut self,
        id: NodeId,
        width: Constraint,
        height: Constraint,
    ) -> Result<(), NodeError> {
        self.get(id)?;
        self.measure_node(id, width, height);
        Ok(())
    }

    /// Runs the layout pass on the subtree rooted at `id`, using the sizes of
    /// the last measure pass. Children are placed in their parent's local space.
    pub fn layout(
        &mut self,
        id: NodeId,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    ) -> Result<(), NodeError> {
        let node = self.get(id)?;
        if node.phase() == NodePhase::Constructed {
            log::debug!("{} laid out before it was measured", node.label());
        }
        self.layout_node(id, Frame::new(left, top, right, bottom));
        Ok(())
    }

    fn measure_node(&mut self, id: NodeId, width: Constraint, height: Constraint) -> IntSize {
        let node = &self.nodes[id];
        log::trace!(
            "{} received measure specs: width={width}, height={height}",
            node.label()
        );

        let size = match &node.kind {
            NodeKind::Leaf => node.measure_leaf(width, height),
            NodeKind::Container { children, strategy } => {
                let strategy = Rc::clone(strategy);
                let children = children.clone();
                let mut scope = ChildScope {
                    children,
                    tree: self,
                };
                strategy.measure_children(&mut scope, width, height)
            }
        };

        let node = &mut self.nodes[id];
        node.set_measured_dimension(size);
        log::trace!("{} after measure: {size}", node.label());
        size
    }

    fn layout_node(&mut self, id: NodeId, frame: Frame) {
        let node = &mut self.nodes[id];
        node.frame = frame;
        node.phase = NodePhase::LaidOut;
        log::trace!("{} laid out at {frame}", node.label());

        if let NodeKind::Container { children, strategy } = &node.kind {
            let strategy = Rc::clone(strategy);
            let children = children.clone();
            let mut scope = ChildScope {
                children,
                tree: self,
            };
            strategy.place_children(&mut scope, frame);
        }
    }
}

/// Gives a strategy access to one container's children without exposing the arena.
struct ChildScope<'a> {
    children: ChildList,
    tree: &'a mut LayoutTree,
}

impl MeasureScope for ChildScope<'_> {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_params(&self, index: usize) -> LayoutParams {
        self.tree.nodes[self.children[index]].effective_params()
    }

    fn measure_child(&mut self, index: usize, width: Constraint, height: Constraint) -> IntSize {
        self.tree.measure_node(self.children[index], width, height)
    }
}

impl PlacementScope for ChildScope<'_> {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_size(&self, index: usize) -> IntSize {
        self.tree.nodes[self.children[index]].measured_size()
    }

    fn place_child(&mut self, index: usize, frame: Frame) {
        self.tree.layout_node(self.children[index], frame);
    }
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
