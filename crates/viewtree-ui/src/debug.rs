//! Debug utilities for inspecting a measured and laid-out tree
//!
//! # Usage
//!
//! ```rust,ignore
//! use viewtree_ui::{format_layout_tree, log_layout_tree};
//!
//! tree.measure(root, Constraint::exactly(1080), Constraint::at_most(1920))?;
//! tree.layout(root, 0, 0, 1080, 1920)?;
//! log_layout_tree(&tree, root)?;
//! ```

use std::fmt::{self, Write};
use viewtree_layout::{Frame, IntSize, LayoutParams};

use crate::{LayoutTree, NodeError, NodeId};

/// State of one node as seen by a pre-order walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub depth: usize,
    pub label: String,
    pub layout_params: Option<LayoutParams>,
    pub measured: IntSize,
    pub frame: Frame,
}

impl NodeSnapshot {
    /// Short form of the layout params, `N/A` when none were set.
    pub fn params_summary(&self) -> String {
        match self.layout_params {
            Some(params) => params.to_string(),
            None => "N/A".to_string(),
        }
    }
}

impl fmt::Display for NodeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (LP: {}) measured: {}, layout: {}",
            self.label,
            self.params_summary(),
            self.measured,
            self.frame
        )
    }
}

impl LayoutTree {
    /// Walks the subtree rooted at `root` depth-first, parents before children,
    /// children in insertion order.
    pub fn walk(&self, root: NodeId) -> Result<Vec<NodeSnapshot>, NodeError> {
        self.get(root)?;

        let mut snapshots = Vec::new();
        let mut stack = vec![(root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.get(id)?;
            snapshots.push(NodeSnapshot {
                id,
                depth,
                label: node.label().to_string(),
                layout_params: node.layout_params(),
                measured: node.measured_size(),
                frame: node.frame(),
            });
            stack.extend(node.children().iter().rev().map(|&child| (child, depth + 1)));
        }
        Ok(snapshots)
    }
}

/// Returns one line per node, indented two spaces per level.
pub fn format_layout_tree(tree: &LayoutTree, root: NodeId) -> Result<String, NodeError> {
    let mut output = String::new();
    for snapshot in tree.walk(root)? {
        let indent = "  ".repeat(snapshot.depth);
        writeln!(output, "{indent}{snapshot}").ok();
    }
    Ok(output)
}

/// Prints the tree rooted at `root` to stdout.
pub fn log_layout_tree(tree: &LayoutTree, root: NodeId) -> Result<(), NodeError> {
    print!("{}", format_layout_tree(tree, root)?);
    Ok(())
}

#[cfg(test)]
#[path = "tests/debug_tests.rs"]
mod tests;
