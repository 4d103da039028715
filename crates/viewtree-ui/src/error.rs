use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    Missing { id: NodeId },
    NotAContainer { id: NodeId },
    AlreadyAttached { id: NodeId, parent: NodeId },
    Cycle { parent: NodeId, child: NodeId },
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeError::Missing { id } => write!(f, "node {id} missing"),
            NodeError::NotAContainer { id } => write!(f, "node {id} cannot hold children"),
            NodeError::AlreadyAttached { id, parent } => {
                write!(f, "node {id} already attached to {parent}")
            }
            NodeError::Cycle { parent, child } => {
                write!(f, "attaching {child} under {parent} would form a cycle")
            }
        }
    }
}

impl std::error::Error for NodeError {}
