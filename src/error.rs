//! Failures raised while building or updating the gift network.

use crate::graph::edge::EdgeId;
use crate::graph::node::NodeId;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The participant input cannot form a network.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Adjacency maps disagree about an edge. Always a bug, never a usage error.
    #[error("internal inconsistency: adjacency of {from} -> {to} is inconsistent")]
    InternalInconsistency { from: NodeId, to: NodeId },

    #[error("edge {edge} cannot move {requested} units of flow, only {available} available")]
    CapacityExceeded {
        edge: EdgeId,
        requested: u32,
        available: u32,
    },
}

impl GraphError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
