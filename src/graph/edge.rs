use crate::error::{GraphError, GraphResult};
use crate::graph::node::NodeId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    /// capacity > 0
    capacity: u32,
    /// 0 <= used_capacity <= capacity
    used_capacity: u32,
    from: NodeId,
    to: NodeId,
    note: String,
}

impl Edge {
    pub const TERMINAL_CAPACITY: u32 = 12;
    pub const PEER_CAPACITY: u32 = 4;

    pub fn new(id: EdgeId, capacity: u32, from: NodeId, to: NodeId, note: impl Into<String>) -> Self {
        Self {
            id,
            capacity,
            used_capacity: 0,
            from,
            to,
            note: note.into(),
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn used_capacity(&self) -> u32 {
        self.used_capacity
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn residual(&self) -> u32 {
        self.capacity - self.used_capacity
    }

    pub fn is_saturated(&self) -> bool {
        self.used_capacity == self.capacity
    }

    /// Pushes `amount` more flow along the edge. Leaves the edge untouched on error.
    pub fn commit_flow(&mut self, amount: u32) -> GraphResult<()> {
        if amount > self.residual() {
            return Err(GraphError::CapacityExceeded {
                edge: self.id,
                requested: amount,
                available: self.residual(),
            });
        }
        self.used_capacity += amount;
        Ok(())
    }

    pub fn release_flow(&mut self, amount: u32) -> GraphResult<()> {
        if amount > self.used_capacity {
            return Err(GraphError::CapacityExceeded {
                edge: self.id,
                requested: amount,
                available: self.used_capacity,
            });
        }
        self.used_capacity -= amount;
        Ok(())
    }
}
