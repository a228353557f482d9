use crate::graph::edge::EdgeId;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub i64);

impl NodeId {
    pub const SOURCE: NodeId = NodeId(-1);
    pub const SINK: NodeId = NodeId(-2);

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn is_participant(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Source,
    Sink,
    Participant,
}

/// A vertex of the gift network.
///
/// Adjacency maps hold ids into the graph's edge arena, keyed by the node on
/// the other end of the edge.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    name: String,
    outgoing: BTreeMap<NodeId, EdgeId>,
    incoming: BTreeMap<NodeId, EdgeId>,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            outgoing: BTreeMap::new(),
            incoming: BTreeMap::new(),
        }
    }

    pub fn source() -> Self {
        Self::new(NodeId::SOURCE, NodeKind::Source, "Source")
    }

    pub fn sink() -> Self {
        Self::new(NodeId::SINK, NodeKind::Sink, "Sink")
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// destination id -> edge leaving this node
    pub fn outgoing(&self) -> &BTreeMap<NodeId, EdgeId> {
        &self.outgoing
    }

    /// origin id -> edge entering this node
    pub fn incoming(&self) -> &BTreeMap<NodeId, EdgeId> {
        &self.incoming
    }

    pub fn edge_to(&self, to: NodeId) -> Option<EdgeId> {
        self.outgoing.get(&to).copied()
    }

    pub fn edge_from(&self, from: NodeId) -> Option<EdgeId> {
        self.incoming.get(&from).copied()
    }

    pub fn degree(&self) -> (usize, usize) {
        (self.outgoing.len(), self.incoming.len())
    }

    pub(crate) fn clear_adjacency(&mut self) {
        self.outgoing.clear();
        self.incoming.clear();
    }

    pub(crate) fn link_out(&mut self, to: NodeId, edge: EdgeId) {
        self.outgoing.insert(to, edge);
    }

    pub(crate) fn link_in(&mut self, from: NodeId, edge: EdgeId) {
        self.incoming.insert(from, edge);
    }
}
