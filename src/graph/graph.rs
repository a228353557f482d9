use crate::error::{GraphError, GraphResult};
use crate::graph::edge::{Edge, EdgeId};
use crate::graph::node::{Node, NodeId, NodeKind};
use crate::graph::wiring;
use crate::participants::factory::{self, MIN_PARTICIPANTS, ParticipantInput};
use std::collections::BTreeMap;
use tracing::info;

/// The gift network: a source, a sink and the participants between them.
///
/// Edges live in a single arena; node adjacency maps only reference them by id.
#[derive(Debug, Clone)]
pub struct Graph {
    source: Node,
    sink: Node,
    participants: BTreeMap<NodeId, Node>,
    edges: Vec<Edge>,
    /// id of `edges[0]`, advanced on every reset so ids are never handed out twice
    edge_base: usize,
}

/// Builds participants from `input` and wires the full network.
pub fn build_graph(input: &ParticipantInput) -> GraphResult<Graph> {
    let participants = factory::build_participants(input)?;
    Graph::assemble(participants)
}

fn check_participants(participants: &BTreeMap<NodeId, Node>) -> GraphResult<()> {
    if participants.len() < MIN_PARTICIPANTS {
        return Err(GraphError::invalid_input(format!(
            "need at least {} participants, got {}",
            MIN_PARTICIPANTS,
            participants.len()
        )));
    }
    for (key, node) in participants {
        if *key != node.id() {
            return Err(GraphError::invalid_input(format!(
                "participant stored under id {} reports id {}",
                key,
                node.id()
            )));
        }
        if !key.is_participant() {
            return Err(GraphError::invalid_input(format!(
                "participant id {} is not a positive integer",
                key
            )));
        }
        if node.kind() != NodeKind::Participant {
            return Err(GraphError::invalid_input(format!(
                "node {} is a {:?}, not a participant",
                key,
                node.kind()
            )));
        }
    }
    Ok(())
}

impl Graph {
    /// Wires `participants` between a fresh source and sink.
    ///
    /// Every key must equal its node's id, be positive and belong to a
    /// `Participant` node; anything else is rejected as invalid input.
    pub fn assemble(participants: BTreeMap<NodeId, Node>) -> GraphResult<Self> {
        check_participants(&participants)?;
        let mut graph = Self {
            source: Node::source(),
            sink: Node::sink(),
            participants,
            edges: Vec::new(),
            edge_base: 0,
        };
        wiring::initialize_edges(&mut graph)?;
        info!(
            participants = graph.participant_count(),
            edges = graph.edge_count(),
            "gift network assembled"
        );
        Ok(graph)
    }

    pub fn source(&self) -> &Node {
        &self.source
    }

    pub fn sink(&self) -> &Node {
        &self.sink
    }

    /// Participants in ascending id order.
    pub fn participants(&self) -> impl Iterator<Item = &Node> {
        self.participants.values()
    }

    pub fn participant_ids(&self) -> Vec<NodeId> {
        self.participants.keys().copied().collect()
    }

    pub fn participant(&self, id: NodeId) -> Option<&Node> {
        self.participants.get(&id)
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        match id {
            NodeId::SOURCE => Some(&self.source),
            NodeId::SINK => Some(&self.sink),
            _ => self.participants.get(&id),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        match id {
            NodeId::SOURCE => Some(&mut self.source),
            NodeId::SINK => Some(&mut self.sink),
            _ => self.participants.get_mut(&id),
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_by_id(&self, id: EdgeId) -> Option<&Edge> {
        id.index()
            .checked_sub(self.edge_base)
            .and_then(|i| self.edges.get(i))
    }

    /// Mutable access for flow solvers updating used capacity.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        id.index()
            .checked_sub(self.edge_base)
            .and_then(|i| self.edges.get_mut(i))
    }

    /// The directed edge `from -> to`, if one exists.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        self.node(from)
            .and_then(|n| n.edge_to(to))
            .and_then(|id| self.edge_by_id(id))
    }

    /// The single edge joining two participants, whichever way it points.
    pub fn peer_edge(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.edge_between(a, b).or_else(|| self.edge_between(b, a))
    }

    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.node(id)
            .into_iter()
            .flat_map(|n| n.outgoing().values())
            .filter_map(move |e| self.edge_by_id(*e))
    }

    pub fn incoming(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.node(id)
            .into_iter()
            .flat_map(|n| n.incoming().values())
            .filter_map(move |e| self.edge_by_id(*e))
    }

    /// Upper bound on the flow the source can push into the network.
    pub fn total_supply(&self) -> u32 {
        self.outgoing(NodeId::SOURCE).map(|e| e.capacity()).sum()
    }

    /// Drops every edge and empties every adjacency map.
    pub(crate) fn reset_edges(&mut self) {
        self.edge_base += self.edges.len();
        self.edges.clear();
        self.source.clear_adjacency();
        self.sink.clear_adjacency();
        self.participants
            .values_mut()
            .for_each(|p| p.clear_adjacency());
    }

    /// Adds an edge to the arena and registers it on both endpoints.
    pub(crate) fn connect(
        &mut self,
        capacity: u32,
        from: NodeId,
        to: NodeId,
        note: String,
    ) -> GraphResult<EdgeId> {
        if from == to || self.node(from).is_none() || self.node(to).is_none() {
            return Err(GraphError::InternalInconsistency { from, to });
        }
        let id = EdgeId(self.edge_base + self.edges.len());
        self.edges.push(Edge::new(id, capacity, from, to, note));
        if let Some(n) = self.node_mut(from) {
            n.link_out(to, id);
        }
        if let Some(n) = self.node_mut(to) {
            n.link_in(from, id);
        }
        Ok(id)
    }

    pub fn kind_of(&self, id: NodeId) -> Option<NodeKind> {
        self.node(id).map(|n| n.kind())
    }
}
