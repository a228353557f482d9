use crate::graph::graph::Graph;
use crate::graph::node::NodeId;

#[derive(Debug, PartialEq)]
pub struct GraphSummary {
    participants: usize,
    edges: usize,
    source_edges: usize,
    sink_edges: usize,
    peer_edges: usize,
    total_supply: u32,
}

impl GraphSummary {
    pub fn from_graph(graph: &Graph) -> Self {
        let source_edges = graph.outgoing(NodeId::SOURCE).count();
        let sink_edges = graph.incoming(NodeId::SINK).count();
        Self {
            participants: graph.participant_count(),
            edges: graph.edge_count(),
            source_edges,
            sink_edges,
            peer_edges: graph.edge_count() - source_edges - sink_edges,
            total_supply: graph.total_supply(),
        }
    }

    pub fn participants(&self) -> usize {
        self.participants
    }

    pub fn edges(&self) -> usize {
        self.edges
    }

    pub fn source_edges(&self) -> usize {
        self.source_edges
    }

    pub fn sink_edges(&self) -> usize {
        self.sink_edges
    }

    pub fn peer_edges(&self) -> usize {
        self.peer_edges
    }

    pub fn total_supply(&self) -> u32 {
        self.total_supply
    }
}

fn node_label(graph: &Graph, id: NodeId) -> String {
    graph
        .node(id)
        .map(|n| n.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

pub fn render(graph: &Graph, with_edges: bool) -> String {
    let summary = GraphSummary::from_graph(graph);
    let mut out = format!(
        "{} people, {} edges ({} from source, {} to sink, {} between people), supply {}\n",
        summary.participants(),
        summary.edges(),
        summary.source_edges(),
        summary.sink_edges(),
        summary.peer_edges(),
        summary.total_supply(),
    );

    for p in graph.participants() {
        let (out_deg, in_deg) = p.degree();
        out.push_str(&format!(
            "{:>4}  {:<20} out {:>3}  in {:>3}\n",
            p.id(),
            p.name(),
            out_deg,
            in_deg
        ));
    }

    if with_edges {
        for e in graph.edges() {
            out.push_str(&format!(
                "{} -> {}  {}/{}  {}\n",
                node_label(graph, e.from()),
                node_label(graph, e.to()),
                e.used_capacity(),
                e.capacity(),
                e.note()
            ));
        }
    }
    out
}
