//! Builds the complete edge set of a gift network.
//!
//! Each participant receives up to [`Edge::TERMINAL_CAPACITY`] gifts from the
//! source (one a month) and gives up to the same amount to the sink. Every pair
//! of participants is joined by one edge of [`Edge::PEER_CAPACITY`] (one gift
//! a quarter).

use crate::error::{GraphError, GraphResult};
use crate::graph::edge::Edge;
use crate::graph::graph::Graph;
use crate::graph::node::NodeId;
use tracing::{debug, trace};

/// Rebuilds every edge of `graph` from scratch.
///
/// Existing edges are discarded and their ids retired. Participants are visited
/// in ascending id order, so the lower id is always the tail of a peer edge.
pub fn initialize_edges(graph: &mut Graph) -> GraphResult<()> {
    graph.reset_edges();
    wire_terminals(graph)?;
    wire_peers(graph)?;
    debug!(
        participants = graph.participant_count(),
        edges = graph.edge_count(),
        "edges initialized"
    );
    Ok(())
}

fn wire_terminals(graph: &mut Graph) -> GraphResult<()> {
    let people: Vec<(NodeId, String)> = graph
        .participants()
        .map(|p| (p.id(), p.name().to_string()))
        .collect();

    for (id, name) in people {
        graph.connect(
            Edge::TERMINAL_CAPACITY,
            NodeId::SOURCE,
            id,
            format!("Edge from source to person {}", name),
        )?;
        graph.connect(
            Edge::TERMINAL_CAPACITY,
            id,
            NodeId::SINK,
            format!("Edge from person {} to sink node", name),
        )?;
    }
    Ok(())
}

pub(crate) fn wire_peers(graph: &mut Graph) -> GraphResult<()> {
    let ids = graph.participant_ids();

    for &p1 in &ids {
        for &p2 in &ids {
            if p1 == p2 {
                continue;
            }
            let (Some(n1), Some(n2)) = (graph.participant(p1), graph.participant(p2)) else {
                return Err(GraphError::InternalInconsistency { from: p1, to: p2 });
            };
            if n1.edge_to(p2).is_some() || n2.edge_to(p1).is_some() {
                continue;
            }
            if n2.edge_from(p1).is_some() {
                return Err(GraphError::InternalInconsistency { from: p1, to: p2 });
            }
            let note = format!("Edge from person {} to person {}", n1.name(), n2.name());
            let id = graph.connect(Edge::PEER_CAPACITY, p1, p2, note)?;
            trace!(%id, from = %p1, to = %p2, "peer edge");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edge::EdgeId;
    use crate::graph::graph::build_graph;
    use crate::participants::factory::ParticipantInput;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::collections::BTreeSet;

    fn expected_edges(n: usize) -> usize {
        2 * n + n * (n - 1) / 2
    }

    fn endpoints(graph: &Graph) -> BTreeSet<(NodeId, NodeId, u32)> {
        graph
            .edges()
            .iter()
            .map(|e| (e.from(), e.to(), e.capacity()))
            .collect()
    }

    fn assert_well_formed(graph: &Graph) {
        let n = graph.participant_count();
        assert_eq!(expected_edges(n), graph.edge_count());

        for edge in graph.edges() {
            assert_ne!(edge.from(), edge.to());
            assert_eq!(0, edge.used_capacity());
            let from = graph.node(edge.from()).unwrap();
            let to = graph.node(edge.to()).unwrap();
            assert_eq!(Some(edge.id()), from.edge_to(edge.to()));
            assert_eq!(Some(edge.id()), to.edge_from(edge.from()));
        }

        let slots: usize = graph
            .participants()
            .chain([graph.source(), graph.sink()])
            .map(|node| node.outgoing().len() + node.incoming().len())
            .sum();
        assert_eq!(2 * graph.edge_count(), slots);

        for p in graph.participants() {
            let from_source = graph.edge_between(NodeId::SOURCE, p.id()).unwrap();
            let to_sink = graph.edge_between(p.id(), NodeId::SINK).unwrap();
            assert_eq!(12, from_source.capacity());
            assert_eq!(12, to_sink.capacity());
            let (out, inc) = p.degree();
            // one sink edge, one source edge, one edge per other participant
            assert_eq!(n + 1, out + inc);
            for q in graph.participants().filter(|q| q.id() != p.id()) {
                let forward = graph.edge_between(p.id(), q.id());
                let backward = graph.edge_between(q.id(), p.id());
                assert!(forward.is_some() != backward.is_some());
                assert_eq!(4, graph.peer_edge(p.id(), q.id()).unwrap().capacity());
            }
        }
    }

    #[test]
    fn test_three_people_full_structure() {
        let input = ParticipantInput::Names(vec!["Alice".into(), "Bob".into(), "Carol".into()]);
        let graph = build_graph(&input).unwrap();

        assert_well_formed(&graph);
        assert_eq!(3, graph.outgoing(NodeId::SOURCE).count());
        assert_eq!(3, graph.incoming(NodeId::SINK).count());
        assert_eq!(
            "Edge from person Alice to person Bob",
            graph.edge_between(NodeId(1), NodeId(2)).unwrap().note()
        );
        assert_eq!(
            "Edge from source to person Carol",
            graph.edge_between(NodeId::SOURCE, NodeId(3)).unwrap().note()
        );
        assert_eq!(
            "Edge from person Carol to sink node",
            graph.edge_between(NodeId(3), NodeId::SINK).unwrap().note()
        );
    }

    #[test]
    fn test_lower_id_is_always_tail() {
        let graph = build_graph(&ParticipantInput::Count(6)).unwrap();

        graph
            .edges()
            .iter()
            .filter(|e| e.from().is_participant() && e.to().is_participant())
            .for_each(|e| assert!(e.from() < e.to()));
    }

    #[test]
    fn test_reinitialize_is_a_full_reset() {
        let mut graph = build_graph(&ParticipantInput::Count(4)).unwrap();
        let before = endpoints(&graph);
        let old_ids: BTreeSet<EdgeId> = graph.edges().iter().map(|e| e.id()).collect();
        let stale = *old_ids.iter().next().unwrap();
        graph.edge_mut(stale).unwrap().commit_flow(2).unwrap();

        initialize_edges(&mut graph).unwrap();

        assert_well_formed(&graph);
        assert_eq!(before, endpoints(&graph));
        assert!(graph.edges().iter().all(|e| !old_ids.contains(&e.id())));
        assert!(graph.edge_by_id(stale).is_none());
    }

    #[test]
    fn test_peer_wiring_skips_existing_pairs() {
        let mut graph = build_graph(&ParticipantInput::Count(3)).unwrap();

        wire_peers(&mut graph).unwrap();

        assert_eq!(expected_edges(3), graph.edge_count());
    }

    #[test]
    fn test_asymmetric_adjacency_is_reported() {
        let mut graph = build_graph(&ParticipantInput::Count(3)).unwrap();
        graph.reset_edges();
        graph
            .node_mut(NodeId(2))
            .unwrap()
            .link_in(NodeId(1), EdgeId(999));

        let err = wire_peers(&mut graph).unwrap_err();

        assert_eq!(
            GraphError::InternalInconsistency {
                from: NodeId(1),
                to: NodeId(2)
            },
            err
        );
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_random_sizes_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let n = rng.gen_range(2..=25);
            let mut names: Vec<String> = (0..n).map(|i| format!("guest-{}", i)).collect();
            names.shuffle(&mut rng);
            let graph = build_graph(&ParticipantInput::Names(names)).unwrap();
            assert_well_formed(&graph);
        }
    }
}
