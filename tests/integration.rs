//! Integration tests for the public giftflow API.

use giftflow::{Edge, GraphError, NodeId, NodeKind, ParticipantInput, build_graph};

#[test]
fn solver_can_push_flow_along_a_path() {
    let mut graph = build_graph(&ParticipantInput::Count(3)).unwrap();

    // Source -> 1 -> 2 -> Sink
    let path = [
        (NodeId::SOURCE, NodeId(1)),
        (NodeId(1), NodeId(2)),
        (NodeId(2), NodeId::SINK),
    ];
    let ids: Vec<_> = path
        .iter()
        .map(|(from, to)| graph.edge_between(*from, *to).unwrap().id())
        .collect();
    let bottleneck = ids
        .iter()
        .map(|id| graph.edge_by_id(*id).unwrap().residual())
        .min()
        .unwrap();
    assert_eq!(Edge::PEER_CAPACITY, bottleneck);

    for id in &ids {
        graph.edge_mut(*id).unwrap().commit_flow(bottleneck).unwrap();
    }

    assert!(graph.edge_between(NodeId(1), NodeId(2)).unwrap().is_saturated());
    assert_eq!(8, graph.edge_between(NodeId::SOURCE, NodeId(1)).unwrap().residual());
    let err = graph.edge_mut(ids[1]).unwrap().commit_flow(1).unwrap_err();
    assert!(matches!(err, GraphError::CapacityExceeded { available: 0, .. }));
}

#[test]
fn terminals_are_reachable_through_the_graph() {
    let graph = build_graph(&ParticipantInput::Names(vec!["Ann".into(), "Ben".into()])).unwrap();

    assert_eq!(NodeKind::Source, graph.source().kind());
    assert_eq!(NodeKind::Sink, graph.sink().kind());
    assert_eq!(Some(NodeKind::Participant), graph.kind_of(NodeId(2)));
    assert!(graph.participants().all(|p| p.id().is_participant()));
    assert_eq!(24, graph.total_supply());
}

#[test]
fn bad_input_is_a_user_error() {
    let err = build_graph(&ParticipantInput::Names(vec!["Ann".into()])).unwrap_err();

    assert!(err.is_user_error());
}
