use crate::error::{GraphError, GraphResult};
use crate::graph::node::{Node, NodeId, NodeKind};
use std::collections::BTreeMap;
use tracing::debug;

/// Smallest group that can exchange gifts.
pub const MIN_PARTICIPANTS: usize = 2;

/// Where the participant list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantInput {
    /// Explicit names, assigned ids 1.. in order.
    Names(Vec<String>),
    /// Number of anonymous participants, named "Person N".
    Count(i64),
}

pub fn build_participants(input: &ParticipantInput) -> GraphResult<BTreeMap<NodeId, Node>> {
    let participants = match input {
        ParticipantInput::Names(names) => from_names(names)?,
        ParticipantInput::Count(count) => from_count(*count)?,
    };
    debug!(count = participants.len(), "participants created");
    Ok(participants)
}

pub fn from_names<S: AsRef<str>>(names: &[S]) -> GraphResult<BTreeMap<NodeId, Node>> {
    if names.len() < MIN_PARTICIPANTS {
        return Err(GraphError::invalid_input(format!(
            "need at least {} names, got {}",
            MIN_PARTICIPANTS,
            names.len()
        )));
    }
    Ok(names
        .iter()
        .zip(1..)
        .map(|(name, id)| {
            let id = NodeId(id);
            (id, Node::new(id, NodeKind::Participant, name.as_ref()))
        })
        .collect())
}

pub fn from_count(count: i64) -> GraphResult<BTreeMap<NodeId, Node>> {
    if count < MIN_PARTICIPANTS as i64 {
        return Err(GraphError::invalid_input(format!(
            "need at least {} people, got {}",
            MIN_PARTICIPANTS, count
        )));
    }
    Ok((1..=count)
        .map(|id| {
            let id = NodeId(id);
            (
                id,
                Node::new(id, NodeKind::Participant, format!("Person {}", id)),
            )
        })
        .collect())
}
