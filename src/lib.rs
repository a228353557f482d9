//! Capacity network for a gift exchange.
//!
//! Builds a flow network with a source, a sink and every participant wired to
//! both terminals and to each other, ready for a max-flow solver.

pub mod cli;
pub mod error;
pub mod graph;
pub mod participants;
pub mod report;

pub use error::{GraphError, GraphResult};
pub use graph::edge::{Edge, EdgeId};
pub use graph::graph::{Graph, build_graph};
pub use graph::node::{Node, NodeId, NodeKind};
pub use participants::factory::ParticipantInput;
