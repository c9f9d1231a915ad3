//! Breadth-first two-coloring of a single connected component.

use std::collections::VecDeque;

use petgraph::Undirected;
use petgraph::visit::{EdgeRef, GraphProp, IntoEdges, NodeIndexable};

use super::color::{Arrival, Color, TraversalState};

/// An edge whose endpoints ended up with the same color.
///
/// `source` is the node being expanded when the conflict was found and
/// `target` the already colored neighbor. Both are equal for a self-loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictEdge<N, E> {
    pub edge: E,
    pub source: N,
    pub target: N,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOutcome<N, E> {
    Success,
    Conflict(ConflictEdge<N, E>),
}

impl<N, E> TraversalOutcome<N, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, TraversalOutcome::Success)
    }
}

/// Color every node reachable from `start`, alternating colors by BFS depth.
///
/// `start` receives [`Color::A`] and must be uncolored on entry. Every node
/// discovered records the edge it was discovered through in `state`. The
/// search stops at the first edge whose endpoints share a color and returns
/// it; parallel edges between differently colored nodes are ignored.
pub fn color_component<G>(
    graph: G,
    start: G::NodeId,
    state: &mut TraversalState<G::NodeId, G::EdgeId>,
) -> TraversalOutcome<G::NodeId, G::EdgeId>
where
    G: IntoEdges + NodeIndexable + GraphProp<EdgeType = Undirected>,
{
    let mut frontier = VecDeque::new();
    state.set_color(graph.to_index(start), Color::A);
    frontier.push_back(start);

    while let Some(node) = frontier.pop_front() {
        let node_color = state.color(graph.to_index(node));
        let next_color = node_color.opposite();

        for edge in graph.edges(node) {
            let neighbor = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            let neighbor_index = graph.to_index(neighbor);

            match state.color(neighbor_index) {
                Color::Uncolored => {
                    state.set_color(neighbor_index, next_color);
                    state.set_arrival(
                        neighbor_index,
                        Arrival {
                            edge: edge.id(),
                            from: node,
                        },
                    );
                    frontier.push_back(neighbor);
                }
                color if color == node_color => {
                    return TraversalOutcome::Conflict(ConflictEdge {
                        edge: edge.id(),
                        source: node,
                        target: neighbor,
                    });
                }
                _ => {}
            }
        }
    }

    TraversalOutcome::Success
}
