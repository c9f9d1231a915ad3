//! Odd cycle reconstruction from BFS arrival edges.

use petgraph::visit::NodeIndexable;

use super::color::TraversalState;
use super::traversal::ConflictEdge;
use crate::error::OracleError;

/// A closed walk of odd length proving a graph is not bipartite.
///
/// Consecutive nodes are adjacent, and the last node is adjacent to the first
/// through `closing_edge`, the conflict edge found by the traversal. A
/// self-loop yields a single node.
///
/// `edges[i]` joins `nodes[i]` and `nodes[i + 1]`; the last entry is the
/// closing edge back to `nodes[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OddCycle<N, E> {
    nodes: Vec<N>,
    edges: Vec<E>,
    closing_edge: E,
}

impl<N, E> OddCycle<N, E> {
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    pub fn closing_edge(&self) -> &E {
        &self.closing_edge
    }

    /// Number of edges in the cycle, which equals the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Walk back from both endpoints of `conflict` in lockstep until the two
/// arrival chains meet at their lowest common ancestor.
///
/// The returned cycle starts at `conflict.source`, climbs to the common
/// ancestor and descends to `conflict.target`. Both endpoints have the same
/// color, hence the same BFS depth, so the walks meet after the same number of
/// steps and the cycle has `2 * steps + 1` edges.
pub fn reconstruct_odd_cycle<G>(
    graph: G,
    state: &TraversalState<G::NodeId, G::EdgeId>,
    conflict: ConflictEdge<G::NodeId, G::EdgeId>,
) -> Result<OddCycle<G::NodeId, G::EdgeId>, OracleError>
where
    G: NodeIndexable,
{
    let mut up = conflict.source;
    let mut down = conflict.target;
    let mut ascent = vec![up];
    let mut descent = vec![down];
    let mut ascent_edges = Vec::new();
    let mut descent_edges = Vec::new();

    while up != down {
        let (Some(up_arrival), Some(down_arrival)) = (
            state.arrival(graph.to_index(up)),
            state.arrival(graph.to_index(down)),
        ) else {
            return Err(OracleError::CycleReconstruction {
                message: format!(
                    "arrival chains of nodes {} and {} reached a root without meeting",
                    graph.to_index(conflict.source),
                    graph.to_index(conflict.target)
                ),
            });
        };

        ascent_edges.push(up_arrival.edge);
        descent_edges.push(down_arrival.edge);
        up = up_arrival.from;
        down = down_arrival.from;
        ascent.push(up);
        descent.push(down);
    }

    // The common ancestor closes `ascent` and must appear only once.
    descent.pop();
    ascent.extend(descent.into_iter().rev());
    ascent_edges.extend(descent_edges.into_iter().rev());
    ascent_edges.push(conflict.edge);

    Ok(OddCycle {
        nodes: ascent,
        edges: ascent_edges,
        closing_edge: conflict.edge,
    })
}
