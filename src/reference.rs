//! Reference bipartiteness check built only from `petgraph` algorithms.
//!
//! Used by the comparison harness as an independent second opinion. The
//! verdict comes from [`petgraph::algo::is_bipartite_undirected`] run once
//! per component; the partition from the parity of depth-first tree edges.
//! Components are rooted at their lowest node index on side A, the same
//! convention the oracle follows, so both produce identical partitions.

use petgraph::algo::is_bipartite_undirected;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::{DfsEvent, depth_first_search};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceOutcome {
    pub is_bipartite: bool,
    /// Empty when the graph is not bipartite.
    pub part_a: Vec<NodeIndex>,
    pub part_b: Vec<NodeIndex>,
}

pub fn reference_check<N, E>(graph: &UnGraph<N, E>) -> ReferenceOutcome {
    let mut on_side_b: Vec<Option<bool>> = vec![None; graph.node_count()];

    for root in graph.node_indices() {
        if on_side_b[root.index()].is_some() {
            continue;
        }

        if !is_bipartite_undirected(graph, root) {
            return ReferenceOutcome {
                is_bipartite: false,
                part_a: Vec::new(),
                part_b: Vec::new(),
            };
        }

        on_side_b[root.index()] = Some(false);
        depth_first_search(graph, Some(root), |event| {
            if let DfsEvent::TreeEdge(parent, child) = event {
                on_side_b[child.index()] = on_side_b[parent.index()].map(|side| !side);
            }
        });
    }

    let (part_b, part_a): (Vec<NodeIndex>, Vec<NodeIndex>) = graph
        .node_indices()
        .partition(|node| on_side_b[node.index()] == Some(true));

    ReferenceOutcome {
        is_bipartite: true,
        part_a,
        part_b,
    }
}
