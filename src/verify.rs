//! Independent checks for oracle answers
//!
//! These do not trust the traversal: a partition is checked edge by edge and a
//! witness cycle adjacency by adjacency.

use petgraph::visit::{EdgeRef, IntoEdgeReferences, IntoEdges, IntoNodeIdentifiers, NodeIndexable};

/// `true` if `part_a` and `part_b` are disjoint, cover every node exactly once
/// and every edge joins the two sides.
pub fn is_valid_partition<G>(graph: G, part_a: &[G::NodeId], part_b: &[G::NodeId]) -> bool
where
    G: IntoNodeIdentifiers + IntoEdgeReferences + NodeIndexable,
{
    #[derive(Clone, Copy, PartialEq)]
    enum Side {
        Unassigned,
        A,
        B,
    }

    let mut sides = vec![Side::Unassigned; graph.node_bound()];
    for (part, side) in [(part_a, Side::A), (part_b, Side::B)] {
        for &node in part {
            let index = graph.to_index(node);
            match sides.get_mut(index) {
                Some(slot) if *slot == Side::Unassigned => *slot = side,
                _ => return false,
            }
        }
    }

    if graph
        .node_identifiers()
        .any(|node| sides[graph.to_index(node)] == Side::Unassigned)
    {
        return false;
    }

    graph
        .edge_references()
        .all(|edge| sides[graph.to_index(edge.source())] != sides[graph.to_index(edge.target())])
}

/// `true` if `nodes` describes a closed walk of odd length in `graph`.
///
/// Every consecutive pair, including last-to-first, must be joined by an
/// edge. A single node is accepted only when it carries a self-loop.
pub fn is_valid_odd_cycle<G>(graph: G, nodes: &[G::NodeId]) -> bool
where
    G: IntoEdges,
{
    if nodes.len() % 2 == 0 {
        return false;
    }

    nodes
        .iter()
        .zip(nodes.iter().cycle().skip(1))
        .all(|(&u, &v)| are_adjacent(graph, u, v))
}

/// `true` if some edge joins `u` and `v` (a self-loop when `u == v`).
pub fn are_adjacent<G>(graph: G, u: G::NodeId, v: G::NodeId) -> bool
where
    G: IntoEdges,
{
    graph.edges(u).any(|edge| {
        (edge.source() == u && edge.target() == v) || (edge.source() == v && edge.target() == u)
    })
}

/// Order-independent comparison of two partitions, side by side.
pub fn partitions_equivalent<N>(left: (&[N], &[N]), right: (&[N], &[N])) -> bool
where
    N: Ord + Clone,
{
    fn same_nodes<N: Ord + Clone>(a: &[N], b: &[N]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let mut a = a.to_vec();
        let mut b = b.to_vec();
        a.sort();
        b.sort();
        a == b
    }

    same_nodes(left.0, right.0) && same_nodes(left.1, right.1)
}

#[cfg(test)]
mod tests {
    use petgraph::graph::{NodeIndex, UnGraph};

    use super::*;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    #[test]
    fn test_valid_partition_of_path() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3)]);
        assert!(is_valid_partition(&graph, &[n(0), n(2)], &[n(1), n(3)]));
        assert!(is_valid_partition(&graph, &[n(1), n(3)], &[n(0), n(2)]));
    }

    #[test]
    fn test_partition_with_inner_edge_is_invalid() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3)]);
        assert!(!is_valid_partition(&graph, &[n(0), n(1)], &[n(2), n(3)]));
    }

    #[test]
    fn test_partition_must_cover_and_be_disjoint() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);
        assert!(!is_valid_partition(&graph, &[n(0)], &[n(1)]));
        assert!(!is_valid_partition(&graph, &[n(0), n(2)], &[n(1), n(2)]));
    }

    #[test]
    fn test_odd_cycle_validity() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]);
        assert!(is_valid_odd_cycle(&graph, &[n(0), n(1), n(2)]));
        assert!(!is_valid_odd_cycle(&graph, &[n(0), n(1)]));
        assert!(!is_valid_odd_cycle(&graph, &[n(1), n(2), n(3)]));
        assert!(!is_valid_odd_cycle(&graph, &[]));
    }

    #[test]
    fn test_single_node_cycle_needs_self_loop() {
        let looped = UnGraph::<(), ()>::from_edges([(0, 0)]);
        let plain = UnGraph::<(), ()>::from_edges([(0, 1)]);
        assert!(is_valid_odd_cycle(&looped, &[n(0)]));
        assert!(!is_valid_odd_cycle(&plain, &[n(0)]));
    }

    #[test]
    fn test_partitions_equivalent_ignores_order() {
        let a: &[u32] = &[2, 0];
        let b: &[u32] = &[3, 1];
        let even: &[u32] = &[0, 2];
        let odd: &[u32] = &[1, 3];
        let lone: &[u32] = &[0];
        let rest: &[u32] = &[1, 2, 3];

        assert!(partitions_equivalent((a, b), (even, odd)));
        assert!(!partitions_equivalent((a, b), (odd, even)));
        assert!(!partitions_equivalent((a, b), (lone, rest)));
    }
}
