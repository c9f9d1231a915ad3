use petgraph::Undirected;
use petgraph::visit::{GraphBase, GraphProp, IntoEdges, IntoNodeIdentifiers, NodeIndexable};

use super::color::{Color, TraversalState};
use super::reconstruct::{OddCycle, reconstruct_odd_cycle};
use super::traversal::{TraversalOutcome, color_component};
use crate::error::OracleError;

/// Outcome of a bipartiteness check.
///
/// Non-bipartite graphs are a normal answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bipartiteness<N, E> {
    /// Both sides in node-iteration order.
    Bipartite { part_a: Vec<N>, part_b: Vec<N> },
    NotBipartite { odd_cycle: OddCycle<N, E> },
}

impl<N, E> Bipartiteness<N, E> {
    pub fn is_bipartite(&self) -> bool {
        matches!(self, Bipartiteness::Bipartite { .. })
    }

    pub fn partition(&self) -> Option<(&[N], &[N])> {
        match self {
            Bipartiteness::Bipartite { part_a, part_b } => Some((part_a, part_b)),
            Bipartiteness::NotBipartite { .. } => None,
        }
    }

    pub fn odd_cycle(&self) -> Option<&OddCycle<N, E>> {
        match self {
            Bipartiteness::Bipartite { .. } => None,
            Bipartiteness::NotBipartite { odd_cycle } => Some(odd_cycle),
        }
    }
}

/// Bipartiteness checker that owns the per-call color and arrival maps.
///
/// The maps are reset at the start of every [`check`](Self::check), so one
/// oracle can be reused across graphs without leaking state. Concurrent
/// checks need one oracle each.
#[derive(Debug, Clone)]
pub struct BipartiteOracle<N, E> {
    state: TraversalState<N, E>,
}

impl<N, E> Default for BipartiteOracle<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> BipartiteOracle<N, E> {
    pub fn new() -> Self {
        Self {
            state: TraversalState::new(),
        }
    }
}

impl<N, E> BipartiteOracle<N, E>
where
    N: Copy + PartialEq,
    E: Copy + PartialEq,
{
    /// Decide whether `graph` is bipartite.
    ///
    /// Restarts the coloring traversal on every node still uncolored, so
    /// disconnected graphs are covered component by component. The first
    /// conflict stops the whole check and is turned into an odd cycle; the
    /// remaining components are not visited.
    pub fn check<G>(&mut self, graph: G) -> Result<Bipartiteness<N, E>, OracleError>
    where
        G: GraphBase<NodeId = N, EdgeId = E>
            + IntoNodeIdentifiers
            + IntoEdges
            + NodeIndexable
            + GraphProp<EdgeType = Undirected>,
    {
        self.state.reset(graph.node_bound());

        for root in graph.node_identifiers() {
            if self.state.color(graph.to_index(root)).is_colored() {
                continue;
            }

            if let TraversalOutcome::Conflict(conflict) =
                color_component(graph, root, &mut self.state)
            {
                let odd_cycle = reconstruct_odd_cycle(graph, &self.state, conflict)?;
                return Ok(Bipartiteness::NotBipartite { odd_cycle });
            }
        }

        let mut part_a = Vec::new();
        let mut part_b = Vec::new();
        for node in graph.node_identifiers() {
            match self.state.color(graph.to_index(node)) {
                Color::A => part_a.push(node),
                Color::B => part_b.push(node),
                Color::Uncolored => {
                    return Err(OracleError::GraphError {
                        message: format!(
                            "node {} was never colored by the component sweep",
                            graph.to_index(node)
                        ),
                    });
                }
            }
        }

        Ok(Bipartiteness::Bipartite { part_a, part_b })
    }
}

/// Check `graph` with freshly allocated traversal state.
pub fn check_bipartite<G>(graph: G) -> Result<Bipartiteness<G::NodeId, G::EdgeId>, OracleError>
where
    G: IntoNodeIdentifiers + IntoEdges + NodeIndexable + GraphProp<EdgeType = Undirected>,
{
    BipartiteOracle::new().check(graph)
}

#[cfg(test)]
mod tests {
    use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
    use petgraph::stable_graph::StableUnGraph;
    use pretty_assertions::assert_eq;

    use super::*;

    fn indices(nodes: &[NodeIndex]) -> Vec<usize> {
        nodes.iter().map(|n| n.index()).collect()
    }

    #[test]
    fn test_path_partition() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3)]);

        let result = check_bipartite(&graph).unwrap();
        let (part_a, part_b) = result.partition().expect("path is bipartite");

        assert_eq!(indices(part_a), vec![0, 2]);
        assert_eq!(indices(part_b), vec![1, 3]);
    }

    #[test]
    fn test_triangle_witness() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0)]);

        let result = check_bipartite(&graph).unwrap();
        let cycle = result.odd_cycle().expect("triangle is not bipartite");

        let mut nodes = indices(cycle.nodes());
        nodes.sort();
        assert_eq!(nodes, vec![0, 1, 2]);
    }

    #[test]
    fn test_single_node() {
        let mut graph = UnGraph::<(), ()>::default();
        graph.add_node(());

        let result = check_bipartite(&graph).unwrap();
        let (part_a, part_b) = result.partition().unwrap();
        assert_eq!(indices(part_a), vec![0]);
        assert!(part_b.is_empty());
    }

    #[test]
    fn test_empty_graph() {
        let graph = UnGraph::<(), ()>::default();

        let result = check_bipartite(&graph).unwrap();
        assert_eq!(
            result,
            Bipartiteness::Bipartite {
                part_a: vec![],
                part_b: vec![]
            }
        );
    }

    #[test]
    fn test_self_loop() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 0)]);

        let result = check_bipartite(&graph).unwrap();
        let cycle = result.odd_cycle().unwrap();
        assert_eq!(indices(cycle.nodes()), vec![0]);
    }

    #[test]
    fn test_disconnected_four_cycles() {
        let graph = UnGraph::<(), ()>::from_edges([
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
        ]);

        let result = check_bipartite(&graph).unwrap();
        let (part_a, part_b) = result.partition().unwrap();
        assert_eq!(indices(part_a), vec![0, 2, 4, 6]);
        assert_eq!(indices(part_b), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_odd_component_fails_whole_graph() {
        // 4-cycle on 0..4, 5-cycle on 4..9
        let graph = UnGraph::<(), ()>::from_edges([
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 8),
            (8, 4),
        ]);

        let result = check_bipartite(&graph).unwrap();
        let cycle = result.odd_cycle().unwrap();
        assert_eq!(cycle.len(), 5);
        assert!(cycle.nodes().iter().all(|n| n.index() >= 4));
    }

    #[test]
    fn test_reused_oracle_does_not_leak_state() {
        let triangle = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0)]);
        let path = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);
        let mut oracle = BipartiteOracle::new();

        assert!(!oracle.check(&triangle).unwrap().is_bipartite());
        let result = oracle.check(&path).unwrap();
        let (part_a, part_b) = result.partition().unwrap();
        assert_eq!(indices(part_a), vec![0, 2]);
        assert_eq!(indices(part_b), vec![1]);

        assert_eq!(oracle.check(&path).unwrap(), result);
    }

    #[test]
    fn test_default_oracle_checks_graphs() {
        let square = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
        let mut oracle: BipartiteOracle<NodeIndex, EdgeIndex> = BipartiteOracle::default();

        assert!(oracle.check(&square).unwrap().is_bipartite());
    }

    #[test]
    fn test_cycle_edges_join_consecutive_nodes() {
        // Pentagon with a pendant path, so the witness is longer than a triangle.
        let graph = UnGraph::<(), ()>::from_edges([
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 0),
            (4, 5),
            (5, 6),
        ]);

        let result = check_bipartite(&graph).unwrap();
        let cycle = result.odd_cycle().unwrap();
        let nodes = cycle.nodes();
        let edges = cycle.edges();

        assert_eq!(edges.len(), nodes.len());
        assert_eq!(edges.last(), Some(cycle.closing_edge()));
        for (i, &edge) in edges.iter().enumerate() {
            let (a, b) = graph.edge_endpoints(edge).unwrap();
            let (u, v) = (nodes[i], nodes[(i + 1) % nodes.len()]);
            assert!((a, b) == (u, v) || (a, b) == (v, u), "edge {i} does not join {u:?} and {v:?}");
        }
    }

    #[test]
    fn test_stable_graph_with_removed_node() {
        let mut graph = StableUnGraph::<(), ()>::default();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let d = graph.add_node(());
        graph.add_edge(a, b, ());
        graph.add_edge(b, c, ());
        graph.add_edge(c, a, ());
        graph.add_edge(c, d, ());
        graph.remove_node(a);

        let result = check_bipartite(&graph).unwrap();
        let (part_a, part_b) = result.partition().unwrap();
        assert_eq!(part_a, &[b, d]);
        assert_eq!(part_b, &[c]);
    }
}
