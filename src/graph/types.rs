//! Core graph types
//!
//! The tool works on plain undirected graphs: nodes are numbered `0..n` and
//! carry no data, edges carry no data. Self-loops and parallel edges are kept.

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use crate::constants::graph::MAX_NODES;
use crate::error::OracleError;
use crate::oracle::Bipartiteness;

/// Arena graph used by the parser, the generators and the command line tool.
pub type SimpleGraph = UnGraph<(), ()>;

/// Oracle answer for a [`SimpleGraph`].
pub type SimpleBipartiteness = Bipartiteness<NodeIndex, EdgeIndex>;

/// Serialized form of a [`SimpleGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: usize,
    pub edges: Vec<(usize, usize)>,
}

impl GraphDocument {
    pub fn from_graph(graph: &SimpleGraph) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph
                .raw_edges()
                .iter()
                .map(|edge| (edge.source().index(), edge.target().index()))
                .collect(),
        }
    }

    pub fn into_graph(self) -> Result<SimpleGraph, OracleError> {
        if self.nodes > MAX_NODES {
            return Err(OracleError::GraphError {
                message: format!(
                    "{} nodes exceed the limit of {MAX_NODES}",
                    self.nodes
                ),
            });
        }

        let mut graph = SimpleGraph::with_capacity(self.nodes, self.edges.len());
        for _ in 0..self.nodes {
            graph.add_node(());
        }

        for (u, v) in self.edges {
            if u >= self.nodes || v >= self.nodes {
                return Err(OracleError::GraphError {
                    message: format!(
                        "edge ({u}, {v}) references a node outside 0..{}",
                        self.nodes
                    ),
                });
            }
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }

        Ok(graph)
    }
}

/// Build a graph with `nodes` nodes from `(u, v)` index pairs.
///
/// Panics if an index is out of range; meant for fixtures and generators.
pub fn graph_from_edges(nodes: usize, edges: &[(usize, usize)]) -> SimpleGraph {
    let mut graph = SimpleGraph::with_capacity(nodes, edges.len());
    for _ in 0..nodes {
        graph.add_node(());
    }
    for &(u, v) in edges {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    graph
}
