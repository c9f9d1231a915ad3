//! Core type definitions
//!
//! Plain data handed from the commands to the report generators. Node ids
//! are flattened to `usize` indices so every format can serialize them.

use std::path::PathBuf;

use serde::Serialize;

use crate::graph::{SimpleBipartiteness, SimpleGraph};

/// Yes/no answer without the certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    Bipartite,
    NotBipartite,
}

impl Verdict {
    pub fn from_bool(is_bipartite: bool) -> Self {
        if is_bipartite {
            Verdict::Bipartite
        } else {
            Verdict::NotBipartite
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Bipartite => write!(f, "bipartite"),
            Verdict::NotBipartite => write!(f, "not bipartite"),
        }
    }
}

/// Oracle answer with its certificate, ready for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "kebab-case")]
pub enum VerdictReport {
    Bipartite {
        part_a: Vec<usize>,
        part_b: Vec<usize>,
    },
    NotBipartite {
        odd_cycle: Vec<usize>,
    },
}

impl VerdictReport {
    pub fn verdict(&self) -> Verdict {
        match self {
            VerdictReport::Bipartite { .. } => Verdict::Bipartite,
            VerdictReport::NotBipartite { .. } => Verdict::NotBipartite,
        }
    }
}

impl From<&SimpleBipartiteness> for VerdictReport {
    fn from(result: &SimpleBipartiteness) -> Self {
        match result {
            SimpleBipartiteness::Bipartite { part_a, part_b } => VerdictReport::Bipartite {
                part_a: part_a.iter().map(|node| node.index()).collect(),
                part_b: part_b.iter().map(|node| node.index()).collect(),
            },
            SimpleBipartiteness::NotBipartite { odd_cycle } => VerdictReport::NotBipartite {
                odd_cycle: odd_cycle.nodes().iter().map(|node| node.index()).collect(),
            },
        }
    }
}

/// One graph file run through the oracle
#[derive(Debug, Clone, Serialize)]
pub struct CheckedGraph {
    pub source: PathBuf,
    pub nodes: usize,
    pub edges: usize,
    #[serde(flatten)]
    pub report: VerdictReport,
}

impl CheckedGraph {
    pub fn new(source: PathBuf, graph: &SimpleGraph, result: &SimpleBipartiteness) -> Self {
        Self {
            source,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            report: result.into(),
        }
    }

    pub fn is_bipartite(&self) -> bool {
        self.report.verdict() == Verdict::Bipartite
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::graph_from_edges;
    use crate::oracle::check_bipartite;

    #[test]
    fn test_checked_triangle() {
        let graph = graph_from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let result = check_bipartite(&graph).unwrap();
        let checked = CheckedGraph::new(PathBuf::from("triangle.edges"), &graph, &result);

        assert!(!checked.is_bipartite());
        assert_eq!(checked.nodes, 3);
        assert_eq!(checked.edges, 3);
        match &checked.report {
            VerdictReport::NotBipartite { odd_cycle } => assert_eq!(odd_cycle.len(), 3),
            other => panic!("expected odd cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_serialized_shape() {
        let graph = graph_from_edges(2, &[(0, 1)]);
        let result = check_bipartite(&graph).unwrap();
        let checked = CheckedGraph::new(PathBuf::from("edge.edges"), &graph, &result);

        let value = serde_json::to_value(&checked).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "source": "edge.edges",
                "nodes": 2,
                "edges": 1,
                "verdict": "bipartite",
                "part_a": [0],
                "part_b": [1],
            })
        );
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Bipartite.to_string(), "bipartite");
        assert_eq!(Verdict::from_bool(false).to_string(), "not bipartite");
    }
}
