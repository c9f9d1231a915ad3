use std::collections::HashSet;
use std::io::Write;

use miette::Result;
use petgraph::visit::EdgeRef;

use super::types::{GraphDocument, SimpleBipartiteness, SimpleGraph};
use crate::error::OracleError;
use crate::oracle::Bipartiteness;

// Blue-Orange Accessible Palette
mod colors {
    pub const PART_A_FILL: &str = "#E3F2FD"; // Light blue
    pub const PART_A_STROKE: &str = "#1976D2"; // Medium blue
    pub const PART_B_FILL: &str = "#FFF3E0"; // Light orange
    pub const PART_B_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const PLAIN_FILL: &str = "#FAFAFA"; // Off-white
    pub const PLAIN_STROKE: &str = "#90A4AE"; // Blue-grey
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_NODE_FILL: &str = "#FFCCBC"; // Light deep orange
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(OracleError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(OracleError::from)
    };
}

/// Writes graphs as Graphviz DOT, edge lists or JSON.
pub struct GraphRenderer {
    highlight: bool,
}

impl GraphRenderer {
    /// With `highlight`, DOT output colors nodes by partition side or marks
    /// the witness cycle when a result is supplied.
    pub fn new(highlight: bool) -> Self {
        Self { highlight }
    }

    pub fn render_dot(
        &self,
        graph: &SimpleGraph,
        result: Option<&SimpleBipartiteness>,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph G {{")?;
        writeln_out!(output, "    node [shape=circle, style=filled];")?;
        writeln_out!(output)?;

        let result = result.filter(|_| self.highlight);
        let (part_a, cycle_nodes, cycle_edges) = match result {
            Some(Bipartiteness::Bipartite { part_a, .. }) => (
                Some(part_a.iter().copied().collect::<HashSet<_>>()),
                HashSet::new(),
                HashSet::new(),
            ),
            Some(Bipartiteness::NotBipartite { odd_cycle }) => (
                None,
                odd_cycle.nodes().iter().copied().collect(),
                odd_cycle.edges().iter().copied().collect(),
            ),
            None => (None, HashSet::new(), HashSet::new()),
        };

        for node in graph.node_indices() {
            let (fill, stroke) = match &part_a {
                Some(side_a) if side_a.contains(&node) => {
                    (colors::PART_A_FILL, colors::PART_A_STROKE)
                }
                Some(_) => (colors::PART_B_FILL, colors::PART_B_STROKE),
                None if cycle_nodes.contains(&node) => {
                    (colors::CYCLE_NODE_FILL, colors::CYCLE_EDGE)
                }
                None => (colors::PLAIN_FILL, colors::PLAIN_STROKE),
            };

            writeln_out!(
                output,
                r#"    {} [fillcolor="{}", color="{}"];"#,
                node.index(),
                fill,
                stroke
            )?;
        }

        writeln_out!(output)?;

        for edge in graph.edge_references() {
            let (u, v) = (edge.source(), edge.target());
            if cycle_edges.contains(&edge.id()) {
                writeln_out!(
                    output,
                    r#"    {} -- {} [color="{}", penwidth=3];"#,
                    u.index(),
                    v.index(),
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    r#"    {} -- {} [color="{}"];"#,
                    u.index(),
                    v.index(),
                    colors::NORMAL_EDGE
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    /// Edge list with a `nodes` header, readable by the edge-list parser.
    pub fn render_edge_list(&self, graph: &SimpleGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "nodes {}", graph.node_count())?;
        for edge in graph.raw_edges() {
            writeln_out!(output, "{} {}", edge.source().index(), edge.target().index())?;
        }
        Ok(())
    }

    pub fn render_json(&self, graph: &SimpleGraph, output: &mut dyn Write) -> Result<()> {
        let document = GraphDocument::from_graph(graph);
        serde_json::to_writer_pretty(&mut *output, &document).map_err(OracleError::from)?;
        writeln_out!(output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use predicates::prelude::*;

    use super::*;
    use crate::graph::parser::parse_edge_list;
    use crate::graph::types::graph_from_edges;
    use crate::oracle::check_bipartite;

    fn render_dot_string(graph: &SimpleGraph, highlight: bool) -> String {
        let result = check_bipartite(graph).unwrap();
        let mut output = Vec::new();
        GraphRenderer::new(highlight)
            .render_dot(graph, Some(&result), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_dot_marks_partition_sides() {
        let graph = graph_from_edges(2, &[(0, 1)]);
        let dot = render_dot_string(&graph, true);

        assert!(predicate::str::starts_with("graph G {").eval(dot.as_str()));
        assert!(predicate::str::contains(r##"0 [fillcolor="#E3F2FD""##).eval(dot.as_str()));
        assert!(predicate::str::contains(r##"1 [fillcolor="#FFF3E0""##).eval(dot.as_str()));
        assert!(predicate::str::contains("0 -- 1").eval(dot.as_str()));
    }

    #[test]
    fn test_dot_marks_witness_cycle() {
        let graph = graph_from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        let dot = render_dot_string(&graph, true);

        assert_eq!(dot.matches("penwidth=3").count(), 3);
        assert!(predicate::str::contains(r##"3 [fillcolor="#FAFAFA""##).eval(dot.as_str()));
    }

    #[test]
    fn test_dot_marks_only_the_witness_edge_among_parallels() {
        let graph = graph_from_edges(3, &[(0, 1), (1, 2), (2, 0), (0, 1)]);
        let dot = render_dot_string(&graph, true);

        assert_eq!(dot.matches("penwidth=3").count(), 3);
        assert_eq!(dot.matches("0 -- 1").count(), 2);
    }

    #[test]
    fn test_dot_without_highlight_is_plain() {
        let graph = graph_from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let dot = render_dot_string(&graph, false);

        assert!(!dot.contains("penwidth=3"));
        assert_eq!(dot.matches("#FAFAFA").count(), 3);
    }

    #[test]
    fn test_edge_list_is_parseable() {
        let graph = graph_from_edges(5, &[(0, 1), (3, 3)]);
        let mut output = Vec::new();
        GraphRenderer::new(false)
            .render_edge_list(&graph, &mut output)
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        let reparsed = parse_edge_list("rendered", &text).unwrap();
        assert_eq!(reparsed.node_count(), 5);
        assert_eq!(reparsed.edge_count(), 2);
    }

    #[test]
    fn test_json_output() {
        let graph = graph_from_edges(2, &[(0, 1)]);
        let mut output = Vec::new();
        GraphRenderer::new(false)
            .render_json(&graph, &mut output)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["nodes"], 2);
        assert_eq!(value["edges"][0], serde_json::json!([0, 1]));
    }
}
