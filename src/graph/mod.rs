//! # Graph Container, Parsing and Rendering
//!
//! The oracle itself is generic over `petgraph`'s visit traits. This module
//! supplies the concrete container the tool works with and its file formats.
//!
//! ## Components
//!
//! - **SimpleGraph**: `petgraph` undirected arena graph without weights
//! - **GraphDocument**: serde form of a graph (`{"nodes": N, "edges": [...]}`)
//! - **load_graph / parse_edge_list / parse_json**: file input with located
//!   parse errors
//! - **GraphRenderer**: DOT, edge-list and JSON output, optionally
//!   highlighting a partition or a witness cycle
//!
//! ## Example
//!
//! ```
//! use bipartite_oracle::graph::{GraphRenderer, parse_edge_list};
//! use bipartite_oracle::oracle::check_bipartite;
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = parse_edge_list("triangle", "0 1\n1 2\n2 0\n")?;
//! let result = check_bipartite(&graph)?;
//!
//! let mut output = Vec::new();
//! GraphRenderer::new(true).render_dot(&graph, Some(&result), &mut output)?;
//!
//! let dot = String::from_utf8(output).into_diagnostic()?;
//! assert!(dot.contains("0 -- 1"));
//! assert!(dot.contains("penwidth=3"));
//! # Ok(())
//! # }
//! ```

mod parser;
mod renderer;
mod types;

pub use parser::{GraphFileFormat, load_graph, parse_edge_list, parse_json};
pub use renderer::GraphRenderer;
pub use types::{GraphDocument, SimpleBipartiteness, SimpleGraph, graph_from_edges};
