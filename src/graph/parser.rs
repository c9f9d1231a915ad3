//! Graph file parsing
//!
//! Two formats are understood:
//!
//! - edge lists: one `u v` pair per line, `#` starts a comment, and an
//!   optional leading `nodes N` header declares isolated nodes
//! - JSON: `{"nodes": N, "edges": [[u, v], ...]}`

use std::path::Path;

use miette::NamedSource;

use super::types::{GraphDocument, SimpleGraph, graph_from_edges};
use crate::constants::graph::MAX_NODES;
use crate::error::{GraphParseError, OracleError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum GraphFileFormat {
    /// Pick the format from the file extension (`.json` or anything else)
    #[default]
    Auto,
    Edges,
    Json,
}

impl GraphFileFormat {
    fn resolve(self, path: &Path) -> Self {
        match self {
            GraphFileFormat::Auto => {
                if path.extension().is_some_and(|ext| ext == "json") {
                    GraphFileFormat::Json
                } else {
                    GraphFileFormat::Edges
                }
            }
            other => other,
        }
    }
}

/// Read and parse the graph stored at `path`.
pub fn load_graph(path: &Path, format: GraphFileFormat) -> Result<SimpleGraph, OracleError> {
    let content = std::fs::read_to_string(path).map_err(|source| OracleError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;

    match format.resolve(path) {
        GraphFileFormat::Json => parse_json(&content),
        _ => parse_edge_list(&path.display().to_string(), &content),
    }
}

pub fn parse_json(source: &str) -> Result<SimpleGraph, OracleError> {
    let document: GraphDocument = serde_json::from_str(source)?;
    document.into_graph()
}

/// Parse an edge list. `name` is only used for error reporting.
///
/// Without a `nodes` header the graph has `max id + 1` nodes. Node ids and
/// the header count are capped at `MAX_NODES`.
pub fn parse_edge_list(name: &str, source: &str) -> Result<SimpleGraph, OracleError> {
    let mut declared_nodes: Option<usize> = None;
    let mut edges = Vec::new();
    let mut offset = 0;

    for line in source.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let content = line.split_once('#').map_or(line, |(before, _)| before);
        let tokens = tokenize(content, line_start);

        match tokens.as_slice() {
            [] => {}
            [(at, "nodes"), (count_at, count)] => {
                if declared_nodes.is_some() || !edges.is_empty() {
                    return Err(parse_error(
                        name,
                        source,
                        *at,
                        content.trim_end().len() - (*at - line_start),
                        "the `nodes` header must come before any edge",
                    ));
                }
                declared_nodes = Some(parse_node_count(name, source, *count_at, count)?);
            }
            [(u_at, u), (v_at, v)] => {
                let u = parse_node_id(name, source, *u_at, u)?;
                let v = parse_node_id(name, source, *v_at, v)?;

                if let Some(nodes) = declared_nodes {
                    for (id, at, token) in [(u, *u_at, tokens[0].1), (v, *v_at, tokens[1].1)] {
                        if id >= nodes {
                            return Err(parse_error(
                                name,
                                source,
                                at,
                                token.len(),
                                format!("node {id} is outside the declared 0..{nodes}"),
                            ));
                        }
                    }
                }

                edges.push((u, v));
            }
            [(at, _), ..] => {
                return Err(parse_error(
                    name,
                    source,
                    *at,
                    content.trim_end().len() - (*at - line_start),
                    "expected exactly two node ids",
                ));
            }
        }
    }

    let nodes = declared_nodes.unwrap_or_else(|| {
        edges
            .iter()
            .map(|&(u, v)| u.max(v) + 1)
            .max()
            .unwrap_or(0)
    });

    Ok(graph_from_edges(nodes, &edges))
}

/// Whitespace separated tokens with their absolute byte offsets.
fn tokenize(content: &str, line_start: usize) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, ch) in content.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push((line_start + s, &content[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push((line_start + s, &content[s..]));
    }

    tokens
}

fn parse_node_id(name: &str, source: &str, at: usize, token: &str) -> Result<usize, OracleError> {
    let id = token.parse::<usize>().map_err(|_| {
        parse_error(
            name,
            source,
            at,
            token.len(),
            format!("`{token}` is not a node id"),
        )
    })?;

    if id >= MAX_NODES {
        return Err(parse_error(
            name,
            source,
            at,
            token.len(),
            format!("node {id} is beyond the limit of {MAX_NODES} nodes"),
        ));
    }
    Ok(id)
}

fn parse_node_count(
    name: &str,
    source: &str,
    at: usize,
    token: &str,
) -> Result<usize, OracleError> {
    match token.parse::<usize>() {
        Ok(count) if count <= MAX_NODES => Ok(count),
        Ok(count) => Err(parse_error(
            name,
            source,
            at,
            token.len(),
            format!("{count} nodes exceed the limit of {MAX_NODES}"),
        )),
        Err(_) => Err(parse_error(
            name,
            source,
            at,
            token.len(),
            format!("`{token}` is not a node count"),
        )),
    }
}

fn parse_error(
    name: &str,
    source: &str,
    at: usize,
    len: usize,
    message: impl Into<String>,
) -> OracleError {
    OracleError::GraphParseError(Box::new(GraphParseError {
        file: name.to_string(),
        message: message.into(),
        source_code: NamedSource::new(name, source.to_string()),
        span: Some((at, len).into()),
    }))
}
