//! # Graph Generators
//!
//! Synthetic inputs for the comparison harness and for tests. Every generator
//! appends to an existing [`SimpleGraph`] and returns the nodes it created, so
//! shapes can be combined. Randomized shapes take the RNG explicitly; the
//! harness seeds a `ChaCha8Rng` per case so runs are reproducible.
//!
//! | kind               | bipartite?                      |
//! |--------------------|---------------------------------|
//! | `debug`            | no (contains a 5-cycle)         |
//! | `path`             | yes                             |
//! | `circle`           | iff the size is even            |
//! | `squares`          | yes                             |
//! | `layered-groups`   | no                              |
//! | `bridged-circles`  | depends on the random extra edge |
//! | `disjoint-circles` | iff the size is even            |
//! | `self-loop`        | no                              |

use petgraph::graph::NodeIndex;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::graph::SimpleGraph;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GraphKind {
    Debug,
    Path,
    Circle,
    Squares,
    LayeredGroups,
    BridgedCircles,
    DisjointCircles,
    SelfLoop,
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GraphKind::Debug => "debug",
            GraphKind::Path => "path",
            GraphKind::Circle => "circle",
            GraphKind::Squares => "squares",
            GraphKind::LayeredGroups => "layered-groups",
            GraphKind::BridgedCircles => "bridged-circles",
            GraphKind::DisjointCircles => "disjoint-circles",
            GraphKind::SelfLoop => "self-loop",
        };
        f.write_str(name)
    }
}

/// Build a fresh graph of the given kind. `size` is ignored by the fixed
/// shapes (`debug`, `self-loop`).
pub fn generate<R: Rng + ?Sized>(kind: GraphKind, size: usize, rng: &mut R) -> SimpleGraph {
    let mut graph = SimpleGraph::default();
    match kind {
        GraphKind::Debug => {
            add_debug_graph(&mut graph);
        }
        GraphKind::Path => {
            add_path(&mut graph, size);
        }
        GraphKind::Circle => {
            add_circle(&mut graph, size);
        }
        GraphKind::Squares => {
            add_squares(&mut graph, size);
        }
        GraphKind::LayeredGroups => {
            add_layered_groups(&mut graph, size, rng);
        }
        GraphKind::BridgedCircles => {
            add_bridged_circles(&mut graph, size, rng);
        }
        GraphKind::DisjointCircles => {
            add_circle(&mut graph, size);
            add_circle(&mut graph, size);
        }
        GraphKind::SelfLoop => {
            let node = graph.add_node(());
            graph.add_edge(node, node, ());
        }
    }
    graph
}

fn add_nodes(graph: &mut SimpleGraph, count: usize) -> Vec<NodeIndex> {
    (0..count).map(|_| graph.add_node(())).collect()
}

fn connect_path(graph: &mut SimpleGraph, nodes: &[NodeIndex]) {
    for pair in nodes.windows(2) {
        graph.add_edge(pair[0], pair[1], ());
    }
}

/// The fixed nine-node debugging graph: one component with a 5-cycle
/// (1-2-3-5-6) and a separate edge 7-8.
pub fn add_debug_graph(graph: &mut SimpleGraph) -> Vec<NodeIndex> {
    let nodes = add_nodes(graph, 9);
    for (u, v) in [(0, 2), (1, 2), (2, 3), (3, 4), (3, 5), (5, 6), (1, 6), (7, 8)] {
        graph.add_edge(nodes[u], nodes[v], ());
    }
    nodes
}

pub fn add_path(graph: &mut SimpleGraph, size: usize) -> Vec<NodeIndex> {
    let nodes = add_nodes(graph, size);
    connect_path(graph, &nodes);
    nodes
}

/// Cycle on `size` nodes. A single node gets a self-loop and two nodes get a
/// pair of parallel edges.
pub fn add_circle(graph: &mut SimpleGraph, size: usize) -> Vec<NodeIndex> {
    let nodes = add_path(graph, size);
    if let (Some(&first), Some(&last)) = (nodes.first(), nodes.last()) {
        graph.add_edge(last, first, ());
    }
    nodes
}

/// Stack of 4-cycles, each corner joined to the same corner of the previous
/// ring. `size` is rounded up to a multiple of four.
pub fn add_squares(graph: &mut SimpleGraph, size: usize) -> Vec<NodeIndex> {
    let rings = size.div_ceil(4).max(1);
    let mut nodes = Vec::with_capacity(rings * 4);
    let mut previous: Option<Vec<NodeIndex>> = None;

    for _ in 0..rings {
        let ring = add_circle(graph, 4);
        if let Some(previous) = &previous {
            for (&corner, &below) in ring.iter().zip(previous) {
                graph.add_edge(corner, below, ());
            }
        }
        nodes.extend_from_slice(&ring);
        previous = Some(ring);
    }

    nodes
}

/// Four layers of `size` nodes. Column `i` is a path through all layers, one
/// random hub per layer is joined to the whole next layer, and two random
/// edges join layer `i` to layer `i + 2`.
pub fn add_layered_groups<R: Rng + ?Sized>(
    graph: &mut SimpleGraph,
    size: usize,
    rng: &mut R,
) -> Vec<NodeIndex> {
    if size == 0 {
        return Vec::new();
    }

    let layers: Vec<Vec<NodeIndex>> = (0..4).map(|_| add_nodes(graph, size)).collect();

    for column in 0..size {
        for layer in 1..4 {
            graph.add_edge(layers[layer - 1][column], layers[layer][column], ());
        }
    }

    for layer in 0..3 {
        let hub = layers[layer][rng.gen_range(0..size)];
        for &node in &layers[layer + 1] {
            graph.add_edge(hub, node, ());
        }
    }

    for layer in 0..2 {
        let first = layers[layer][rng.gen_range(0..size)];
        let second = layers[layer + 2][rng.gen_range(0..size)];
        graph.add_edge(first, second, ());
    }

    layers.into_iter().flatten().collect()
}

/// Two even circles of `2 * size` nodes joined by one bridge, plus one edge
/// between two random nodes, which makes the graph non-bipartite about half of
/// the time.
pub fn add_bridged_circles<R: Rng + ?Sized>(
    graph: &mut SimpleGraph,
    size: usize,
    rng: &mut R,
) -> Vec<NodeIndex> {
    if size == 0 {
        return Vec::new();
    }

    let mut nodes = add_circle(graph, size * 2);
    nodes.extend(add_circle(graph, size * 2));

    graph.add_edge(nodes[0], nodes[nodes.len() - 1], ());

    let first = nodes[rng.gen_range(0..nodes.len())];
    let second = nodes[rng.gen_range(0..nodes.len())];
    graph.add_edge(first, second, ());

    nodes
}
