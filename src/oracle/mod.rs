//! # Bipartiteness Oracle
//!
//! Decides whether an undirected graph is bipartite. A positive answer comes
//! with the two-color partition, a negative one with a concrete odd cycle.
//!
//! ## Algorithm
//!
//! A breadth-first traversal colors one connected component at a time,
//! alternating colors by depth and remembering the edge that discovered each
//! node. The sweep restarts on every node left uncolored, so disconnected
//! graphs are handled. The first edge whose endpoints share a color stops the
//! sweep; walking both endpoints back along their discovery edges to their
//! lowest common ancestor yields an odd cycle. Runs in O(V + E).
//!
//! Self-loops are immediate conflicts. Parallel edges never cause false
//! conflicts.
//!
//! ## Key Components
//!
//! - **BipartiteOracle**: component sweep and partition assembly
//! - **color_component**: single-component BFS two-coloring
//! - **reconstruct_odd_cycle**: witness construction from arrival edges
//!
//! ## Example
//!
//! ```
//! use bipartite_oracle::oracle::{Bipartiteness, check_bipartite};
//! use petgraph::graph::UnGraph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let triangle = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0)]);
//!
//! match check_bipartite(&triangle)? {
//!     Bipartiteness::Bipartite { .. } => unreachable!(),
//!     Bipartiteness::NotBipartite { odd_cycle } => assert_eq!(odd_cycle.len(), 3),
//! }
//!
//! let square = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
//! assert!(check_bipartite(&square)?.is_bipartite());
//! # Ok(())
//! # }
//! ```

mod color;
mod oracle_impl;
mod reconstruct;
mod traversal;

pub use color::{Arrival, Color, TraversalState};
pub use oracle_impl::*;
pub use reconstruct::{OddCycle, reconstruct_odd_cycle};
pub use traversal::{ConflictEdge, TraversalOutcome, color_component};
