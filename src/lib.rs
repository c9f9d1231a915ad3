//! # Bipartite Oracle - Two-Coloring With Proof
//!
//! Decides whether an undirected graph is bipartite. The answer is always
//! backed by a certificate: the two sides of the partition when the graph is
//! bipartite, or a concrete odd cycle when it is not.
//!
//! ## Main Components
//!
//! - **Oracle**: breadth-first two-coloring and odd cycle reconstruction,
//!   generic over `petgraph`'s visit traits
//! - **Verify**: independent checks of partitions and odd cycles
//! - **Reference**: a second implementation built from `petgraph` algorithms
//! - **Bench**: suites of generated graphs run through both implementations
//! - **Graph**: edge-list and JSON parsing, DOT rendering
//! - **Reports**: human-readable and machine-readable output
//!
//! ## Usage
//!
//! ### Checking a Graph
//!
//! ```
//! use bipartite_oracle::graph::graph_from_edges;
//! use bipartite_oracle::oracle::{Bipartiteness, check_bipartite};
//! use bipartite_oracle::verify::{is_valid_odd_cycle, is_valid_partition};
//!
//! # fn main() -> miette::Result<()> {
//! // A square with one diagonal contains a triangle
//! let graph = graph_from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
//!
//! match check_bipartite(&graph)? {
//!     Bipartiteness::Bipartite { part_a, part_b } => {
//!         assert!(is_valid_partition(&graph, &part_a, &part_b));
//!     }
//!     Bipartiteness::NotBipartite { odd_cycle } => {
//!         assert_eq!(odd_cycle.len(), 3);
//!         assert!(is_valid_odd_cycle(&graph, odd_cycle.nodes()));
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Reusing One Oracle
//!
//! ```
//! use bipartite_oracle::gens::{GraphKind, generate};
//! use bipartite_oracle::oracle::BipartiteOracle;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! # fn main() -> miette::Result<()> {
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let mut oracle = BipartiteOracle::new();
//!
//! let odd = generate(GraphKind::Circle, 9, &mut rng);
//! let even = generate(GraphKind::Circle, 10, &mut rng);
//!
//! assert!(!oracle.check(&odd)?.is_bipartite());
//! assert!(oracle.check(&even)?.is_bipartite());
//! # Ok(())
//! # }
//! ```
//!
//! ### Running a Comparison Suite
//!
//! ```
//! use bipartite_oracle::bench::{BenchHarness, Suite};
//! use bipartite_oracle::cli::OutputFormat;
//! use bipartite_oracle::common::ConfigBuilder;
//! use bipartite_oracle::config::BenchConfig;
//! use bipartite_oracle::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let config = BenchConfig::builder()
//!     .with_seed(7)
//!     .with_format(OutputFormat::Human)
//!     .build()?;
//!
//! let summary = BenchHarness::new(&config).run(&Suite::smoke(), None)?;
//! assert!(summary.all_passed());
//!
//! println!("{}", HumanReportGenerator::new(false).bench_report(&summary)?);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod bench;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod gens;
pub mod graph;
pub mod oracle;
pub mod reference;
pub mod reports;
pub mod verify;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
