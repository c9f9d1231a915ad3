//! Command implementations for the bipartite-oracle CLI
//!
//! - check: run the oracle on graph files
//! - bench: compare the oracle against the petgraph reference
//! - generate: write a synthetic graph

pub mod bench;
pub mod check;
pub mod generate;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Bench { .. } => bench::execute_bench_command(command),
        Commands::Generate { .. } => generate::execute_generate_command(command),
    }
}
