use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::FormatArgs;
use crate::config::SuiteSource;
use crate::gens::GraphKind;
use crate::graph::GraphFileFormat;

#[derive(Parser)]
#[command(
    name = "bipartite-oracle",
    about = "◐ Decide bipartiteness of undirected graphs, with an odd cycle as proof",
    long_about = "bipartite-oracle two-colors undirected graphs with a breadth-first sweep. A \
                  bipartite graph is reported with its two sides, any other graph with an odd \
                  cycle that proves it cannot be two-colored. It also benchmarks the oracle \
                  against an independent petgraph implementation and generates test graphs.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check graph files for bipartiteness
    ///
    /// Reads each graph (edge list or JSON), runs the oracle and reports
    /// either the two sides or an odd cycle.
    #[command(
        long_about = "Run the oracle on one or more graph files. Inputs may be paths or quoted \
                      glob patterns. Edge-list files hold one `u v` pair per line, with `#` \
                      comments and an optional `nodes N` header; JSON files hold \
                      {\"nodes\": N, \"edges\": [[u, v], ...]}."
    )]
    Check {
        /// Graph files or glob patterns
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<String>,

        /// How to parse the input files
        #[arg(
            long,
            value_enum,
            default_value = "auto",
            env = "BIPARTITE_ORACLE_INPUT_FORMAT"
        )]
        input_format: GraphFileFormat,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if any graph has an odd cycle
        #[arg(long, env = "BIPARTITE_ORACLE_ERROR_ON_ODD_CYCLE")]
        error_on_odd_cycle: bool,
    },

    /// Compare the oracle against the petgraph reference
    ///
    /// Generates every case of a suite, times both implementations and
    /// validates that their answers agree.
    #[command(
        long_about = "Run a benchmark suite: for each case a graph is generated from a seeded \
                      RNG, checked by the reference implementation and by the oracle, and the \
                      answers are cross-validated. The report shows per-case timings and which \
                      implementation was faster overall. Use `--suite smoke` for a quick run or \
                      pass a TOML file of [[case]] tables."
    )]
    Bench {
        /// Built-in suite (`standard`, `smoke`) or path to a TOML suite file
        #[arg(
            long,
            default_value = "standard",
            env = "BIPARTITE_ORACLE_SUITE"
        )]
        suite: SuiteSource,

        /// Base seed for random graph shapes
        #[arg(long, env = "BIPARTITE_ORACLE_SEED")]
        seed: Option<u64>,

        /// Run cases in parallel
        #[arg(long, env = "BIPARTITE_ORACLE_PARALLEL")]
        parallel: bool,

        /// Timed repetitions per case
        #[arg(long, env = "BIPARTITE_ORACLE_ITERATIONS")]
        iterations: Option<usize>,

        /// Show partitions and witnesses for every case
        #[arg(short, long, env = "BIPARTITE_ORACLE_VERBOSE")]
        verbose: bool,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if any case fails
        #[arg(long, env = "BIPARTITE_ORACLE_ERROR_ON_MISMATCH")]
        error_on_mismatch: bool,
    },

    /// Generate a synthetic graph
    Generate {
        /// Shape of the graph
        #[arg(value_enum)]
        kind: GraphKind,

        /// Size parameter of the shape
        #[arg(short, long, default_value_t = 16)]
        size: usize,

        /// Seed for random shapes
        #[arg(long, env = "BIPARTITE_ORACLE_SEED")]
        seed: Option<u64>,

        /// Output format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "edges",
            env = "BIPARTITE_ORACLE_GRAPH_FORMAT"
        )]
        format: GenerateFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "BIPARTITE_ORACLE_OUTPUT")]
        output: Option<PathBuf>,

        /// Color DOT output with the oracle's partition or odd cycle
        #[arg(long, env = "BIPARTITE_ORACLE_HIGHLIGHT")]
        highlight: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GenerateFormat {
    Edges,
    Json,
    Dot,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_bench() {
        let cli = Cli::try_parse_from([
            "bipartite-oracle",
            "bench",
            "--suite",
            "smoke",
            "--seed",
            "3",
            "--parallel",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Bench {
                suite,
                seed,
                parallel,
                format,
                ..
            } => {
                assert_eq!(suite, SuiteSource::Smoke);
                assert_eq!(seed, Some(3));
                assert!(parallel);
                assert_eq!(format.format, OutputFormat::Json);
            }
            _ => panic!("expected bench command"),
        }
    }

    #[test]
    fn test_check_requires_input() {
        assert!(Cli::try_parse_from(["bipartite-oracle", "check"]).is_err());
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "bipartite-oracle",
            "generate",
            "layered-groups",
            "--size",
            "8",
            "--format",
            "dot",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate { kind, size, format, .. } => {
                assert_eq!(kind, GraphKind::LayeredGroups);
                assert_eq!(size, 8);
                assert_eq!(format, GenerateFormat::Dot);
            }
            _ => panic!("expected generate command"),
        }
    }
}
