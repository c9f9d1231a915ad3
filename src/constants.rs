//! Configuration constants for bipartite-oracle
//!
//! Defaults used by the command-line tool. Most of them can be overridden
//! through command arguments or their `BIPARTITE_ORACLE_*` environment
//! variables.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames, alternating the two sides of a bipartition
    pub const SPINNER_FRAMES: &[&str] = &[
        "◐ ", // Side A leading
        "◓ ", // Top half
        "◑ ", // Side B leading
        "◒ ", // Bottom half
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Longest odd cycle printed in full by the human report
    pub const MAX_CYCLE_NODES_SHOWN: usize = 12;

    /// Nodes listed per side of a partition in verbose output
    pub const MAX_PARTITION_NODES_SHOWN: usize = 8;
}

/// Input graph limits
pub mod graph {
    /// Largest node count accepted from a graph file. Node ids must be below it.
    pub const MAX_NODES: usize = 1 << 26;
}

/// Comparison harness defaults
pub mod bench {
    /// Seed used when none is given
    pub const DEFAULT_SEED: u64 = 0x5EED_B1BA;

    /// Timed repetitions per implementation and case
    pub const DEFAULT_ITERATIONS: usize = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 4);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert!(output::MAX_CYCLE_NODES_SHOWN >= 3);
    }

    #[test]
    fn test_node_limit_fits_default_index_type() {
        assert!(graph::MAX_NODES < u32::MAX as usize);
    }

    #[test]
    fn test_bench_constants() {
        assert_eq!(bench::DEFAULT_ITERATIONS, 1);
    }
}
