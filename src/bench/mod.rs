//! # Comparison Harness
//!
//! Runs suites of generated graphs through both the oracle and the
//! `petgraph` reference check. Every case is timed for both sides, their
//! verdicts and partitions are compared, and the oracle's certificate is
//! validated on its own (partition crossing every edge, witness really an odd
//! cycle).
//!
//! Each case owns its graph, RNG and oracle, so cases can run on the rayon
//! pool without sharing anything.

mod harness;
mod suite;

pub use harness::{
    BenchHarness, BenchSummary, CaseOutcome, Implementation, TimingComparison, compare_times,
};
pub use suite::{GraphCase, Suite};
