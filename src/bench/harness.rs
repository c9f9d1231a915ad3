use std::fmt;
use std::time::{Duration, Instant};

use indicatif::ProgressBar;
use petgraph::graph::{EdgeIndex, NodeIndex};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Serialize, Serializer};

use super::suite::{GraphCase, Suite};
use crate::config::BenchConfig;
use crate::constants::output::MAX_PARTITION_NODES_SHOWN;
use crate::core::Verdict;
use crate::error::OracleError;
use crate::gens::GraphKind;
use crate::graph::{SimpleBipartiteness, SimpleGraph};
use crate::oracle::BipartiteOracle;
use crate::reference::{ReferenceOutcome, reference_check};
use crate::verify::{is_valid_odd_cycle, is_valid_partition, partitions_equivalent};

fn as_micros<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_micros()).unwrap_or(u64::MAX))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Implementation {
    Oracle,
    Reference,
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Implementation::Oracle => write!(f, "Oracle"),
            Implementation::Reference => write!(f, "Reference"),
        }
    }
}

/// Which implementation won and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimingComparison {
    pub faster: Implementation,
    /// Slower time as a percentage of the faster one, minus 100, rounded
    pub percent: u64,
    #[serde(rename = "difference_us", serialize_with = "as_micros")]
    pub difference: Duration,
}

impl fmt::Display for TimingComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is faster by {}% ({} μs)",
            self.faster,
            self.percent,
            self.difference.as_micros()
        )
    }
}

/// Compare two timings. `None` when either is zero, since a ratio against
/// an unmeasurably short run means nothing.
pub fn compare_times(oracle: Duration, reference: Duration) -> Option<TimingComparison> {
    if oracle.is_zero() || reference.is_zero() {
        return None;
    }

    let (faster, fast, slow) = if oracle <= reference {
        (Implementation::Oracle, oracle, reference)
    } else {
        (Implementation::Reference, reference, oracle)
    };

    let ratio = slow.as_secs_f64() / fast.as_secs_f64() * 100.0;
    let percent = ((ratio + 0.5).floor() as u64).saturating_sub(100);

    Some(TimingComparison {
        faster,
        percent,
        difference: slow - fast,
    })
}

/// Result of one suite case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub name: String,
    pub kind: GraphKind,
    pub size: usize,
    pub nodes: usize,
    pub edges: usize,
    pub verdict: Verdict,
    pub reference_verdict: Verdict,
    /// Mean over the configured iterations
    #[serde(rename = "oracle_time_us", serialize_with = "as_micros")]
    pub oracle_time: Duration,
    #[serde(rename = "reference_time_us", serialize_with = "as_micros")]
    pub reference_time: Duration,
    pub passed: bool,
    /// Failure reasons, plus partition and witness details when verbose
    pub detail: Vec<String>,
}

impl CaseOutcome {
    pub fn comparison(&self) -> Option<TimingComparison> {
        compare_times(self.oracle_time, self.reference_time)
    }
}

/// All case outcomes of a run with their totals.
#[derive(Debug, Clone, Serialize)]
pub struct BenchSummary {
    pub seed: u64,
    pub iterations: usize,
    pub cases: Vec<CaseOutcome>,
    #[serde(rename = "oracle_total_us", serialize_with = "as_micros")]
    pub oracle_total: Duration,
    #[serde(rename = "reference_total_us", serialize_with = "as_micros")]
    pub reference_total: Duration,
}

impl BenchSummary {
    pub fn new(seed: u64, iterations: usize, cases: Vec<CaseOutcome>) -> Self {
        let oracle_total = cases.iter().map(|case| case.oracle_time).sum();
        let reference_total = cases.iter().map(|case| case.reference_time).sum();
        Self {
            seed,
            iterations,
            cases,
            oracle_total,
            reference_total,
        }
    }

    pub fn passed_count(&self) -> usize {
        self.cases.iter().filter(|case| case.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.cases.len() - self.passed_count()
    }

    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(|case| case.passed)
    }

    pub fn comparison(&self) -> Option<TimingComparison> {
        compare_times(self.oracle_total, self.reference_total)
    }
}

/// Runs suites of generated graphs through the oracle and the reference
/// check, timing both and cross-validating their answers.
pub struct BenchHarness<'a> {
    config: &'a BenchConfig,
}

impl<'a> BenchHarness<'a> {
    pub fn new(config: &'a BenchConfig) -> Self {
        Self { config }
    }

    /// Run every case of `suite`, in order or on the rayon pool.
    ///
    /// Outcomes keep suite order either way. `progress` is advanced once per
    /// finished case.
    pub fn run(
        &self,
        suite: &Suite,
        progress: Option<&ProgressBar>,
    ) -> Result<BenchSummary, OracleError> {
        let run_one = |(index, case): (usize, &GraphCase)| {
            let outcome = self.run_case(index, case);
            if let Some(pb) = progress {
                pb.set_message(case.name.clone());
                pb.inc(1);
            }
            outcome
        };

        let cases = if self.config.parallel {
            suite
                .cases()
                .par_iter()
                .enumerate()
                .map(run_one)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            suite
                .cases()
                .iter()
                .enumerate()
                .map(run_one)
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(BenchSummary::new(
            self.config.seed,
            self.config.iterations,
            cases,
        ))
    }

    /// Build, time and validate a single case. Case `index` draws its random
    /// shape from `seed + index`.
    pub fn run_case(&self, index: usize, case: &GraphCase) -> Result<CaseOutcome, OracleError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed.wrapping_add(index as u64));
        let graph = case.build(&mut rng);
        let iterations = self.config.iterations.max(1);

        let start = Instant::now();
        let mut reference = reference_check(&graph);
        for _ in 1..iterations {
            reference = reference_check(&graph);
        }
        let reference_time = mean(start.elapsed(), iterations);

        let mut oracle = BipartiteOracle::<NodeIndex, EdgeIndex>::new();
        let start = Instant::now();
        let result = oracle.check(&graph)?;
        let mut stable = true;
        for _ in 1..iterations {
            stable &= oracle.check(&graph)? == result;
        }
        let oracle_time = mean(start.elapsed(), iterations);

        let mut detail = validate(&graph, &result, &reference);
        if !stable {
            detail.push("oracle answer changed between repeated checks".to_string());
        }
        let passed = detail.is_empty();
        if self.config.verbose {
            detail.extend(describe(&result));
        }

        Ok(CaseOutcome {
            name: case.name.clone(),
            kind: case.kind,
            size: case.size,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            verdict: Verdict::from_bool(result.is_bipartite()),
            reference_verdict: Verdict::from_bool(reference.is_bipartite),
            oracle_time,
            reference_time,
            passed,
            detail,
        })
    }
}

fn mean(total: Duration, iterations: usize) -> Duration {
    total / u32::try_from(iterations).unwrap_or(u32::MAX)
}

/// Everything wrong with the oracle's answer; empty when it checks out.
fn validate(
    graph: &SimpleGraph,
    result: &SimpleBipartiteness,
    reference: &ReferenceOutcome,
) -> Vec<String> {
    let mut problems = Vec::new();

    if result.is_bipartite() != reference.is_bipartite {
        problems.push(format!(
            "verdicts disagree: oracle says {}, reference says {}",
            Verdict::from_bool(result.is_bipartite()),
            Verdict::from_bool(reference.is_bipartite)
        ));
    }

    match result {
        SimpleBipartiteness::Bipartite { part_a, part_b } => {
            if !is_valid_partition(graph, part_a, part_b) {
                problems.push("partition is not a valid two-coloring".to_string());
            }
            if reference.is_bipartite
                && !partitions_equivalent(
                    (part_a.as_slice(), part_b.as_slice()),
                    (reference.part_a.as_slice(), reference.part_b.as_slice()),
                )
            {
                problems.push("partition differs from the reference".to_string());
            }
        }
        SimpleBipartiteness::NotBipartite { odd_cycle } => {
            if !is_valid_odd_cycle(graph, odd_cycle.nodes()) {
                problems.push(format!(
                    "witness of length {} is not an odd cycle",
                    odd_cycle.len()
                ));
            }
        }
    }

    problems
}

fn describe(result: &SimpleBipartiteness) -> Vec<String> {
    match result {
        SimpleBipartiteness::Bipartite { part_a, part_b } => vec![
            format!("side A ({}): {}", part_a.len(), preview(part_a)),
            format!("side B ({}): {}", part_b.len(), preview(part_b)),
        ],
        SimpleBipartiteness::NotBipartite { odd_cycle } => vec![format!(
            "odd cycle ({}): {}",
            odd_cycle.len(),
            preview(odd_cycle.nodes())
        )],
    }
}

fn preview(nodes: &[NodeIndex]) -> String {
    let mut shown: Vec<String> = nodes
        .iter()
        .take(MAX_PARTITION_NODES_SHOWN)
        .map(|node| node.index().to_string())
        .collect();
    if nodes.len() > MAX_PARTITION_NODES_SHOWN {
        shown.push("…".to_string());
    }
    shown.join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::common::ConfigBuilder;
    use crate::config::SuiteSource;

    fn config(parallel: bool, verbose: bool) -> BenchConfig {
        BenchConfig::builder()
            .with_suite(SuiteSource::Smoke)
            .with_seed(11)
            .with_parallel(parallel)
            .with_verbose(verbose)
            .with_iterations(2)
            .with_format(OutputFormat::Json)
            .build()
            .unwrap()
    }

    #[test]
    fn test_compare_times() {
        let comparison =
            compare_times(Duration::from_micros(100), Duration::from_micros(250)).unwrap();

        assert_eq!(comparison.faster, Implementation::Oracle);
        assert_eq!(comparison.percent, 150);
        assert_eq!(comparison.difference, Duration::from_micros(150));
        assert_eq!(
            comparison.to_string(),
            "Oracle is faster by 150% (150 μs)"
        );
    }

    #[test]
    fn test_compare_times_reference_faster() {
        let comparison =
            compare_times(Duration::from_micros(300), Duration::from_micros(200)).unwrap();

        assert_eq!(comparison.faster, Implementation::Reference);
        assert_eq!(comparison.percent, 50);
    }

    #[test]
    fn test_compare_zero_time() {
        assert!(compare_times(Duration::ZERO, Duration::from_micros(5)).is_none());
        assert!(compare_times(Duration::from_micros(5), Duration::ZERO).is_none());
    }

    #[test]
    fn test_smoke_suite_passes() {
        let config = config(false, false);
        let summary = BenchHarness::new(&config).run(&Suite::smoke(), None).unwrap();

        assert_eq!(summary.cases.len(), Suite::smoke().len());
        assert!(summary.all_passed(), "{:#?}", summary.cases);
        assert_eq!(summary.failed_count(), 0);
    }

    #[test]
    fn test_known_verdicts() {
        let config = config(false, false);
        let harness = BenchHarness::new(&config);

        let odd = harness
            .run_case(0, &GraphCase::new("odd", GraphKind::Circle, 7))
            .unwrap();
        assert_eq!(odd.verdict, Verdict::NotBipartite);
        assert_eq!(odd.reference_verdict, Verdict::NotBipartite);
        assert_eq!((odd.nodes, odd.edges), (7, 7));

        let even = harness
            .run_case(1, &GraphCase::new("even", GraphKind::Squares, 16))
            .unwrap();
        assert_eq!(even.verdict, Verdict::Bipartite);
        assert!(even.passed);
        assert!(even.detail.is_empty());
    }

    #[test]
    fn test_parallel_keeps_order_and_answers() {
        let sequential = config(false, false);
        let parallel = config(true, false);

        let a = BenchHarness::new(&sequential)
            .run(&Suite::smoke(), None)
            .unwrap();
        let b = BenchHarness::new(&parallel)
            .run(&Suite::smoke(), None)
            .unwrap();

        let summarize = |summary: &BenchSummary| {
            summary
                .cases
                .iter()
                .map(|case| (case.name.clone(), case.nodes, case.edges, case.verdict))
                .collect::<Vec<_>>()
        };
        assert_eq!(summarize(&a), summarize(&b));
    }

    #[test]
    fn test_verbose_details() {
        let config = config(false, true);
        let outcome = BenchHarness::new(&config)
            .run_case(0, &GraphCase::new("loop", GraphKind::SelfLoop, 0))
            .unwrap();

        assert!(outcome.passed);
        assert_eq!(outcome.detail, vec!["odd cycle (1): 0".to_string()]);
    }

    #[test]
    fn test_outcome_json_uses_microseconds() {
        let config = config(false, false);
        let outcome = BenchHarness::new(&config)
            .run_case(0, &GraphCase::new("path", GraphKind::Path, 4))
            .unwrap();

        let value = serde_json::to_value(&outcome).unwrap();
        assert!(value["oracle_time_us"].is_u64());
        assert_eq!(value["verdict"], "bipartite");
        assert_eq!(value["kind"], "path");
    }
}
