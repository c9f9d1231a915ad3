//! Bench command configuration

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::check::missing;
use crate::bench::Suite;
use crate::cli::OutputFormat;
use crate::common::ConfigBuilder;
use crate::constants::bench::{DEFAULT_ITERATIONS, DEFAULT_SEED};
use crate::error::OracleError;

/// Which cases the harness runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiteSource {
    /// The full comparison list
    Standard,
    /// A handful of tiny graphs
    Smoke,
    /// A TOML file of `[[case]]` tables
    File(PathBuf),
}

impl SuiteSource {
    pub fn load(&self) -> Result<Suite, OracleError> {
        match self {
            SuiteSource::Standard => Ok(Suite::standard()),
            SuiteSource::Smoke => Ok(Suite::smoke()),
            SuiteSource::File(path) => Suite::load(path),
        }
    }
}

impl FromStr for SuiteSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "standard" => SuiteSource::Standard,
            "smoke" => SuiteSource::Smoke,
            path => SuiteSource::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for SuiteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuiteSource::Standard => f.write_str("standard"),
            SuiteSource::Smoke => f.write_str("smoke"),
            SuiteSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Configuration for the comparison harness.
///
/// Passed explicitly to [`crate::bench::BenchHarness`]; nothing is read from
/// global state.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub suite: SuiteSource,
    /// Base seed; case `i` uses `seed + i`
    pub seed: u64,
    /// Run cases concurrently on the rayon pool
    pub parallel: bool,
    /// Timed repetitions per implementation and case
    pub iterations: usize,
    /// Record partition and witness details in each outcome
    pub verbose: bool,
    pub format: OutputFormat,
    /// Exit with an error code when any case fails
    pub error_on_mismatch: bool,
}

impl BenchConfig {
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct BenchConfigBuilder {
    suite: Option<SuiteSource>,
    seed: Option<u64>,
    parallel: Option<bool>,
    iterations: Option<usize>,
    verbose: Option<bool>,
    format: Option<OutputFormat>,
    error_on_mismatch: Option<bool>,
}

impl BenchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suite(mut self, suite: SuiteSource) -> Self {
        self.suite = Some(suite);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_mismatch(mut self, error_on_mismatch: bool) -> Self {
        self.error_on_mismatch = Some(error_on_mismatch);
        self
    }
}

impl ConfigBuilder for BenchConfigBuilder {
    type Config = BenchConfig;

    fn build(self) -> Result<Self::Config, OracleError> {
        let iterations = self.iterations.unwrap_or(DEFAULT_ITERATIONS);
        if iterations == 0 {
            return Err(OracleError::ConfigurationError {
                message: "Iterations must be at least 1".to_string(),
            });
        }

        Ok(BenchConfig {
            suite: self.suite.unwrap_or(SuiteSource::Standard),
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            parallel: self.parallel.unwrap_or(false),
            iterations,
            verbose: self.verbose.unwrap_or(false),
            format: self.format.ok_or_else(|| missing("format"))?,
            error_on_mismatch: self.error_on_mismatch.unwrap_or(false),
        })
    }
}
