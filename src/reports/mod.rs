//! Report generation modules for different output formats
//!
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions workflow annotations

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::bench::BenchSummary;
use crate::cli::OutputFormat;
use crate::core::CheckedGraph;
use crate::error::OracleError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Report the oracle's answers for a set of graph files
    fn check_report(&self, graphs: &[CheckedGraph]) -> Result<String, OracleError>;

    /// Report a comparison harness run
    fn bench_report(&self, summary: &BenchSummary) -> Result<String, OracleError>;
}

/// Generator for the requested output format
pub fn generator_for(format: OutputFormat, verbose: bool) -> Box<dyn ReportGenerator> {
    match format {
        OutputFormat::Human => Box::new(HumanReportGenerator::new(verbose)),
        OutputFormat::Json => Box::new(JsonReportGenerator::new()),
        OutputFormat::Junit => Box::new(JunitReportGenerator::new()),
        OutputFormat::GitHub => Box::new(GitHubReportGenerator::new()),
    }
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;
