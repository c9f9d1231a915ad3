//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::bench::BenchSummary;
use crate::constants::output::MAX_CYCLE_NODES_SHOWN;
use crate::core::{CheckedGraph, VerdictReport};
use crate::error::OracleError;
use crate::utils::string::format_cycle;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn check_report(&self, graphs: &[CheckedGraph]) -> Result<String, OracleError> {
        let mut output = String::new();

        for graph in graphs {
            if let VerdictReport::NotBipartite { odd_cycle } = &graph.report {
                writeln!(
                    output,
                    "::error file={},title=Odd Cycle::Graph is not bipartite, odd cycle of length {}: {}",
                    graph.source.display(),
                    odd_cycle.len(),
                    format_cycle(odd_cycle, MAX_CYCLE_NODES_SHOWN)
                )?;
            }
        }

        if graphs.iter().all(CheckedGraph::is_bipartite) {
            writeln!(
                output,
                "::notice title=Bipartiteness::All graphs are bipartite ({} checked) ✅",
                graphs.len()
            )?;
        }

        Ok(output)
    }

    fn bench_report(&self, summary: &BenchSummary) -> Result<String, OracleError> {
        let mut output = String::new();

        for case in summary.cases.iter().filter(|case| !case.passed) {
            writeln!(
                output,
                "::error title={}::{}",
                case.name,
                case.detail.join("; ")
            )?;
        }

        match summary.comparison() {
            Some(comparison) => writeln!(
                output,
                "::notice title=Comparison::{} of {} cases passed. {}",
                summary.passed_count(),
                summary.cases.len(),
                comparison
            )?,
            None => writeln!(
                output,
                "::notice title=Comparison::{} of {} cases passed",
                summary.passed_count(),
                summary.cases.len()
            )?,
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures;

    #[test]
    fn test_github_check_report() {
        let report = GitHubReportGenerator::new()
            .check_report(&fixtures::square_and_triangle())
            .unwrap();

        assert!(report.starts_with("::error file=triangle.edges,title=Odd Cycle::"));
        assert!(!report.contains("::notice"));
    }

    #[test]
    fn test_github_all_bipartite() {
        let graphs = vec![fixtures::checked("edge.edges", 2, &[(0, 1)])];
        let report = GitHubReportGenerator::new().check_report(&graphs).unwrap();

        assert_eq!(
            report,
            "::notice title=Bipartiteness::All graphs are bipartite (1 checked) ✅\n"
        );
    }

    #[test]
    fn test_github_bench_report() {
        let report = GitHubReportGenerator::new()
            .bench_report(&fixtures::summary())
            .unwrap();

        assert!(report.contains("::error title=Broken::verdicts disagree"));
        assert!(report.contains("1 of 2 cases passed. Oracle is faster by 67% (100 μs)"));
    }
}
