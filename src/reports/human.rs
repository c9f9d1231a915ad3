//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::bench::BenchSummary;
use crate::constants::output::MAX_CYCLE_NODES_SHOWN;
use crate::core::{CheckedGraph, VerdictReport};
use crate::error::OracleError;
use crate::utils::string::{format_cycle, pluralize};

pub struct HumanReportGenerator {
    verbose: bool,
}

impl HumanReportGenerator {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn check_report(&self, graphs: &[CheckedGraph]) -> Result<String, OracleError> {
        let mut output = String::new();

        for graph in graphs {
            match &graph.report {
                VerdictReport::Bipartite { part_a, part_b } => {
                    writeln!(
                        output,
                        "{} {}: {} ({} {}, {} {})",
                        style("✅").green(),
                        style(graph.source.display()).bold(),
                        style("bipartite").green(),
                        graph.nodes,
                        pluralize("node", graph.nodes),
                        graph.edges,
                        pluralize("edge", graph.edges)
                    )?;
                    writeln!(
                        output,
                        "  {} side A: {}, side B: {}",
                        style("→").dim(),
                        style(part_a.len()).yellow(),
                        style(part_b.len()).yellow()
                    )?;
                }
                VerdictReport::NotBipartite { odd_cycle } => {
                    writeln!(
                        output,
                        "{} {}: {} ({} {}, {} {})",
                        style("❌").red(),
                        style(graph.source.display()).bold(),
                        style("not bipartite").red(),
                        graph.nodes,
                        pluralize("node", graph.nodes),
                        graph.edges,
                        pluralize("edge", graph.edges)
                    )?;
                    writeln!(
                        output,
                        "  {} odd cycle of length {}: {}",
                        style("🔄").yellow(),
                        style(odd_cycle.len()).red().bold(),
                        format_cycle(odd_cycle, MAX_CYCLE_NODES_SHOWN)
                    )?;
                }
            }
        }

        let odd = graphs.iter().filter(|graph| !graph.is_bipartite()).count();
        writeln!(
            output,
            "\n{} Checked {} {}: {} bipartite, {} with an odd cycle",
            style("🔎").cyan(),
            style(graphs.len()).bold(),
            pluralize("graph", graphs.len()),
            style(graphs.len() - odd).green().bold(),
            style(odd).red().bold()
        )?;

        Ok(output)
    }

    fn bench_report(&self, summary: &BenchSummary) -> Result<String, OracleError> {
        let mut output = String::new();

        writeln!(
            output,
            "{} Seed {}, {} {} per case\n",
            style("🎲").cyan(),
            style(summary.seed).yellow(),
            summary.iterations,
            pluralize("iteration", summary.iterations)
        )?;

        for case in &summary.cases {
            let mark = if case.passed {
                style("✓").green().bold()
            } else {
                style("✗").red().bold()
            };
            writeln!(
                output,
                "{} {} ({} {}, {} {}): {}",
                mark,
                style(&case.name).bold(),
                case.nodes,
                pluralize("node", case.nodes),
                case.edges,
                pluralize("edge", case.edges),
                case.verdict
            )?;
            writeln!(
                output,
                "  {} oracle {} μs, reference {} μs",
                style("⏱").dim(),
                case.oracle_time.as_micros(),
                case.reference_time.as_micros()
            )?;
            if let Some(comparison) = case.comparison() {
                writeln!(output, "  {} {}", style("→").dim(), comparison)?;
            }
            if !case.passed || self.verbose {
                for line in &case.detail {
                    writeln!(output, "  {} {}", style("•").dim(), line)?;
                }
            }
        }

        writeln!(
            output,
            "\n{} Total: oracle {} μs, reference {} μs",
            style("Σ").cyan().bold(),
            summary.oracle_total.as_micros(),
            summary.reference_total.as_micros()
        )?;
        if let Some(comparison) = summary.comparison() {
            writeln!(output, "{} {}", style("🏁").yellow(), comparison)?;
        }

        if summary.all_passed() {
            writeln!(
                output,
                "{} All {} {} agree with the reference",
                style("✅").green().bold(),
                summary.cases.len(),
                pluralize("case", summary.cases.len())
            )?;
        } else {
            writeln!(
                output,
                "{} {} of {} {} failed",
                style("❌").red().bold(),
                style(summary.failed_count()).red().bold(),
                summary.cases.len(),
                pluralize("case", summary.cases.len())
            )?;
        }

        Ok(output)
    }
}
