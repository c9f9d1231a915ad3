//! JUnit XML format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::bench::BenchSummary;
use crate::constants::output::MAX_CYCLE_NODES_SHOWN;
use crate::core::{CheckedGraph, VerdictReport};
use crate::error::OracleError;
use crate::utils::string::format_cycle;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl ReportGenerator for JunitReportGenerator {
    fn check_report(&self, graphs: &[CheckedGraph]) -> Result<String, OracleError> {
        let mut output = String::new();
        let failures = graphs.iter().filter(|graph| !graph.is_bipartite()).count();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="bipartite-oracle" tests="{}" failures="{failures}">"#,
            graphs.len()
        )?;
        writeln!(
            output,
            r#"  <testsuite name="bipartiteness" tests="{}" failures="{failures}">"#,
            graphs.len()
        )?;

        for graph in graphs {
            let name = escape(&graph.source.display().to_string());
            match &graph.report {
                VerdictReport::Bipartite { .. } => {
                    writeln!(
                        output,
                        r#"    <testcase name="{name}" classname="bipartite-oracle" />"#
                    )?;
                }
                VerdictReport::NotBipartite { odd_cycle } => {
                    writeln!(
                        output,
                        r#"    <testcase name="{name}" classname="bipartite-oracle">"#
                    )?;
                    writeln!(
                        output,
                        r#"      <failure message="Odd cycle of length {}">"#,
                        odd_cycle.len()
                    )?;
                    writeln!(output, "{}", format_cycle(odd_cycle, MAX_CYCLE_NODES_SHOWN))?;
                    writeln!(output, r#"      </failure>"#)?;
                    writeln!(output, r#"    </testcase>"#)?;
                }
            }
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }

    fn bench_report(&self, summary: &BenchSummary) -> Result<String, OracleError> {
        let mut output = String::new();
        let tests = summary.cases.len();
        let failures = summary.failed_count();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="bipartite-oracle" tests="{tests}" failures="{failures}">"#
        )?;
        writeln!(
            output,
            r#"  <testsuite name="oracle-vs-reference" tests="{tests}" failures="{failures}" time="{:.6}">"#,
            summary.oracle_total.as_secs_f64()
        )?;

        for case in &summary.cases {
            let name = escape(&case.name);
            let time = case.oracle_time.as_secs_f64();
            if case.passed {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="bench" time="{time:.6}" />"#
                )?;
            } else {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="bench" time="{time:.6}">"#
                )?;
                writeln!(
                    output,
                    r#"      <failure message="Oracle disagrees with the reference">"#
                )?;
                for line in &case.detail {
                    writeln!(output, "{}", escape(line))?;
                }
                writeln!(output, r#"      </failure>"#)?;
                writeln!(output, r#"    </testcase>"#)?;
            }
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures;

    #[test]
    fn test_junit_check_report() {
        let report = JunitReportGenerator::new()
            .check_report(&fixtures::square_and_triangle())
            .unwrap();

        assert!(report.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(report.contains(r#"tests="2" failures="1""#));
        assert!(report.contains(r#"<testcase name="square.edges" classname="bipartite-oracle" />"#));
        assert!(report.contains(r#"<failure message="Odd cycle of length 3">"#));
    }

    #[test]
    fn test_junit_bench_report() {
        let report = JunitReportGenerator::new()
            .bench_report(&fixtures::summary())
            .unwrap();

        assert!(report.contains(r#"<testsuite name="oracle-vs-reference" tests="2" failures="1""#));
        assert!(report.contains(r#"<testcase name="Circle 5" classname="bench" time="0.000100" />"#));
        assert!(report.contains("verdicts disagree"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"a<b & "c""#), "a&lt;b &amp; &quot;c&quot;");
    }
}
