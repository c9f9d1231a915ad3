//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::bench::BenchSummary;
use crate::core::CheckedGraph;
use crate::error::OracleError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn check_report(&self, graphs: &[CheckedGraph]) -> Result<String, OracleError> {
        let bipartite = graphs.iter().filter(|graph| graph.is_bipartite()).count();

        let report = json!({
            "graph_count": graphs.len(),
            "bipartite_count": bipartite,
            "odd_cycle_count": graphs.len() - bipartite,
            "graphs": graphs,
        });

        serde_json::to_string_pretty(&report).map_err(OracleError::Json)
    }

    fn bench_report(&self, summary: &BenchSummary) -> Result<String, OracleError> {
        let report = json!({
            "passed": summary.passed_count(),
            "failed": summary.failed_count(),
            "comparison": summary.comparison(),
            "summary": summary,
        });

        serde_json::to_string_pretty(&report).map_err(OracleError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::reports::fixtures;

    #[test]
    fn test_json_check_report() {
        let report = JsonReportGenerator::new()
            .check_report(&fixtures::square_and_triangle())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["graph_count"], 2);
        assert_eq!(json["bipartite_count"], 1);
        assert_eq!(json["odd_cycle_count"], 1);

        let graphs = json["graphs"].as_array().unwrap();
        assert_eq!(graphs[0]["verdict"], "bipartite");
        assert_eq!(graphs[0]["part_a"], json!([0, 2]));
        assert_eq!(graphs[1]["verdict"], "not-bipartite");
        assert_eq!(graphs[1]["odd_cycle"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_json_empty_check_report() {
        let report = JsonReportGenerator::new().check_report(&[]).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["graph_count"], 0);
        assert_eq!(json["graphs"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_bench_report() {
        let report = JsonReportGenerator::new()
            .bench_report(&fixtures::summary())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["passed"], 1);
        assert_eq!(json["failed"], 1);
        assert_eq!(json["comparison"]["faster"], "oracle");
        assert_eq!(json["summary"]["oracle_total_us"], 150);
        assert_eq!(json["summary"]["reference_total_us"], 250);
        assert_eq!(json["summary"]["cases"][1]["passed"], false);
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let report = JsonReportGenerator::new().check_report(&[]).unwrap();

        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
