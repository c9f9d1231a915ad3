//! Benchmark suites: named graph cases, built in-process or read from TOML.
//!
//! ```toml
//! [[case]]
//! name = "Circle 10001"
//! kind = "circle"
//! size = 10001
//! ```

use std::path::Path;

use miette::NamedSource;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{OracleError, SuiteParseError};
use crate::gens::{GraphKind, generate};
use crate::graph::SimpleGraph;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphCase {
    pub name: String,
    pub kind: GraphKind,
    #[serde(default)]
    pub size: usize,
}

impl GraphCase {
    pub fn new(name: impl Into<String>, kind: GraphKind, size: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
        }
    }

    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> SimpleGraph {
        generate(self.kind, self.size, rng)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Suite {
    #[serde(rename = "case", default)]
    cases: Vec<GraphCase>,
}

impl Suite {
    pub fn new(cases: Vec<GraphCase>) -> Self {
        Self { cases }
    }

    /// The classic comparison run: a debug graph, stacked squares, odd and
    /// even circles, layered groups, bridged circles and two large circles.
    pub fn standard() -> Self {
        use GraphKind::*;

        Self::new(vec![
            GraphCase::new("Debug Case", Debug, 0),
            GraphCase::new("Squares 10000", Squares, 10_000),
            GraphCase::new("Squares 40000", Squares, 40_000),
            GraphCase::new("Squares 90000", Squares, 90_000),
            GraphCase::new("Circle 10001", Circle, 10_001),
            GraphCase::new("Circle 40001", Circle, 40_001),
            GraphCase::new("Circle 90001", Circle, 90_001),
            GraphCase::new("Circle 90000", Circle, 90_000),
            GraphCase::new("Groups 500", LayeredGroups, 500),
            GraphCase::new("Groups 1000", LayeredGroups, 1_000),
            GraphCase::new("Groups 1500", LayeredGroups, 1_500),
            GraphCase::new("Groups 20000", LayeredGroups, 20_000),
            GraphCase::new("Bonus 400", BridgedCircles, 400),
            GraphCase::new("Bonus 10000", BridgedCircles, 10_000),
            GraphCase::new("Bonus 20000", BridgedCircles, 20_000),
            GraphCase::new("Bonus 40000", BridgedCircles, 40_000),
            GraphCase::new("2 Cir 90000", DisjointCircles, 90_000),
        ])
    }

    /// Small cases for quick runs and tests.
    pub fn smoke() -> Self {
        use GraphKind::*;

        Self::new(vec![
            GraphCase::new("Debug Case", Debug, 0),
            GraphCase::new("Self Loop", SelfLoop, 0),
            GraphCase::new("Path 64", Path, 64),
            GraphCase::new("Squares 64", Squares, 64),
            GraphCase::new("Circle 63", Circle, 63),
            GraphCase::new("Circle 64", Circle, 64),
            GraphCase::new("Groups 16", LayeredGroups, 16),
            GraphCase::new("Bonus 16", BridgedCircles, 16),
            GraphCase::new("2 Cir 32", DisjointCircles, 32),
        ])
    }

    pub fn from_toml(name: &str, source: &str) -> Result<Self, OracleError> {
        toml::from_str(source).map_err(|source_err| {
            OracleError::SuiteParseError(Box::new(SuiteParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, source.to_string()),
                span: source_err.span().map(Into::into),
                source: source_err,
            }))
        })
    }

    pub fn load(path: &Path) -> Result<Self, OracleError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| OracleError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml(&path.display().to_string(), &content)
    }

    pub fn cases(&self) -> &[GraphCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
