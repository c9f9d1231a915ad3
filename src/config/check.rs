//! Check command configuration

use crate::cli::OutputFormat;
use crate::common::ConfigBuilder;
use crate::error::OracleError;
use crate::graph::GraphFileFormat;

/// Configuration for the check command
///
/// Every input pattern is expanded with `glob`; a pattern that matches
/// nothing is treated as a literal path so missing files are reported.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Graph files or glob patterns
    pub inputs: Vec<String>,
    /// How to parse the graph files
    pub input_format: GraphFileFormat,
    /// Output format for the report
    pub format: OutputFormat,
    /// Exit with an error code when any graph has an odd cycle
    pub error_on_odd_cycle: bool,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    inputs: Option<Vec<String>>,
    input_format: Option<GraphFileFormat>,
    format: Option<OutputFormat>,
    error_on_odd_cycle: Option<bool>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(mut self, inputs: Vec<String>) -> Self {
        self.inputs = Some(inputs);
        self
    }

    pub fn with_input_format(mut self, input_format: GraphFileFormat) -> Self {
        self.input_format = Some(input_format);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_odd_cycle(mut self, error_on_odd_cycle: bool) -> Self {
        self.error_on_odd_cycle = Some(error_on_odd_cycle);
        self
    }
}

impl ConfigBuilder for CheckConfigBuilder {
    type Config = CheckConfig;

    fn build(self) -> Result<Self::Config, OracleError> {
        let inputs = self.inputs.ok_or_else(|| missing("inputs"))?;
        if inputs.is_empty() {
            return Err(OracleError::ConfigurationError {
                message: "At least one graph file or pattern is required".to_string(),
            });
        }

        Ok(CheckConfig {
            inputs,
            input_format: self.input_format.unwrap_or_default(),
            format: self.format.ok_or_else(|| missing("format"))?,
            error_on_odd_cycle: self.error_on_odd_cycle.unwrap_or(false),
        })
    }
}

pub(crate) fn missing(field: &str) -> OracleError {
    OracleError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
