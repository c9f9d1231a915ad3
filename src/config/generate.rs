//! Generate command configuration

use std::path::PathBuf;

use super::check::missing;
use crate::cli::GenerateFormat;
use crate::common::ConfigBuilder;
use crate::constants::bench::DEFAULT_SEED;
use crate::error::OracleError;
use crate::gens::GraphKind;

/// Configuration for writing a generated graph
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub kind: GraphKind,
    pub size: usize,
    pub seed: u64,
    pub format: GenerateFormat,
    /// Output file (stdout if not specified)
    pub output: Option<PathBuf>,
    /// Color the DOT output with the oracle's partition or odd cycle
    pub highlight: bool,
}

impl GenerateConfig {
    pub fn builder() -> GenerateConfigBuilder {
        GenerateConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct GenerateConfigBuilder {
    kind: Option<GraphKind>,
    size: Option<usize>,
    seed: Option<u64>,
    format: Option<GenerateFormat>,
    output: Option<Option<PathBuf>>,
    highlight: Option<bool>,
}

impl GenerateConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: GraphKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_format(mut self, format: GenerateFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = Some(highlight);
        self
    }
}

impl ConfigBuilder for GenerateConfigBuilder {
    type Config = GenerateConfig;

    fn build(self) -> Result<Self::Config, OracleError> {
        Ok(GenerateConfig {
            kind: self.kind.ok_or_else(|| missing("kind"))?,
            size: self.size.ok_or_else(|| missing("size"))?,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            format: self.format.ok_or_else(|| missing("format"))?,
            output: self.output.unwrap_or(None),
            highlight: self.highlight.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_generate_config() {
        let config = GenerateConfig::builder()
            .with_kind(GraphKind::Circle)
            .with_size(7)
            .with_format(GenerateFormat::Dot)
            .with_highlight(true)
            .build()
            .unwrap();

        assert_eq!(config.kind, GraphKind::Circle);
        assert_eq!(config.size, 7);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert!(config.output.is_none());
        assert!(config.highlight);
    }

    #[test]
    fn test_missing_kind() {
        let err = GenerateConfig::builder()
            .with_size(3)
            .with_format(GenerateFormat::Edges)
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: kind"
        );
    }
}
