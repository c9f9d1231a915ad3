//! Generate command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GenerateConfig;
use crate::constants::bench::DEFAULT_SEED;
use crate::error::OracleError;

impl FromCommand for GenerateConfig {
    fn from_command(command: Commands) -> Result<Self, OracleError> {
        match command {
            Commands::Generate {
                kind,
                size,
                seed,
                format,
                output,
                highlight,
            } => GenerateConfig::builder()
                .with_kind(kind)
                .with_size(size)
                .with_seed(seed.unwrap_or(DEFAULT_SEED))
                .with_format(format)
                .with_output(output)
                .with_highlight(highlight)
                .build(),
            _ => Err(OracleError::ConfigurationError {
                message: "Invalid command type for GenerateConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GenerateConfig);

/// Execute the generate command
pub fn execute_generate_command(command: Commands) -> Result<()> {
    let config = GenerateConfig::from_command(command)
        .wrap_err("Failed to parse generate command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::generate::GenerateExecutor;
    GenerateExecutor::execute(config)
}
