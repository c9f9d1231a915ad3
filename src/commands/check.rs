//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckConfig;
use crate::error::OracleError;

impl FromCommand for CheckConfig {
    fn from_command(command: Commands) -> Result<Self, OracleError> {
        match command {
            Commands::Check {
                inputs,
                input_format,
                format,
                error_on_odd_cycle,
            } => CheckConfig::builder()
                .with_inputs(inputs)
                .with_input_format(input_format)
                .with_format(format.format)
                .with_error_on_odd_cycle(error_on_odd_cycle)
                .build(),
            _ => Err(OracleError::ConfigurationError {
                message: "Invalid command type for CheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckConfig);

/// Execute the check command on graph files
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
