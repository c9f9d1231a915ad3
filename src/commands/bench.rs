//! Bench command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::BenchConfig;
use crate::constants::bench::{DEFAULT_ITERATIONS, DEFAULT_SEED};
use crate::error::OracleError;

impl FromCommand for BenchConfig {
    fn from_command(command: Commands) -> Result<Self, OracleError> {
        match command {
            Commands::Bench {
                suite,
                seed,
                parallel,
                iterations,
                verbose,
                format,
                error_on_mismatch,
            } => BenchConfig::builder()
                .with_suite(suite)
                .with_seed(seed.unwrap_or(DEFAULT_SEED))
                .with_parallel(parallel)
                .with_iterations(iterations.unwrap_or(DEFAULT_ITERATIONS))
                .with_verbose(verbose)
                .with_format(format.format)
                .with_error_on_mismatch(error_on_mismatch)
                .build(),
            _ => Err(OracleError::ConfigurationError {
                message: "Invalid command type for BenchConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(BenchConfig);

/// Execute the bench command
pub fn execute_bench_command(command: Commands) -> Result<()> {
    let config = BenchConfig::from_command(command)
        .wrap_err("Failed to parse bench command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::bench::BenchExecutor;
    BenchExecutor::execute(config)
}
