//! Bench command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::bench::BenchHarness;
use crate::config::BenchConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::generator_for;
use crate::utils::string::pluralize;

pub struct BenchExecutor;

impl CommandExecutor for BenchExecutor {
    type Config = BenchConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let suite = config
            .suite
            .load()
            .wrap_err_with(|| format!("Failed to load suite '{}'", config.suite))?;

        if suite.is_empty() {
            eprintln!("{} Suite '{}' has no cases", style("ℹ").blue(), config.suite);
            return Ok(());
        }

        eprintln!(
            "{} Comparing oracle and reference on {} {} ({} suite)...",
            style("🏁").cyan(),
            style(suite.len()).yellow(),
            pluralize("case", suite.len()),
            config.suite
        );
        eprintln!(
            "  {} Parallel: {}",
            style("→").dim(),
            if config.parallel {
                style("yes").green()
            } else {
                style("no").dim()
            }
        );
        eprintln!(
            "  {} Seed: {}, iterations: {}\n",
            style("→").dim(),
            style(config.seed).yellow(),
            style(config.iterations).yellow()
        );

        let mut progress = ProgressReporter::for_terminal();
        let bar = progress.as_mut().map(|p| p.start_suite(suite.len()));

        let summary = BenchHarness::new(&config)
            .run(&suite, bar.as_ref())
            .wrap_err("Failed to run benchmark suite")?;

        if let Some(p) = progress.as_mut() {
            p.finish_suite(summary.failed_count());
        }

        let report = generator_for(config.format, config.verbose)
            .bench_report(&summary)
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        if config.error_on_mismatch && !summary.all_passed() {
            std::process::exit(1);
        }

        Ok(())
    }
}
