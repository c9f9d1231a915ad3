//! Check command executor

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::CheckConfig;
use crate::core::CheckedGraph;
use crate::error::OracleError;
use crate::executors::CommandExecutor;
use crate::graph::load_graph;
use crate::oracle::check_bipartite;
use crate::progress::ProgressReporter;
use crate::reports::generator_for;

pub struct CheckExecutor;

/// Expand glob patterns in order. A pattern matching nothing is kept as a
/// literal path so the missing file gets reported when it is read.
pub fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>, OracleError> {
    let mut paths = Vec::new();
    for pattern in inputs {
        let mut matched = false;
        for entry in glob::glob(pattern)? {
            let path = entry.map_err(|e| OracleError::Io(e.into()))?;
            if !paths.contains(&path) {
                paths.push(path);
            }
            matched = true;
        }
        if !matched {
            paths.push(PathBuf::from(pattern));
        }
    }
    Ok(paths)
}

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Checking graphs for bipartiteness...\n", style("◐").cyan());

        let paths = expand_inputs(&config.inputs).wrap_err("Failed to expand input patterns")?;

        let mut progress = ProgressReporter::for_terminal();
        if let Some(p) = progress.as_mut() {
            p.start_loading(paths.len());
        }

        let mut checked = Vec::with_capacity(paths.len());
        for path in paths {
            if let Some(p) = progress.as_ref() {
                p.checking_file(&path);
            }

            let graph = load_graph(&path, config.input_format)?;
            let result = check_bipartite(&graph)
                .wrap_err_with(|| format!("Failed to check '{}'", path.display()))?;
            checked.push(CheckedGraph::new(path, &graph, &result));
        }

        let odd_cycles = checked.iter().filter(|graph| !graph.is_bipartite()).count();
        if let Some(p) = progress.as_mut() {
            p.finish_loading(odd_cycles);
        }

        let report = generator_for(config.format, false)
            .check_report(&checked)
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        // Exit with error code if odd cycles found and requested
        if config.error_on_odd_cycle && odd_cycles > 0 {
            std::process::exit(1);
        }

        Ok(())
    }
}
