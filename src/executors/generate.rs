//! Generate command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cli::GenerateFormat;
use crate::config::GenerateConfig;
use crate::executors::CommandExecutor;
use crate::gens::generate;
use crate::graph::GraphRenderer;
use crate::oracle::check_bipartite;

pub struct GenerateExecutor;

impl CommandExecutor for GenerateExecutor {
    type Config = GenerateConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} graph (size {}, seed {})...",
            style("🔨").cyan(),
            style(config.kind).bold(),
            config.size,
            config.seed
        );

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let graph = generate(config.kind, config.size, &mut rng);

        let result = if config.highlight {
            Some(check_bipartite(&graph).wrap_err("Failed to check generated graph")?)
        } else {
            None
        };

        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        let renderer = GraphRenderer::new(config.highlight);
        match config.format {
            GenerateFormat::Edges => renderer
                .render_edge_list(&graph, output_writer.as_mut())
                .wrap_err("Failed to write edge list")?,
            GenerateFormat::Json => renderer
                .render_json(&graph, output_writer.as_mut())
                .wrap_err("Failed to write JSON graph")?,
            GenerateFormat::Dot => renderer
                .render_dot(&graph, result.as_ref(), output_writer.as_mut())
                .wrap_err("Failed to render DOT graph")?,
        }
        output_writer.flush().into_diagnostic()?;

        eprintln!(
            "{} {} nodes, {} edges",
            style("✓").green(),
            style(graph.node_count()).yellow(),
            style(graph.edge_count()).yellow()
        );
        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
