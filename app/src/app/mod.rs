use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use nngraph::{Graph, NetworkModel, OutputFormat, RenderOptions, render};
use tracing::info;

use crate::cli::Cli;

/// Where rendered bytes go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    /// `-` means stdout; no path means the model path with the format's
    /// extension.
    pub fn resolve(model: &Path, output: Option<&Path>, format: OutputFormat) -> Self {
        match output {
            Some(path) if path == Path::new("-") => Output::Stdout,
            Some(path) => Output::File(path.to_path_buf()),
            None => Output::File(model.with_extension(format.extension())),
        }
    }
}

pub struct App {
    model: PathBuf,
    output: Output,
    opts: RenderOptions,
}

impl App {
    pub fn new(cli: &Cli) -> Self {
        let opts = cli.render_options();
        let output = Output::resolve(&cli.model, cli.output.as_deref(), opts.format);
        Self {
            model: cli.model.clone(),
            output,
            opts,
        }
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Load, build, render, write.
    pub fn run(&self) -> Result<()> {
        let start = Instant::now();

        let model = NetworkModel::from_path(&self.model)
            .with_context(|| format!("failed to load model {}", self.model.display()))?;
        let graph = Graph::build(&model)
            .with_context(|| format!("failed to build network '{}'", model.id))?;
        let bytes = render::render(&graph, &self.opts)
            .with_context(|| format!("failed to render {} output", self.opts.format))?;

        match &self.output {
            Output::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&bytes).context("failed to write to stdout")?;
                stdout.flush()?;
            }
            Output::File(path) => {
                std::fs::write(path, &bytes)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), bytes = bytes.len(), "output written");
            }
        }

        info!(
            network = %graph.network_id(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "done"
        );
        Ok(())
    }
}

pub fn run(cli: Cli) -> Result<()> {
    App::new(&cli).run()
}
