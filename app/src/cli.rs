use std::path::PathBuf;

use clap::Parser;
use nngraph::{OutputFormat, RenderOptions};

#[derive(Parser, Debug)]
#[command(
    name = "nngraph",
    about = "Draw a spiking network model as a classified graph",
    version
)]
pub struct Cli {
    /// Network model description (JSON)
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Output file, `-` for stdout. Defaults to MODEL with the format's extension
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format: png, svg, pdf, jpg or dot
    #[arg(short = 'f', long, default_value = "png")]
    pub format: OutputFormat,

    /// Label projection edges with their weight and delay
    #[arg(long, default_value_t = false)]
    pub show_info: bool,

    /// Drawn size of the largest population, relative to the layout radius
    #[arg(long, default_value_t = 0.5)]
    pub base_node_size: f64,

    /// Edge line width
    #[arg(long, default_value_t = 2.0)]
    pub edge_width: f64,

    /// Arrow head scale (15 = normal size)
    #[arg(long, default_value_t = 15.0)]
    pub mutation_scale: f64,

    /// Figure width in inches
    #[arg(long, default_value_t = 14.0)]
    pub fig_width: f64,

    /// Figure height in inches
    #[arg(long, default_value_t = 10.0)]
    pub fig_height: f64,
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_base_node_size(self.base_node_size)
            .with_edge_width(self.edge_width)
            .with_mutation_scale(self.mutation_scale)
            .with_show_info(self.show_info)
            .with_fig_size(self.fig_width, self.fig_height)
            .with_format(self.format)
    }
}
