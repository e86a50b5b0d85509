//! Rendering configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::GraphError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Pdf,
    Jpg,
    /// DOT source; needs no graphviz installation.
    Dot,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Jpg => "jpg",
            Self::Dot => "dot",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "dot" | "gv" => Ok(Self::Dot),
            _ => Err(GraphError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// How a classified graph is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Drawn size of the largest node, in layout units (unit circle radius = 1).
    pub base_node_size: f64,
    pub edge_width: f64,
    /// Arrow head scale; 15 is graphviz's default arrow size.
    pub mutation_scale: f64,
    /// Draw weight/delay labels on projection edges.
    pub show_info: bool,
    /// Figure width and height in inches.
    pub fig_size: (f64, f64),
    pub format: OutputFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_node_size: 0.5,
            edge_width: 2.0,
            mutation_scale: 15.0,
            show_info: false,
            fig_size: (14.0, 10.0),
            format: OutputFormat::Png,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_node_size(mut self, size: f64) -> Self {
        self.base_node_size = size;
        self
    }

    pub fn with_edge_width(mut self, width: f64) -> Self {
        self.edge_width = width;
        self
    }

    pub fn with_mutation_scale(mut self, scale: f64) -> Self {
        self.mutation_scale = scale;
        self
    }

    pub fn with_show_info(mut self, show_info: bool) -> Self {
        self.show_info = show_info;
        self
    }

    pub fn with_fig_size(mut self, width: f64, height: f64) -> Self {
        self.fig_size = (width, height);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Graphviz `arrowsize` equivalent of `mutation_scale`.
    pub fn arrow_size(&self) -> f64 {
        self.mutation_scale / 15.0
    }
}
