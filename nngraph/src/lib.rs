//! Spiking network model descriptions as classified, drawable graphs.
//!
//! A model file declares populations, input sources and projections. Building
//! a [`Graph`] from it turns each of those into nodes and edges whose shape,
//! color and arrow reflect their synaptic role:
//!
//! ```no_run
//! use nngraph::{Graph, NetworkModel, RenderOptions};
//!
//! let model = NetworkModel::from_path("network.json")?;
//! let graph = Graph::build(&model)?;
//! let png = nngraph::render::render(&graph, &RenderOptions::default())?;
//! std::fs::write("network.png", png)?;
//! # Ok::<(), nngraph::GraphError>(())
//! ```

pub mod classify;
pub mod color;
pub mod edge;
pub mod error;
pub mod graph;
pub mod layout;
pub mod model;
pub mod options;
pub mod render;
pub mod synapse;

pub use color::Color;
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, Node, NodeKind, NodeShape};
pub use model::NetworkModel;
pub use options::{OutputFormat, RenderOptions};
pub use synapse::{ArrowStyle, Directionality, EdgeStyle, SynapseCategory, SynapseKind};

/// Load a model file and build its graph.
pub fn load(path: impl AsRef<std::path::Path>) -> Result<Graph> {
    let model = NetworkModel::from_path(path)?;
    Graph::build(&model)
}
