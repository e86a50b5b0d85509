use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Everything that can abort loading, building or rendering a network graph.
///
/// None of these are retried: a build is a single deterministic pass and any
/// structural problem ends it.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The description is structurally invalid: no (or more than one) network,
    /// a missing required field, a field of the wrong type, a duplicate id.
    #[error("malformed model: {0}")]
    MalformedModel(String),

    /// A projection or input names a population that was never declared.
    #[error("unknown population '{id}' referenced by '{referenced_by}'")]
    UnknownPopulationReference { id: String, referenced_by: String },

    /// A color string that is not 3 or 4 whitespace separated floats.
    #[error("malformed color spec '{spec}': {reason}")]
    MalformedColorSpec { spec: String, reason: String },

    /// Rendering needs at least one node.
    #[error("network '{0}' has no nodes to render")]
    EmptyGraph(String),

    #[error("unsupported output format '{0}' (expected png, svg, pdf, jpg or dot)")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        GraphError::MalformedModel(msg.into())
    }

    pub(crate) fn unknown_population(id: &str, referenced_by: &str) -> Self {
        GraphError::UnknownPopulationReference {
            id: id.to_string(),
            referenced_by: referenced_by.to_string(),
        }
    }
}
