//! Visual attributes of projection edges.

use serde_json::Number;

use crate::color::Color;
use crate::model::Projection;
use crate::synapse::{ArrowStyle, EdgeStyle, SynapseCategory, SynapseKind};

/// Everything an edge carries besides its endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeAttributes {
    pub synapse: SynapseKind,
    pub style: EdgeStyle,
    /// `None` for inhibitory edges; the renderer ends those in a dot instead.
    pub arrow: Option<ArrowStyle>,
    pub color: Color,
    pub info: String,
    /// `None` only for input links.
    pub category: Option<SynapseCategory>,
}

impl EdgeAttributes {
    /// Fixed attributes of the link from an input source node to its target.
    pub fn input() -> Self {
        Self {
            synapse: SynapseKind::Input,
            style: EdgeStyle::Solid,
            arrow: Some(ArrowStyle::Open),
            color: Color::INPUT,
            info: String::new(),
            category: None,
        }
    }
}

/// Dashed when connectivity is declared and strictly below certainty.
pub fn edge_style(probability: Option<f64>) -> EdgeStyle {
    match probability {
        Some(p) if p < 1.0 => EdgeStyle::Dashed,
        _ => EdgeStyle::Solid,
    }
}

pub fn format_label(weight: Option<&Number>, delay: Option<&Number>) -> String {
    match (weight, delay) {
        (Some(w), Some(d)) => format!("Weight: {w}, Delay: {d}"),
        (Some(w), None) => format!("Weight: {w}"),
        (None, Some(d)) => format!("Delay: {d}"),
        (None, None) => String::new(),
    }
}

/// Derive the attributes shared by every edge a projection produces.
///
/// `presynaptic_color` is the declared color of the source population; only
/// edges of generic kind use it.
pub fn resolve(
    projection: &Projection,
    style: EdgeStyle,
    presynaptic_color: Color,
) -> EdgeAttributes {
    let (arrow, color, category) = match &projection.synapse {
        SynapseKind::Ampa => (
            Some(ArrowStyle::FilledTriangle),
            Color::EXCITATORY,
            SynapseCategory::Excitatory,
        ),
        SynapseKind::Gaba => (None, Color::INHIBITORY, SynapseCategory::Inhibitory),
        SynapseKind::Input | SynapseKind::Other(_) => (
            Some(ArrowStyle::Open),
            presynaptic_color,
            SynapseCategory::Generic,
        ),
    };

    EdgeAttributes {
        synapse: projection.synapse.clone(),
        style,
        arrow,
        color,
        info: format_label(projection.weight.as_ref(), projection.delay.as_ref()),
        category: Some(category),
    }
}
