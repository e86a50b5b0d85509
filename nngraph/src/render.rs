use graphviz_rust::{
    cmd::{CommandArg, Format},
    dot_structures::{
        Attribute, Edge as DotEdge, EdgeTy, Graph as DotGraph, GraphAttributes, Id, Node as DotNode,
        NodeId, Stmt, Vertex,
    },
    exec,
    printer::PrinterContext,
};
use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, NodeKind, NodeShape};
use crate::layout::Layout;
use crate::options::{OutputFormat, RenderOptions};
use crate::synapse::{ArrowStyle, SynapseCategory};

const NODE_PEN_WIDTH: f64 = 4.0;
const LABEL_FONT_SIZE: f64 = 20.0;

/// Render the graph in `opts.format`.
///
/// Image formats shell out to graphviz (`neato`), so they need it installed;
/// [`OutputFormat::Dot`] does not.
pub fn render(graph: &Graph, opts: &RenderOptions) -> Result<Vec<u8>> {
    let dot = to_dot_graph(graph, opts)?;
    let mut ctx = PrinterContext::default();
    let format = match opts.format {
        OutputFormat::Dot => return Ok(graphviz_rust::print(dot, &mut ctx).into_bytes()),
        OutputFormat::Png => Format::Png,
        OutputFormat::Svg => Format::Svg,
        OutputFormat::Pdf => Format::Pdf,
        OutputFormat::Jpg => Format::Jpg,
    };
    debug!(format = opts.format.extension(), "running graphviz");
    Ok(exec(dot, &mut ctx, vec![CommandArg::Format(format)])?)
}

/// DOT source of the graph.
pub fn to_dot(graph: &Graph, opts: &RenderOptions) -> Result<String> {
    let dot = to_dot_graph(graph, opts)?;
    Ok(graphviz_rust::print(dot, &mut PrinterContext::default()))
}

/// Build the graphviz graph: nodes pinned on a circle, shapes and colors from
/// the classification, edge styling from the resolved edge attributes.
pub fn to_dot_graph(graph: &Graph, opts: &RenderOptions) -> Result<DotGraph> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph(graph.network_id().to_string()));
    }
    if graph.edges().is_empty() {
        warn!(network = graph.network_id(), "rendering a network without edges");
    }

    let layout = Layout::circular(graph, opts.base_node_size);
    let (fig_w, fig_h) = opts.fig_size;
    // Inches per layout unit, leaving room for half a node past the circle.
    let scale = fig_w.min(fig_h) / (2.0 + opts.base_node_size);

    let mut g = DotGraph::DiGraph {
        id: quoted_id(graph.network_id()),
        strict: false,
        stmts: Vec::new(),
    };

    g.add_stmt(Stmt::GAttribute(GraphAttributes::Graph(vec![
        plain("layout", "neato"),
        plain("splines", "line"),
        plain("outputorder", "edgesfirst"),
        quoted("size", &format!("{fig_w},{fig_h}")),
    ])));

    for (i, node) in graph.nodes().iter().enumerate() {
        let pos = layout.positions[i];
        let size = layout.sizes[i] * scale;
        let attributes = vec![
            plain("shape", dot_shape(node.shape)),
            quoted("color", &node.color.to_hex()),
            plain("penwidth", &NODE_PEN_WIDTH.to_string()),
            plain("fixedsize", "true"),
            plain("width", &size.to_string()),
            plain("height", &size.to_string()),
            quoted("label", &node.id),
            quoted("fontname", "Helvetica-Bold"),
            quoted("pos", &format!("{},{}!", pos.x * scale, pos.y * scale)),
        ];
        g.add_stmt(Stmt::Node(DotNode::new(node_id(&node.id), attributes)));
    }

    for edge in graph.edges() {
        let source = &graph.nodes()[edge.source];
        let target = &graph.nodes()[edge.target];

        let mut attributes = vec![
            plain("style", edge.attrs.style.as_str()),
            quoted("color", &edge.attrs.color.to_hex()),
            plain("penwidth", &opts.edge_width.to_string()),
            plain("arrowsize", &opts.arrow_size().to_string()),
            plain("arrowhead", arrow_head(edge)),
        ];
        let show_label =
            opts.show_info && source.kind != NodeKind::Input && !edge.attrs.info.is_empty();
        if show_label {
            attributes.push(quoted("label", &edge.attrs.info));
            attributes.push(plain("fontsize", &LABEL_FONT_SIZE.to_string()));
        }

        g.add_stmt(Stmt::Edge(DotEdge {
            ty: EdgeTy::Pair(
                Vertex::N(node_id(&source.id)),
                Vertex::N(node_id(&target.id)),
            ),
            attributes,
        }));
    }

    Ok(g)
}

fn dot_shape(shape: NodeShape) -> &'static str {
    match shape {
        NodeShape::Excitatory => "triangle",
        NodeShape::Inhibitory => "circle",
        NodeShape::Generic => "box",
        NodeShape::Input => "hexagon",
    }
}

/// Inhibitory synapses end in a dot, everything else in its arrow.
fn arrow_head(edge: &Edge) -> &'static str {
    if edge.attrs.category == Some(SynapseCategory::Inhibitory) {
        return "dot";
    }
    match edge.attrs.arrow {
        Some(ArrowStyle::FilledTriangle) => "normal",
        Some(ArrowStyle::Open) => "vee",
        None => "none",
    }
}

/// Escape special characters for a double-quoted DOT string.
fn escape(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn quoted_id(value: &str) -> Id {
    Id::Escaped(format!("\"{}\"", escape(value)))
}

fn node_id(id: &str) -> NodeId {
    NodeId(quoted_id(id), None)
}

fn plain(key: &str, value: &str) -> Attribute {
    Attribute(Id::Plain(key.into()), Id::Plain(value.into()))
}

fn quoted(key: &str, value: &str) -> Attribute {
    Attribute(Id::Plain(key.into()), quoted_id(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NetworkModel;

    fn graph(json: &str) -> Graph {
        Graph::build(&NetworkModel::from_json_str(json).unwrap()).unwrap()
    }

    const NET: &str = r#"{"net": {
        "populations": {
            "Exc": {"properties": {"color": "0 1 0"}, "size": 10},
            "Inh": {"properties": {"color": "0 0.5 0"}, "size": 5},
            "Out": {"properties": {"color": "0.2 0.2 0.2"}, "size": 5}
        },
        "inputs": {"stim": {"population": "Exc", "input_source": "pulse"}},
        "projections": {
            "e_i": {"presynaptic": "Exc", "postsynaptic": "Inh", "synapse": "ampaSyn",
                    "weight": 5, "random_connectivity": {"probability": 0.5}},
            "i_e": {"presynaptic": "Inh", "postsynaptic": "Exc", "synapse": "gabaSyn",
                    "delay": 2},
            "e_o": {"presynaptic": "Exc", "postsynaptic": "Out"}
        }
    }}"#;

    #[test]
    fn node_and_edge_styling() {
        let dot = to_dot(&graph(NET), &RenderOptions::default()).unwrap();

        assert!(dot.contains("layout=neato"), "{dot}");
        assert!(dot.contains("shape=triangle"), "{dot}");
        assert!(dot.contains("shape=circle"), "{dot}");
        assert!(dot.contains("shape=box"), "{dot}");
        assert!(dot.contains("shape=hexagon"), "{dot}");
        assert!(dot.contains("arrowhead=normal"), "{dot}");
        assert!(dot.contains("arrowhead=dot"), "{dot}");
        assert!(dot.contains("arrowhead=vee"), "{dot}");
        assert!(dot.contains("style=dashed"), "{dot}");
        assert!(dot.contains("\"#ffff00ff\""), "{dot}");
        assert!(!dot.contains("Weight: 5"), "labels are off by default: {dot}");
    }

    #[test]
    fn labels_only_when_enabled() {
        let opts = RenderOptions::default().with_show_info(true);
        let dot = to_dot(&graph(NET), &opts).unwrap();
        assert!(dot.contains("\"Weight: 5\""), "{dot}");
        assert!(dot.contains("\"Delay: 2\""), "{dot}");
    }

    #[test]
    fn ids_are_escaped() {
        let g = graph(
            r#"{"n": {"populations": {"say \"hi\"": {"properties": {"color": "0 0 0"},
                "size": 1}}, "projections": {}}}"#,
        );
        let dot = to_dot(&g, &RenderOptions::default()).unwrap();
        assert!(dot.contains(r#""say \"hi\"""#), "{dot}");
    }

    #[test]
    fn dot_format_render_returns_source() {
        let opts = RenderOptions::default().with_format(OutputFormat::Dot);
        let bytes = render(&graph(NET), &opts).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("digraph"), "{text}");
    }

    #[test]
    fn empty_graph_is_an_error() {
        let g = graph(r#"{"n": {"populations": {}, "projections": {}}}"#);
        assert!(matches!(
            to_dot(&g, &RenderOptions::default()),
            Err(GraphError::EmptyGraph(id)) if id == "n"
        ));
    }
}
