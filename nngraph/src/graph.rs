//! The classified network graph and the pass that builds it.
//!
//! Building happens in one sweep over the model:
//!
//! 1. every population becomes a node with its declared color and a
//!    provisional generic shape
//! 2. every input becomes an input node plus one link to its target
//! 3. every projection becomes one edge (two when bidirectional); the
//!    edge's synapse category is recorded against the presynaptic node in a
//!    side table
//! 4. once all edges exist, each node's shape and color are fixed from its
//!    side-table entry
//!
//! Shapes cannot be decided while edges are still being added, because a
//! later projection can change the outcome (excitatory + inhibitory = generic).

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info};

use crate::classify::{CategorySet, classify};
use crate::color::Color;
use crate::edge::{self, EdgeAttributes};
use crate::error::{GraphError, Result};
use crate::model::NetworkModel;
use crate::synapse::{ArrowStyle, Directionality, SynapseCategory};

/// Nominal size of input source nodes; the model gives them none.
pub const INPUT_NODE_SIZE: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeShape {
    Excitatory,
    Inhibitory,
    Generic,
    Input,
}

impl NodeShape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excitatory => "excitatory",
            Self::Inhibitory => "inhibitory",
            Self::Generic => "generic",
            Self::Input => "input",
        }
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Population,
    Input,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub color: Color,
    pub shape: NodeShape,
    pub size: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// Index of the source node in [`Graph::nodes`].
    pub source: usize,
    /// Index of the target node in [`Graph::nodes`].
    pub target: usize,
    pub attrs: EdgeAttributes,
}

/// Directed graph of populations, inputs and the synapses between them.
///
/// Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    network_id: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, usize>,
}

impl Graph {
    pub fn build(model: &NetworkModel) -> Result<Self> {
        let mut builder = GraphBuilder::new(&model.id);

        for pop in &model.populations {
            let color = Color::parse(&pop.color)?;
            builder.add_node(&pop.id, NodeKind::Population, color, NodeShape::Generic, pop.size)?;
        }

        for input in &model.inputs {
            let node = builder.add_node(
                &input.id,
                NodeKind::Input,
                Color::INPUT,
                NodeShape::Input,
                INPUT_NODE_SIZE,
            )?;
            let target = builder.population(&input.population, &input.id)?;
            builder.add_edge(node, target, EdgeAttributes::input());
        }

        for proj in &model.projections {
            let pre = builder.population(&proj.presynaptic, &proj.id)?;
            let post = builder.population(&proj.postsynaptic, &proj.id)?;

            let style = edge::edge_style(proj.probability);
            let attrs = edge::resolve(proj, style, builder.graph.nodes[pre].color);
            if let Some(category) = attrs.category {
                builder.outgoing[pre].record(category);
            }

            match proj.directionality {
                Directionality::Bidirectional => {
                    builder.add_edge(pre, post, attrs.clone());
                    builder.add_edge(post, pre, attrs);
                }
                Directionality::Unidirectional => builder.add_edge(pre, post, attrs),
            }
        }

        let graph = builder.finish();
        info!(
            network = %graph.network_id,
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "graph built"
        );
        Ok(graph)
    }

    pub fn network_id(&self) -> &str {
        &self.network_id
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    /// Edges leaving `id`, in insertion order.
    pub fn outgoing<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Edge> + use<'a> {
        let source = self.index_of(id);
        self.edges.iter().filter(move |e| Some(e.source) == source)
    }

    /// Edges from `from` to `to` (direction matters).
    pub fn edges_between<'a>(
        &'a self,
        from: &str,
        to: &str,
    ) -> impl Iterator<Item = &'a Edge> + use<'a> {
        let ends = self.index_of(from).zip(self.index_of(to));
        self.edges
            .iter()
            .filter(move |e| Some((e.source, e.target)) == ends)
    }

    /// Largest node size; `None` for an empty graph.
    pub fn max_size(&self) -> Option<f64> {
        self.nodes.iter().map(|n| n.size).reduce(f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Node arena under construction plus the per-node category side table.
struct GraphBuilder {
    graph: Graph,
    outgoing: Vec<CategorySet>,
}

impl GraphBuilder {
    fn new(network_id: &str) -> Self {
        Self {
            graph: Graph {
                network_id: network_id.to_string(),
                nodes: Vec::new(),
                edges: Vec::new(),
                index: HashMap::new(),
            },
            outgoing: Vec::new(),
        }
    }

    fn add_node(
        &mut self,
        id: &str,
        kind: NodeKind,
        color: Color,
        shape: NodeShape,
        size: f64,
    ) -> Result<usize> {
        if self.graph.index.contains_key(id) {
            return Err(GraphError::malformed(format!(
                "node id '{id}' is declared more than once"
            )));
        }
        let idx = self.graph.nodes.len();
        debug!(id, ?kind, color = %color, size, "add node");
        self.graph.nodes.push(Node {
            id: id.to_string(),
            kind,
            color,
            shape,
            size,
        });
        self.graph.index.insert(id.to_string(), idx);
        self.outgoing.push(match kind {
            NodeKind::Population => CategorySet::new(),
            NodeKind::Input => CategorySet::input_marker(),
        });
        Ok(idx)
    }

    /// Resolve a reference that must name a declared population.
    fn population(&self, id: &str, referenced_by: &str) -> Result<usize> {
        match self.graph.index.get(id) {
            Some(&idx) if self.graph.nodes[idx].kind == NodeKind::Population => Ok(idx),
            _ => Err(GraphError::unknown_population(id, referenced_by)),
        }
    }

    fn add_edge(&mut self, source: usize, target: usize, attrs: EdgeAttributes) {
        debug!(
            from = %self.graph.nodes[source].id,
            to = %self.graph.nodes[target].id,
            synapse = %attrs.synapse,
            category = attrs.category.map_or("none", SynapseCategory::as_str),
            style = attrs.style.as_str(),
            arrow = attrs.arrow.map_or("dot", ArrowStyle::as_str),
            "add edge"
        );
        self.graph.edges.push(Edge {
            source,
            target,
            attrs,
        });
    }

    /// Fix every node's shape and color from its recorded categories.
    fn finish(mut self) -> Graph {
        for (node, set) in self.graph.nodes.iter_mut().zip(&self.outgoing) {
            let class = classify(set);
            node.shape = class.shape;
            if let Some(color) = class.color {
                node.color = color;
            }
            debug!(
                id = %node.id,
                shape = %node.shape,
                excitatory = set.contains(SynapseCategory::Excitatory),
                inhibitory = set.contains(SynapseCategory::Inhibitory),
                input = set.is_input(),
                "classified"
            );
        }
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Input, Population, Projection};
    use crate::synapse::SynapseKind;

    fn pop(id: &str) -> Population {
        Population {
            id: id.into(),
            color: "0.5 0.5 0.5".into(),
            size: 4.0,
        }
    }

    fn proj(id: &str, pre: &str, post: &str, synapse: &str) -> Projection {
        Projection {
            id: id.into(),
            presynaptic: pre.into(),
            postsynaptic: post.into(),
            synapse: SynapseKind::from_name(synapse),
            probability: None,
            directionality: Directionality::Unidirectional,
            weight: None,
            delay: None,
        }
    }

    fn model(pops: &[&str], projections: Vec<Projection>) -> NetworkModel {
        NetworkModel {
            id: "net".into(),
            populations: pops.iter().map(|p| pop(p)).collect(),
            inputs: Vec::new(),
            projections,
        }
    }

    #[test]
    fn only_presynaptic_side_is_classified() {
        let g = Graph::build(&model(&["A", "B"], vec![proj("ab", "A", "B", "gabaSyn")])).unwrap();
        assert_eq!(g.node("A").unwrap().shape, NodeShape::Inhibitory);
        assert_eq!(g.node("A").unwrap().color, Color::INHIBITORY);
        assert_eq!(g.node("B").unwrap().shape, NodeShape::Generic);
        assert_eq!(g.node("B").unwrap().color, Color::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn bidirectional_reverse_edge_does_not_classify_post() {
        let mut p = proj("ab", "A", "B", "ampaSyn");
        p.directionality = Directionality::Bidirectional;
        let g = Graph::build(&model(&["A", "B"], vec![p])).unwrap();

        assert_eq!(g.edges().len(), 2);
        assert_eq!(g.node("A").unwrap().shape, NodeShape::Excitatory);
        assert_eq!(g.node("B").unwrap().shape, NodeShape::Generic);
    }

    #[test]
    fn generic_edges_take_declared_color_even_if_node_is_recolored() {
        let g = Graph::build(&model(
            &["A", "B"],
            vec![proj("ab", "A", "B", "ampaSyn"), proj("ab2", "A", "B", "generic")],
        ))
        .unwrap();
        assert_eq!(g.node("A").unwrap().color, Color::EXCITATORY);
        assert_eq!(g.edges()[1].attrs.color, Color::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut m = model(&["A"], Vec::new());
        m.inputs.push(Input {
            id: "A".into(),
            population: "A".into(),
            source: "s".into(),
        });
        assert!(matches!(Graph::build(&m), Err(GraphError::MalformedModel(_))));

        let m = model(&["A", "A"], Vec::new());
        assert!(matches!(Graph::build(&m), Err(GraphError::MalformedModel(_))));
    }

    #[test]
    fn inputs_are_not_valid_projection_endpoints() {
        let mut m = model(&["A"], vec![proj("x", "stim", "A", "ampaSyn")]);
        m.inputs.push(Input {
            id: "stim".into(),
            population: "A".into(),
            source: "s".into(),
        });
        match Graph::build(&m) {
            Err(GraphError::UnknownPopulationReference { id, referenced_by }) => {
                assert_eq!(id, "stim");
                assert_eq!(referenced_by, "x");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn bad_color_fails_build() {
        let mut m = model(&["A"], Vec::new());
        m.populations[0].color = "0 0".into();
        assert!(matches!(
            Graph::build(&m),
            Err(GraphError::MalformedColorSpec { .. })
        ));
    }

    #[test]
    fn queries() {
        let g = Graph::build(&model(
            &["A", "B", "C"],
            vec![proj("ab", "A", "B", "x"), proj("ac", "A", "C", "x"), proj("ba", "B", "A", "x")],
        ))
        .unwrap();
        assert_eq!(g.network_id(), "net");
        assert_eq!(g.outgoing("A").count(), 2);
        assert_eq!(g.outgoing("C").count(), 0);
        assert_eq!(g.outgoing("missing").count(), 0);
        assert_eq!(g.edges_between("A", "B").count(), 1);
        assert_eq!(g.edges_between("C", "A").count(), 0);
        assert_eq!(g.max_size(), Some(4.0));
        assert!(!g.is_empty());
    }

    #[test]
    fn empty_model_builds_empty_graph() {
        let g = Graph::build(&model(&[], Vec::new())).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.max_size(), None);
    }
}
