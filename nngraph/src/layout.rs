use std::f64::consts::TAU;

use crate::graph::Graph;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Node positions and drawn sizes, indexed like [`Graph::nodes`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    pub positions: Vec<Point>,
    pub sizes: Vec<f64>,
}

impl Layout {
    /// Evenly spaced on the unit circle in node order, node 0 at angle 0.
    ///
    /// Sizes are `base_node_size * size / max_size`, so the largest node is
    /// drawn at `base_node_size`.
    pub fn circular(graph: &Graph, base_node_size: f64) -> Self {
        let nodes = graph.nodes();
        let Some(max_size) = graph.max_size() else {
            return Self::default();
        };

        let n = nodes.len() as f64;
        let positions = (0..nodes.len())
            .map(|i| {
                let angle = TAU * i as f64 / n;
                Point {
                    x: angle.cos(),
                    y: angle.sin(),
                }
            })
            .collect();
        let sizes = nodes
            .iter()
            .map(|node| base_node_size * node.size / max_size)
            .collect();

        Self { positions, sizes }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NetworkModel;

    fn graph(json: &str) -> Graph {
        Graph::build(&NetworkModel::from_json_str(json).unwrap()).unwrap()
    }

    #[test]
    fn four_nodes_on_the_compass() {
        let g = graph(
            r#"{"n": {"populations": {
                "a": {"properties": {"color": "0 0 0"}, "size": 10},
                "b": {"properties": {"color": "0 0 0"}, "size": 5},
                "c": {"properties": {"color": "0 0 0"}, "size": 10},
                "d": {"properties": {"color": "0 0 0"}, "size": 1}
            }, "projections": {}}}"#,
        );
        let layout = Layout::circular(&g, 0.5);
        assert_eq!(layout.len(), 4);

        let expect = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        for (p, (x, y)) in layout.positions.iter().zip(expect) {
            assert!((p.x - x).abs() < 1e-12 && (p.y - y).abs() < 1e-12, "{p:?}");
        }
        assert_eq!(layout.sizes, vec![0.5, 0.25, 0.5, 0.05]);
    }

    #[test]
    fn empty_graph() {
        let g = graph(r#"{"n": {"populations": {}, "projections": {}}}"#);
        assert!(Layout::circular(&g, 0.5).is_empty());
    }
}
