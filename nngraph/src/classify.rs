//! Final shape and color of a node from the synapses it sends.

use crate::color::Color;
use crate::graph::NodeShape;
use crate::synapse::SynapseCategory;

/// Categories of a node's outgoing edges, plus the input marker.
///
/// Generic edges are not recorded: a node whose only outgoing edges are
/// generic classifies like a node with none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategorySet {
    excitatory: bool,
    inhibitory: bool,
    input: bool,
}

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The set of an input source node.
    pub fn input_marker() -> Self {
        Self {
            input: true,
            ..Self::default()
        }
    }

    pub fn record(&mut self, category: SynapseCategory) {
        match category {
            SynapseCategory::Excitatory => self.excitatory = true,
            SynapseCategory::Inhibitory => self.inhibitory = true,
            SynapseCategory::Generic => {}
        }
    }

    pub fn contains(&self, category: SynapseCategory) -> bool {
        match category {
            SynapseCategory::Excitatory => self.excitatory,
            SynapseCategory::Inhibitory => self.inhibitory,
            SynapseCategory::Generic => false,
        }
    }

    pub fn is_input(&self) -> bool {
        self.input
    }

    pub fn is_empty(&self) -> bool {
        !(self.excitatory || self.inhibitory || self.input)
    }
}

impl FromIterator<SynapseCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = SynapseCategory>>(iter: I) -> Self {
        let mut set = Self::new();
        for category in iter {
            set.record(category);
        }
        set
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub shape: NodeShape,
    /// Replaces the declared color when set.
    pub color: Option<Color>,
}

/// First match wins:
/// mixed → generic, excitatory → excitatory (blue), inhibitory → inhibitory
/// (red), input marker → input, nothing → generic.
pub fn classify(set: &CategorySet) -> Classification {
    let (shape, color) = match (set.excitatory, set.inhibitory, set.input) {
        (true, true, _) => (NodeShape::Generic, None),
        (true, false, _) => (NodeShape::Excitatory, Some(Color::EXCITATORY)),
        (false, true, _) => (NodeShape::Inhibitory, Some(Color::INHIBITORY)),
        (false, false, true) => (NodeShape::Input, None),
        (false, false, false) => (NodeShape::Generic, None),
    };
    Classification { shape, color }
}
