//! Closed vocabularies derived from the free-form strings of a model.
//!
//! Synapse kinds arrive as strings (`"ampaSyn"`, `"gabaSyn"`, anything else).
//! They are turned into [`SynapseKind`] once when a projection is decoded and
//! every later decision matches on the enum.

use std::fmt;

/// Kind tag of an edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SynapseKind {
    /// `ampaSyn`: AMPA-mediated, excitatory.
    Ampa,
    /// `gabaSyn`: GABA-mediated, inhibitory.
    Gaba,
    /// Synthetic link from an input source node to its target population.
    Input,
    /// Any other kind, `generic` included. Keeps the declared name.
    Other(String),
}

impl SynapseKind {
    pub const DEFAULT_NAME: &'static str = "generic";

    pub fn from_name(name: &str) -> Self {
        match name {
            "ampaSyn" => Self::Ampa,
            "gabaSyn" => Self::Gaba,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Ampa => "ampaSyn",
            Self::Gaba => "gabaSyn",
            Self::Input => "input",
            Self::Other(name) => name,
        }
    }

    /// Category carried by edges of this kind. Input links have none.
    pub fn category(&self) -> Option<SynapseCategory> {
        match self {
            Self::Ampa => Some(SynapseCategory::Excitatory),
            Self::Gaba => Some(SynapseCategory::Inhibitory),
            Self::Input => None,
            Self::Other(_) => Some(SynapseCategory::Generic),
        }
    }
}

impl Default for SynapseKind {
    fn default() -> Self {
        Self::Other(Self::DEFAULT_NAME.to_string())
    }
}

impl fmt::Display for SynapseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SynapseCategory {
    Excitatory,
    Inhibitory,
    Generic,
}

impl SynapseCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excitatory => "excitatory",
            Self::Inhibitory => "inhibitory",
            Self::Generic => "generic",
        }
    }
}

/// Line style of an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeStyle {
    #[default]
    Solid,
    /// Connectivity is probabilistic (probability < 1).
    Dashed,
}

impl EdgeStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
        }
    }
}

/// Arrow drawn at the head of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrowStyle {
    /// `-|>`
    FilledTriangle,
    /// `->`
    Open,
}

impl ArrowStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FilledTriangle => "-|>",
            Self::Open => "->",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Directionality {
    #[default]
    Unidirectional,
    Bidirectional,
}

impl Directionality {
    /// Only the literal `bidirectional` turns a projection into an edge pair.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("bidirectional") => Self::Bidirectional,
            _ => Self::Unidirectional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip_through_category() {
        assert_eq!(SynapseKind::from_name("ampaSyn"), SynapseKind::Ampa);
        assert_eq!(SynapseKind::from_name("gabaSyn"), SynapseKind::Gaba);
        assert_eq!(
            SynapseKind::from_name("nmdaSyn"),
            SynapseKind::Other("nmdaSyn".into())
        );
        assert_eq!(SynapseKind::default().name(), "generic");

        assert_eq!(SynapseKind::Ampa.category(), Some(SynapseCategory::Excitatory));
        assert_eq!(SynapseKind::Gaba.category(), Some(SynapseCategory::Inhibitory));
        assert_eq!(
            SynapseKind::default().category(),
            Some(SynapseCategory::Generic)
        );
        assert_eq!(SynapseKind::Input.category(), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(SynapseCategory::Excitatory.as_str(), "excitatory");
        assert_eq!(SynapseCategory::Generic.as_str(), "generic");
        assert_eq!(ArrowStyle::FilledTriangle.as_str(), "-|>");
        assert_eq!(ArrowStyle::Open.as_str(), "->");
        assert_eq!(EdgeStyle::Dashed.as_str(), "dashed");
    }

    #[test]
    fn kind_matching_is_case_sensitive() {
        assert_eq!(
            SynapseKind::from_name("AmpaSyn"),
            SynapseKind::Other("AmpaSyn".into())
        );
    }

    #[test]
    fn directionality() {
        assert_eq!(
            Directionality::from_name(Some("bidirectional")),
            Directionality::Bidirectional
        );
        assert_eq!(
            Directionality::from_name(Some("unidirectional")),
            Directionality::Unidirectional
        );
        assert_eq!(Directionality::from_name(None), Directionality::Unidirectional);
    }
}
