use super::StationId;
use indexmap::IndexMap;
use serde::Serialize;

/// How a station node is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStyle {
    /// Nothing is selected
    Normal,
    /// Member of the active set
    Highlighted,
    /// Something is selected, but not this station
    Faded,
}

/// How a prerequisite line is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStyle {
    /// Nothing is selected
    Plain,
    /// Both ends are highlighted
    Active,
    /// The prerequisite is highlighted but the dependent is not
    Leading,
    /// The prerequisite is not highlighted
    Dimmed,
}

/// One prerequisite line, pointing from prerequisite to dependent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeHighlight {
    pub from: StationId,
    pub to: StationId,
    pub style: EdgeStyle,
}

/// Styling for every node and edge of the graph under one selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightMap {
    nodes: IndexMap<StationId, NodeStyle>,
    edges: Vec<EdgeHighlight>,
}

impl HighlightMap {
    pub fn new(nodes: IndexMap<StationId, NodeStyle>, edges: Vec<EdgeHighlight>) -> Self {
        Self { nodes, edges }
    }

    pub fn node_style(&self, id: &str) -> Option<NodeStyle> {
        self.nodes.get(id).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&StationId, NodeStyle)> {
        self.nodes.iter().map(|(id, style)| (id, *style))
    }

    pub fn edges(&self) -> &[EdgeHighlight] {
        &self.edges
    }

    pub fn edge_style(&self, from: &str, to: &str) -> Option<EdgeStyle> {
        self.edges
            .iter()
            .find(|edge| edge.from.as_str() == from && edge.to.as_str() == to)
            .map(|edge| edge.style)
    }

    /// Stations drawn faded
    pub fn faded(&self) -> impl Iterator<Item = &StationId> {
        self.nodes
            .iter()
            .filter(|(_, style)| **style == NodeStyle::Faded)
            .map(|(id, _)| id)
    }
}
