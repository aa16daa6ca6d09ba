//! Hideout read model
//!
//! A denormalized snapshot of everything a renderer draws: the selection,
//! the requirement summary panel and the styled graph.

use crate::hideout::domain::{EdgeStyle, NodeStyle, SelectionKind};
use serde::Serialize;

/// Main read model for one render pass
///
/// Optional sections are only present when requested by the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HideoutReadModel {
    pub selection: SelectionView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stations: Option<Vec<StationView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<EdgeView>>,
}

/// View of the active selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub kind: SelectionKind,
    pub anchor: Option<String>,
    pub stations: Vec<StationRefView>,
}

/// Short station reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationRefView {
    pub id: String,
    pub name: String,
    pub lvl: u32,
}

/// Summary panel contents, already in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub items: Vec<ItemLine>,
    pub skills: Vec<LevelLine>,
    pub traders: Vec<LevelLine>,
}

impl SummaryView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.skills.is_empty() && self.traders.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemLine {
    pub item: String,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelLine {
    pub name: String,
    pub lvl: u32,
}

/// One node of the graph with its highlight style
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationView {
    pub id: String,
    pub name: String,
    pub lvl: u32,
    pub style: NodeStyle,
    pub requires: Vec<String>,
}

/// One prerequisite line with its highlight style
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
    pub style: EdgeStyle,
}
