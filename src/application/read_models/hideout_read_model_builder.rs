//! Builder for constructing HideoutReadModel from the interaction port
//!
//! Renderers never touch the selection state directly; they ask the
//! builder for a snapshot and draw that.

use super::hideout_read_model::{
    EdgeView, HideoutReadModel, ItemLine, LevelLine, SelectionView, StationRefView, StationView,
    SummaryView,
};
use crate::hideout::domain::{HideoutGraph, HighlightMap, RequirementSummary, SelectionSnapshot};
use crate::ports::inbound::HideoutInteractionPort;

/// When the requirement summary is included
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummarySection {
    /// Only while a selection is pinned, like the summary panel
    #[default]
    WhenPinned,
    /// Whenever something is highlighted
    Always,
    Never,
}

/// Which sections of the read model to populate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadModelOptions {
    pub summary: SummarySection,
    pub stations: bool,
    pub edges: bool,
}

impl ReadModelOptions {
    /// Everything: summary whenever a selection exists, nodes and edges
    pub fn full() -> Self {
        Self {
            summary: SummarySection::Always,
            stations: true,
            edges: true,
        }
    }

    pub fn summary_only(summary: SummarySection) -> Self {
        Self {
            summary,
            stations: false,
            edges: false,
        }
    }
}

/// Builder for constructing HideoutReadModel
pub struct HideoutReadModelBuilder;

impl HideoutReadModelBuilder {
    /// Builds a read model for the port's current selection
    ///
    /// # Arguments
    /// * `port` - Interaction port to read from
    /// * `options` - Sections to include
    pub fn build<P>(port: &P, options: &ReadModelOptions) -> HideoutReadModel
    where
        P: HideoutInteractionPort + ?Sized,
    {
        let graph = port.graph();
        let snapshot = port.current_selection();

        let include_summary = match options.summary {
            SummarySection::WhenPinned => port.summary_visible(),
            SummarySection::Always => !snapshot.stations.is_empty(),
            SummarySection::Never => false,
        };
        let summary = include_summary.then(|| Self::build_summary(&port.summary()));

        let highlight = (options.stations || options.edges).then(|| port.highlight());
        let stations = highlight
            .as_ref()
            .filter(|_| options.stations)
            .map(|highlight| Self::build_stations(graph, highlight));
        let edges = highlight
            .as_ref()
            .filter(|_| options.edges)
            .map(Self::build_edges);

        HideoutReadModel {
            selection: Self::build_selection(graph, &snapshot),
            summary,
            stations,
            edges,
        }
    }

    fn build_selection(graph: &HideoutGraph, snapshot: &SelectionSnapshot) -> SelectionView {
        let stations = snapshot
            .stations
            .iter()
            .filter_map(|id| graph.get(id.as_str()))
            .map(|station| StationRefView {
                id: station.id().to_string(),
                name: station.name().to_string(),
                lvl: station.lvl(),
            })
            .collect();

        SelectionView {
            kind: snapshot.kind,
            anchor: snapshot.anchor.as_ref().map(|id| id.to_string()),
            stations,
        }
    }

    /// Converts the summary into display order: items by amount
    /// descending, skills and traders by first encounter
    fn build_summary(summary: &RequirementSummary) -> SummaryView {
        SummaryView {
            items: summary
                .items_by_amount()
                .into_iter()
                .map(|total| ItemLine {
                    item: total.item.to_string(),
                    amount: total.amount,
                })
                .collect(),
            skills: summary.skills().map(Self::level_line).collect(),
            traders: summary.traders().map(Self::level_line).collect(),
        }
    }

    fn level_line((name, lvl): (&str, u32)) -> LevelLine {
        LevelLine {
            name: name.to_string(),
            lvl,
        }
    }

    fn build_stations(graph: &HideoutGraph, highlight: &HighlightMap) -> Vec<StationView> {
        graph
            .stations()
            .filter_map(|station| {
                let style = highlight.node_style(station.id().as_str())?;
                Some(StationView {
                    id: station.id().to_string(),
                    name: station.name().to_string(),
                    lvl: station.lvl(),
                    style,
                    requires: station
                        .required_stations()
                        .iter()
                        .map(|id| id.to_string())
                        .collect(),
                })
            })
            .collect()
    }

    fn build_edges(highlight: &HighlightMap) -> Vec<EdgeView> {
        highlight
            .edges()
            .iter()
            .map(|edge| EdgeView {
                from: edge.from.to_string(),
                to: edge.to.to_string(),
                style: edge.style,
            })
            .collect()
    }
}
