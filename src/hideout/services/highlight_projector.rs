use crate::hideout::domain::{
    EdgeHighlight, EdgeStyle, HideoutGraph, HighlightMap, NodeStyle, Selection,
};
use indexmap::IndexMap;

/// HighlightProjector derives node and edge styling from the active selection
///
/// With nothing selected every node is `Normal` and every edge `Plain`.
/// Otherwise members of the set are highlighted and the rest fade out; an
/// edge is judged by its prerequisite end first, then by its dependent end.
pub struct HighlightProjector;

impl HighlightProjector {
    pub fn project(graph: &HideoutGraph, selection: &Selection) -> HighlightMap {
        let active = !selection.is_empty();

        let nodes: IndexMap<_, _> = graph
            .station_ids()
            .map(|id| {
                let style = match (active, selection.contains(id.as_str())) {
                    (false, _) => NodeStyle::Normal,
                    (true, true) => NodeStyle::Highlighted,
                    (true, false) => NodeStyle::Faded,
                };
                (id.clone(), style)
            })
            .collect();

        let edges = graph
            .prerequisite_edges()
            .map(|(from, to)| {
                let style = if !active {
                    EdgeStyle::Plain
                } else if !selection.contains(from.as_str()) {
                    EdgeStyle::Dimmed
                } else if selection.contains(to.as_str()) {
                    EdgeStyle::Active
                } else {
                    EdgeStyle::Leading
                };
                EdgeHighlight {
                    from: from.clone(),
                    to: to.clone(),
                    style,
                }
            })
            .collect();

        HighlightMap::new(nodes, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hideout::domain::{Prerequisites, Station, StationId, StationSet};

    fn id(value: &str) -> StationId {
        StationId::new(value).unwrap()
    }

    fn graph() -> HideoutGraph {
        HideoutGraph::new(vec![
            Station::new(id("A"), "A", 1, Prerequisites::new()),
            Station::new(id("B"), "B", 1, Prerequisites::new().with_station(id("A"))),
            Station::new(id("C"), "C", 1, Prerequisites::new().with_station(id("B"))),
            Station::new(id("D"), "D", 1, Prerequisites::new().with_station(id("A"))),
        ])
        .unwrap()
    }

    fn pinned(ids: &[&str]) -> Selection {
        Selection::Pinned {
            anchor: None,
            stations: ids.iter().map(|value| id(value)).collect::<StationSet>(),
        }
    }

    #[test]
    fn test_nothing_selected() {
        let map = HighlightProjector::project(&graph(), &Selection::Empty);
        assert!(map.nodes().all(|(_, style)| style == NodeStyle::Normal));
        assert!(map.edges().iter().all(|edge| edge.style == EdgeStyle::Plain));
        assert_eq!(map.faded().count(), 0);
    }

    #[test]
    fn test_members_highlight_and_others_fade() {
        let map = HighlightProjector::project(&graph(), &pinned(&["B", "A"]));
        assert_eq!(map.node_style("A"), Some(NodeStyle::Highlighted));
        assert_eq!(map.node_style("B"), Some(NodeStyle::Highlighted));
        assert_eq!(map.node_style("C"), Some(NodeStyle::Faded));
        assert_eq!(map.node_style("ghost"), None);

        let faded: Vec<&str> = map.faded().map(|id| id.as_str()).collect();
        assert_eq!(faded, vec!["C", "D"]);
    }

    #[test]
    fn test_edge_styles() {
        let map = HighlightProjector::project(&graph(), &pinned(&["B", "A"]));
        assert_eq!(map.edge_style("A", "B"), Some(EdgeStyle::Active));
        assert_eq!(map.edge_style("B", "C"), Some(EdgeStyle::Leading));
        assert_eq!(map.edge_style("A", "D"), Some(EdgeStyle::Leading));

        let map = HighlightProjector::project(&graph(), &pinned(&["D"]));
        assert_eq!(map.edge_style("A", "D"), Some(EdgeStyle::Dimmed));
        assert_eq!(map.edge_style("B", "C"), Some(EdgeStyle::Dimmed));
    }

    #[test]
    fn test_transient_hover_highlights_like_pinned() {
        let hover = Selection::TransientHover {
            anchor: id("B"),
            stations: [id("B"), id("A")].into_iter().collect(),
        };
        assert_eq!(
            HighlightProjector::project(&graph(), &hover),
            HighlightProjector::project(&graph(), &pinned(&["B", "A"]))
        );
    }
}
