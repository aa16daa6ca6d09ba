use crate::hideout::domain::{HideoutGraph, HighlightMap, RequirementSummary, SelectionSnapshot};

/// Why an interaction left the selection untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoredReason {
    /// Hover events are not previewed over a pinned selection
    SelectionPinned,
    /// The station id is not part of the graph
    UnknownStation(String),
    /// The event is not valid in the current state (e.g. leave without hover)
    IllegalTransition(String),
}

impl std::fmt::Display for IgnoredReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoredReason::SelectionPinned => write!(f, "a selection is pinned"),
            IgnoredReason::UnknownStation(id) => write!(f, "unknown station '{}'", id),
            IgnoredReason::IllegalTransition(details) => write!(f, "{}", details),
        }
    }
}

/// Result of one interaction event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    Applied,
    Ignored(IgnoredReason),
}

impl InteractionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, InteractionOutcome::Applied)
    }
}

/// HideoutInteractionPort - the surface a render adapter drives
///
/// Event handlers call the transition methods; drawing code reads the
/// snapshot, summary and highlight map. Every method is infallible from the
/// adapter's point of view: rejected events come back as
/// [`InteractionOutcome::Ignored`] and leave the selection unchanged.
pub trait HideoutInteractionPort {
    /// The loaded station graph
    fn graph(&self) -> &HideoutGraph;

    /// Read-only copy of the current selection
    fn current_selection(&self) -> SelectionSnapshot;

    /// Requirements of every highlighted station
    fn summary(&self) -> RequirementSummary;

    /// Node and edge styling for the current selection
    fn highlight(&self) -> HighlightMap;

    /// Whether the summary panel should be open (only for pinned selections)
    fn summary_visible(&self) -> bool;

    /// Pointer entered a station
    fn hover_enter(&mut self, station_id: &str) -> InteractionOutcome;

    /// Pointer left the hovered station
    fn hover_leave(&mut self) -> InteractionOutcome;

    /// Station clicked; `extend` is the modifier key
    fn click(&mut self, station_id: &str, extend: bool) -> InteractionOutcome;
}
