pub mod highlight;
pub mod hideout_graph;
pub mod requirement_summary;
pub mod selection;
pub mod station;

pub use highlight::{EdgeHighlight, EdgeStyle, HighlightMap, NodeStyle};
pub use hideout_graph::HideoutGraph;
pub use requirement_summary::{ItemTotal, RequirementSummary};
pub use selection::{PersistedSelection, Selection, SelectionKind, SelectionSnapshot, StationSet};
pub use station::{
    Geometry, GridPlacement, ItemRequirement, LevelRequirement, Prerequisites, Station, StationId,
};
