mod closure_resolver;
mod graph_loader;
mod highlight_projector;
mod requirement_aggregator;
mod selection_state;

pub use closure_resolver::ClosureResolver;
pub use graph_loader::HideoutGraphLoader;
pub use highlight_projector::HighlightProjector;
pub use requirement_aggregator::RequirementAggregator;
pub use selection_state::{SelectionState, TransitionOutcome};
