//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that render adapters consume. They are built
//! from the interaction port and never feed back into the core.

mod hideout_read_model;
mod hideout_read_model_builder;

pub use hideout_read_model::{
    EdgeView, HideoutReadModel, ItemLine, LevelLine, SelectionView, StationRefView, StationView,
    SummaryView,
};
pub use hideout_read_model_builder::{HideoutReadModelBuilder, ReadModelOptions, SummarySection};
