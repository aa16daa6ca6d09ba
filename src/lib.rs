//! hideout-planner - trace hideout upgrade prerequisites
//!
//! Loads a static dataset of hideout stations, resolves the full set of
//! stations a target transitively requires, totals the items, skills and
//! trader levels needed, and keeps a hover/pin selection that survives
//! restarts. The crate follows hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`hideout`): Station graph, closure, aggregation and
//!   the selection state machine. No I/O.
//! - **Application Layer** (`application`): Startup lifecycle, the
//!   interaction session, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use hideout_planner::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<()> {
//! let loader = LoadHideoutUseCase::new(
//!     FileDatasetSource::new("hideout.json"),
//!     StderrProgressReporter::new(),
//! );
//! let graph = Arc::new(loader.execute().await?);
//!
//! let mut session = HideoutSession::new(graph, Some(JsonFileSelectionStore::new("state.json")));
//! session.click("workbench-1", false);
//!
//! let model = HideoutReadModelBuilder::build(&session, &ReadModelOptions::default());
//! println!("{}", TextFormatter::new(false).format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod hideout;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::{EventScriptRunner, ScriptReport, SessionEvent};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileDatasetSource, FileSystemWriter, JsonFileSelectionStore, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::network::HttpDatasetSource;
    pub use crate::application::app::{HideoutApp, Readiness};
    pub use crate::application::dto::OutputFormat;
    pub use crate::application::read_models::{
        HideoutReadModel, HideoutReadModelBuilder, ReadModelOptions, SummarySection,
    };
    pub use crate::application::session::HideoutSession;
    pub use crate::application::use_cases::LoadHideoutUseCase;
    pub use crate::hideout::domain::{
        EdgeStyle, HideoutGraph, HighlightMap, NodeStyle, PersistedSelection, Prerequisites,
        RequirementSummary, Selection, SelectionKind, SelectionSnapshot, Station, StationId,
        StationSet,
    };
    pub use crate::hideout::services::{
        ClosureResolver, HideoutGraphLoader, HighlightProjector, RequirementAggregator,
        SelectionState,
    };
    pub use crate::ports::inbound::{HideoutInteractionPort, IgnoredReason, InteractionOutcome};
    pub use crate::ports::outbound::{
        DatasetSource, HideoutFormatter, OutputPresenter, ProgressReporter, SelectionStore,
        CLICKED_STATION_KEY, HIGHLIGHTED_STATIONS_KEY,
    };
    pub use crate::shared::error::{ExitCode, HideoutError};
    pub use crate::shared::Result;
}
