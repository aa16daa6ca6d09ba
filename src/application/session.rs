use crate::hideout::domain::{
    HideoutGraph, HighlightMap, PersistedSelection, RequirementSummary, SelectionSnapshot,
    StationId, StationSet,
};
use crate::hideout::services::{
    ClosureResolver, HighlightProjector, RequirementAggregator, SelectionState, TransitionOutcome,
};
use crate::ports::inbound::{HideoutInteractionPort, IgnoredReason, InteractionOutcome};
use crate::ports::outbound::{SelectionStore, CLICKED_STATION_KEY, HIGHLIGHTED_STATIONS_KEY};
use crate::shared::error::HideoutError;
use std::sync::Arc;

/// HideoutSession - single owner of the selection for one loaded graph
///
/// Events arrive one at a time through `&mut self`, so transitions never
/// interleave. Storage is optional: without a store, or when the store
/// fails, the session keeps working in memory.
///
/// # Type Parameters
/// * `S` - SelectionStore implementation
pub struct HideoutSession<S> {
    graph: Arc<HideoutGraph>,
    resolver: ClosureResolver,
    state: SelectionState,
    store: Option<S>,
}

impl<S: SelectionStore> HideoutSession<S> {
    /// Creates a session, restoring any pinned selection found in `store`
    pub fn new(graph: Arc<HideoutGraph>, store: Option<S>) -> Self {
        let state = match &store {
            Some(store) => Self::restore(store, &graph),
            None => SelectionState::new(),
        };

        Self {
            resolver: ClosureResolver::new(graph.clone()),
            graph,
            state,
            store,
        }
    }

    fn restore(store: &S, graph: &HideoutGraph) -> SelectionState {
        let stations = match store.get(HIGHLIGHTED_STATIONS_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "selection store unreadable, starting empty");
                return SelectionState::new();
            }
        };
        let anchor = store.get(CLICKED_STATION_KEY).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "stored anchor unreadable");
            None
        });

        let persisted = PersistedSelection::decode(stations.as_deref(), anchor.as_deref());
        SelectionState::rehydrate(&persisted, graph)
    }

    /// Whether transitions are written to durable storage
    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    pub fn resolver(&self) -> &ClosureResolver {
        &self.resolver
    }

    fn resolve(&self, station_id: &str) -> Result<(StationId, StationSet), InteractionOutcome> {
        match self.resolver.closure(station_id) {
            Ok(closure) => {
                let anchor = closure.first().cloned().ok_or_else(|| {
                    InteractionOutcome::Ignored(IgnoredReason::UnknownStation(station_id.to_string()))
                })?;
                Ok((anchor, closure))
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring event for unknown station");
                Err(InteractionOutcome::Ignored(IgnoredReason::UnknownStation(
                    station_id.to_string(),
                )))
            }
        }
    }

    fn apply(&self, outcome: TransitionOutcome) -> InteractionOutcome {
        if let Some(persisted) = outcome.persist {
            self.persist(&persisted);
        }
        InteractionOutcome::Applied
    }

    fn persist(&self, persisted: &PersistedSelection) {
        let Some(store) = &self.store else {
            return;
        };

        let result = store
            .set(HIGHLIGHTED_STATIONS_KEY, &persisted.encode_stations())
            .and_then(|_| store.set(CLICKED_STATION_KEY, &persisted.encode_anchor()));
        if let Err(e) = result {
            tracing::debug!(error = %e, "failed to persist selection, continuing in memory");
        }
    }

    fn rejected(error: HideoutError) -> InteractionOutcome {
        tracing::debug!(error = %error, "transition rejected");
        InteractionOutcome::Ignored(IgnoredReason::IllegalTransition(error.to_string()))
    }
}

impl<S: SelectionStore> HideoutInteractionPort for HideoutSession<S> {
    fn graph(&self) -> &HideoutGraph {
        &self.graph
    }

    fn current_selection(&self) -> SelectionSnapshot {
        self.state.current().snapshot()
    }

    fn summary(&self) -> RequirementSummary {
        RequirementAggregator::aggregate(&self.graph, self.state.current().stations())
    }

    fn highlight(&self) -> HighlightMap {
        HighlightProjector::project(&self.graph, self.state.current())
    }

    fn summary_visible(&self) -> bool {
        self.state.is_pinned()
    }

    fn hover_enter(&mut self, station_id: &str) -> InteractionOutcome {
        if self.state.is_pinned() {
            return InteractionOutcome::Ignored(IgnoredReason::SelectionPinned);
        }
        let (anchor, closure) = match self.resolve(station_id) {
            Ok(resolved) => resolved,
            Err(ignored) => return ignored,
        };
        match self.state.hover_enter(anchor, closure) {
            Ok(outcome) => self.apply(outcome),
            Err(e) => Self::rejected(e),
        }
    }

    fn hover_leave(&mut self) -> InteractionOutcome {
        if self.state.is_pinned() {
            return InteractionOutcome::Ignored(IgnoredReason::SelectionPinned);
        }
        match self.state.hover_leave() {
            Ok(outcome) => self.apply(outcome),
            Err(e) => Self::rejected(e),
        }
    }

    fn click(&mut self, station_id: &str, extend: bool) -> InteractionOutcome {
        let (station, closure) = match self.resolve(station_id) {
            Ok(resolved) => resolved,
            Err(ignored) => return ignored,
        };
        let outcome = self.state.click(station, closure, extend);
        tracing::debug!(
            station = station_id,
            extend,
            kind = %self.state.kind(),
            "click applied"
        );
        self.apply(outcome)
    }
}
