use crate::hideout::domain::{
    HideoutGraph, PersistedSelection, Selection, SelectionKind, StationId, StationSet,
};
use crate::shared::error::HideoutError;

/// What a transition asks of the outside world
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    /// Value to write to durable storage, if any
    pub persist: Option<PersistedSelection>,
}

impl TransitionOutcome {
    fn transient() -> Self {
        Self { persist: None }
    }

    fn persisted(selection: PersistedSelection) -> Self {
        Self {
            persist: Some(selection),
        }
    }
}

/// SelectionState is the highlight state machine
///
/// ```text
/// Empty  --hover_enter-->  TransientHover  --hover_leave-->  Empty
/// any    --click(x)----->  Pinned(closure(x))
/// any    --click(x, ext)-> Pinned(current ∪ closure(x))
/// Pinned(anchor x) --click(x)--> Empty --> TransientHover(closure(x))
/// ```
///
/// Closures are computed by the caller; this type only decides what the
/// next selection is and whether it must be persisted. Callers must not
/// forward hover events while a selection is pinned.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    current: Selection,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a pinned selection, dropping ids the graph no longer knows
    pub fn rehydrate(persisted: &PersistedSelection, graph: &HideoutGraph) -> Self {
        let mut stations = StationSet::new();
        for raw in &persisted.stations {
            match graph.resolve_id(raw) {
                Some(id) => {
                    stations.insert(id.clone());
                }
                None => tracing::warn!(station = %raw, "dropping unknown station from stored selection"),
            }
        }

        if stations.is_empty() {
            return Self::new();
        }

        let anchor = persisted
            .anchor
            .as_deref()
            .and_then(|raw| graph.resolve_id(raw))
            .cloned();

        tracing::debug!(stations = stations.len(), anchor = ?anchor, "restored pinned selection");
        Self {
            current: Selection::Pinned { anchor, stations },
        }
    }

    pub fn current(&self) -> &Selection {
        &self.current
    }

    pub fn kind(&self) -> SelectionKind {
        self.current.kind()
    }

    pub fn is_pinned(&self) -> bool {
        self.current.is_pinned()
    }

    /// Starts a transient preview of `closure`
    ///
    /// # Errors
    /// `IllegalTransition` unless the selection is empty
    pub fn hover_enter(
        &mut self,
        anchor: StationId,
        closure: StationSet,
    ) -> Result<TransitionOutcome, HideoutError> {
        if !self.current.is_empty() {
            return Err(self.illegal("start hovering"));
        }
        self.current = Selection::TransientHover {
            anchor,
            stations: closure,
        };
        Ok(TransitionOutcome::transient())
    }

    /// Ends a transient preview
    ///
    /// # Errors
    /// `IllegalTransition` unless a transient preview is active
    pub fn hover_leave(&mut self) -> Result<TransitionOutcome, HideoutError> {
        if !matches!(self.current, Selection::TransientHover { .. }) {
            return Err(self.illegal("leave hover"));
        }
        self.current = Selection::Empty;
        Ok(TransitionOutcome::transient())
    }

    /// Applies a click on `station`, whose closure is `closure`
    ///
    /// Clicking the anchor of a pinned selection unpins it and falls back
    /// to a transient preview of the same closure. Otherwise the click pins
    /// either the closure alone or, with `extend`, the union with whatever
    /// is currently highlighted.
    pub fn click(&mut self, station: StationId, closure: StationSet, extend: bool) -> TransitionOutcome {
        if let Selection::Pinned {
            anchor: Some(anchor),
            ..
        } = &self.current
        {
            if *anchor == station {
                self.current = Selection::TransientHover {
                    anchor: station,
                    stations: closure,
                };
                return TransitionOutcome::persisted(PersistedSelection::cleared());
            }
        }

        let stations = if extend {
            let mut union: StationSet = self.current.stations().cloned().collect();
            union.extend(closure);
            union
        } else {
            closure
        };

        let persisted = PersistedSelection::pinned(&stations, Some(&station));
        self.current = Selection::Pinned {
            anchor: Some(station),
            stations,
        };
        TransitionOutcome::persisted(persisted)
    }

    fn illegal(&self, transition: &'static str) -> HideoutError {
        HideoutError::IllegalTransition {
            transition,
            state: self.current.kind().as_str(),
        }
    }
}
