use crate::application::session::HideoutSession;
use crate::application::use_cases::LoadHideoutUseCase;
use crate::ports::outbound::{DatasetSource, ProgressReporter, SelectionStore};
use crate::shared::error::HideoutError;
use crate::shared::Result;
use std::sync::Arc;

/// Where the application is in its startup lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    NotReady,
    Ready,
    Failed,
}

enum AppState<S> {
    NotReady,
    Ready(HideoutSession<S>),
    Failed(String),
}

/// HideoutApp - gates interaction behind a successful dataset load
///
/// Starts `NotReady`. A successful load moves it to `Ready` with a fresh
/// session; a failed one moves it to `Failed`, which is terminal for this
/// instance.
pub struct HideoutApp<S> {
    state: AppState<S>,
}

impl<S: SelectionStore> Default for HideoutApp<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SelectionStore> HideoutApp<S> {
    pub fn new() -> Self {
        Self {
            state: AppState::NotReady,
        }
    }

    /// Loads the dataset and opens a session over it
    ///
    /// # Errors
    /// `IllegalTransition` if called twice, or whatever the load reports
    pub async fn start<D, PR>(
        &mut self,
        loader: &LoadHideoutUseCase<D, PR>,
        store: Option<S>,
    ) -> Result<()>
    where
        D: DatasetSource,
        PR: ProgressReporter,
    {
        if !matches!(self.state, AppState::NotReady) {
            return Err(HideoutError::IllegalTransition {
                transition: "load the dataset",
                state: self.readiness().as_str(),
            }
            .into());
        }

        match loader.execute().await {
            Ok(graph) => {
                let session = HideoutSession::new(Arc::new(graph), store);
                tracing::debug!(persistent = session.is_persistent(), "session ready");
                self.state = AppState::Ready(session);
                Ok(())
            }
            Err(e) => {
                self.state = AppState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn readiness(&self) -> Readiness {
        match self.state {
            AppState::NotReady => Readiness::NotReady,
            AppState::Ready(_) => Readiness::Ready,
            AppState::Failed(_) => Readiness::Failed,
        }
    }

    /// Reason the load failed, if it did
    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            AppState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&HideoutSession<S>> {
        match &self.state {
            AppState::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut HideoutSession<S>> {
        match &mut self.state {
            AppState::Ready(session) => Some(session),
            _ => None,
        }
    }

    /// Like [`Self::session_mut`], but an error before the graph is loaded
    pub fn require_session_mut(&mut self) -> Result<&mut HideoutSession<S>> {
        self.session_mut().ok_or_else(|| HideoutError::NotReady.into())
    }
}

impl Readiness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Readiness::NotReady => "not ready",
            Readiness::Ready => "ready",
            Readiness::Failed => "failed",
        }
    }
}
