use crate::hideout::domain::HideoutGraph;
use crate::hideout::services::HideoutGraphLoader;
use crate::ports::outbound::{DatasetSource, ProgressReporter};
use crate::shared::Result;

/// LoadHideoutUseCase - fetches and validates the station dataset
///
/// Runs once at startup. The graph it returns is immutable for the rest of
/// the process; nothing interactive happens until it succeeds.
///
/// # Type Parameters
/// * `D` - DatasetSource implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadHideoutUseCase<D, PR> {
    source: D,
    progress_reporter: PR,
}

impl<D, PR> LoadHideoutUseCase<D, PR>
where
    D: DatasetSource,
    PR: ProgressReporter,
{
    /// Creates a new LoadHideoutUseCase with injected dependencies
    pub fn new(source: D, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Fetches the dataset and builds the graph
    ///
    /// # Errors
    /// Fetch failures are passed through; malformed or inconsistent data
    /// is reported as a `HideoutError`
    pub async fn execute(&self) -> Result<HideoutGraph> {
        let location = self.source.describe();
        self.progress_reporter
            .report(&format!("📖 Loading hideout dataset from: {}", location));

        let content = match self.source.fetch().await {
            Ok(content) => content,
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("Failed to load dataset: {}", e));
                return Err(e);
            }
        };

        let graph = match HideoutGraphLoader::parse(&location, &content) {
            Ok(graph) => graph,
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("Dataset rejected: {}", e));
                return Err(e.into());
            }
        };

        tracing::info!(stations = graph.len(), source = %location, "hideout dataset loaded");
        self.progress_reporter
            .report_completion(&format!("✅ Loaded {} station(s)", graph.len()));

        Ok(graph)
    }
}
