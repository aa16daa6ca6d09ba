/// Mock implementations for testing
mod mock_dataset_source;
mod mock_progress_reporter;
mod mock_selection_store;

pub use mock_dataset_source::MockDatasetSource;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEntry};
pub use mock_selection_store::MockSelectionStore;
