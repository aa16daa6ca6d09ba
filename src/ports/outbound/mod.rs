/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod dataset_source;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod selection_store;

pub use dataset_source::DatasetSource;
pub use formatter::HideoutFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use selection_store::{SelectionStore, CLICKED_STATION_KEY, HIGHLIGHTED_STATIONS_KEY};
