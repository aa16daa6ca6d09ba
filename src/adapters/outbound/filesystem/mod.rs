/// Filesystem adapters for file I/O operations
mod dataset_file_source;
mod file_writer;
mod json_file_selection_store;

pub use dataset_file_source::FileDatasetSource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use json_file_selection_store::JsonFileSelectionStore;
