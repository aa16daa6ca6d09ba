mod dataset_source_factory;
mod formatter_factory;
mod presenter_factory;

pub use dataset_source_factory::DatasetSourceFactory;
pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
