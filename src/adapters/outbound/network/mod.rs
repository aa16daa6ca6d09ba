/// Network adapters for fetching remote datasets
mod http_dataset_source;

pub use http_dataset_source::HttpDatasetSource;
