use crate::adapters::outbound::filesystem::FileDatasetSource;
use crate::adapters::outbound::network::HttpDatasetSource;
use crate::ports::outbound::DatasetSource;
use crate::shared::Result;

/// Factory for creating dataset sources
///
/// `http://` and `https://` locations are fetched over the network;
/// anything else is treated as a local path.
pub struct DatasetSourceFactory;

impl DatasetSourceFactory {
    /// Creates a source for `location`
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn create(location: &str) -> Result<Box<dyn DatasetSource>> {
        if HttpDatasetSource::is_http_url(location) {
            Ok(Box::new(HttpDatasetSource::new(location)?))
        } else {
            Ok(Box::new(FileDatasetSource::new(location)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_file_source() {
        let source = DatasetSourceFactory::create("data/hideout.json").unwrap();
        assert_eq!(source.describe(), "data/hideout.json");
    }

    #[test]
    fn test_create_http_source() {
        let source = DatasetSourceFactory::create("https://example.com/hideout.json").unwrap();
        assert_eq!(source.describe(), "https://example.com/hideout.json");
    }
}
