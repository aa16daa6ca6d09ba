use crate::shared::Result;
use async_trait::async_trait;

/// DatasetSource port for fetching the static station dataset
///
/// The dataset is fetched once at startup; everything interactive waits
/// for this to finish.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location (path or URL) for progress and error messages
    fn describe(&self) -> String;

    /// Fetches the raw dataset JSON
    ///
    /// # Errors
    /// Returns an error if the resource is missing, unreadable or unreachable
    async fn fetch(&self) -> Result<String>;
}

#[async_trait]
impl<T: DatasetSource + ?Sized> DatasetSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    async fn fetch(&self) -> Result<String> {
        (**self).fetch().await
    }
}
