use crate::ports::outbound::DatasetSource;
use crate::shared::error::HideoutError;
use crate::shared::security::MAX_FILE_SIZE;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// HttpDatasetSource adapter fetching the station dataset over HTTP(S)
///
/// Transient failures are retried with a short linear backoff.
pub struct HttpDatasetSource {
    client: reqwest::Client,
    url: String,
    max_retries: u32,
}

impl HttpDatasetSource {
    /// Creates a source for `url`
    ///
    /// # Errors
    /// Returns an error if the URL is not http(s) or the client cannot be built
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if !Self::is_http_url(&url) {
            return Err(HideoutError::Validation {
                message: format!("Dataset URL must use http or https: {}", url),
            }
            .into());
        }

        let user_agent = format!("hideout-planner/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url,
            max_retries: 3,
        })
    }

    pub fn is_http_url(location: &str) -> bool {
        location.starts_with("http://") || location.starts_with("https://")
    }

    async fn fetch_once(&self) -> std::result::Result<String, String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("server returned status code {}", status));
        }

        let body = response.text().await.map_err(|e| e.to_string())?;
        if body.len() as u64 > MAX_FILE_SIZE {
            return Err(format!(
                "response is too large ({} bytes, maximum {})",
                body.len(),
                MAX_FILE_SIZE
            ));
        }
        Ok(body)
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String> {
        let mut last_error = String::new();

        for attempt in 1..=self.max_retries {
            match self.fetch_once().await {
                Ok(body) => return Ok(body),
                Err(details) => {
                    tracing::debug!(attempt, url = %self.url, error = %details, "dataset fetch failed");
                    last_error = details;
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(HideoutError::DatasetFetchError {
            url: self.url.clone(),
            details: last_error,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let source = HttpDatasetSource::new("https://example.com/hideout.json").unwrap();
        assert_eq!(source.describe(), "https://example.com/hideout.json");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = HttpDatasetSource::new("ftp://example.com/hideout.json")
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<HideoutError>(),
            Some(HideoutError::Validation { .. })
        ));
    }

    #[test]
    fn test_is_http_url() {
        assert!(HttpDatasetSource::is_http_url("http://localhost/hideout.json"));
        assert!(HttpDatasetSource::is_http_url("https://example.com/h.json"));
        assert!(!HttpDatasetSource::is_http_url("hideout.json"));
        assert!(!HttpDatasetSource::is_http_url("./https/hideout.json"));
    }

    #[tokio::test]
    async fn test_unreachable_host_reports_fetch_error() {
        // Port 9 (discard) on localhost is expected to refuse connections
        let mut source = HttpDatasetSource::new("http://127.0.0.1:9/hideout.json").unwrap();
        source.max_retries = 1;

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HideoutError>(),
            Some(HideoutError::DatasetFetchError { .. })
        ));
    }
}
