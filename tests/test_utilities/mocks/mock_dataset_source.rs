use async_trait::async_trait;
use hideout_planner::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock DatasetSource serving fixed content, or failing
#[derive(Clone)]
pub struct MockDatasetSource {
    content: Option<String>,
    fetches: Arc<AtomicUsize>,
}

impl MockDatasetSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Loads the shared dataset fixture
    pub fn fixture() -> Self {
        Self::new(include_str!("../../fixtures/hideout.json"))
    }

    /// Source whose fetch always fails
    pub fn unreachable() -> Self {
        Self {
            content: None,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    #[allow(dead_code)]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetSource for MockDatasetSource {
    fn describe(&self) -> String {
        "mock://hideout.json".to_string()
    }

    async fn fetch(&self) -> Result<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.content {
            Some(content) => Ok(content.clone()),
            None => Err(HideoutError::DatasetFetchError {
                url: self.describe(),
                details: "connection refused".to_string(),
            }
            .into()),
        }
    }
}
