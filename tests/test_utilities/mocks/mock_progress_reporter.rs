use hideout_planner::prelude::*;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEntry {
    Progress(String),
    Error(String),
    Completed(String),
}

/// Mock ProgressReporter recording every call in order
///
/// Clones share the log, so a test can hand one to the use case and read
/// the other afterwards.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    entries: Arc<Mutex<Vec<ProgressEntry>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries rendered as text, errors and completions prefixed
    pub fn get_messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|entry| match entry {
                ProgressEntry::Progress(message) => message.clone(),
                ProgressEntry::Error(message) => format!("Error: {}", message),
                ProgressEntry::Completed(message) => format!("Completed: {}", message),
            })
            .collect()
    }

    #[allow(dead_code)]
    pub fn entries(&self) -> Vec<ProgressEntry> {
        self.entries.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn error_count(&self) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| matches!(entry, ProgressEntry::Error(_)))
            .count()
    }

    fn push(&self, entry: ProgressEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(ProgressEntry::Progress(message.to_string()));
    }

    fn report_error(&self, message: &str) {
        self.push(ProgressEntry::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(ProgressEntry::Completed(message.to_string()));
    }
}
