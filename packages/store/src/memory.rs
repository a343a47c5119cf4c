use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::ProgressRecord;
use crate::source::{ProgressError, ProgressSource};

/// In-memory ProgressSource for the aggregation tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryProgressSource {
    rows: Arc<Mutex<HashMap<String, Vec<ProgressRecord>>>>,
    failure: Option<ProgressError>,
}

impl MemoryProgressSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every fetch fails with `error`.
    pub fn failing(error: ProgressError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn insert(&self, record: ProgressRecord) {
        self.rows
            .lock()
            .unwrap()
            .entry(record.user_id.clone())
            .or_default()
            .push(record);
    }
}

impl ProgressSource for MemoryProgressSource {
    async fn fetch_progress(&self, user_id: &str) -> Result<Vec<ProgressRecord>, ProgressError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileSummary;
    use crate::source::load_summary;

    #[tokio::test]
    async fn test_fetch_filters_by_user() {
        let source = MemoryProgressSource::new();
        source.insert(ProgressRecord::new("alice", "hindi-101", 40, false));
        source.insert(ProgressRecord::new("alice", "safety-basics", 100, true));
        source.insert(ProgressRecord::new("bob", "hindi-101", 10, false));

        let alice = source.fetch_progress("alice").await.unwrap();
        assert_eq!(alice.len(), 2);
        assert!(alice.iter().all(|r| r.user_id == "alice"));

        let bob = source.fetch_progress("bob").await.unwrap();
        assert_eq!(bob.len(), 1);

        assert!(source.fetch_progress("carol").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_summary() {
        let source = MemoryProgressSource::new();
        source.insert(ProgressRecord::new("alice", "hindi-101", 50, false));
        source.insert(ProgressRecord::new("alice", "safety-basics", 100, true));

        let summary = load_summary(&source, "alice").await.unwrap();
        assert_eq!(summary.courses_in_progress, 1);
        assert_eq!(summary.completed_courses, 1);
        assert_eq!(summary.average_progress, 75);
        assert_eq!(summary.achievements_count, 2);

        let empty = load_summary(&source, "nobody").await.unwrap();
        assert_eq!(empty, ProfileSummary::default());
    }

    #[tokio::test]
    async fn test_load_summary_propagates_failure() {
        let source = MemoryProgressSource::failing(ProgressError::Request("timeout".to_string()));

        let err = load_summary(&source, "alice").await.unwrap_err();
        assert_eq!(err, ProgressError::Request("timeout".to_string()));
        assert_eq!(err.to_string(), "progress request failed: timeout");
    }
}
