//! Progress data sources.
//!
//! [`ProgressSource`] abstracts the remote "select all progress rows for a user"
//! query so the profile aggregation can run against the server API in the app
//! and against an in-memory source in tests.

use crate::models::{ProfileSummary, ProgressRecord};

/// Failure to read progress rows.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProgressError {
    #[error("not authenticated")]
    Unauthenticated,
    #[error("progress request failed: {0}")]
    Request(String),
}

/// Async source of a user's progress rows.
pub trait ProgressSource {
    fn fetch_progress(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ProgressRecord>, ProgressError>>;
}

/// Fetch every record of `user_id` and aggregate them.
pub async fn load_summary<S: ProgressSource>(
    source: &S,
    user_id: &str,
) -> Result<ProfileSummary, ProgressError> {
    let records = source.fetch_progress(user_id).await?;
    Ok(ProfileSummary::from_records(&records))
}
