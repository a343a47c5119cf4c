//! Rows of the `user_progress` table.

use sqlx::FromRow;
use uuid::Uuid;

use store::ProgressRecord;

/// One `user_progress` row as stored.
#[derive(Debug, Clone, FromRow)]
pub struct ProgressRow {
    pub user_id: Uuid,
    pub course_id: String,
    pub progress: i32,
    pub completed: bool,
}

impl ProgressRow {
    /// Convert to the shared record, clamping progress into `0..=100`.
    pub fn to_record(&self) -> ProgressRecord {
        ProgressRecord::new(
            self.user_id.to_string(),
            self.course_id.clone(),
            self.progress,
            self.completed,
        )
    }
}
