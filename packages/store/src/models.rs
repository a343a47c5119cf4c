//! # Domain models for course progress
//!
//! Defines the rows read from the `user_progress` table and the summary the
//! profile dashboard derives from them. Both types are `Serialize + Deserialize`
//! so they can cross the server/client boundary via Dioxus server functions.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`ProgressRecord`] | One user's completion percentage for one course, plus a `completed` flag. |
//! | [`ProfileSummary`] | Counts and an average derived from all of a user's records. Never persisted. |
//!
//! [`ProfileSummary::from_records`] is the only aggregation in the app:
//!
//! - **in progress**: records with `0 < progress < 100`
//! - **completed**: records with `completed == true`
//! - **average**: `sum / count` rounded half-up, `0` when there are no records
//! - **achievements**: `completed + 1` if anything is completed, otherwise `1`

use serde::{Deserialize, Serialize};

/// Highest progress value a record can carry.
pub const MAX_PROGRESS: u8 = 100;

/// One row of `user_progress`: a user's progress through a single course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub user_id: String,
    pub course_id: String,
    /// Percentage, always within `0..=100`.
    pub progress: u8,
    pub completed: bool,
}

impl ProgressRecord {
    /// Build a record, clamping `progress` into `0..=100`.
    pub fn new(
        user_id: impl Into<String>,
        course_id: impl Into<String>,
        progress: i32,
        completed: bool,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            course_id: course_id.into(),
            progress: progress.clamp(0, MAX_PROGRESS as i32) as u8,
            completed,
        }
    }

    /// Started but not finished.
    pub fn is_in_progress(&self) -> bool {
        self.progress > 0 && self.progress < MAX_PROGRESS
    }
}

/// Dashboard numbers shown on the profile screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub courses_in_progress: u32,
    pub completed_courses: u32,
    /// Rounded mean of all progress values, within `0..=100`.
    pub average_progress: u8,
    pub achievements_count: u32,
}

impl Default for ProfileSummary {
    fn default() -> Self {
        Self {
            courses_in_progress: 0,
            completed_courses: 0,
            average_progress: 0,
            achievements_count: 1,
        }
    }
}

impl ProfileSummary {
    /// Aggregate every record of a user into a fresh summary.
    pub fn from_records(records: &[ProgressRecord]) -> Self {
        let courses_in_progress = records.iter().filter(|r| r.is_in_progress()).count() as u32;
        let completed_courses = records.iter().filter(|r| r.completed).count() as u32;

        let average_progress = if records.is_empty() {
            0
        } else {
            let total: u64 = records.iter().map(|r| u64::from(r.progress)).sum();
            let count = records.len() as u64;
            // Half-up rounding in integers: floor((2 * total + count) / (2 * count)).
            ((2 * total + count) / (2 * count)) as u8
        };

        let achievements_count = if completed_courses > 0 {
            completed_courses + 1
        } else {
            1
        };

        Self {
            courses_in_progress,
            completed_courses,
            average_progress,
            achievements_count,
        }
    }

    /// The overall progress bar is only shown while something is in progress.
    pub fn shows_overall_progress(&self) -> bool {
        self.courses_in_progress > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(progress: i32, completed: bool) -> ProgressRecord {
        ProgressRecord::new("user-1", format!("course-{progress}"), progress, completed)
    }

    #[test]
    fn test_half_and_complete_course() {
        let records = vec![record(50, false), record(100, true)];
        let summary = ProfileSummary::from_records(&records);

        assert_eq!(summary.courses_in_progress, 1);
        assert_eq!(summary.completed_courses, 1);
        assert_eq!(summary.average_progress, 75);
        assert_eq!(summary.achievements_count, 2);
        assert!(summary.shows_overall_progress());
    }

    #[test]
    fn test_no_records() {
        let summary = ProfileSummary::from_records(&[]);

        assert_eq!(summary.courses_in_progress, 0);
        assert_eq!(summary.completed_courses, 0);
        assert_eq!(summary.average_progress, 0);
        assert_eq!(summary.achievements_count, 1);
        assert_eq!(summary, ProfileSummary::default());
        assert!(!summary.shows_overall_progress());
    }

    #[test]
    fn test_average_rounds_half_up() {
        // 33 + 34 = 67, 67 / 2 = 33.5 -> 34
        let summary = ProfileSummary::from_records(&[record(33, false), record(34, false)]);
        assert_eq!(summary.average_progress, 34);

        // 10 + 10 + 11 = 31, 31 / 3 = 10.33 -> 10
        let summary =
            ProfileSummary::from_records(&[record(10, false), record(10, false), record(11, false)]);
        assert_eq!(summary.average_progress, 10);
    }

    #[test]
    fn test_boundaries_are_not_in_progress() {
        let records = vec![record(0, false), record(100, false), record(1, false), record(99, false)];
        let summary = ProfileSummary::from_records(&records);

        assert_eq!(summary.courses_in_progress, 2);
        // Completion is the flag, not the percentage.
        assert_eq!(summary.completed_courses, 0);
        assert_eq!(summary.achievements_count, 1);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(record(-20, false).progress, 0);
        assert_eq!(record(250, true).progress, 100);

        let summary = ProfileSummary::from_records(&[record(250, true), record(250, true)]);
        assert_eq!(summary.average_progress, 100);
        assert_eq!(summary.achievements_count, 3);
    }
}
