//! Profile types for the merged user record
//!
//! Wire-facing sections use camelCase renames so they deserialize straight
//! out of the GraphQL response body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Accepted problems per difficulty tier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DifficultySolved {
    pub easy: u64,
    pub medium: u64,
    pub hard: u64,
}

impl DifficultySolved {
    pub fn total(&self) -> u64 {
        self.easy + self.medium + self.hard
    }
}

/// `matchedUser.userCalendar` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityData {
    pub streak: u32,
    pub total_active_days: u32,
    /// JSON object string: decimal Unix-second keys to submission counts
    pub submission_calendar: String,
}

/// `userContestRanking` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContestRanking {
    pub rating: f64,
    pub global_ranking: u64,
    pub top_percentage: f64,
    pub attended_contests_count: u32,
}

/// One tag from `tagProblemCounts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillTag {
    pub tag_name: String,
    pub problems_solved: u64,
}

/// `tagProblemCounts` section grouped by tag tier
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillMatrix {
    #[serde(default)]
    pub advanced: Vec<SkillTag>,
    #[serde(default)]
    pub intermediate: Vec<SkillTag>,
    #[serde(default)]
    pub fundamental: Vec<SkillTag>,
}

impl SkillMatrix {
    /// All tags across tiers, strongest tier first
    pub fn all_tags(&self) -> impl Iterator<Item = &SkillTag> {
        self.advanced
            .iter()
            .chain(self.intermediate.iter())
            .chain(self.fundamental.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.advanced.is_empty() && self.intermediate.is_empty() && self.fundamental.is_empty()
    }
}

/// One entry from `recentSubmissionList`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecentSubmission {
    pub title: String,
    /// Unix seconds, string-typed upstream
    pub timestamp: String,
    pub status_display: String,
    pub lang: String,
}

impl RecentSubmission {
    pub fn accepted(&self) -> bool {
        self.status_display == "Accepted"
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp
            .parse::<i64>()
            .ok()
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

/// Merged user-facing record assembled from the independent profile queries.
/// Sections beyond the base profile are optional: any of them may have
/// failed upstream without aborting the merge.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserRecord {
    pub username: String,
    pub real_name: String,
    pub ranking: u64,
    pub avatar: Option<String>,
    pub reputation: Option<i64>,
    pub star_rating: Option<f64>,
    pub solved: DifficultySolved,
    pub activity: Option<ActivityData>,
    pub contest: Option<ContestRanking>,
    pub skills: Option<SkillMatrix>,
    pub recent: Vec<RecentSubmission>,
}
