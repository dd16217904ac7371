//! Derived statistics for a fetched profile

use crate::services::calendar;
use crate::types::UserRecord;
use serde::Serialize;

/// Display-ready statistics computed from a merged [`UserRecord`].
/// Total function: sections the fetch could not fill degrade to zeros
/// and `None`s.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileStats {
    pub total_solved: u64,
    pub easy_solved: u64,
    pub medium_solved: u64,
    pub hard_solved: u64,
    pub ranking: u64,
    pub contest_rating: Option<f64>,
    pub top_percentage: Option<f64>,
    pub streak: u32,
    pub total_active_days: u32,
    /// Days with at least one submission in the trailing 365-day window
    pub active_days_last_year: u32,
}

impl ProfileStats {
    pub fn from_record(record: &UserRecord, now: i64) -> Self {
        let (streak, total_active_days, active_days_last_year) = match &record.activity {
            Some(activity) => (
                activity.streak,
                activity.total_active_days,
                calendar::active_days(&activity.submission_calendar, now),
            ),
            None => (0, 0, 0),
        };

        Self {
            total_solved: record.solved.total(),
            easy_solved: record.solved.easy,
            medium_solved: record.solved.medium,
            hard_solved: record.solved.hard,
            ranking: record.ranking,
            contest_rating: record.contest.as_ref().map(|c| c.rating),
            top_percentage: record.contest.as_ref().map(|c| c.top_percentage),
            streak,
            total_active_days,
            active_days_last_year,
        }
    }

    /// Share of total solved for one difficulty, in percent
    pub fn difficulty_share(&self, solved: u64) -> f64 {
        if self.total_solved == 0 {
            return 0.0;
        }
        solved as f64 * 100.0 / self.total_solved as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActivityData, ContestRanking, DifficultySolved};
    use chrono::NaiveDate;

    fn day(year: i32, month: u32, dom: u32) -> i64 {
        NaiveDate::from_ymd_opt(year, month, dom)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp()
    }

    fn make_record() -> UserRecord {
        UserRecord {
            username: "somebody".into(),
            real_name: "Some Body".into(),
            ranking: 15234,
            avatar: None,
            reputation: Some(42),
            star_rating: None,
            solved: DifficultySolved {
                easy: 234,
                medium: 189,
                hard: 64,
            },
            activity: None,
            contest: None,
            skills: None,
            recent: Vec::new(),
        }
    }

    #[test]
    fn test_stats_from_base_record() {
        let stats = ProfileStats::from_record(&make_record(), day(2024, 6, 1));

        assert_eq!(stats.total_solved, 487);
        assert_eq!(stats.easy_solved, 234);
        assert_eq!(stats.ranking, 15234);
        assert!(stats.contest_rating.is_none());
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.active_days_last_year, 0);
    }

    #[test]
    fn test_stats_with_activity_and_contest() {
        let now = day(2024, 6, 1);
        let in_window = day(2024, 5, 10);
        let stale = now - 400 * 86_400;

        let mut record = make_record();
        record.activity = Some(ActivityData {
            streak: 12,
            total_active_days: 140,
            submission_calendar: format!("{{\"{}\": 3, \"{}\": 9}}", in_window, stale),
        });
        record.contest = Some(ContestRanking {
            rating: 1842.0,
            global_ranking: 15234,
            top_percentage: 14.8,
            attended_contests_count: 23,
        });

        let stats = ProfileStats::from_record(&record, now);
        assert_eq!(stats.streak, 12);
        assert_eq!(stats.total_active_days, 140);
        assert_eq!(stats.active_days_last_year, 1);
        assert_eq!(stats.contest_rating, Some(1842.0));
        assert_eq!(stats.top_percentage, Some(14.8));
    }

    #[test]
    fn test_difficulty_share() {
        let stats = ProfileStats::from_record(&make_record(), day(2024, 6, 1));
        let share = stats.difficulty_share(stats.easy_solved);
        assert!((share - 48.049_28).abs() < 0.01);

        let empty = ProfileStats::from_record(
            &UserRecord {
                solved: DifficultySolved::default(),
                ..make_record()
            },
            day(2024, 6, 1),
        );
        assert!((empty.difficulty_share(0) - 0.0).abs() < f64::EPSILON);
    }
}
