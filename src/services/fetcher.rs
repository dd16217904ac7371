//! Tiered profile fetcher
//!
//! Assembles one [`UserRecord`] from up to five independent queries against
//! the public GraphQL endpoint. The base profile query is required; the
//! calendar, contest, skills and recent-submission queries each tolerate
//! failure on their own, logging a warning and leaving their section empty.

use crate::types::{
    ActivityData, ContestRanking, DifficultySolved, LeetlensError, RecentSubmission, Result,
    SkillMatrix, UserRecord,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// Public GraphQL endpoint
const GRAPHQL_ENDPOINT: &str = "https://leetcode.com/graphql";

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Recent submissions kept after the merge
const RECENT_LIMIT: usize = 10;

const PROFILE_QUERY: &str = r#"
query userProfile($username: String!) {
  matchedUser(username: $username) {
    username
    profile { ranking realName userAvatar reputation starRating }
    submitStats { acSubmissionNum { difficulty count } }
  }
}"#;

const CALENDAR_QUERY: &str = r#"
query userCalendar($username: String!) {
  matchedUser(username: $username) {
    userCalendar { streak totalActiveDays submissionCalendar }
  }
}"#;

const CONTEST_QUERY: &str = r#"
query userContest($username: String!) {
  userContestRanking(username: $username) {
    rating globalRanking topPercentage attendedContestsCount
  }
}"#;

const SKILLS_QUERY: &str = r#"
query userSkills($username: String!) {
  matchedUser(username: $username) {
    tagProblemCounts {
      advanced { tagName problemsSolved }
      intermediate { tagName problemsSolved }
      fundamental { tagName problemsSolved }
    }
  }
}"#;

const RECENT_QUERY: &str = r#"
query recentSubmissions($username: String!) {
  recentSubmissionList(username: $username, limit: 20) {
    title timestamp statusDisplay lang
  }
}"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileSection {
    ranking: Option<u64>,
    real_name: Option<String>,
    user_avatar: Option<String>,
    reputation: Option<i64>,
    star_rating: Option<f64>,
}

/// Blocking GraphQL client for the profile endpoint
pub struct ProfileFetcher {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl ProfileFetcher {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(GRAPHQL_ENDPOINT)
    }

    /// Custom endpoint constructor (for testing)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| LeetlensError::Http(format!("HTTP client error: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Fetch and merge all sections for `username`
    pub fn fetch(&self, username: &str) -> Result<UserRecord> {
        let profile = self.post(PROFILE_QUERY, username)?;
        let mut record = extract_profile(&profile, username)?;

        match self.post(CALENDAR_QUERY, username) {
            Ok(value) => record.activity = extract_activity(&value),
            Err(e) => warn_section("calendar", &e),
        }
        match self.post(CONTEST_QUERY, username) {
            Ok(value) => record.contest = extract_contest(&value),
            Err(e) => warn_section("contest", &e),
        }
        match self.post(SKILLS_QUERY, username) {
            Ok(value) => record.skills = extract_skills(&value),
            Err(e) => warn_section("skills", &e),
        }
        match self.post(RECENT_QUERY, username) {
            Ok(value) => {
                let mut recent = extract_recent(&value);
                recent.truncate(RECENT_LIMIT);
                record.recent = recent;
            }
            Err(e) => warn_section("recent submissions", &e),
        }

        Ok(record)
    }

    fn post(&self, query: &str, username: &str) -> Result<Value> {
        let body = json!({
            "query": query,
            "variables": { "username": username },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Referer", "https://leetcode.com")
            .json(&body)
            .send()
            .map_err(|e| LeetlensError::Http(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(LeetlensError::Api(format!(
                "endpoint returned {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| LeetlensError::Parse(format!("invalid GraphQL response: {}", e)))
    }
}

fn warn_section(section: &str, err: &LeetlensError) {
    eprintln!("[leetlens] Warning: {} query failed: {}", section, err);
}

/// Build the base record from the required profile query. An absent
/// `matchedUser` means the username does not exist.
fn extract_profile(value: &Value, username: &str) -> Result<UserRecord> {
    let matched = &value["data"]["matchedUser"];
    if matched.is_null() {
        return Err(LeetlensError::Api(format!("user not found: {}", username)));
    }

    let profile: ProfileSection = serde_json::from_value(matched["profile"].clone())
        .map_err(|e| LeetlensError::Parse(format!("profile section: {}", e)))?;
    let solved = extract_solved(&matched["submitStats"]["acSubmissionNum"]);

    Ok(UserRecord {
        username: matched["username"]
            .as_str()
            .unwrap_or(username)
            .to_string(),
        real_name: profile.real_name.unwrap_or_default(),
        ranking: profile.ranking.unwrap_or(0),
        avatar: profile.user_avatar,
        reputation: profile.reputation,
        star_rating: profile.star_rating,
        solved,
        activity: None,
        contest: None,
        skills: None,
        recent: Vec::new(),
    })
}

fn extract_solved(value: &Value) -> DifficultySolved {
    let mut solved = DifficultySolved::default();
    if let Some(items) = value.as_array() {
        for item in items {
            let count = item["count"].as_u64().unwrap_or(0);
            match item["difficulty"].as_str() {
                Some("Easy") => solved.easy = count,
                Some("Medium") => solved.medium = count,
                Some("Hard") => solved.hard = count,
                _ => {}
            }
        }
    }
    solved
}

fn extract_activity(value: &Value) -> Option<ActivityData> {
    serde_json::from_value(value["data"]["matchedUser"]["userCalendar"].clone()).ok()
}

fn extract_contest(value: &Value) -> Option<ContestRanking> {
    serde_json::from_value(value["data"]["userContestRanking"].clone()).ok()
}

fn extract_skills(value: &Value) -> Option<SkillMatrix> {
    serde_json::from_value(value["data"]["matchedUser"]["tagProblemCounts"].clone()).ok()
}

fn extract_recent(value: &Value) -> Vec<RecentSubmission> {
    serde_json::from_value(value["data"]["recentSubmissionList"].clone()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_response() -> Value {
        json!({
            "data": {
                "matchedUser": {
                    "username": "somebody",
                    "profile": {
                        "ranking": 15234,
                        "realName": "Some Body",
                        "userAvatar": "https://example.com/a.png",
                        "reputation": 42,
                        "starRating": 4.5
                    },
                    "submitStats": {
                        "acSubmissionNum": [
                            { "difficulty": "All", "count": 487 },
                            { "difficulty": "Easy", "count": 234 },
                            { "difficulty": "Medium", "count": 189 },
                            { "difficulty": "Hard", "count": 64 }
                        ]
                    }
                }
            }
        })
    }

    #[test]
    fn test_extract_profile_base_record() {
        let record = extract_profile(&profile_response(), "somebody").unwrap();
        assert_eq!(record.username, "somebody");
        assert_eq!(record.real_name, "Some Body");
        assert_eq!(record.ranking, 15234);
        assert_eq!(record.solved.easy, 234);
        assert_eq!(record.solved.medium, 189);
        assert_eq!(record.solved.hard, 64);
        assert_eq!(record.solved.total(), 487);
        assert!(record.activity.is_none());
        assert!(record.contest.is_none());
        assert!(record.recent.is_empty());
    }

    #[test]
    fn test_extract_profile_unknown_user() {
        let value = json!({ "data": { "matchedUser": null } });
        let err = extract_profile(&value, "ghost").unwrap_err();
        assert!(err.to_string().contains("user not found: ghost"));
    }

    #[test]
    fn test_extract_solved_ignores_unknown_difficulty() {
        let value = json!([
            { "difficulty": "Easy", "count": 3 },
            { "difficulty": "Mystery", "count": 99 }
        ]);
        let solved = extract_solved(&value);
        assert_eq!(solved.easy, 3);
        assert_eq!(solved.total(), 3);
    }

    #[test]
    fn test_extract_activity_present() {
        let value = json!({
            "data": { "matchedUser": { "userCalendar": {
                "streak": 7,
                "totalActiveDays": 120,
                "submissionCalendar": "{\"1710460800\": 5}"
            }}}
        });
        let activity = extract_activity(&value).unwrap();
        assert_eq!(activity.streak, 7);
        assert_eq!(activity.total_active_days, 120);
    }

    #[test]
    fn test_extract_activity_null_section() {
        let value = json!({ "data": { "matchedUser": { "userCalendar": null } } });
        assert!(extract_activity(&value).is_none());
    }

    #[test]
    fn test_extract_contest() {
        let value = json!({
            "data": { "userContestRanking": {
                "rating": 1842.0,
                "globalRanking": 15234,
                "topPercentage": 14.8,
                "attendedContestsCount": 23
            }}
        });
        let contest = extract_contest(&value).unwrap();
        assert_eq!(contest.attended_contests_count, 23);
    }

    #[test]
    fn test_extract_contest_never_attended() {
        // Users with no contest history get a null section
        let value = json!({ "data": { "userContestRanking": null } });
        assert!(extract_contest(&value).is_none());
    }

    #[test]
    fn test_extract_skills() {
        let value = json!({
            "data": { "matchedUser": { "tagProblemCounts": {
                "advanced": [{ "tagName": "dynamic-programming", "problemsSolved": 31 }],
                "intermediate": [],
                "fundamental": [{ "tagName": "array", "problemsSolved": 120 }]
            }}}
        });
        let skills = extract_skills(&value).unwrap();
        assert_eq!(skills.advanced.len(), 1);
        assert_eq!(skills.fundamental[0].tag_name, "array");
    }

    #[test]
    fn test_extract_recent_malformed_degrades_to_empty() {
        let value = json!({ "data": { "recentSubmissionList": "oops" } });
        assert!(extract_recent(&value).is_empty());
    }

    #[test]
    fn test_extract_recent_entries() {
        let value = json!({
            "data": { "recentSubmissionList": [
                {
                    "title": "Two Sum",
                    "timestamp": "1710460800",
                    "statusDisplay": "Accepted",
                    "lang": "rust"
                },
                {
                    "title": "Add Two Numbers",
                    "timestamp": "1710374400",
                    "statusDisplay": "Wrong Answer",
                    "lang": "python3"
                }
            ]}
        });
        let recent = extract_recent(&value);
        assert_eq!(recent.len(), 2);
        assert!(recent[0].accepted());
        assert!(!recent[1].accepted());
    }
}
