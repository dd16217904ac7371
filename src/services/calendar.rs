//! Submission-calendar bucketing
//!
//! Transforms the raw `submissionCalendar` payload (a JSON object mapping
//! decimal-string Unix timestamps to submission counts) into a month-grouped
//! grid of weeks for the activity heatmap. Grouping is by calendar month, not
//! by a uniform week grid, so each month column labels itself; a week that
//! spans a month change is split across the two groups.

use chrono::{DateTime, Datelike, Local, LocalResult, TimeZone, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Trailing window rendered by the heatmap, in days.
pub const WINDOW_DAYS: i64 = 365;

const SECS_PER_DAY: i64 = 86_400;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Civil-calendar fields for a timestamp. `weekday` is 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub weekday: u32,
}

/// One cell of the heatmap grid. `Empty` cells are weekday-alignment padding
/// and never carry a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayCell {
    Empty,
    Filled { date: i64, count: u64 },
}

impl DayCell {
    pub fn is_filled(self) -> bool {
        matches!(self, DayCell::Filled { .. })
    }
}

/// Seven cells, Sunday through Saturday.
pub type Week = [DayCell; 7];

/// One calendar month's worth of weeks, independently padded at both ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup {
    pub label: &'static str,
    pub year: i32,
    pub weeks: Vec<Week>,
}

/// Month groups in ascending chronological order.
pub type CalendarView = Vec<MonthGroup>;

/// Result of decoding the raw calendar payload. Collapsed to the empty map at
/// the call site so malformed input degrades instead of surfacing an error.
enum ParsedMap {
    Valid(HashMap<String, u64>),
    Malformed,
}

fn parse_submission_map(raw: &str) -> ParsedMap {
    match serde_json::from_str(raw) {
        Ok(map) => ParsedMap::Valid(map),
        Err(_) => ParsedMap::Malformed,
    }
}

/// Derive civil-calendar fields in the local time zone. Timestamps that do
/// not resolve to a local instant fall back to UTC.
pub fn local_civil(ts: i64) -> CivilDate {
    match Local.timestamp_opt(ts, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => CivilDate {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            weekday: dt.weekday().num_days_from_sunday(),
        },
        LocalResult::None => utc_civil(ts),
    }
}

/// Derive civil-calendar fields in UTC. Deterministic across environments,
/// used by tests and available to callers that pin a time zone.
pub fn utc_civil(ts: i64) -> CivilDate {
    let dt = DateTime::from_timestamp(ts, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
    CivilDate {
        year: dt.year(),
        month: dt.month(),
        day: dt.day(),
        weekday: dt.weekday().num_days_from_sunday(),
    }
}

/// Build the month-grouped calendar for the trailing year ending at `now`,
/// deriving month/year/weekday through the local time zone.
pub fn build(raw: &str, now: i64) -> CalendarView {
    build_with_civil(raw, now, local_civil)
}

/// Build the calendar with `now` taken from the wall clock.
pub fn build_now(raw: &str) -> CalendarView {
    build(raw, Utc::now().timestamp())
}

/// Build the month-grouped calendar with an injected civil-calendar function.
///
/// Total function of `(raw, now, civil)`: malformed payloads are treated as
/// the empty map, unparsable keys are skipped, and entries outside
/// `[now - 365d, now]` are dropped entirely. Never fails.
pub fn build_with_civil<F>(raw: &str, now: i64, civil: F) -> CalendarView
where
    F: Fn(i64) -> CivilDate,
{
    let map = match parse_submission_map(raw) {
        ParsedMap::Valid(map) => map,
        ParsedMap::Malformed => HashMap::new(),
    };

    let window_start = now - WINDOW_DAYS * SECS_PER_DAY;
    let mut stamps: Vec<i64> = map
        .keys()
        .filter_map(|key| key.parse::<i64>().ok())
        .filter(|&ts| ts >= window_start && ts <= now)
        .collect();
    // Numeric sort: the keys are string-typed upstream
    stamps.sort_unstable();

    let mut groups: Vec<MonthGroup> = Vec::new();
    let mut buffer: Vec<DayCell> = Vec::new();
    let mut current: Option<(i32, u32)> = None;

    for ts in stamps {
        let date = civil(ts);

        if current != Some((date.year, date.month)) {
            // Seal the previous month's trailing partial week
            if !buffer.is_empty() {
                if let Some(group) = groups.last_mut() {
                    group.weeks.push(seal(std::mem::take(&mut buffer)));
                }
            }
            current = Some((date.year, date.month));
            groups.push(MonthGroup {
                label: MONTH_LABELS[(date.month - 1) as usize],
                year: date.year,
                weeks: Vec::new(),
            });
            // Align the first real day of the month to its weekday column
            buffer.clear();
            buffer.resize(date.weekday as usize, DayCell::Empty);
        }

        let count = map.get(&ts.to_string()).copied().unwrap_or(0);
        buffer.push(DayCell::Filled { date: ts, count });

        if buffer.len() == 7 {
            if let Some(group) = groups.last_mut() {
                group.weeks.push(seal(std::mem::take(&mut buffer)));
            }
        }
    }

    if !buffer.is_empty() {
        if let Some(group) = groups.last_mut() {
            group.weeks.push(seal(buffer));
        }
    }

    groups
}

/// Days in the trailing window with at least one submission. Works on the
/// raw payload so callers do not need a built view; malformed payloads
/// count zero.
pub fn active_days(raw: &str, now: i64) -> u32 {
    let map = match parse_submission_map(raw) {
        ParsedMap::Valid(map) => map,
        ParsedMap::Malformed => HashMap::new(),
    };
    let window_start = now - WINDOW_DAYS * SECS_PER_DAY;
    map.iter()
        .filter_map(|(key, &count)| key.parse::<i64>().ok().map(|ts| (ts, count)))
        .filter(|&(ts, count)| ts >= window_start && ts <= now && count > 0)
        .count() as u32
}

/// Count of Filled cells across the whole view.
pub fn filled_count(view: &CalendarView) -> usize {
    view.iter()
        .flat_map(|group| group.weeks.iter())
        .flat_map(|week| week.iter())
        .filter(|cell| cell.is_filled())
        .count()
}

fn seal(mut cells: Vec<DayCell>) -> Week {
    cells.resize(7, DayCell::Empty);
    let mut week = [DayCell::Empty; 7];
    for (slot, cell) in week.iter_mut().zip(cells) {
        *slot = cell;
    }
    week
}
