use anyhow::{bail, Context};
use chrono::Utc;
use clap::{Parser, Subcommand};

use crate::services::calendar::{self, CalendarView};
use crate::services::{ProfileFetcher, ProfileStats, SavedStore};
use crate::tui;
use crate::tui::widgets::overview::format_number;

/// LeetCode profile analytics in your terminal
#[derive(Parser)]
#[command(name = "leetlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Username to open (falls back to the most recently saved one)
    username: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch interactive TUI (default)
    Tui {
        /// Username to open
        username: Option<String>,
    },

    /// Print profile statistics
    Stats {
        username: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the submission calendar for the last year
    Calendar {
        username: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage saved usernames
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
}

#[derive(Subcommand)]
enum SavedAction {
    /// List saved usernames, most recent first
    List,
    /// Save a username
    Add { username: String },
    /// Remove a saved username
    Remove { username: String },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            None => run_tui(self.username),
            Some(Commands::Tui { username }) => run_tui(username.or(self.username)),
            Some(Commands::Stats { username, json }) => run_stats(&username, json),
            Some(Commands::Calendar { username, json }) => run_calendar(&username, json),
            Some(Commands::Saved { action }) => run_saved(action),
        }
    }
}

/// Resolve the username to open: explicit argument, or most recently saved
fn resolve_username(explicit: Option<String>) -> anyhow::Result<String> {
    if let Some(username) = explicit {
        return Ok(username);
    }
    let store = SavedStore::new()?;
    match store.list().into_iter().next() {
        Some(username) => Ok(username),
        None => bail!("no username given and no saved profiles; run `leetlens <username>`"),
    }
}

fn run_tui(username: Option<String>) -> anyhow::Result<()> {
    let username = resolve_username(username)?;

    // Remember the profile for next launch; not fatal if the store is unwritable
    match SavedStore::new() {
        Ok(store) => {
            if let Err(e) = store.add(&username) {
                eprintln!("[leetlens] Warning: could not save username: {}", e);
            }
        }
        Err(e) => eprintln!("[leetlens] Warning: could not open saved store: {}", e),
    }

    tui::run(&username)
}

fn run_stats(username: &str, json: bool) -> anyhow::Result<()> {
    let record = ProfileFetcher::new()?
        .fetch(username)
        .with_context(|| format!("failed to fetch profile for {}", username))?;
    let stats = ProfileStats::from_record(&record, Utc::now().timestamp());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{} (rank #{})", record.username, format_number(stats.ranking));
    println!(
        "  Solved: {} ({} easy, {} medium, {} hard)",
        format_number(stats.total_solved),
        format_number(stats.easy_solved),
        format_number(stats.medium_solved),
        format_number(stats.hard_solved),
    );
    match (stats.contest_rating, stats.top_percentage) {
        (Some(rating), Some(top)) => {
            println!("  Contest rating: {:.0} (top {:.1}%)", rating, top)
        }
        _ => println!("  Contest rating: N/A"),
    }
    println!(
        "  Streak: {} days, {} active days in the last year",
        stats.streak, stats.active_days_last_year
    );
    Ok(())
}

fn run_calendar(username: &str, json: bool) -> anyhow::Result<()> {
    let record = ProfileFetcher::new()?
        .fetch(username)
        .with_context(|| format!("failed to fetch profile for {}", username))?;
    let raw = record
        .activity
        .as_ref()
        .map(|a| a.submission_calendar.as_str())
        .unwrap_or("");
    let view = calendar::build(raw, Utc::now().timestamp());

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print!("{}", calendar_summary(&view));
    Ok(())
}

/// One line per month: active days and total submissions
fn calendar_summary(view: &CalendarView) -> String {
    if view.is_empty() {
        return "No submissions in the last year\n".to_string();
    }

    let mut out = String::new();
    for group in view {
        let mut active = 0u32;
        let mut total = 0u64;
        for week in &group.weeks {
            for cell in week {
                if let calendar::DayCell::Filled { count, .. } = cell {
                    if *count > 0 {
                        active += 1;
                        total += count;
                    }
                }
            }
        }
        out.push_str(&format!(
            "{} {}: {} submissions over {} days\n",
            group.label, group.year, total, active
        ));
    }
    out
}

fn run_saved(action: SavedAction) -> anyhow::Result<()> {
    let store = SavedStore::new()?;
    match action {
        SavedAction::List => {
            let usernames = store.list();
            if usernames.is_empty() {
                println!("No saved profiles");
            } else {
                for username in usernames {
                    println!("{}", username);
                }
            }
        }
        SavedAction::Add { username } => {
            store.add(&username)?;
            println!("Saved {}", username);
        }
        SavedAction::Remove { username } => {
            let known = store.list().iter().any(|u| u == &username);
            store.remove(&username)?;
            if known {
                println!("Removed {}", username);
            } else {
                println!("{} was not saved", username);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calendar::{build_with_civil, utc_civil};
    use chrono::NaiveDate;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["leetlens"]).unwrap();
        assert!(cli.username.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_bare_username() {
        let cli = Cli::try_parse_from(["leetlens", "somebody"]).unwrap();
        assert_eq!(cli.username.as_deref(), Some("somebody"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_stats() {
        let cli = Cli::try_parse_from(["leetlens", "stats", "somebody"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Stats { json: false, .. })
        ));
    }

    #[test]
    fn test_cli_parse_calendar_json() {
        let cli = Cli::try_parse_from(["leetlens", "calendar", "somebody", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Calendar { json: true, .. })
        ));
    }

    #[test]
    fn test_cli_parse_saved_subcommands() {
        let cli = Cli::try_parse_from(["leetlens", "saved", "list"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Saved {
                action: SavedAction::List
            })
        ));

        let cli = Cli::try_parse_from(["leetlens", "saved", "add", "somebody"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Saved {
                action: SavedAction::Add { .. }
            })
        ));
    }

    #[test]
    fn test_calendar_summary_counts_month() {
        fn day(year: i32, month: u32, dom: u32) -> i64 {
            NaiveDate::from_ymd_opt(year, month, dom)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc()
                .timestamp()
        }

        let raw = format!("{{\"{}\": 3, \"{}\": 2}}", day(2024, 3, 14), day(2024, 3, 15));
        let view = build_with_civil(&raw, day(2024, 3, 20), utc_civil);
        assert_eq!(calendar_summary(&view), "Mar 2024: 5 submissions over 2 days\n");
    }

    #[test]
    fn test_calendar_summary_empty() {
        assert_eq!(calendar_summary(&Vec::new()), "No submissions in the last year\n");
    }
}
