//! LeetCode profile analytics: fetch, reshape and render profile data.

pub mod cli;
pub mod services;
pub mod tui;
pub mod types;
