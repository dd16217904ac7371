//! TUI widgets

pub mod activity;
pub mod heatmap;
pub mod help;
pub mod overview;
pub mod recent;
pub mod skills;
pub mod spinner;
pub mod tabs;
