//! Loading spinner widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Spinner animation frames
const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// App branding
const APP_NAME: &str = "leetlens";
const TAGLINE: &str = "LeetCode profile analytics";

/// Loading stage for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingStage {
    Fetching,
    Merging,
    Building,
}

impl LoadingStage {
    pub fn message(self) -> &'static str {
        match self {
            Self::Fetching => "Fetching profile...",
            Self::Merging => "Merging sections...",
            Self::Building => "Building views...",
        }
    }
}

/// Loading spinner widget
pub struct Spinner {
    frame: usize,
    stage: LoadingStage,
}

impl Spinner {
    pub fn new(frame: usize, stage: LoadingStage) -> Self {
        Self { frame, stage }
    }

    /// Get the current spinner character
    pub fn current_char(&self) -> char {
        SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
    }

    /// Advance to next frame, returning the new frame index
    pub fn next_frame(frame: usize) -> usize {
        (frame + 1) % SPINNER_FRAMES.len()
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 5 || area.width < 35 {
            return;
        }

        // Center vertically around 4 lines: name, tagline, blank, spinner
        let center_y = area.y + area.height / 2;

        // App name (bold, white)
        let name_y = center_y.saturating_sub(2);
        let name_x = area.x + (area.width.saturating_sub(APP_NAME.len() as u16)) / 2;
        buf.set_string(
            name_x,
            name_y,
            APP_NAME,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        // Tagline (dark gray)
        let tagline_y = name_y + 1;
        let tagline_x = area.x + (area.width.saturating_sub(TAGLINE.len() as u16)) / 2;
        buf.set_string(
            tagline_x,
            tagline_y,
            TAGLINE,
            Style::default().fg(Color::DarkGray),
        );

        // Spinner + stage message
        let message = format!("{} {}", self.current_char(), self.stage.message());
        let msg_y = tagline_y + 2;
        let msg_x = area.x + (area.width.saturating_sub(message.len() as u16)) / 2;
        buf.set_string(msg_x, msg_y, &message, Style::default().fg(Color::Cyan));
    }
}
