//! Overview widget - profile header, stat cards and difficulty breakdown

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::tabs::{Tab, TabBar};
use crate::services::ProfileStats;
use crate::tui::theme::Theme;
use crate::types::UserRecord;

/// Maximum content width (consistent with other views)
const MAX_CONTENT_WIDTH: u16 = 170;

/// Card dimensions
const CARD_WIDTH: u16 = 28;
const CARD_HEIGHT: u16 = 5;

/// Fixed number of columns for a balanced 2x3 grid
const FIXED_COLS: usize = 3;

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let s = n.to_string();
    let len = s.len();
    let mut result = String::with_capacity(len + len / 3);

    // Digits are ASCII, so byte iteration is safe
    for (i, ch) in s.bytes().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch as char);
    }

    result
}

/// Calculate number of cards per row based on available width
fn cards_per_row(width: u16) -> usize {
    let usable_width = width.saturating_sub(4); // padding
    let cards = (usable_width / (CARD_WIDTH + 2)) as usize; // +2 for spacing
    cards.clamp(1, FIXED_COLS)
}

struct StatCard {
    title: String,
    value: String,
    color: Color,
}

/// Overview widget
pub struct Overview<'a> {
    record: &'a UserRecord,
    stats: &'a ProfileStats,
    selected_tab: Tab,
    theme: Theme,
}

impl<'a> Overview<'a> {
    pub fn new(record: &'a UserRecord, stats: &'a ProfileStats, theme: Theme) -> Self {
        Self {
            record,
            stats,
            selected_tab: Tab::Overview,
            theme,
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.selected_tab = tab;
        self
    }
}

impl Widget for Overview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Apply max width constraint and center the content
        let content_width = area.width.min(MAX_CONTENT_WIDTH);
        let x_offset = (area.width.saturating_sub(content_width)) / 2;
        let centered_area = Rect {
            x: area.x + x_offset,
            y: area.y,
            width: content_width,
            height: area.height,
        };

        let cols = cards_per_row(centered_area.width);
        let rows = 6_usize.div_ceil(cols);
        let grid_height = (rows as u16) * (CARD_HEIGHT + 1);

        let chunks = Layout::vertical([
            Constraint::Length(1),           // Top padding
            Constraint::Length(1),           // Tabs
            Constraint::Length(1),           // Separator
            Constraint::Length(1),           // Header
            Constraint::Length(1),           // Blank
            Constraint::Length(grid_height), // Card grid
            Constraint::Length(4),           // Difficulty bars
            Constraint::Length(1),           // Separator
            Constraint::Length(1),           // Keybindings
            Constraint::Min(0),              // Remaining space
        ])
        .split(centered_area);

        TabBar::new(self.selected_tab, self.theme).render(chunks[1], buf);
        self.render_separator(chunks[2], buf);
        self.render_header(chunks[3], buf);
        self.render_card_grid(chunks[5], buf, cols);
        self.render_difficulty_bars(chunks[6], buf);
        self.render_separator(chunks[7], buf);
        self.render_keybindings(chunks[8], buf);
    }
}

impl Overview<'_> {
    fn render_separator(&self, area: Rect, buf: &mut Buffer) {
        let line = "─".repeat(area.width as usize);
        buf.set_string(
            area.x,
            area.y,
            &line,
            Style::default().fg(self.theme.muted()),
        );
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            self.record.username.clone(),
            Style::default()
                .fg(self.theme.text())
                .add_modifier(Modifier::BOLD),
        )];
        if !self.record.real_name.is_empty() {
            spans.push(Span::styled(
                format!(" ({})", self.record.real_name),
                Style::default().fg(self.theme.muted()),
            ));
        }
        spans.push(Span::styled(
            format!("  Rank #{}", format_number(self.record.ranking)),
            Style::default().fg(self.theme.date()),
        ));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn build_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                title: "Total Solved".to_string(),
                value: format_number(self.stats.total_solved),
                color: self.theme.accent(),
            },
            StatCard {
                title: "Easy".to_string(),
                value: format_number(self.stats.easy_solved),
                color: self.theme.easy(),
            },
            StatCard {
                title: "Medium".to_string(),
                value: format_number(self.stats.medium_solved),
                color: self.theme.medium(),
            },
            StatCard {
                title: "Hard".to_string(),
                value: format_number(self.stats.hard_solved),
                color: self.theme.hard(),
            },
            StatCard {
                title: "Contest Rating".to_string(),
                value: self
                    .stats
                    .contest_rating
                    .map(|r| format!("{:.0}", r))
                    .unwrap_or_else(|| "N/A".to_string()),
                color: self.theme.date(),
            },
            StatCard {
                title: "Active Days (1y)".to_string(),
                value: self.stats.active_days_last_year.to_string(),
                color: self.theme.bar(),
            },
        ]
    }

    fn render_card_grid(&self, area: Rect, buf: &mut Buffer, cols: usize) {
        let cards = self.build_cards();

        let total_cards_width = (cols as u16) * CARD_WIDTH + ((cols - 1) as u16) * 2;
        let start_x = area.x + (area.width.saturating_sub(total_cards_width)) / 2;

        for (i, card) in cards.iter().enumerate() {
            let row = i / cols;
            let col = i % cols;

            let card_x = start_x + (col as u16) * (CARD_WIDTH + 2);
            let card_y = area.y + (row as u16) * (CARD_HEIGHT + 1);

            if card_y + CARD_HEIGHT > area.y + area.height {
                continue;
            }

            let card_area = Rect {
                x: card_x,
                y: card_y,
                width: CARD_WIDTH,
                height: CARD_HEIGHT,
            };
            self.render_card(card_area, buf, card);
        }
    }

    fn render_card(&self, area: Rect, buf: &mut Buffer, card: &StatCard) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(card.color));
        block.render(area, buf);

        if area.height > 2 {
            let title_y = area.y + 1;
            let title_x = area.x + (area.width.saturating_sub(card.title.len() as u16)) / 2;
            buf.set_string(
                title_x,
                title_y,
                &card.title,
                Style::default().fg(card.color),
            );
        }

        if area.height > 3 {
            let value_y = area.y + 3;
            let value_x = area.x + (area.width.saturating_sub(card.value.len() as u16)) / 2;
            buf.set_string(
                value_x,
                value_y,
                &card.value,
                Style::default().fg(card.color).add_modifier(Modifier::BOLD),
            );
        }
    }

    fn render_difficulty_bars(&self, area: Rect, buf: &mut Buffer) {
        let rows = [
            ("Easy  ", self.stats.easy_solved, self.theme.easy()),
            ("Medium", self.stats.medium_solved, self.theme.medium()),
            ("Hard  ", self.stats.hard_solved, self.theme.hard()),
        ];

        for (i, (label, solved, color)) in rows.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.y + area.height {
                break;
            }

            let share = self.stats.difficulty_share(*solved);
            let bar_max = area.width.saturating_sub(30) as usize;
            let bar_len = (bar_max as f64 * share / 100.0).round() as usize;

            buf.set_string(area.x, y, *label, Style::default().fg(*color));
            buf.set_string(
                area.x + 7,
                y,
                "█".repeat(bar_len),
                Style::default().fg(*color),
            );
            buf.set_string(
                area.x + 8 + bar_max as u16,
                y,
                format!("{} ({:.1}%)", format_number(*solved), share),
                Style::default().fg(self.theme.text()),
            );
        }
    }

    fn render_keybindings(&self, area: Rect, buf: &mut Buffer) {
        let bindings = Paragraph::new(Line::from(vec![
            Span::styled("q", Style::default().fg(self.theme.accent())),
            Span::styled(": Quit", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("Tab", Style::default().fg(self.theme.accent())),
            Span::styled(": Switch view", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("?", Style::default().fg(self.theme.accent())),
            Span::styled(": Help", Style::default().fg(self.theme.muted())),
        ]))
        .alignment(Alignment::Center);

        bindings.render(area, buf);
    }
}
