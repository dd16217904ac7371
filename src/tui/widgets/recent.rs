//! Recent submissions view - scrollable list with status coloring

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::Widget,
};

use super::tabs::{Tab, TabBar};
use crate::tui::theme::Theme;
use crate::types::RecentSubmission;

/// Maximum content width (consistent with other views)
const MAX_CONTENT_WIDTH: u16 = 170;

/// Column widths: status, language
const STATUS_WIDTH: usize = 22;
const LANG_WIDTH: usize = 12;

/// Recent submissions view widget
pub struct RecentView<'a> {
    submissions: &'a [RecentSubmission],
    scroll: usize,
    theme: Theme,
}

impl<'a> RecentView<'a> {
    pub fn new(submissions: &'a [RecentSubmission], scroll: usize, theme: Theme) -> Self {
        Self {
            submissions,
            scroll,
            theme,
        }
    }

    /// Clamp a scroll offset so the last page stays full
    pub fn clamp_scroll(scroll: usize, total: usize, visible: usize) -> usize {
        scroll.min(total.saturating_sub(visible))
    }
}

impl Widget for RecentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content_width = area.width.min(MAX_CONTENT_WIDTH);
        let x_offset = (area.width.saturating_sub(content_width)) / 2;
        let centered_area = Rect {
            x: area.x + x_offset,
            y: area.y,
            width: content_width,
            height: area.height,
        };

        let chunks = Layout::vertical([
            Constraint::Length(1), // Top padding
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Column headers
            Constraint::Min(0),    // Rows
        ])
        .split(centered_area);

        TabBar::new(Tab::Recent, self.theme).render(chunks[1], buf);
        let line = "─".repeat(chunks[2].width as usize);
        buf.set_string(
            chunks[2].x,
            chunks[2].y,
            &line,
            Style::default().fg(self.theme.muted()),
        );

        let header = chunks[3];
        let body = chunks[4];

        if self.submissions.is_empty() {
            let msg = "No recent submissions";
            let x = body.x + (body.width.saturating_sub(msg.len() as u16)) / 2;
            buf.set_string(x, body.y + 1, msg, Style::default().fg(self.theme.muted()));
            return;
        }

        let header_style = Style::default()
            .fg(self.theme.muted())
            .add_modifier(Modifier::BOLD);
        buf.set_string(header.x, header.y, "Status", header_style);
        buf.set_string(
            header.x + STATUS_WIDTH as u16,
            header.y,
            "Lang",
            header_style,
        );
        buf.set_string(
            header.x + (STATUS_WIDTH + LANG_WIDTH) as u16,
            header.y,
            "Problem",
            header_style,
        );
        buf.set_string(
            header.x + header.width.saturating_sub(17),
            header.y,
            "Submitted",
            header_style,
        );

        let visible = body.height as usize;
        let scroll = Self::clamp_scroll(self.scroll, self.submissions.len(), visible);

        for (row, sub) in self.submissions.iter().skip(scroll).take(visible).enumerate() {
            let y = body.y + row as u16;

            let status_color = if sub.accepted() {
                self.theme.bar()
            } else {
                self.theme.error()
            };
            let status: String = sub.status_display.chars().take(STATUS_WIDTH - 2).collect();
            buf.set_string(body.x, y, &status, Style::default().fg(status_color));

            let lang: String = sub.lang.chars().take(LANG_WIDTH - 2).collect();
            buf.set_string(
                body.x + STATUS_WIDTH as u16,
                y,
                &lang,
                Style::default().fg(self.theme.muted()),
            );

            let title_max = body
                .width
                .saturating_sub((STATUS_WIDTH + LANG_WIDTH) as u16 + 18) as usize;
            let title: String = sub.title.chars().take(title_max).collect();
            buf.set_string(
                body.x + (STATUS_WIDTH + LANG_WIDTH) as u16,
                y,
                &title,
                Style::default().fg(self.theme.text()),
            );

            if let Some(at) = sub.submitted_at() {
                buf.set_string(
                    body.x + body.width.saturating_sub(17),
                    y,
                    at.format("%Y-%m-%d %H:%M").to_string(),
                    Style::default().fg(self.theme.date()),
                );
            }
        }
    }
}
