//! Activity view - streak summary line plus the month-grouped heatmap

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::heatmap::ActivityHeatmap;
use super::tabs::{Tab, TabBar};
use crate::services::calendar::CalendarView;
use crate::services::ProfileStats;
use crate::tui::theme::Theme;

/// Maximum content width (consistent with other views)
const MAX_CONTENT_WIDTH: u16 = 170;

/// Activity view widget
pub struct ActivityView<'a> {
    view: &'a CalendarView,
    stats: &'a ProfileStats,
    theme: Theme,
}

impl<'a> ActivityView<'a> {
    pub fn new(view: &'a CalendarView, stats: &'a ProfileStats, theme: Theme) -> Self {
        Self { view, stats, theme }
    }

    fn render_summary(&self, area: Rect, buf: &mut Buffer) {
        let summary = Paragraph::new(Line::from(vec![
            Span::styled("Streak: ", Style::default().fg(self.theme.muted())),
            Span::styled(
                format!("{} days", self.stats.streak),
                Style::default()
                    .fg(self.theme.bar())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Active days (1y): ", Style::default().fg(self.theme.muted())),
            Span::styled(
                self.stats.active_days_last_year.to_string(),
                Style::default().fg(self.theme.text()),
            ),
            Span::raw("   "),
            Span::styled("Active days (all): ", Style::default().fg(self.theme.muted())),
            Span::styled(
                self.stats.total_active_days.to_string(),
                Style::default().fg(self.theme.text()),
            ),
        ]))
        .alignment(Alignment::Center);

        summary.render(area, buf);
    }
}

impl Widget for ActivityView<'_> {
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
            Constraint::Length(1),  // Top padding
            Constraint::Length(1),  // Tabs
            Constraint::Length(1),  // Separator
            Constraint::Length(1),  // Summary
            Constraint::Length(1),  // Blank
            Constraint::Length(11), // Heatmap (label + 7 rows + blank + legend)
            Constraint::Min(0),     // Remaining space
        ])
        .split(centered_area);

        TabBar::new(Tab::Activity, self.theme).render(chunks[1], buf);
        let line = "─".repeat(chunks[2].width as usize);
        buf.set_string(
            chunks[2].x,
            chunks[2].y,
            &line,
            Style::default().fg(self.theme.muted()),
        );
        self.render_summary(chunks[3], buf);

        // Show the most recent months that fit; drop whole groups from the
        // front rather than clipping mid-group.
        let mut view = self.view.as_slice();
        while !view.is_empty() && ActivityHeatmap::full_width(view) > chunks[5].width {
            view = &view[1..];
        }
        ActivityHeatmap::new(view, self.theme).render(chunks[5], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calendar::{build_with_civil, utc_civil};
    use crate::types::{DifficultySolved, UserRecord};
    use chrono::NaiveDate;

    fn day(year: i32, month: u32, dom: u32) -> i64 {
        NaiveDate::from_ymd_opt(year, month, dom)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp()
    }

    fn make_stats() -> ProfileStats {
        let record = UserRecord {
            username: "somebody".into(),
            real_name: String::new(),
            ranking: 1,
            avatar: None,
            reputation: None,
            star_rating: None,
            solved: DifficultySolved::default(),
            activity: None,
            contest: None,
            skills: None,
            recent: Vec::new(),
        };
        ProfileStats::from_record(&record, day(2024, 6, 1))
    }

    #[test]
    fn test_activity_renders_summary_and_heatmap() {
        let raw = format!("{{\"{}\": 5}}", day(2024, 3, 15));
        let view = build_with_civil(&raw, day(2024, 3, 20), utc_civil);
        let stats = make_stats();

        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        ActivityView::new(&view, &stats, Theme::Dark).render(area, &mut buf);

        let mut content = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            content.push('\n');
        }
        assert!(content.contains("Streak:"));
        assert!(content.contains("Mar 2024"));
        assert!(content.contains("Less"));
    }

    #[test]
    fn test_activity_drops_oldest_groups_when_narrow() {
        // Two month groups; only the newer fits in a narrow area
        let raw = format!(
            "{{\"{}\": 1, \"{}\": 2}}",
            day(2024, 1, 15),
            day(2024, 2, 15)
        );
        let view = build_with_civil(&raw, day(2024, 2, 20), utc_civil);
        assert_eq!(view.len(), 2);

        let area = Rect::new(0, 0, 30, 20);
        let mut buf = Buffer::empty(area);
        ActivityView::new(&view, &make_stats(), Theme::Dark).render(area, &mut buf);

        let mut content = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            content.push('\n');
        }
        assert!(!content.contains("Jan 2024"));
        assert!(content.contains("Feb 2024"));
    }
}
