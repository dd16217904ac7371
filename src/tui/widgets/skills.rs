//! Skills view - solved-problem counts per topic tag, grouped by level

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::Widget,
};

use super::overview::format_number;
use super::tabs::{Tab, TabBar};
use crate::tui::theme::Theme;
use crate::types::{SkillMatrix, SkillTag};

/// Maximum content width (consistent with other views)
const MAX_CONTENT_WIDTH: u16 = 170;

/// Widest tag name column before truncation
const TAG_COLUMN_WIDTH: usize = 28;

/// Skills view widget
pub struct SkillsView<'a> {
    skills: Option<&'a SkillMatrix>,
    theme: Theme,
}

impl<'a> SkillsView<'a> {
    pub fn new(skills: Option<&'a SkillMatrix>, theme: Theme) -> Self {
        Self { skills, theme }
    }

    fn render_group(
        &self,
        area: Rect,
        buf: &mut Buffer,
        y: &mut u16,
        heading: &str,
        tags: &[SkillTag],
        max_solved: u64,
    ) {
        if tags.is_empty() || *y >= area.y + area.height {
            return;
        }

        buf.set_string(
            area.x,
            *y,
            heading,
            Style::default()
                .fg(self.theme.accent())
                .add_modifier(Modifier::BOLD),
        );
        *y += 1;

        let bar_max = area.width.saturating_sub(TAG_COLUMN_WIDTH as u16 + 12) as usize;

        for tag in tags {
            if *y >= area.y + area.height {
                return;
            }

            let name: String = tag.tag_name.chars().take(TAG_COLUMN_WIDTH).collect();
            buf.set_string(area.x + 2, *y, &name, Style::default().fg(self.theme.text()));

            let bar_len = if max_solved == 0 {
                0
            } else {
                ((tag.problems_solved as f64 / max_solved as f64) * bar_max as f64).round() as usize
            };
            let bar_x = area.x + 2 + TAG_COLUMN_WIDTH as u16 + 1;
            buf.set_string(
                bar_x,
                *y,
                "█".repeat(bar_len),
                Style::default().fg(self.theme.bar()),
            );
            buf.set_string(
                bar_x + bar_max as u16 + 1,
                *y,
                format_number(tag.problems_solved),
                Style::default().fg(self.theme.date()),
            );
            *y += 1;
        }

        *y += 1; // Blank line between groups
    }
}

impl Widget for SkillsView<'_> {
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
            Constraint::Length(1), // Blank
            Constraint::Min(0),    // Tag groups
        ])
        .split(centered_area);

        TabBar::new(Tab::Skills, self.theme).render(chunks[1], buf);
        let line = "─".repeat(chunks[2].width as usize);
        buf.set_string(
            chunks[2].x,
            chunks[2].y,
            &line,
            Style::default().fg(self.theme.muted()),
        );

        let body = chunks[4];

        let Some(skills) = self.skills.filter(|s| !s.is_empty()) else {
            let msg = "No skill data available for this profile";
            let x = body.x + (body.width.saturating_sub(msg.len() as u16)) / 2;
            buf.set_string(x, body.y + 1, msg, Style::default().fg(self.theme.muted()));
            return;
        };

        let max_solved = skills
            .all_tags()
            .map(|t| t.problems_solved)
            .max()
            .unwrap_or(0);

        let mut y = body.y;
        self.render_group(body, buf, &mut y, "Advanced", &skills.advanced, max_solved);
        self.render_group(
            body,
            buf,
            &mut y,
            "Intermediate",
            &skills.intermediate,
            max_solved,
        );
        self.render_group(
            body,
            buf,
            &mut y,
            "Fundamental",
            &skills.fundamental,
            max_solved,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_skills() -> SkillMatrix {
        SkillMatrix {
            advanced: vec![SkillTag {
                tag_name: "Dynamic Programming".into(),
                problems_solved: 42,
            }],
            intermediate: vec![SkillTag {
                tag_name: "Hash Table".into(),
                problems_solved: 87,
            }],
            fundamental: vec![SkillTag {
                tag_name: "Array".into(),
                problems_solved: 120,
            }],
        }
    }

    fn buffer_text(buf: &Buffer, area: Rect) -> String {
        let mut content = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            content.push('\n');
        }
        content
    }

    #[test]
    fn test_skills_renders_groups_and_counts() {
        let skills = make_skills();
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);

        SkillsView::new(Some(&skills), Theme::Dark).render(area, &mut buf);

        let content = buffer_text(&buf, area);
        assert!(content.contains("Advanced"));
        assert!(content.contains("Dynamic Programming"));
        assert!(content.contains("Intermediate"));
        assert!(content.contains("Fundamental"));
        assert!(content.contains("120"));
    }

    #[test]
    fn test_skills_empty_placeholder() {
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);

        SkillsView::new(None, Theme::Dark).render(area, &mut buf);

        let content = buffer_text(&buf, area);
        assert!(content.contains("No skill data available"));
    }

    #[test]
    fn test_skills_truncates_long_tag_names() {
        let skills = SkillMatrix {
            advanced: vec![SkillTag {
                tag_name: "An Extremely Long Topic Tag Name That Overflows".into(),
                problems_solved: 3,
            }],
            intermediate: Vec::new(),
            fundamental: Vec::new(),
        };
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);

        SkillsView::new(Some(&skills), Theme::Dark).render(area, &mut buf);

        let content = buffer_text(&buf, area);
        assert!(content.contains("An Extremely Long Topic Tag "));
        assert!(!content.contains("Overflows"));
    }
}
