//! Month-grouped activity heatmap widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::services::calendar::{DayCell, MonthGroup};
use crate::tui::theme::Theme;

/// Visual intensity tier for a day's submission count.
/// Fixed thresholds: 0, 1-2, 3-5, 6-10, >10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl Intensity {
    pub fn for_count(count: u64) -> Self {
        match count {
            0 => Self::None,
            1..=2 => Self::Low,
            3..=5 => Self::Medium,
            6..=10 => Self::High,
            _ => Self::Max,
        }
    }
}

/// Cell is 2 block chars + 1 gap
const CELL_WIDTH: u16 = 3;
/// "Sun " prefix
const LABEL_WIDTH: u16 = 4;
/// Blank columns between month groups
const GROUP_GAP: u16 = 2;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Heatmap widget: one column group per month, one sub-column per week,
/// one cell per day, weekday labels on the left and a Less..More legend
/// below.
pub struct ActivityHeatmap<'a> {
    view: &'a [MonthGroup],
    theme: Theme,
}

impl<'a> ActivityHeatmap<'a> {
    pub fn new(view: &'a [MonthGroup], theme: Theme) -> Self {
        Self { view, theme }
    }

    /// Total width needed to render every month group
    pub fn full_width(view: &[MonthGroup]) -> u16 {
        let groups: u16 = view
            .iter()
            .map(|g| g.weeks.len() as u16 * CELL_WIDTH + GROUP_GAP)
            .sum();
        LABEL_WIDTH + groups.saturating_sub(GROUP_GAP)
    }

    fn render_weekday_labels(&self, area: Rect, buf: &mut Buffer) {
        for (row, label) in WEEKDAY_LABELS.iter().enumerate() {
            let y = area.y + 1 + row as u16;
            if y >= area.y + area.height {
                break;
            }
            buf.set_string(area.x, y, *label, Style::default().fg(self.theme.muted()));
        }
    }

    fn render_legend(&self, area: Rect, buf: &mut Buffer, y: u16) {
        if y >= area.y + area.height {
            return;
        }
        let mut x = area.x + LABEL_WIDTH;
        buf.set_string(x, y, "Less", Style::default().fg(self.theme.muted()));
        x += 5;
        let tiers = [
            Intensity::None,
            Intensity::Low,
            Intensity::Medium,
            Intensity::High,
            Intensity::Max,
        ];
        for tier in tiers {
            if x + 2 >= area.x + area.width {
                return;
            }
            let style = Style::default().fg(self.theme.heatmap_color(tier));
            buf.set_string(x, y, "██", style);
            x += CELL_WIDTH;
        }
        if x + 4 < area.x + area.width {
            buf.set_string(x, y, "More", Style::default().fg(self.theme.muted()));
        }
    }
}

impl Widget for ActivityHeatmap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= LABEL_WIDTH || area.height < 9 {
            return;
        }

        self.render_weekday_labels(area, buf);

        let max_x = area.x + area.width;
        let mut x = area.x + LABEL_WIDTH;

        for group in self.view {
            let group_width = group.weeks.len() as u16 * CELL_WIDTH;
            if x >= max_x {
                break;
            }

            // Month label above the group, clipped to the remaining width
            let label = format!("{} {}", group.label, group.year);
            let avail = (max_x - x) as usize;
            let clipped: String = label.chars().take(avail).collect();
            buf.set_string(x, area.y, &clipped, Style::default().fg(self.theme.date()));

            for (week_idx, week) in group.weeks.iter().enumerate() {
                let cell_x = x + week_idx as u16 * CELL_WIDTH;
                if cell_x + 2 > max_x {
                    break;
                }
                for (day_idx, cell) in week.iter().enumerate() {
                    let y = area.y + 1 + day_idx as u16;
                    if y >= area.y + area.height {
                        break;
                    }
                    if let DayCell::Filled { count, .. } = cell {
                        let intensity = Intensity::for_count(*count);
                        let style = Style::default().fg(self.theme.heatmap_color(intensity));
                        buf.set_string(cell_x, y, "██", style);
                    }
                }
            }

            x += group_width + GROUP_GAP;
        }

        self.render_legend(area, buf, area.y + 9);
    }
}
