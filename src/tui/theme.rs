//! Terminal theme detection and color definitions

use crate::tui::widgets::heatmap::Intensity;
use ratatui::style::Color;

/// Terminal color scheme (dark or light background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Auto-detect terminal theme from background luminance.
    /// Must be called **before** entering raw mode (ratatui::init).
    /// Falls back to Dark if detection fails.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Primary text color (headers, body text)
    pub fn text(self) -> Color {
        match self {
            Self::Dark => Color::White,
            Self::Light => Color::Black,
        }
    }

    /// Active/accent color (selected tabs, keybinding keys)
    pub fn accent(self) -> Color {
        match self {
            Self::Dark => Color::Cyan,
            Self::Light => Color::Indexed(25), // dark blue (ANSI 256)
        }
    }

    /// Secondary/muted text (separators, inactive tabs, hints)
    pub fn muted(self) -> Color {
        match self {
            Self::Dark => Color::DarkGray,
            Self::Light => Color::Gray,
        }
    }

    /// Date text color
    pub fn date(self) -> Color {
        match self {
            Self::Dark => Color::Yellow,
            Self::Light => Color::Indexed(130), // dark orange/yellow (ANSI 256)
        }
    }

    /// Bar/positive indicator color
    pub fn bar(self) -> Color {
        match self {
            Self::Dark => Color::Green,
            Self::Light => Color::Indexed(22), // dark green (ANSI 256)
        }
    }

    /// Error/negative indicator color
    pub fn error(self) -> Color {
        match self {
            Self::Dark => Color::Red,
            Self::Light => Color::Indexed(124), // dark red (ANSI 256)
        }
    }

    /// Easy-difficulty color
    pub fn easy(self) -> Color {
        match self {
            Self::Dark => Color::Green,
            Self::Light => Color::Indexed(22),
        }
    }

    /// Medium-difficulty color
    pub fn medium(self) -> Color {
        match self {
            Self::Dark => Color::Yellow,
            Self::Light => Color::Indexed(130),
        }
    }

    /// Hard-difficulty color
    pub fn hard(self) -> Color {
        match self {
            Self::Dark => Color::Red,
            Self::Light => Color::Indexed(124),
        }
    }

    /// Heatmap intensity color (GitHub-style green gradient, ANSI 256)
    pub fn heatmap_color(self, intensity: Intensity) -> Color {
        match self {
            Self::Dark => match intensity {
                Intensity::None => Color::Indexed(236),
                Intensity::Low => Color::Indexed(22),
                Intensity::Medium => Color::Indexed(28),
                Intensity::High => Color::Indexed(34),
                Intensity::Max => Color::Indexed(40),
            },
            Self::Light => match intensity {
                Intensity::None => Color::Indexed(254),
                Intensity::Low => Color::Indexed(194),
                Intensity::Medium => Color::Indexed(157),
                Intensity::High => Color::Indexed(71),
                Intensity::Max => Color::Indexed(28),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_colors() {
        let t = Theme::Dark;
        assert_eq!(t.text(), Color::White);
        assert_eq!(t.accent(), Color::Cyan);
        assert_eq!(t.muted(), Color::DarkGray);
        assert_eq!(t.date(), Color::Yellow);
        assert_eq!(t.bar(), Color::Green);
        assert_eq!(t.error(), Color::Red);
    }

    #[test]
    fn test_light_theme_colors() {
        let t = Theme::Light;
        assert_eq!(t.text(), Color::Black);
        assert_eq!(t.accent(), Color::Indexed(25));
        assert_eq!(t.muted(), Color::Gray);
        assert_eq!(t.hard(), Color::Indexed(124));
    }

    #[test]
    fn test_heatmap_gradient_distinct_per_tier() {
        let t = Theme::Dark;
        let colors = [
            t.heatmap_color(Intensity::None),
            t.heatmap_color(Intensity::Low),
            t.heatmap_color(Intensity::Medium),
            t.heatmap_color(Intensity::High),
            t.heatmap_color(Intensity::Max),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
