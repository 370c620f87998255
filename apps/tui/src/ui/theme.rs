use ratatui::style::Color;

use crate::domain::Metric;

/// Palette derived from the persisted dark-mode flag. Every widget draws
/// through this so the toggle restyles the whole dashboard at once.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub dark: bool,
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub border: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

impl Theme {
    pub const fn new(dark: bool) -> Self {
        if dark {
            Self {
                dark,
                bg: Color::Rgb(31, 31, 31),
                fg: Color::White,
                dim: Color::DarkGray,
                border: Color::DarkGray,
                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,
            }
        } else {
            Self {
                dark,
                bg: Color::Reset,
                fg: Color::Black,
                dim: Color::Gray,
                border: Color::Gray,
                highlight_fg: Color::White,
                highlight_bg: Color::Blue,
            }
        }
    }

    /// Card and map color for a metric, matching the original dashboard's
    /// card palette.
    pub const fn metric_color(&self, metric: Metric) -> Color {
        match metric {
            Metric::Active => {
                if self.dark {
                    Color::Cyan
                } else {
                    Color::Blue
                }
            }
            Metric::Confirmed => Color::Red,
            Metric::Recovered => Color::Green,
            Metric::Deaths => {
                if self.dark {
                    Color::Gray
                } else {
                    Color::DarkGray
                }
            }
        }
    }
}
