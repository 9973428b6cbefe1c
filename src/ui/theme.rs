use ratatui::style::Color;

use crate::types::SegmentStatus;

/// Unified color theme for the application
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Completed segments, time under plan
    pub fn success() -> Color {
        Color::Green
    }

    /// Running segment
    pub fn active() -> Color {
        Color::LightGreen
    }

    /// Completed flash, time over plan
    pub fn warn() -> Color {
        Color::LightRed
    }

    /// Paused segment
    pub fn paused() -> Color {
        Color::Yellow
    }

    /// Current segment in timeline and editor selection
    pub fn highlight() -> Color {
        Color::LightBlue
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Accent for headings
    pub fn accent() -> Color {
        Color::LightCyan
    }

    pub fn status(status: SegmentStatus) -> Color {
        match status {
            SegmentStatus::Running => Self::active(),
            SegmentStatus::Paused => Self::paused(),
            SegmentStatus::Completed => Self::warn(),
        }
    }
}
