//! Theme and color definitions for the terminal form
//!
//! Cyan borders, green for low risk, red for high risk, yellow focus.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the form
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color (cyan)
    pub border: Color,
    /// Title color
    pub title: Color,
    /// High risk color (red)
    pub high_risk: Color,
    /// Low risk color (green)
    pub low_risk: Color,
    /// Focused control / accent color (yellow)
    pub highlight: Color,
    /// Inactive/dim color
    pub inactive: Color,
    /// Normal text color
    pub text: Color,
    /// Error text color
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Cyan,
            title: Color::Cyan,
            high_risk: Color::Red,
            low_risk: Color::Green,
            highlight: Color::Yellow,
            inactive: Color::DarkGray,
            text: Color::White,
            error: Color::LightRed,
        }
    }
}

impl Theme {
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    /// Focused control row
    pub fn focus_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn inactive_style(&self) -> Style {
        Style::default().fg(self.inactive)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Style for a risk verdict (true = high risk)
    pub fn risk_style(&self, is_high: bool) -> Style {
        let color = if is_high { self.high_risk } else { self.low_risk };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);
