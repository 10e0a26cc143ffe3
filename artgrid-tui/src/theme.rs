//! Gallery theme and color utilities.

use crate::notifications::NotificationLevel;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct GalleryTheme {
    pub bg_highlight: Color,
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl GalleryTheme {
    pub fn gallery() -> Self {
        Self {
            bg_highlight: Color::Rgb(44, 44, 52),
            primary: Color::Rgb(0, 188, 212),
            secondary: Color::Rgb(240, 160, 70),
            success: Color::Rgb(90, 200, 120),
            warning: Color::Rgb(240, 200, 60),
            error: Color::Rgb(230, 70, 70),
            text: Color::Rgb(235, 235, 235),
            text_dim: Color::Rgb(140, 140, 140),
            border: Color::Rgb(70, 70, 80),
            border_focus: Color::Rgb(0, 188, 212),
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn cursor_style(&self) -> Style {
        Style::default().bg(self.bg_highlight).fg(self.text)
    }

    pub fn selected_style(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    pub fn loading_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }
}

impl Default for GalleryTheme {
    fn default() -> Self {
        Self::gallery()
    }
}

pub fn notification_color(level: NotificationLevel, theme: &GalleryTheme) -> Color {
    match level {
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}
