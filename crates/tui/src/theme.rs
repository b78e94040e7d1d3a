// crates/tui/src/theme.rs
//! Theme system for customizable colors

use crate::view::StatusClass;
use ratatui::style::{Color, Modifier, Style};
use shelfmark_config::ThemeName;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    /// Default dark theme
    #[default]
    Dark,
    /// Light theme
    Light,
    /// High contrast theme
    HighContrast,
    /// Nord theme
    Nord,
}

impl ThemeType {
    /// Returns the theme name
    pub fn name(&self) -> &str {
        match self {
            ThemeType::Dark => "Dark",
            ThemeType::Light => "Light",
            ThemeType::HighContrast => "High Contrast",
            ThemeType::Nord => "Nord",
        }
    }

    /// Returns the theme that follows this one when cycling
    pub fn next(&self) -> ThemeType {
        match self {
            ThemeType::Dark => ThemeType::Light,
            ThemeType::Light => ThemeType::HighContrast,
            ThemeType::HighContrast => ThemeType::Nord,
            ThemeType::Nord => ThemeType::Dark,
        }
    }
}

impl From<ThemeName> for ThemeType {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => ThemeType::Dark,
            ThemeName::Light => ThemeType::Light,
            ThemeName::HighContrast => ThemeType::HighContrast,
            ThemeName::Nord => ThemeType::Nord,
        }
    }
}

/// Color theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,
    /// Primary text color
    pub text: Color,
    /// Secondary text color
    pub text_secondary: Color,
    /// Highlight/selection color
    pub highlight: Color,
    /// Accent color
    pub accent: Color,
    /// Status color for books that have been read
    pub read: Color,
    /// Status color for books not read yet
    pub unread: Color,
    /// Error color
    pub error: Color,
    /// Border color
    pub border: Color,
}

impl Theme {
    /// Creates a new theme
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::HighContrast => Self::high_contrast(),
            ThemeType::Nord => Self::nord(),
        }
    }

    fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            text: Color::White,
            text_secondary: Color::Gray,
            highlight: Color::Yellow,
            accent: Color::Cyan,
            read: Color::Green,
            unread: Color::Yellow,
            error: Color::Red,
            border: Color::Gray,
        }
    }

    fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            text: Color::Black,
            text_secondary: Color::DarkGray,
            highlight: Color::Blue,
            accent: Color::Magenta,
            read: Color::Green,
            unread: Color::Rgb(176, 112, 0),
            error: Color::Red,
            border: Color::DarkGray,
        }
    }

    fn high_contrast() -> Self {
        Self {
            theme_type: ThemeType::HighContrast,
            text: Color::White,
            text_secondary: Color::LightYellow,
            highlight: Color::LightYellow,
            accent: Color::LightCyan,
            read: Color::LightGreen,
            unread: Color::LightRed,
            error: Color::LightRed,
            border: Color::White,
        }
    }

    fn nord() -> Self {
        Self {
            theme_type: ThemeType::Nord,
            text: Color::Rgb(216, 222, 233),           // nord4
            text_secondary: Color::Rgb(143, 157, 179), // nord3
            highlight: Color::Rgb(136, 192, 208),      // nord8
            accent: Color::Rgb(129, 161, 193),         // nord9
            read: Color::Rgb(163, 190, 140),           // nord14
            unread: Color::Rgb(235, 203, 139),         // nord13
            error: Color::Rgb(191, 97, 106),           // nord11
            border: Color::Rgb(76, 86, 106),           // nord3
        }
    }

    /// Returns base text style
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Returns secondary text style
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Returns highlighted style
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Returns accent style
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Returns error style
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for a read/unread status label
    pub fn status_style(&self, status: StatusClass) -> Style {
        match status {
            StatusClass::Read => Style::default().fg(self.read),
            StatusClass::Unread => Style::default().fg(self.unread),
        }
    }

    /// Returns border color
    pub fn border_color(&self) -> Color {
        self.border
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeType::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::new(ThemeType::Dark);
        assert_eq!(theme.theme_type, ThemeType::Dark);
    }

    #[test]
    fn test_cycle_visits_every_theme() {
        let mut theme = ThemeType::Dark;
        let mut seen = vec![theme];
        for _ in 0..3 {
            theme = theme.next();
            seen.push(theme);
        }
        assert_eq!(theme.next(), ThemeType::Dark);
        assert_eq!(
            seen,
            vec![ThemeType::Dark, ThemeType::Light, ThemeType::HighContrast, ThemeType::Nord]
        );
    }

    #[test]
    fn test_from_config_name() {
        for name in ThemeName::ALL {
            let theme = Theme::new(name.into());
            assert_eq!(theme.theme_type, ThemeType::from(name));
        }
    }

    #[test]
    fn test_status_styles_differ() {
        for name in ThemeName::ALL {
            let theme = Theme::new(name.into());
            assert_ne!(
                theme.status_style(StatusClass::Read),
                theme.status_style(StatusClass::Unread),
                "{}",
                theme.theme_type.name()
            );
        }
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(ThemeType::Dark.name(), "Dark");
        assert_eq!(ThemeType::HighContrast.name(), "High Contrast");
    }
}
