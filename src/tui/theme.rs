// Theme system for the TUI
//
// A handful of built-in palettes, chosen by name in config and cycled at
// runtime with `t`.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::Nord]
    }

    /// Resolve a config name (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Colors for every element the app draws
#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // Chrome
    pub border: Color,
    pub highlight: Color,
    pub title: Color,
    pub status_bar: Color,
    pub border_type: BorderType,

    // Cards
    pub card_background: Color,
    pub name: Color,
    pub indicator: Color,

    // Log levels in the status bar
    pub log_warn: Color,
    pub log_error: Color,
}

impl Theme {
    /// Theme for a config name, falling back to dark for unknown names
    pub fn by_name(name: &str) -> Self {
        match ThemeKind::parse(name) {
            Some(kind) => kind.theme(),
            None => {
                tracing::warn!("Unknown theme '{}', using Dark", name);
                Theme::dark()
            }
        }
    }

    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            highlight: Color::Yellow,
            title: Color::Cyan,
            status_bar: Color::Gray,
            border_type: BorderType::Rounded,
            card_background: Color::Reset,
            name: Color::LightCyan,
            indicator: Color::Yellow,
            log_warn: Color::Yellow,
            log_error: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            background: Color::White,
            foreground: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            highlight: Color::Blue,
            title: Color::Blue,
            status_bar: Color::DarkGray,
            border_type: BorderType::Rounded,
            card_background: Color::White,
            name: Color::Blue,
            indicator: Color::Magenta,
            log_warn: Color::Rgb(181, 118, 20),
            log_error: Color::Red,
        }
    }

    pub fn nord() -> Self {
        Self {
            kind: ThemeKind::Nord,
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            muted: Color::Rgb(89, 99, 119),
            border: Color::Rgb(129, 161, 193),
            highlight: Color::Rgb(235, 203, 139),
            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(216, 222, 233),
            border_type: BorderType::Rounded,
            card_background: Color::Rgb(59, 66, 82),
            name: Color::Rgb(136, 192, 208),
            indicator: Color::Rgb(235, 203, 139),
            log_warn: Color::Rgb(235, 203, 139),
            log_error: Color::Rgb(191, 97, 106),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ThemeKind::parse("nord"), Some(ThemeKind::Nord));
        assert_eq!(ThemeKind::parse(" LIGHT "), Some(ThemeKind::Light));
        assert_eq!(ThemeKind::parse("solarized"), None);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut kind = ThemeKind::Dark;
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::Dark);
        assert_eq!(ThemeKind::Light.next(), ThemeKind::Nord);
    }

    #[test]
    fn test_unknown_name_falls_back_to_dark() {
        assert_eq!(Theme::by_name("does-not-exist").kind, ThemeKind::Dark);
        assert_eq!(Theme::by_name("Nord").kind, ThemeKind::Nord);
    }
}
