//! Visual themes.
//!
//! The theme preference is persisted in a `theme` cookie and read on every
//! request; each theme maps to a fixed set of class tokens that templates
//! apply uniformly.

use serde::{Deserialize, Serialize};

/// The three supported themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    EyeCare,
}

/// Class tokens for a theme, applied across all templates.
#[derive(Debug, Clone, Copy)]
pub struct ThemeTokens {
    pub background: &'static str,
    pub sidebar: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub card: &'static str,
    pub hover: &'static str,
    pub active_link: &'static str,
}

impl Theme {
    /// Parse a stored theme name; anything unknown reads as light.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::Dark,
            "eyeCare" => Self::EyeCare,
            _ => Self::Light,
        }
    }

    /// The persisted name of this theme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::EyeCare => "eyeCare",
        }
    }

    /// Human-readable label for the settings picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::EyeCare => "Eye Care",
        }
    }

    /// The class tokens for this theme.
    #[must_use]
    pub const fn tokens(self) -> ThemeTokens {
        match self {
            Self::Light => ThemeTokens {
                background: "bg-gray-50",
                sidebar: "bg-white",
                text: "text-gray-800",
                border: "border-gray-200",
                card: "bg-white",
                hover: "hover:bg-gray-100",
                active_link: "bg-indigo-500 text-white",
            },
            Self::Dark => ThemeTokens {
                background: "bg-gray-900",
                sidebar: "bg-gray-900",
                text: "text-gray-100",
                border: "border-gray-800",
                card: "bg-gray-800",
                hover: "hover:bg-gray-800",
                active_link: "bg-indigo-600 text-white",
            },
            Self::EyeCare => ThemeTokens {
                background: "bg-[#F5E6D3]",
                sidebar: "bg-[#F5E6C8]",
                text: "text-[#433422]",
                border: "border-[#E6D5B8]",
                card: "bg-[#E6D5BC]",
                hover: "hover:bg-[#D4C3AA]",
                active_link: "bg-[#A89078] text-white",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips() {
        for theme in [Theme::Light, Theme::Dark, Theme::EyeCare] {
            assert_eq!(Theme::from_name(theme.name()), theme);
        }
    }

    #[test]
    fn test_unknown_name_defaults_to_light() {
        assert_eq!(Theme::from_name("solarized"), Theme::Light);
        assert_eq!(Theme::from_name(""), Theme::Light);
    }
}
