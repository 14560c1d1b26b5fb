//! Light and dark display modes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display mode of the terminal front end.
///
/// The theme belongs to the presentation layer; it never touches game state.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Dark background, light text.
    #[default]
    Dark,
    /// Light background, dark text.
    Light,
}

impl Theme {
    /// Switches to the other theme.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Colors used to render this theme.
    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                background: Color::Black,
                foreground: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                status: Color::Yellow,
                x_mark: Color::LightBlue,
                o_mark: Color::LightRed,
                cursor_bg: Color::White,
                cursor_fg: Color::Black,
                winning_bg: Color::Green,
                winning_fg: Color::Black,
            },
            Self::Light => Palette {
                background: Color::White,
                foreground: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                status: Color::Magenta,
                x_mark: Color::Blue,
                o_mark: Color::Red,
                cursor_bg: Color::Black,
                cursor_fg: Color::White,
                winning_bg: Color::LightGreen,
                winning_fg: Color::Black,
            },
        }
    }
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Default text.
    pub foreground: Color,
    /// Borders, separators, empty squares.
    pub muted: Color,
    /// Title and panel headings.
    pub accent: Color,
    /// Status line text.
    pub status: Color,
    /// X marks.
    pub x_mark: Color,
    /// O marks.
    pub o_mark: Color,
    /// Cursor cell background.
    pub cursor_bg: Color,
    /// Cursor cell foreground.
    pub cursor_fg: Color,
    /// Winning line background.
    pub winning_bg: Color,
    /// Winning line foreground.
    pub winning_fg: Color,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_names() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::from_str("dark").ok(), Some(Theme::Dark));
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Dark.palette(), Theme::Light.palette());
        assert_eq!(Theme::Dark.palette().background, Color::Black);
    }
}
