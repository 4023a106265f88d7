//! Light and dark color palettes.
//!
//! The theme flag picks one palette for the whole frame; every component
//! styles itself from the palette it was handed, so flipping the flag
//! recolors the entire tree on the next draw.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dark: bool,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub accent_text: Color,
    pub inactive_tab: Color,
    pub inactive_tab_text: Color,
    pub success: Color,
    pub danger: Color,
    pub theme_icon: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        dark: false,
        background: Color::Rgb(249, 250, 251),
        surface: Color::Rgb(255, 255, 255),
        text: Color::Rgb(17, 24, 39),
        muted: Color::Rgb(107, 114, 128),
        border: Color::Rgb(209, 213, 219),
        accent: Color::Rgb(59, 130, 246),
        accent_text: Color::Rgb(255, 255, 255),
        inactive_tab: Color::Rgb(229, 231, 235),
        inactive_tab_text: Color::Rgb(55, 65, 81),
        success: Color::Rgb(34, 197, 94),
        danger: Color::Rgb(239, 68, 68),
        theme_icon: Color::Rgb(75, 85, 99),
    };

    pub const DARK: Palette = Palette {
        dark: true,
        background: Color::Rgb(17, 24, 39),
        surface: Color::Rgb(31, 41, 55),
        text: Color::Rgb(255, 255, 255),
        muted: Color::Rgb(156, 163, 175),
        border: Color::Rgb(75, 85, 99),
        accent: Color::Rgb(59, 130, 246),
        accent_text: Color::Rgb(255, 255, 255),
        inactive_tab: Color::Rgb(55, 65, 81),
        inactive_tab_text: Color::Rgb(229, 231, 235),
        success: Color::Rgb(34, 197, 94),
        danger: Color::Rgb(239, 68, 68),
        theme_icon: Color::Rgb(250, 204, 21),
    };

    #[must_use]
    pub fn for_theme(dark_mode: bool) -> Self {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    /// Base style for the root of the frame
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    #[must_use]
    pub fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    #[must_use]
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> Style {
        Style::default()
            .fg(self.accent_text)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn inactive_tab(&self) -> Style {
        Style::default().fg(self.inactive_tab_text).bg(self.inactive_tab)
    }

    #[must_use]
    pub fn selection(&self) -> Style {
        Style::default().bg(self.border).add_modifier(Modifier::BOLD)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::LIGHT
    }
}
