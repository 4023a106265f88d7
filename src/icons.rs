//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to pick the glyphs drawn by the
//! dashboard, with emoji, Unicode, and ASCII variants.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Task checkbox icons
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub tasks_title: &'static str,
    pub notes_title: &'static str,
    pub add_task: &'static str,
    pub add_note: &'static str,
    pub warning: &'static str,
}

/// Theme toggle indicators: the icon shown is the mode you would switch to
#[derive(Debug, Clone)]
pub struct ThemeIcons {
    pub light: &'static str,
    pub dark: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub ui: UiIcons,
    pub theme: ThemeIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "🔳",
                completed: "✅",
            },
            ui: UiIcons {
                tasks_title: "📝",
                notes_title: "🗒️",
                add_task: "➕",
                add_note: "✏️",
                warning: "⚠️",
            },
            theme: ThemeIcons {
                light: "🌙",
                dark: "☀️",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "□",
                completed: "✓",
            },
            ui: UiIcons {
                tasks_title: "▶",
                notes_title: "✎",
                add_task: "+",
                add_note: "✎",
                warning: "⚠",
            },
            theme: ThemeIcons {
                light: "☾",
                dark: "☀",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "[ ]",
                completed: "[X]",
            },
            ui: UiIcons {
                tasks_title: ">",
                notes_title: "#",
                add_task: "+",
                add_note: "+",
                warning: "!",
            },
            theme: ThemeIcons {
                light: "(dark)",
                dark: "(light)",
            },
        }
    }

    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().task_status.pending
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        self.icons().task_status.completed
    }

    #[must_use]
    pub fn task_checkbox(&self, completed: bool) -> &'static str {
        if completed {
            self.task_completed()
        } else {
            self.task_pending()
        }
    }

    /// Indicator for the theme toggle in the header
    #[must_use]
    pub fn theme_toggle(&self, dark_mode: bool) -> &'static str {
        let icons = self.icons().theme;
        if dark_mode {
            icons.dark
        } else {
            icons.light
        }
    }
}
