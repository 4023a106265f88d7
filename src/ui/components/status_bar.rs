//! Status bar component

use crate::ui::core::{Focus, Tab};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Key hints for the current focus and tab
    #[must_use]
    pub fn hints(focus: Focus, tab: Tab) -> &'static str {
        match (focus, tab) {
            (Focus::Input, _) => "Enter: add • Esc: back to list • Tab: switch tab • Ctrl+U: clear",
            (Focus::List, Tab::Tasks) => {
                "i: new task • Space: toggle • d: delete • Tab: notes • t: theme • ?: help • q: quit"
            }
            (Focus::List, Tab::Notes) => "i: new note • d: delete • Tab: tasks • t: theme • ?: help • q: quit",
        }
    }

    /// Render the status bar; a transient message replaces the key hints
    pub fn render(f: &mut Frame, area: Rect, palette: &Palette, focus: Focus, tab: Tab, message: Option<&str>, is_error: bool) {
        let (text, color) = match message {
            Some(message) if is_error => (message, palette.danger),
            Some(message) => (message, palette.success),
            None => (Self::hints(focus, tab), palette.muted),
        };

        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).bg(palette.background));

        f.render_widget(status_bar, area);
    }
}
