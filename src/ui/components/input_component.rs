//! Single-line text input used by the add-task and add-note forms.

use crate::ui::core::{Action, Component, Tab};
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

pub struct InputComponent {
    tab: Tab,
    buffer: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
    placeholder: &'static str,
    submit_icon: &'static str,
    focused: bool,
    palette: Palette,
}

impl InputComponent {
    pub fn new(tab: Tab, placeholder: &'static str) -> Self {
        Self {
            tab,
            buffer: String::new(),
            cursor: 0,
            placeholder,
            submit_icon: "+",
            focused: false,
            palette: Palette::default(),
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn update_style(&mut self, palette: Palette, submit_icon: &'static str) {
        self.palette = palette;
        self.submit_icon = submit_icon;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let index = self.byte_index(self.cursor);
        self.buffer.insert(index, c);
        self.cursor += 1;
    }

    pub fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let index = self.byte_index(self.cursor);
        self.buffer.remove(index);
    }

    pub fn delete_at_cursor(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let index = self.byte_index(self.cursor);
            self.buffer.remove(index);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
    }

    /// Display columns taken by the text before the cursor
    pub fn cursor_column(&self) -> usize {
        self.buffer.chars().take(self.cursor).map(|c| c.width().unwrap_or(0)).sum()
    }

    /// Horizontal scroll and cursor column for a box `width` columns wide.
    ///
    /// The text scrolls only as far as needed to keep the cursor on screen.
    fn viewport(&self, width: usize) -> (usize, usize) {
        let cursor_column = self.cursor_column();
        let scroll = cursor_column.saturating_sub(width.saturating_sub(1));
        (scroll, cursor_column)
    }

    fn submit_action(&self) -> Action {
        match self.tab {
            Tab::Tasks => Action::AddTask(self.buffer.clone()),
            Tab::Notes => Action::AddNote(self.buffer.clone()),
        }
    }
}

impl Component for InputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.submit_action(),
            KeyCode::Esc => Action::FocusList,
            KeyCode::Tab | KeyCode::BackTab => Action::NextTab,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                Action::None
            }
            KeyCode::Char(c) if !c.is_control() => {
                self.insert_char(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.delete_before_cursor();
                Action::None
            }
            KeyCode::Delete => {
                self.delete_at_cursor();
                Action::None
            }
            KeyCode::Left => {
                self.move_left();
                Action::None
            }
            KeyCode::Right => {
                self.move_right();
                Action::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor = self.buffer.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.palette;
        let title = format!(" {} Add ", self.submit_icon);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(palette.border(self.focused))
            .style(palette.surface());

        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(self.placeholder, palette.muted()))
        } else {
            Line::from(Span::styled(self.buffer.as_str(), Style::default().fg(palette.text)))
        };

        let inner = block.inner(rect);
        let (scroll, cursor_column) = self.viewport(inner.width as usize);
        let paragraph = Paragraph::new(line)
            .block(block)
            .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)));
        f.render_widget(paragraph, rect);

        if self.focused && inner.width > 0 {
            let offset = u16::try_from(cursor_column - scroll).unwrap_or(u16::MAX);
            f.set_cursor_position(Position::new(inner.x + offset, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with(text: &str) -> InputComponent {
        let mut input = InputComponent::new(Tab::Tasks, "");
        for c in text.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn test_cursor_column_counts_display_width() {
        let input = input_with("日本a");
        assert_eq!(input.cursor_column(), 5);
    }

    #[test]
    fn test_editing_multibyte_text() {
        let mut input = input_with("héllo");
        input.move_left();
        input.move_left();
        input.delete_before_cursor();
        assert_eq!(input.value(), "hélo");
        input.delete_at_cursor();
        assert_eq!(input.value(), "héo");
    }

    #[test]
    fn test_viewport_follows_cursor() {
        let input = input_with(&"a".repeat(30));
        assert_eq!(input.viewport(40), (0, 30));
        assert_eq!(input.viewport(10), (21, 30));
    }

    #[test]
    fn test_viewport_scrolls_back_with_cursor() {
        let mut input = input_with(&"a".repeat(30));
        for _ in 0..30 {
            input.move_left();
        }
        assert_eq!(input.viewport(10), (0, 0));
    }
}
