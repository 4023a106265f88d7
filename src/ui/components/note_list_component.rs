use crate::constants::{DEFAULT_TIMESTAMP_FORMAT, EMPTY_NOTES};
use crate::entities::Note;
use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crate::ui::theme::Palette;
use crate::utils::datetime::format_timestamp;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Newest-first list of notes, each shown with its creation time
pub struct NoteListComponent {
    pub notes: Vec<Note>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
    pub palette: Palette,
    pub timestamp_format: String,
    pub focused: bool,
}

impl Default for NoteListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteListComponent {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
            palette: Palette::default(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            focused: true,
        }
    }

    pub fn set_timestamp_format(&mut self, format: impl Into<String>) {
        self.timestamp_format = format.into();
    }

    pub fn update_data(&mut self, notes: Vec<Note>, palette: Palette, icons: IconService) {
        self.notes = notes;
        self.palette = palette;
        self.icons = icons;
        if self.notes.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            self.selected_index = self.selected_index.min(self.notes.len() - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.notes.get(self.selected_index)
    }

    pub fn next(&mut self) {
        if !self.notes.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.notes.len();
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn previous(&mut self) {
        if !self.notes.is_empty() {
            self.selected_index = self.selected_index.checked_sub(1).unwrap_or(self.notes.len() - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn create_note_item(&self, note: &Note) -> ListItem<'static> {
        let palette = self.palette;
        let mut lines: Vec<Line> = note
            .content
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(palette.text))))
            .collect();
        lines.push(Line::from(Span::styled(
            format_timestamp(&note.timestamp, &self.timestamp_format),
            palette.muted(),
        )));
        // Blank spacer between notes
        lines.push(Line::default());
        ListItem::new(lines)
    }
}

impl Component for NoteListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                Action::None
            }
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_note()
                .map(|note| Action::DeleteNote(note.id.clone()))
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.palette;
        let title = format!(" {} Notes ({}) ", self.icons.icons().ui.notes_title, self.notes.len());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(palette.border(self.focused))
            .style(palette.surface());

        if self.notes.is_empty() {
            let hint = Paragraph::new(Line::from(Span::styled(EMPTY_NOTES, palette.muted()))).block(block);
            f.render_widget(hint, rect);
            return;
        }

        let items: Vec<ListItem> = self.notes.iter().map(|note| self.create_note_item(note)).collect();
        let highlight = if self.focused {
            palette.selection()
        } else {
            Style::default()
        };

        let list = List::new(items).block(block).highlight_style(highlight).highlight_symbol("› ");
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
