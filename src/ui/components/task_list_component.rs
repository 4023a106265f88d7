use crate::constants::EMPTY_TASKS;
use crate::entities::Task;
use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
    pub palette: Palette,
    pub focused: bool,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
            palette: Palette::default(),
            focused: true,
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>, palette: Palette, icons: IconService) {
        self.tasks = tasks;
        self.palette = palette;
        self.icons = icons;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    pub fn next(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.tasks.len();
            self.update_list_state();
        }
    }

    pub fn previous(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.tasks.len() - 1
            } else {
                self.selected_index - 1
            };
            self.update_list_state();
        }
    }

    fn create_task_item(&self, task: &Task) -> ListItem<'static> {
        let palette = self.palette;
        let checkbox_style = if task.completed {
            Style::default().fg(palette.success)
        } else {
            palette.muted()
        };
        let title_style = if task.completed {
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(palette.text)
        };

        ListItem::new(Line::from(vec![
            Span::styled(self.icons.task_checkbox(task.completed), checkbox_style),
            Span::raw(" "),
            Span::styled(task.title.clone(), title_style),
        ]))
    }
}

impl Component for TaskListComponent {
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
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => self
                .selected_task()
                .map(|task| Action::ToggleTask(task.id.clone()))
                .unwrap_or(Action::None),
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_task()
                .map(|task| Action::DeleteTask(task.id.clone()))
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.palette;
        let done = self.tasks.iter().filter(|task| task.completed).count();
        let title = format!(" {} Tasks ({}/{}) ", self.icons.icons().ui.tasks_title, done, self.tasks.len());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(palette.border(self.focused))
            .style(palette.surface());

        if self.tasks.is_empty() {
            let hint = Paragraph::new(Line::from(Span::styled(EMPTY_TASKS, palette.muted()))).block(block);
            f.render_widget(hint, rect);
            return;
        }

        let items: Vec<ListItem> = self.tasks.iter().map(|task| self.create_task_item(task)).collect();
        let highlight = if self.focused {
            palette.selection()
        } else {
            Style::default()
        };

        let list = List::new(items).block(block).highlight_style(highlight).highlight_symbol("› ");
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
