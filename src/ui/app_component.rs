use crate::config::DisplayConfig;
use crate::constants::{
    MAX_CONTENT_WIDTH, PLACEHOLDER_NOTE, PLACEHOLDER_TASK, STATUS_NOTE_ADDED, STATUS_NOTE_DELETED, STATUS_SAVE_FAILED,
    STATUS_TASK_ADDED, STATUS_TASK_DELETED,
};
use crate::icons::IconService;
use crate::logger::LogBuffer;
use crate::store::{Commit, DashboardStore};
use crate::ui::components::{
    DialogComponent, HeaderComponent, InputComponent, NoteListComponent, StatusBar, TaskListComponent,
};
use crate::ui::core::{Action, Component, DialogType, EventType, Focus, Tab};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, widgets::Block, Frame};

/// Transient feedback shown in place of the key hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

pub struct AppComponent {
    // Component composition
    header: HeaderComponent,
    task_input: InputComponent,
    note_input: InputComponent,
    task_list: TaskListComponent,
    note_list: NoteListComponent,
    dialog: DialogComponent,

    // Application state
    store: DashboardStore,
    active_tab: Tab,
    focus: Focus,
    status: Option<StatusMessage>,
    icons: IconService,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(store: DashboardStore, display: &DisplayConfig, log_buffer: LogBuffer) -> Self {
        let mut note_list = NoteListComponent::new();
        note_list.set_timestamp_format(display.timestamp_format.clone());

        let mut app = Self {
            header: HeaderComponent::new(),
            task_input: InputComponent::new(Tab::Tasks, PLACEHOLDER_TASK),
            note_input: InputComponent::new(Tab::Notes, PLACEHOLDER_NOTE),
            task_list: TaskListComponent::new(),
            note_list,
            dialog: DialogComponent::new(log_buffer),
            store,
            active_tab: Tab::default(),
            focus: Focus::default(),
            status: None,
            icons: IconService::new(display.icon_theme),
            should_quit: false,
        };

        let warnings: Vec<String> = app.store.load_warnings().iter().map(ToString::to_string).collect();
        if !warnings.is_empty() {
            app.dispatch(Action::ShowDialog(DialogType::StorageWarning(warnings.join("\n"))));
        }

        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &DashboardStore {
        &self.store
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Current contents of the input line for `tab`
    pub fn input_value(&self, tab: Tab) -> &str {
        match tab {
            Tab::Tasks => self.task_input.value(),
            Tab::Notes => self.note_input.value(),
        }
    }

    fn palette(&self) -> Palette {
        Palette::for_theme(self.store.dark_mode())
    }

    /// Push the committed state into every component before the next draw
    fn sync_component_data(&mut self) {
        let palette = self.palette();
        let icons = self.icons.clone();
        let ui_icons = icons.icons().ui;

        self.header
            .update_data(self.active_tab, self.store.dark_mode(), icons.clone());

        self.task_list
            .update_data(self.store.tasks().to_vec(), palette, icons.clone());
        self.task_list.focused = self.focus == Focus::List;

        self.note_list
            .update_data(self.store.notes().to_vec(), palette, icons.clone());
        self.note_list.focused = self.focus == Focus::List;

        self.task_input.update_style(palette, ui_icons.add_task);
        self.task_input
            .set_focused(self.focus == Focus::Input && self.active_tab == Tab::Tasks);
        self.note_input.update_style(palette, ui_icons.add_note);
        self.note_input
            .set_focused(self.focus == Focus::Input && self.active_tab == Tab::Notes);

        self.dialog.update_style(palette, icons);
    }

    /// Keys not claimed by the focused component
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                log::debug!("Global key: quit");
                Action::Quit
            }
            KeyCode::Char('i') | KeyCode::Char('a') => Action::FocusInput,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.focus == Focus::Input {
            return match self.active_tab {
                Tab::Tasks => self.task_input.handle_key_events(key),
                Tab::Notes => self.note_input.handle_key_events(key),
            };
        }

        let list_action = match self.active_tab {
            Tab::Tasks => self.task_list.handle_key_events(key),
            Tab::Notes => self.note_list.handle_key_events(key),
        };
        if list_action != Action::None {
            return list_action;
        }

        let header_action = self.header.handle_key_events(key);
        if header_action != Action::None {
            return header_action;
        }

        self.handle_global_key(key)
    }

    /// Process a terminal event and apply whatever action it produced
    pub fn handle_event(&mut self, event: EventType) {
        match event {
            EventType::Key(key) => {
                self.status = None;
                let action = self.route_key(key);
                self.dispatch(action);
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => {}
        }
    }

    /// Apply an action to the component tree and the store
    pub fn dispatch(&mut self, action: Action) {
        let action = self.dialog.update(action);
        self.handle_app_action(action);
        self.sync_component_data();
    }

    fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::SelectTab(tab) => {
                log::debug!("Navigation: tab {:?}", tab);
                self.active_tab = tab;
            }
            Action::NextTab => {
                self.active_tab = self.active_tab.next();
                log::debug!("Navigation: tab {:?}", self.active_tab);
            }
            Action::FocusInput => {
                self.focus = Focus::Input;
            }
            Action::FocusList => {
                self.focus = Focus::List;
            }
            Action::ToggleTheme => {
                let commit = self.store.toggle_theme();
                self.report(commit, None);
            }
            Action::AddTask(title) => {
                let commit = self.store.add_task(&title);
                if commit.changed() {
                    self.task_input.clear();
                }
                self.report(commit, Some(STATUS_TASK_ADDED));
            }
            Action::ToggleTask(id) => {
                let commit = self.store.toggle_task(&id);
                self.report(commit, None);
            }
            Action::DeleteTask(id) => {
                let commit = self.store.delete_task(&id);
                self.report(commit, Some(STATUS_TASK_DELETED));
            }
            Action::AddNote(content) => {
                let commit = self.store.add_note(&content);
                if commit.changed() {
                    self.note_input.clear();
                }
                self.report(commit, Some(STATUS_NOTE_ADDED));
            }
            Action::DeleteNote(id) => {
                let commit = self.store.delete_note(&id);
                self.report(commit, Some(STATUS_NOTE_DELETED));
            }
            Action::ShowDialog(_) | Action::HideDialog | Action::None => {}
        }
    }

    fn report(&mut self, commit: Commit, success: Option<&str>) {
        self.status = match commit {
            Commit::Unchanged => None,
            Commit::Saved => success.map(|text| StatusMessage {
                text: text.to_string(),
                is_error: false,
            }),
            Commit::SaveFailed(e) => Some(StatusMessage {
                text: format!("{}: {}", STATUS_SAVE_FAILED, e),
                is_error: true,
            }),
        };
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.dispatch(action);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.palette();

        // The theme colors the whole frame, not just the widgets
        f.render_widget(Block::default().style(palette.base()), rect);

        let width = rect.width.min(MAX_CONTENT_WIDTH);
        let content = Rect::new(rect.x + (rect.width - width) / 2, rect.y, width, rect.height);
        let areas = LayoutManager::dashboard_layout(content);

        self.header.render(f, areas.header);
        self.header.render_tabs(f, areas.tabs);

        match self.active_tab {
            Tab::Tasks => {
                self.task_input.render(f, areas.input);
                self.task_list.render(f, areas.list);
            }
            Tab::Notes => {
                self.note_input.render(f, areas.input);
                self.note_list.render(f, areas.list);
            }
        }

        let (message, is_error) = match &self.status {
            Some(status) => (Some(status.text.as_str()), status.is_error),
            None => (None, false),
        };
        StatusBar::render(f, areas.status, &palette, self.focus, self.active_tab, message, is_error);

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
