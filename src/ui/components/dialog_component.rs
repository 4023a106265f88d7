//! Modal dialog component.
//!
//! Hosts the overlays drawn on top of the dashboard: the help panel, the
//! log viewer, and the storage warning shown when a persisted slice had to
//! be reset at startup. While a dialog is visible it receives every key.

use crate::icons::IconService;
use crate::logger::LogBuffer;
use crate::ui::components::dialogs::{scroll_behavior, system_dialogs};
use crate::ui::core::{Action, Component, DialogType};
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    pub palette: Palette,
    pub icons: IconService,
    log_buffer: LogBuffer,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new(LogBuffer::new())
    }
}

impl DialogComponent {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            palette: Palette::default(),
            icons: IconService::default(),
            log_buffer,
        }
    }

    pub fn update_style(&mut self, palette: Palette, icons: IconService) {
        self.palette = palette;
        self.icons = icons;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn open(&mut self, dialog_type: DialogType) {
        self.dialog_type = Some(dialog_type);
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn close(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        match (dialog_type, key.code) {
            (_, KeyCode::Esc) => Action::HideDialog,
            (DialogType::Help, KeyCode::Char('?')) => Action::HideDialog,
            (DialogType::Logs, KeyCode::Char('G') | KeyCode::Char('q')) => Action::HideDialog,
            (DialogType::StorageWarning(_), KeyCode::Enter | KeyCode::Char(' ')) => Action::HideDialog,
            (_, KeyCode::Up | KeyCode::Char('k')) => {
                scroll_behavior::scroll_up(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            (_, KeyCode::Down | KeyCode::Char('j')) => {
                scroll_behavior::scroll_down(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            (_, KeyCode::PageUp) => {
                scroll_behavior::page_up(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            (_, KeyCode::PageDown) => {
                scroll_behavior::page_down(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            (_, KeyCode::Home) => {
                scroll_behavior::scroll_to_top(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            (_, KeyCode::End) => {
                scroll_behavior::scroll_to_bottom(&mut self.scroll_offset, &mut self.scrollbar_state);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.open(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.close();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.palette;
        match &self.dialog_type {
            Some(DialogType::Help) => {
                system_dialogs::render_help_dialog(f, rect, &palette, &mut self.scroll_offset, &mut self.scrollbar_state)
            }
            Some(DialogType::Logs) => {
                let logs = self.log_buffer.get_logs();
                system_dialogs::render_logs_dialog(f, rect, &palette, &logs, &mut self.scroll_offset, &mut self.scrollbar_state)
            }
            Some(DialogType::StorageWarning(message)) => system_dialogs::render_warning_dialog(
                f,
                rect,
                &palette,
                self.icons.icons().ui.warning,
                message,
                &mut self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            None => {}
        }
    }
}
