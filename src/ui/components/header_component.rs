//! Title bar with the theme toggle, and the tab selector below it.

use crate::constants::APP_TITLE;
use crate::icons::IconService;
use crate::ui::core::{Action, Component, Tab};
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub struct HeaderComponent {
    pub active_tab: Tab,
    pub dark_mode: bool,
    pub palette: Palette,
    pub icons: IconService,
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderComponent {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::default(),
            dark_mode: false,
            palette: Palette::default(),
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, active_tab: Tab, dark_mode: bool, icons: IconService) {
        self.active_tab = active_tab;
        self.dark_mode = dark_mode;
        self.palette = Palette::for_theme(dark_mode);
        self.icons = icons;
    }

    fn render_title(&self, f: &mut Frame, rect: Rect) {
        let palette = self.palette;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let toggle = format!("{} [t]", self.icons.theme_toggle(self.dark_mode));
        let toggle_width = u16::try_from(toggle.chars().count() + 1).unwrap_or(u16::MAX);
        let columns = Layout::horizontal([Constraint::Min(0), Constraint::Length(toggle_width)]).split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )));
        let toggle = Paragraph::new(Line::from(Span::styled(toggle, Style::default().fg(palette.theme_icon))))
            .alignment(Alignment::Right);

        f.render_widget(title, columns[0]);
        f.render_widget(toggle, columns[1]);
    }

    /// Render the tab selector into its own row
    pub fn render_tabs(&self, f: &mut Frame, rect: Rect) {
        let palette = self.palette;
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                let style = if *tab == self.active_tab {
                    palette.active_tab()
                } else {
                    palette.inactive_tab()
                };
                Line::from(Span::styled(format!(" {} {} ", i + 1, tab.title()), style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.active_tab.index())
            .divider(" ")
            .padding("", "")
            .highlight_style(Style::default());
        f.render_widget(tabs, rect);
    }
}

impl Component for HeaderComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('1') => Action::SelectTab(Tab::Tasks),
            KeyCode::Char('2') => Action::SelectTab(Tab::Notes),
            KeyCode::Tab | KeyCode::BackTab => Action::NextTab,
            _ => Action::None,
        }
    }

    /// Render the title row; the tab row is drawn by [`HeaderComponent::render_tabs`]
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.render_title(f, rect);
    }
}
