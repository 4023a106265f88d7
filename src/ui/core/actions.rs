/// Which list the dashboard is showing. Not persisted: every session starts on tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Tasks,
    Notes,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Tasks, Tab::Notes];

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Tab::Tasks => Tab::Notes,
            Tab::Notes => Tab::Tasks,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Tab::Tasks => crate::constants::TAB_TASKS,
            Tab::Notes => crate::constants::TAB_NOTES,
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Tab::Tasks => 0,
            Tab::Notes => 1,
        }
    }
}

/// Where key presses go when no dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Input,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    SelectTab(Tab),
    NextTab,
    FocusInput,
    FocusList,

    // Task operations
    AddTask(String),
    ToggleTask(String),
    DeleteTask(String),

    // Note operations
    AddNote(String),
    DeleteNote(String),

    // Theme
    ToggleTheme,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    Help,
    Logs,
    StorageWarning(String),
}
