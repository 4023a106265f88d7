//! Constants used throughout the application
//!
//! This module centralizes storage keys, UI text, and other constant values
//! to improve maintainability and consistency.

// Storage keys, one per persisted slice
pub const STORAGE_KEY_DARK_MODE: &str = "darkMode";
pub const STORAGE_KEY_TASKS: &str = "tasks";
pub const STORAGE_KEY_NOTES: &str = "notes";

// Application identity
pub const APP_NAME: &str = "homedeck";
pub const APP_TITLE: &str = "Personal Dashboard";
pub const CONFIG_FILE_NAME: &str = "homedeck.toml";
pub const LOG_FILE_NAME: &str = "homedeck.log";

// Tab labels
pub const TAB_TASKS: &str = "Tasks";
pub const TAB_NOTES: &str = "Notes";

// Input placeholders
pub const PLACEHOLDER_TASK: &str = "Add a new task...";
pub const PLACEHOLDER_NOTE: &str = "Write a note...";

// Empty list hints
pub const EMPTY_TASKS: &str = "No tasks yet. Press 'i' to add one.";
pub const EMPTY_NOTES: &str = "No notes yet. Press 'i' to write one.";

// Status messages
pub const STATUS_TASK_ADDED: &str = "Task added";
pub const STATUS_TASK_DELETED: &str = "Task deleted";
pub const STATUS_NOTE_ADDED: &str = "Note added";
pub const STATUS_NOTE_DELETED: &str = "Note deleted";
pub const STATUS_SAVE_FAILED: &str = "Failed to save";

// Dialog titles
pub const DIALOG_TITLE_HELP: &str = " Help - Press 'Esc' or '?' to close ";
pub const DIALOG_TITLE_LOGS: &str = " Logs - Press 'Esc', 'G' or 'q' to close ";
pub const DIALOG_TITLE_WARNING: &str = " Storage warning ";

// UI messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Defaults and limits
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_TICK_RATE_MS: u64 = 100;
pub const TICK_RATE_MIN_MS: u64 = 10;
pub const TICK_RATE_MAX_MS: u64 = 1000;
/// Maximum number of log lines kept in memory for the log viewer
pub const LOG_BUFFER_CAPACITY: usize = 500;

// Widest the dashboard column grows on large terminals
pub const MAX_CONTENT_WIDTH: u16 = 100;
