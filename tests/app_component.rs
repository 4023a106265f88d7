use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use homedeck::config::DisplayConfig;
use homedeck::logger::LogBuffer;
use homedeck::storage::{KeyValueStore, MemoryStore, StorageError};
use homedeck::store::DashboardStore;
use homedeck::ui::core::{EventType, Focus, Tab};
use homedeck::ui::AppComponent;
use std::path::PathBuf;

fn app_with(backend: Box<dyn KeyValueStore>) -> AppComponent {
    AppComponent::new(DashboardStore::load(backend), &DisplayConfig::default(), LogBuffer::new())
}

fn new_app() -> AppComponent {
    app_with(Box::new(MemoryStore::new()))
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            path: PathBuf::from("/read-only"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

#[test]
fn test_initial_state() {
    let app = new_app();
    assert_eq!(app.active_tab(), Tab::Tasks);
    assert_eq!(app.focus(), Focus::List);
    assert!(!app.should_quit());
    assert!(!app.is_dialog_visible());
}

#[test]
fn test_add_task_through_input() {
    let mut app = new_app();

    press(&mut app, KeyCode::Char('i'));
    assert_eq!(app.focus(), Focus::Input);

    type_text(&mut app, "Buy milk");
    assert_eq!(app.input_value(Tab::Tasks), "Buy milk");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store().tasks().len(), 1);
    assert_eq!(app.store().tasks()[0].title, "Buy milk");
    assert_eq!(app.input_value(Tab::Tasks), "", "input clears after a successful add");
    assert_eq!(app.focus(), Focus::Input);
    assert!(!app.status().unwrap().is_error);
}

#[test]
fn test_blank_submit_keeps_input() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(app.store().tasks().is_empty());
    assert_eq!(app.input_value(Tab::Tasks), "   ");
}

#[test]
fn test_quit_keys_type_into_input() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "quit today");

    assert!(!app.should_quit());
    assert!(!app.store().dark_mode(), "'t' is text while typing");
    assert_eq!(app.input_value(Tab::Tasks), "quit today");
}

#[test]
fn test_toggle_and_delete_from_list() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::List);

    press(&mut app, KeyCode::Char(' '));
    assert!(app.store().tasks()[0].completed);
    press(&mut app, KeyCode::Char('x'));
    assert!(!app.store().tasks()[0].completed);

    press(&mut app, KeyCode::Char('d'));
    assert!(app.store().tasks().is_empty());
}

#[test]
fn test_add_note_on_notes_tab() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.active_tab(), Tab::Notes);

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "first");
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "second");
    press(&mut app, KeyCode::Enter);

    let contents: Vec<&str> = app.store().notes().iter().map(|n| n.content.as_str()).collect();
    assert_eq!(contents, vec!["second", "first"]);
    assert!(app.store().tasks().is_empty());
}

#[test]
fn test_tab_switch_keeps_unsent_input() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "draft");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.active_tab(), Tab::Notes);
    assert_eq!(app.focus(), Focus::Input);
    assert_eq!(app.input_value(Tab::Notes), "");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.active_tab(), Tab::Tasks);
    assert_eq!(app.input_value(Tab::Tasks), "draft");
}

#[test]
fn test_theme_toggle_key() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('t'));
    assert!(app.store().dark_mode());
    press(&mut app, KeyCode::Char('t'));
    assert!(!app.store().dark_mode());
}

#[test]
fn test_help_dialog_captures_keys() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.is_dialog_visible());

    press(&mut app, KeyCode::Char('t'));
    assert!(!app.store().dark_mode());

    press(&mut app, KeyCode::Esc);
    assert!(!app.is_dialog_visible());
    assert!(!app.should_quit());
}

#[test]
fn test_quit_from_list() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = new_app();
    press(&mut app, KeyCode::Char('i'));
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[test]
fn test_load_warning_opens_dialog() {
    let app = app_with(Box::new(MemoryStore::with_values([("tasks", "oops")])));
    assert!(app.is_dialog_visible());
    assert!(app.store().tasks().is_empty());
}

#[test]
fn test_save_failure_reports_error() {
    let mut app = app_with(Box::new(ReadOnlyStore));
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);

    let status = app.status().unwrap();
    assert!(status.is_error);
    assert!(status.text.starts_with("Failed to save"));
    assert_eq!(app.store().tasks().len(), 1);
}
