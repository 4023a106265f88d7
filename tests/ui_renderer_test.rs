use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use homedeck::config::DisplayConfig;
use homedeck::logger::LogBuffer;
use homedeck::storage::MemoryStore;
use homedeck::store::DashboardStore;
use homedeck::ui::core::{Component, EventType};
use homedeck::ui::AppComponent;
use ratatui::{backend::TestBackend, Terminal};

fn render_to_string(app: &mut AppComponent, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn new_app() -> AppComponent {
    AppComponent::new(
        DashboardStore::load(Box::new(MemoryStore::new())),
        &DisplayConfig::default(),
        LogBuffer::new(),
    )
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn submit(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
}

#[test]
fn test_renders_title_tabs_and_empty_hint() {
    let mut app = new_app();
    let screen = render_to_string(&mut app, 80, 24);

    assert!(screen.contains("Personal Dashboard"));
    assert!(screen.contains("1 Tasks"));
    assert!(screen.contains("2 Notes"));
    assert!(screen.contains("No tasks yet"));
    assert!(screen.contains("Add a new task..."));
}

#[test]
fn test_renders_added_task() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('i'));
    submit(&mut app, "Buy milk");

    let screen = render_to_string(&mut app, 80, 24);
    assert!(screen.contains("Buy milk"));
    assert!(screen.contains("Tasks (0/1)"));
}

#[test]
fn test_renders_notes_newest_first() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('i'));
    submit(&mut app, "older note");
    submit(&mut app, "newer note");

    let screen = render_to_string(&mut app, 80, 30);
    let newer = screen.find("newer note").unwrap();
    let older = screen.find("older note").unwrap();
    assert!(newer < older);
    assert!(screen.contains("Notes (2)"));
}

#[test]
fn test_renders_help_dialog() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('?'));

    let screen = render_to_string(&mut app, 100, 30);
    assert!(screen.contains("Help"));
}

#[test]
fn test_renders_on_tiny_terminal() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('t'));
    let _ = render_to_string(&mut app, 10, 4);
}

#[test]
fn test_help_dialog_scrolls_back_up_after_end() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('?'));

    press(&mut app, KeyCode::End);
    let at_end = render_to_string(&mut app, 80, 14);
    assert!(at_end.contains("Close"), "last help line is reachable:\n{at_end}");

    press(&mut app, KeyCode::Up);
    let after_up = render_to_string(&mut app, 80, 14);
    assert_ne!(at_end, after_up);
    assert!(!after_up.contains("Close"));

    press(&mut app, KeyCode::Down);
    let back_at_end = render_to_string(&mut app, 80, 14);
    assert_eq!(at_end, back_at_end);
}

#[test]
fn test_help_dialog_page_up_from_bottom_reaches_top() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('?'));
    let at_top = render_to_string(&mut app, 80, 14);

    press(&mut app, KeyCode::PageDown);
    press(&mut app, KeyCode::PageDown);
    press(&mut app, KeyCode::PageDown);
    let _ = render_to_string(&mut app, 80, 14);
    for _ in 0..3 {
        press(&mut app, KeyCode::PageUp);
    }

    assert_eq!(render_to_string(&mut app, 80, 14), at_top);
}

#[test]
fn test_long_input_keeps_end_visible() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('i'));
    for c in "a".repeat(90).chars().chain("END".chars()) {
        press(&mut app, KeyCode::Char(c));
    }

    let screen = render_to_string(&mut app, 80, 24);
    assert!(screen.contains("END"));
}

#[test]
fn test_cursor_follows_wide_characters() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('i'));
    for c in "日本".chars() {
        press(&mut app, KeyCode::Char(c));
    }

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    // Header (3 rows) and tab bar (1 row) sit above the input box
    let cursor = terminal.get_cursor_position().unwrap();
    assert_eq!((cursor.x, cursor.y), (5, 5));
}
