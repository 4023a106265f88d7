use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS, DIALOG_TITLE_WARNING};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthChar;

pub const HELP_CONTENT: &str = r"
GLOBAL
t           Toggle light/dark theme
1 / 2       Show tasks / notes
Tab         Switch between tasks and notes
?           Toggle this help
G           Show logs
q / Ctrl+C  Quit

LISTS
j/k ↑↓      Move selection
i / a       Focus the input line
Space       Toggle the selected task
d / Del     Delete the selected task or note

INPUT
Enter       Add the task or note (blank input is ignored)
Esc         Back to the list, keeping what you typed
Ctrl+U      Clear the input line
←→ Home End Move the cursor

DIALOGS
j/k ↑↓      Scroll
PgUp/PgDn   Page
Esc         Close
";

/// Break `content` into display rows no wider than `width` columns.
///
/// The paragraph is drawn unwrapped, so these rows are exactly what the scroll
/// range covers.
pub fn wrap_rows(content: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for line in content.lines() {
        let mut row = String::new();
        let mut row_width = 0;
        for c in line.chars() {
            let char_width = c.width().unwrap_or(0);
            if row_width + char_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += char_width;
        }
        rows.push(row);
    }

    rows
}

/// Render a bordered, scrollable block of text centered over `area`.
///
/// Callers may push the offset past the end; it is clamped to the last full
/// page and written back.
fn render_scrollable_text(
    f: &mut Frame,
    dialog_area: Rect,
    palette: &Palette,
    title: &str,
    content: &str,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    f.render_widget(Clear, dialog_area);

    let rows = wrap_rows(content, dialog_area.width.saturating_sub(2) as usize);
    let total_rows = rows.len();
    let visible_height = dialog_area.height.saturating_sub(2) as usize;

    let max_scroll = total_rows.saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(max_scroll + 1)
        .viewport_content_length(visible_height)
        .position(*scroll_offset);

    let visible_text: Vec<Line> = rows
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.accent))
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(palette.surface())
        .alignment(Alignment::Left);

    f.render_widget(paragraph, dialog_area);

    if total_rows > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(palette.muted())
            .thumb_style(Style::default().fg(palette.text));

        f.render_stateful_widget(scrollbar, dialog_area, scrollbar_state);
    }
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let (width, height) = LayoutManager::help_panel_dimensions(area.width, area.height);
    let dialog_area = LayoutManager::centered_rect_lines(width, height, area);
    render_scrollable_text(
        f,
        dialog_area,
        palette,
        DIALOG_TITLE_HELP,
        HELP_CONTENT.trim_start_matches('\n'),
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    logs: &[String],
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(90, area.height.saturating_sub(2), area);
    let content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };
    render_scrollable_text(
        f,
        dialog_area,
        palette,
        DIALOG_TITLE_LOGS,
        &content,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_warning_dialog(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    warning_icon: &str,
    message: &str,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 10, area);
    let title = format!(" {}{}", warning_icon, DIALOG_TITLE_WARNING);
    let content = format!("{}\n\nPress Enter or Esc to continue", message);
    render_scrollable_text(
        f,
        dialog_area,
        palette,
        &title,
        &content,
        scroll_offset,
        scrollbar_state,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_rows_splits_long_lines() {
        let rows = wrap_rows("abcdefgh\nxy", 3);
        assert_eq!(rows, vec!["abc", "def", "gh", "xy"]);
    }

    #[test]
    fn test_wrap_rows_keeps_blank_lines() {
        let rows = wrap_rows("a\n\nb", 10);
        assert_eq!(rows, vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_rows_uses_display_width() {
        // Each of these characters takes two columns
        let rows = wrap_rows("日本語", 4);
        assert_eq!(rows, vec!["日本", "語"]);
    }
}
