use crate::theme::Theme;
use gitdash_core::state::{
    AppState, TextInput,
    layout::{COMMIT_PROMPT_ROWS, INPUT_FRAME},
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const PLACEHOLDER: &str = "Describe your changes (everything is staged with 'git add .' first)";

pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let input = &state.input;
    let input_rows = u16::try_from(input.height()).unwrap_or(u16::MAX) + INPUT_FRAME;
    let [prompt_area, input_area, _] = Layout::vertical([
        Constraint::Length(COMMIT_PROMPT_ROWS),
        Constraint::Length(input_rows),
        Constraint::Min(0),
    ])
    .areas(area);

    let hint_style = Style::default().fg(theme.hint).add_modifier(Modifier::BOLD);
    let prompt = Line::from(vec![
        Span::raw("Commit message ("),
        Span::styled("ctrl+d", hint_style),
        Span::raw(" to commit, "),
        Span::styled("esc", hint_style),
        Span::raw(" to cancel):"),
    ]);
    f.render_widget(Paragraph::new(prompt), prompt_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(input_area);

    if input.is_empty() {
        let placeholder = Line::styled(PLACEHOLDER, Style::default().fg(theme.muted));
        f.render_widget(Paragraph::new(placeholder).block(block), input_area);
        if input.is_focused() && inner.width > 0 && inner.height > 0 {
            f.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let window = InputWindow::for_cursor(input);
    let lines: Vec<Line> = input
        .value()
        .split('\n')
        .skip(window.top_row)
        .take(input.height())
        .map(|line| Line::raw(skip_columns(line, window.left_col).0))
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), input_area);

    if input.is_focused() && inner.width > 0 && inner.height > 0 {
        f.set_cursor_position(Position::new(
            inner.x + window.cursor_x.min(inner.width - 1),
            inner.y + window.cursor_y.min(inner.height - 1),
        ));
    }
}

/// Part of the text that is visible, scrolled so the cursor stays inside the
/// input's width and height.
#[derive(Debug, PartialEq, Eq)]
struct InputWindow {
    top_row: usize,
    left_col: usize,
    cursor_x: u16,
    cursor_y: u16,
}

impl InputWindow {
    fn for_cursor(input: &TextInput) -> Self {
        let row = input.cursor_row();
        let before_cursor = input.text_before_cursor_on_line();
        let col = before_cursor.width();
        let top_row = row.saturating_sub(input.height().max(1) - 1);
        let left_col = col.saturating_sub(input.width().max(1) - 1);
        // A wide glyph straddling `left_col` is hidden entirely, which can
        // shift the visible text further than `left_col`.
        let skipped = skip_columns(before_cursor, left_col).1;
        Self {
            top_row,
            left_col,
            cursor_x: u16::try_from(col.saturating_sub(skipped)).unwrap_or(u16::MAX),
            cursor_y: u16::try_from(row - top_row).unwrap_or(u16::MAX),
        }
    }
}

/// Drop at least `cols` display columns from the front of `line`, never
/// splitting a character. Returns the rest and the width actually dropped.
fn skip_columns(line: &str, cols: usize) -> (&str, usize) {
    let mut width = 0;
    for (i, c) in line.char_indices() {
        if width >= cols {
            return (&line[i..], width);
        }
        width += c.width().unwrap_or(0);
    }
    ("", width)
}
