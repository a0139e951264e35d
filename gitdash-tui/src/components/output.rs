use crate::theme::Theme;
use gitdash_core::state::{AppState, layout::OUTPUT_FOOTER_ROWS};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

/// Bordered, scrollable command output with a key-hint footer.
pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let [box_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(OUTPUT_FOOTER_ROWS)])
            .areas(area);

    let viewport = &state.viewport;
    let text: Text = viewport.visible_lines().map(Line::raw).collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .padding(Padding::symmetric(2, 1));
    f.render_widget(Paragraph::new(text).block(block), box_area);

    let hint_style = Style::default().fg(theme.hint).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.muted);
    let footer = Line::from(vec![
        Span::styled("↑/↓", hint_style),
        Span::styled(" scroll  ", muted),
        Span::styled("esc", hint_style),
        Span::styled(" back to menu  ", muted),
        Span::styled(format!("{}%", viewport.scroll_percent()), muted),
    ]);
    f.render_widget(Paragraph::new(footer), footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render_to_string;
    use gitdash_core::{dispatch::MenuAction, git::CommandResult};

    fn output_state(content: &str, width: u16, height: u16) -> AppState {
        let mut state = AppState::new();
        state.resize(width, height);
        while state.menu.selected_action() != MenuAction::Push {
            state.menu.move_selection(1);
        }
        state.apply(gitdash_core::Action::Select);
        state.finish_command(CommandResult::ok(content));
        state
    }

    #[test]
    fn test_output_shows_content_and_footer() {
        let state = output_state("Everything up-to-date", 60, 20);
        let theme = Theme::default();
        let output = render_to_string(60, 20, |f| draw(f, f.area(), &state, &theme));
        assert!(output.contains("Everything up-to-date"));
        assert!(output.contains("esc back to menu"));
        assert!(output.contains('╭'), "output box should have rounded border");
    }

    #[test]
    fn test_output_renders_from_scroll_offset() {
        let content = (0..30).map(|i| format!("row-{i:02}")).collect::<Vec<_>>().join("\n");
        let mut state = output_state(&content, 60, 20);
        state.apply(gitdash_core::Action::MoveSelection(5));
        let theme = Theme::default();
        let output = render_to_string(60, 20, |f| draw(f, f.area(), &state, &theme));
        assert!(!output.contains("row-04"));
        assert!(output.contains("row-05"));
    }
}
