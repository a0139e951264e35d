use crate::theme::Theme;
use gitdash_core::state::{AppState, layout::MENU_HEADER_ROWS};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

pub const HEADING: &str = "What would you like to do?";

pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let [header_area, list_area] =
        Layout::vertical([Constraint::Length(MENU_HEADER_ROWS), Constraint::Min(1)]).areas(area);

    let header = Line::from(vec![
        Span::styled(
            HEADING,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (enter: run, q: quit)", Style::default().fg(theme.muted)),
    ]);
    f.render_widget(Paragraph::new(header), header_area);

    let description_style = Style::default()
        .fg(theme.muted)
        .add_modifier(Modifier::DIM);
    let items: Vec<ListItem> = state
        .menu
        .items()
        .iter()
        .map(|action| {
            ListItem::new(vec![
                Line::raw(action.label()),
                Line::styled(action.description(), description_style),
                Line::raw(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ")
        .highlight_spacing(ratatui::widgets::HighlightSpacing::Always);

    let mut list_state = ListState::default()
        .with_offset(state.menu.scroll_offset())
        .with_selected(Some(state.menu.selected()));
    f.render_stateful_widget(list, list_area, &mut list_state);
}
