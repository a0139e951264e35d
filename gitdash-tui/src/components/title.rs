use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub const TITLE: &str = "📊 GIT DASHBOARD";

pub fn draw(f: &mut Frame, area: Rect, theme: &Theme) {
    let banner = Line::from(Span::styled(
        format!(" {TITLE} "),
        Style::default()
            .fg(theme.title_fg)
            .bg(theme.title_bg)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(banner), area);
}
