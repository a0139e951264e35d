mod spawn;

use crate::{
    components::{self, title},
    keymap,
    theme::Theme,
};
use crossterm::event::{self, Event, KeyEventKind};
use gitdash_core::{
    action::Action,
    event::AppEvent,
    git::CommandRunner,
    state::{
        AppState, Effect, ScreenState,
        layout::{MARGIN_X, MARGIN_Y, TITLE_ROWS},
    },
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use spawn::spawn_task;
use std::{
    sync::{Arc, mpsc},
    time::{Duration, Instant},
};

/// Spinner frame period, also the longest the loop waits for input.
pub const TICK_RATE: Duration = Duration::from_millis(80);

/// Handle for dispatching background work
#[derive(Clone)]
pub struct EventSender {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSender {
    /// Send an event from a background thread to the main loop
    pub fn send(&self, event: AppEvent) {
        let _ = self.tx.send(event);
    }
}

pub fn run(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    runner: &Arc<dyn CommandRunner>,
    theme: &Theme,
) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();
    let event_sender = EventSender { tx };

    let size = terminal.size()?;
    state.resize(size.width, size.height);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| draw(f, state, theme))?;

        // Check background channel (non-blocking)
        if let Ok(app_event) = rx.try_recv() {
            process_app_event(app_event, state);
            continue;
        }

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = keymap::resolve_action(key, state)
                        && process_action(action, state, runner, &event_sender)
                    {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => state.resize(width, height),
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            state.tick();
            last_tick = Instant::now();
        }
    }
}

/// Apply an action and carry out its effect. Returns true when the app should exit.
fn process_action(
    action: Action,
    state: &mut AppState,
    runner: &Arc<dyn CommandRunner>,
    sender: &EventSender,
) -> bool {
    match state.apply(action) {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Schedule(task) => {
            spawn_task(runner, sender, task);
            false
        }
    }
}

/// Handle events from background tasks
fn process_app_event(event: AppEvent, state: &mut AppState) {
    match event {
        AppEvent::CommandFinished(result) => {
            state.finish_command(result);
        }
    }
}

fn draw(f: &mut Frame, state: &AppState, theme: &Theme) {
    let area = f.area().inner(Margin::new(MARGIN_X, MARGIN_Y));
    let [title_area, body] =
        Layout::vertical([Constraint::Length(TITLE_ROWS), Constraint::Min(0)]).areas(area);

    title::draw(f, title_area, theme);
    match state.screen {
        ScreenState::Menu => components::menu::draw(f, body, state, theme),
        ScreenState::Loading => draw_loading(f, body, state, theme),
        ScreenState::Output => components::output::draw(f, body, state, theme),
        ScreenState::CommitInput => components::commit_input::draw(f, body, state, theme),
    }
}

fn draw_loading(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let text = Line::from(vec![
        Span::styled(
            state.spinner.frame(),
            Style::default()
                .fg(theme.spinner)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Running command..."),
    ]);
    f.render_widget(Paragraph::new(text), area);
}
