use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gitdash_core::{
    action::Action,
    state::{AppState, ScreenState},
};

/// Resolve a key event into an Action based on the current screen
pub fn resolve_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    match state.screen {
        ScreenState::Menu => resolve_menu_key(key),
        // A running command cannot be interrupted
        ScreenState::Loading => None,
        ScreenState::Output => resolve_output_key(key),
        ScreenState::CommitInput => resolve_commit_key(key),
    }
}

fn is_ctrl(key: KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Movement keys shared by the menu and the output viewport.
fn resolve_movement_key(key: KeyEvent) -> Option<Action> {
    if is_ctrl(key, 'u') {
        return Some(Action::HalfPageUp);
    }
    if is_ctrl(key, 'd') {
        return Some(Action::HalfPageDown);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelection(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelection(1)),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::MoveTop),
        KeyCode::End | KeyCode::Char('G') => Some(Action::MoveBottom),
        _ => None,
    }
}

fn resolve_menu_key(key: KeyEvent) -> Option<Action> {
    if is_ctrl(key, 'c') {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Select),
        _ => resolve_movement_key(key),
    }
}

fn resolve_output_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::GoBack),
        KeyCode::Char(' ') => Some(Action::PageDown),
        _ => resolve_movement_key(key),
    }
}

fn resolve_commit_key(key: KeyEvent) -> Option<Action> {
    if is_ctrl(key, 'd') {
        return Some(Action::SubmitCommit);
    }
    if is_ctrl(key, 'w') {
        return Some(Action::DeleteBackwardWord);
    }
    if is_ctrl(key, 'a') {
        return Some(Action::CursorLineStart);
    }
    if is_ctrl(key, 'e') {
        return Some(Action::CursorLineEnd);
    }

    match key.code {
        KeyCode::Esc => Some(Action::GoBack),
        KeyCode::Enter => Some(Action::InsertNewline),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Action::DeleteBackwardWord)
        }
        KeyCode::Backspace => Some(Action::DeleteBackwardChar),
        KeyCode::Delete => Some(Action::DeleteForwardChar),
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Up => Some(Action::CursorUp),
        KeyCode::Down => Some(Action::CursorDown),
        KeyCode::Home => Some(Action::CursorLineStart),
        KeyCode::End => Some(Action::CursorLineEnd),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Action::InsertChar(c))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn state_on(screen: ScreenState) -> AppState {
        let mut state = AppState::new();
        state.screen = screen;
        state
    }

    #[test]
    fn test_menu_keys() {
        let state = state_on(ScreenState::Menu);
        assert_eq!(resolve_action(key(KeyCode::Char('q')), &state), Some(Action::Quit));
        assert_eq!(resolve_action(ctrl('c'), &state), Some(Action::Quit));
        assert_eq!(resolve_action(key(KeyCode::Enter), &state), Some(Action::Select));
        assert_eq!(
            resolve_action(key(KeyCode::Char('j')), &state),
            Some(Action::MoveSelection(1))
        );
        assert_eq!(
            resolve_action(key(KeyCode::Up), &state),
            Some(Action::MoveSelection(-1))
        );
        assert_eq!(resolve_action(key(KeyCode::Esc), &state), None);
    }

    #[test]
    fn test_loading_ignores_everything() {
        let state = state_on(ScreenState::Loading);
        for event in [
            key(KeyCode::Char('q')),
            key(KeyCode::Esc),
            key(KeyCode::Enter),
            ctrl('c'),
            ctrl('d'),
        ] {
            assert_eq!(resolve_action(event, &state), None);
        }
    }

    #[test]
    fn test_output_keys() {
        let state = state_on(ScreenState::Output);
        assert_eq!(resolve_action(key(KeyCode::Esc), &state), Some(Action::GoBack));
        assert_eq!(
            resolve_action(key(KeyCode::Down), &state),
            Some(Action::MoveSelection(1))
        );
        assert_eq!(
            resolve_action(key(KeyCode::PageDown), &state),
            Some(Action::PageDown)
        );
        assert_eq!(resolve_action(ctrl('u'), &state), Some(Action::HalfPageUp));
        assert_eq!(resolve_action(key(KeyCode::Char('q')), &state), None);
    }

    #[test]
    fn test_commit_keys() {
        let state = state_on(ScreenState::CommitInput);
        assert_eq!(resolve_action(ctrl('d'), &state), Some(Action::SubmitCommit));
        assert_eq!(resolve_action(key(KeyCode::Esc), &state), Some(Action::GoBack));
        assert_eq!(
            resolve_action(key(KeyCode::Enter), &state),
            Some(Action::InsertNewline)
        );
        assert_eq!(
            resolve_action(key(KeyCode::Char('q')), &state),
            Some(Action::InsertChar('q'))
        );
        assert_eq!(
            resolve_action(
                KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT),
                &state
            ),
            Some(Action::InsertChar('F'))
        );
        assert_eq!(resolve_action(ctrl('w'), &state), Some(Action::DeleteBackwardWord));
        assert_eq!(resolve_action(ctrl('c'), &state), None);
    }
}
