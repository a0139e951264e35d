pub mod layout;
pub mod menu;
pub mod text_input;
pub mod viewport;

pub use layout::Dimensions;
pub use menu::MenuList;
pub use text_input::TextInput;
pub use viewport::Viewport;

use crate::{
    action::Action,
    dispatch::{Dispatch, Task, dispatch},
    git::CommandResult,
};

/// Which screen is showing. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenState {
    #[default]
    Menu,
    /// A task is running in the background
    Loading,
    /// The last task's result is shown in the viewport
    Output,
    /// Collecting a commit message
    CommitInput,
}

/// Side effect requested by a transition, carried out by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Schedule(Task),
}

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }

    pub fn frame(&self) -> &'static str {
        SPINNER_FRAMES[self.frame]
    }
}

/// The screen model: current screen plus the widgets it owns.
#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: ScreenState,
    pub menu: MenuList,
    pub viewport: Viewport,
    pub input: TextInput,
    pub spinner: Spinner,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: ScreenState::Menu,
            menu: MenuList::new(),
            viewport: Viewport::new(),
            input: TextInput::new(),
            spinner: Spinner::default(),
        }
    }

    /// Apply a user action to the current screen.
    pub fn apply(&mut self, action: Action) -> Effect {
        match self.screen {
            ScreenState::Menu => self.apply_menu(action),
            // Nothing can be started or cancelled while a task runs
            ScreenState::Loading => Effect::None,
            ScreenState::Output => {
                self.apply_output(action);
                Effect::None
            }
            ScreenState::CommitInput => self.apply_commit_input(action),
        }
    }

    fn apply_menu(&mut self, action: Action) -> Effect {
        match action {
            Action::Quit => return Effect::Quit,
            Action::Select => {
                let selected = self.menu.selected_action();
                match dispatch(selected) {
                    Dispatch::Schedule(task) => return self.start(task),
                    Dispatch::EnterCommitInput => {
                        self.input.reset();
                        self.input.focus();
                        self.screen = ScreenState::CommitInput;
                    }
                }
            }
            Action::MoveSelection(delta) => self.menu.move_selection(delta),
            Action::HalfPageUp => self.menu.half_page_up(),
            Action::HalfPageDown => self.menu.half_page_down(),
            Action::PageUp => self.menu.page_up(),
            Action::PageDown => self.menu.page_down(),
            Action::MoveTop => self.menu.move_to_top(),
            Action::MoveBottom => self.menu.move_to_bottom(),
            _ => {}
        }
        Effect::None
    }

    fn apply_output(&mut self, action: Action) {
        match action {
            Action::GoBack => self.screen = ScreenState::Menu,
            Action::MoveSelection(delta) => self.viewport.scroll_by(delta),
            Action::HalfPageUp => self.viewport.half_page_up(),
            Action::HalfPageDown => self.viewport.half_page_down(),
            Action::PageUp => self.viewport.page_up(),
            Action::PageDown => self.viewport.page_down(),
            Action::MoveTop => self.viewport.goto_top(),
            Action::MoveBottom => self.viewport.goto_bottom(),
            _ => {}
        }
    }

    fn apply_commit_input(&mut self, action: Action) -> Effect {
        match action {
            Action::GoBack => {
                self.input.reset();
                self.input.blur();
                self.screen = ScreenState::Menu;
            }
            Action::SubmitCommit => {
                // The message is copied into the task now; the field may be
                // reset before the task completes.
                let message = self.input.value().to_string();
                self.input.blur();
                return self.start(Task::Commit { message });
            }
            Action::InsertChar(c) => self.input.insert_char(c),
            Action::InsertNewline => self.input.insert_newline(),
            Action::DeleteBackwardChar => {
                self.input.backspace();
            }
            Action::DeleteForwardChar => {
                self.input.delete_forward();
            }
            Action::DeleteBackwardWord => self.input.delete_word_backward(),
            Action::CursorLeft => self.input.move_left(),
            Action::CursorRight => self.input.move_right(),
            Action::CursorUp => self.input.move_up(),
            Action::CursorDown => self.input.move_down(),
            Action::CursorLineStart => self.input.move_line_start(),
            Action::CursorLineEnd => self.input.move_line_end(),
            _ => {}
        }
        Effect::None
    }

    fn start(&mut self, task: Task) -> Effect {
        log::debug!("scheduling task {}", task.name());
        self.spinner.reset();
        self.screen = ScreenState::Loading;
        Effect::Schedule(task)
    }

    /// Advance the spinner. Returns whether anything changed.
    pub fn tick(&mut self) -> bool {
        if self.screen == ScreenState::Loading {
            self.spinner.tick();
            true
        } else {
            false
        }
    }

    /// Deliver a task result. Only accepted while loading; a result arriving on
    /// any other screen is dropped and `false` is returned.
    pub fn finish_command(&mut self, result: CommandResult) -> bool {
        if self.screen != ScreenState::Loading {
            log::warn!(
                "ignoring command result received on {:?} screen",
                self.screen
            );
            return false;
        }
        if let Some(error) = &result.error {
            log::debug!("task failed: {error}");
        }
        self.viewport.set_content(result.display_text());
        self.screen = ScreenState::Output;
        true
    }

    /// Recompute widget sizes for a new terminal size. The screen is unchanged.
    pub fn resize(&mut self, width: u16, height: u16) {
        let dims = Dimensions::from_terminal(width, height);
        self.menu.set_height(usize::from(dims.menu_rows));
        self.viewport.set_height(usize::from(dims.viewport_rows));
        self.input
            .set_size(usize::from(dims.input.width), usize::from(dims.input.height));
    }
}
