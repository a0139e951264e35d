pub mod action;
pub mod dispatch;
pub mod event;
pub mod git;
pub mod state;

// Re-export commonly used types at crate root
pub use action::Action;
pub use dispatch::{Dispatch, MenuAction, Task};
pub use event::AppEvent;
pub use git::{CommandOutput, CommandResult, CommandRunner, Program};
pub use state::{AppState, Effect, ScreenState};
