use crate::git::CommandResult;

/// Events that arrive asynchronously from background tasks.
/// These get merged into the main event loop alongside keyboard input.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A dispatched task ran to completion, successfully or not
    CommandFinished(CommandResult),
}
