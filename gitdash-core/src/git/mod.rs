pub mod cli;
pub mod format;
pub mod mock;
pub mod runner;

pub use cli::CliCommandRunner;
pub use runner::{CommandOutput, CommandRunner, Program};

use serde::Serialize;

/// Outcome of one dispatched task, delivered back to the UI exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub output: String,
    pub error: Option<String>,
}

impl CommandResult {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            error: Some(error.into()),
        }
    }

    /// Failed runs keep the tool's own diagnostic text as the error.
    pub fn from_output(out: CommandOutput) -> Self {
        if out.success {
            Self::ok(out.output)
        } else if out.output.trim().is_empty() {
            Self::failed("command exited with a non-zero status")
        } else {
            Self::failed(out.output)
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Text shown in the output viewport. Errors are plain text too.
    pub fn display_text(&self) -> &str {
        self.error.as_deref().unwrap_or(&self.output)
    }
}
