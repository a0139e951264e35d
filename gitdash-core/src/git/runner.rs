use std::fmt;

/// External binaries the dashboard drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    Git,
    /// GitHub CLI, used for remote repository creation
    Gh,
}

impl Program {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Gh => "gh",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combined stdout/stderr of one process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub output: String,
    pub success: bool,
}

impl CommandOutput {
    pub fn new(output: impl Into<String>, success: bool) -> Self {
        Self {
            output: output.into(),
            success,
        }
    }
}

/// Blocking process execution. Never fails: problems starting the process are
/// reported as an unsuccessful `CommandOutput` with diagnostic text.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: Program, args: &[&str]) -> CommandOutput;

    /// Run a query expected to print a single line, trimmed.
    fn query(&self, program: Program, args: &[&str]) -> Option<String> {
        let out = self.run(program, args);
        out.success.then(|| out.output.trim().to_string())
    }
}
