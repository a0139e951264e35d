use gitdash_core::{CommandResult, CommandRunner, Task};
use serde::Serialize;

pub type CliResult<T> = Result<T, CliError>;

/// A failure reported by the binary. Every error exits with status 1.
#[derive(Debug, Clone)]
pub struct CliError {
    message: String,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(value: anyhow::Error) -> Self {
        Self::new(format!("{value:#}"))
    }
}

#[derive(Serialize)]
struct TaskOutput<'a> {
    task: &'a str,
    #[serde(flatten)]
    result: &'a CommandResult,
}

/// Run one task to completion outside the dashboard and print what it produced.
pub fn cmd_task(runner: &dyn CommandRunner, task: &Task, json: bool) -> CliResult<()> {
    log::debug!("running {} from the command line", task.name());
    let result = task.execute(runner);

    if let Some(error) = &result.error {
        return Err(CliError::new(error.trim_end()));
    }

    if json {
        let payload = TaskOutput {
            task: task.name(),
            result: &result,
        };
        let text = serde_json::to_string_pretty(&payload)
            .map_err(|e| CliError::new(format!("Failed to serialize output: {e}")))?;
        println!("{text}");
    } else {
        let text = result.output.trim_end();
        if !text.is_empty() {
            println!("{text}");
        }
    }
    Ok(())
}

pub fn print_error(error: &CliError, json: bool) {
    if json {
        let payload = serde_json::json!({ "error": error.message() });
        eprintln!("{payload}");
    } else {
        eprintln!("Error: {}", error.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitdash_core::git::mock::MockCommandRunner;

    #[test]
    fn failed_task_becomes_error() {
        let runner = MockCommandRunner::default().with_response(
            "git push",
            "fatal: no upstream configured\n",
            false,
        );
        let err = cmd_task(&runner, &Task::Push, false).unwrap_err();
        assert_eq!(err.message(), "fatal: no upstream configured");
    }

    #[test]
    fn successful_task_runs_its_commands() {
        let runner = MockCommandRunner::default().with_response("git pull --rebase", "Already up to date.", true);
        cmd_task(&runner, &Task::Pull, true).unwrap();
        assert_eq!(runner.calls(), vec!["git pull --rebase".to_string()]);
    }

    #[test]
    fn anyhow_context_is_kept() {
        let err: CliError = anyhow::anyhow!("inner").context("outer").into();
        assert_eq!(err.message(), "outer: inner");
    }
}
