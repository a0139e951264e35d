mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gitdash_core::{
    Task,
    git::{CliCommandRunner, CommandRunner},
    state::AppState,
};
use gitdash_tui::Theme;
use std::{
    io::{self, IsTerminal},
    process::ExitCode,
    sync::Arc,
};

#[derive(Parser)]
#[command(version, about = "Menu-driven terminal dashboard for everyday git workflows")]
struct Cli {
    /// Log level written to the log file (GITDASH_LOG overrides it)
    #[arg(long, default_value = "warn")]
    log_level: log::LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an annotated summary of working tree changes
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Show the ten most recent commits as a graph
    Log {
        #[arg(long)]
        json: bool,
    },
    /// Show the configured git identity and GitHub account
    User {
        #[arg(long)]
        json: bool,
    },
    /// Stage all changes and commit them
    Commit {
        /// Commit message
        #[arg(short, long)]
        message: String,
        #[arg(long)]
        json: bool,
    },
    /// Pull with rebase from the upstream branch
    Pull {
        #[arg(long)]
        json: bool,
    },
    /// Push the current branch
    Push {
        #[arg(long)]
        json: bool,
    },
    /// Create a public GitHub repository for this repo and add it as origin
    CreateRepo {
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    fn into_task(self) -> (Task, bool) {
        match self {
            Self::Status { json } => (Task::DetailedStatus, json),
            Self::Log { json } => (Task::RecentLog, json),
            Self::User { json } => (Task::UserInfo, json),
            Self::Commit { message, json } => (Task::Commit { message }, json),
            Self::Pull { json } => (Task::Pull, json),
            Self::Push { json } => (Task::Push, json),
            Self::CreateRepo { json } => (Task::CreateRemoteRepo, json),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let task = cli.command.map(Commands::into_task);
    let json_errors = task.as_ref().is_some_and(|(_, json)| *json);

    if let Err(error) = logging::setup_logging(cli.log_level) {
        eprintln!("Warning: logging disabled: {error:#}");
    }

    let result = run(task);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            cli::print_error(&error, json_errors);
            ExitCode::from(1)
        }
    }
}

fn run(task: Option<(Task, bool)>) -> cli::CliResult<()> {
    let runner: Arc<dyn CommandRunner> = Arc::new(CliCommandRunner);

    match task {
        Some((task, json)) => cli::cmd_task(runner.as_ref(), &task, json),
        None => run_tui(&runner).map_err(cli::CliError::from),
    }
}

fn run_tui(runner: &Arc<dyn CommandRunner>) -> Result<()> {
    if !io::stdout().is_terminal() {
        anyhow::bail!(
            "The dashboard needs an interactive terminal; use a subcommand (see --help) instead"
        );
    }
    let theme = Theme::DEFAULT;
    let mut state = AppState::new();

    // A failed init may leave raw mode half enabled
    let mut terminal = ratatui::try_init()
        .inspect_err(|_| ratatui::restore())
        .context("Failed to initialise terminal")?;
    let result = gitdash_tui::run(&mut terminal, &mut state, runner, &theme);
    ratatui::restore();
    log::info!("dashboard closed");

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_requires_message() {
        assert!(Cli::try_parse_from(["gitdash", "commit"]).is_err());
    }

    #[test]
    fn subcommands_map_to_tasks() {
        let cli = Cli::try_parse_from(["gitdash", "commit", "-m", "fix bug", "--json"]).unwrap();
        let (task, json) = cli.command.unwrap().into_task();
        assert_eq!(
            task,
            Task::Commit {
                message: "fix bug".to_string()
            }
        );
        assert!(json);

        let cli = Cli::try_parse_from(["gitdash", "create-repo"]).unwrap();
        assert_eq!(cli.command.unwrap().into_task(), (Task::CreateRemoteRepo, false));
    }

    #[test]
    fn no_subcommand_starts_dashboard() {
        let cli = Cli::try_parse_from(["gitdash", "--log-level", "debug"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, log::LevelFilter::Debug);
    }
}
