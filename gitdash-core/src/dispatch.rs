use crate::git::{
    CommandResult, CommandRunner, Program,
    format::{MISSING_ORIGIN_MESSAGE, format_detailed_status, format_user_info},
};
use std::path::Path;

pub const LOG_FORMAT: &str = "--pretty=format:%h -%d %s (%cr) <%an>";

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    DetailedStatus,
    UserInfo,
    Commit,
    Pull,
    Push,
    CreateRemoteRepo,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::DetailedStatus,
        MenuAction::UserInfo,
        MenuAction::Commit,
        MenuAction::Pull,
        MenuAction::Push,
        MenuAction::CreateRemoteRepo,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::DetailedStatus => "Detailed status",
            Self::UserInfo => "User info",
            Self::Commit => "Commit",
            Self::Pull => "Pull (rebase)",
            Self::Push => "Push",
            Self::CreateRemoteRepo => "Create remote repository",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::DetailedStatus => "Annotated 'git status' of the working tree",
            Self::UserInfo => "Configured name, email and GitHub account",
            Self::Commit => "Stage everything and commit with a message",
            Self::Pull => "Run 'git pull --rebase'",
            Self::Push => "Run 'git push' to the current remote",
            Self::CreateRemoteRepo => "Create a public GitHub repository with 'gh'",
        }
    }
}

/// What selecting a menu entry leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Schedule(Task),
    EnterCommitInput,
}

pub fn dispatch(action: MenuAction) -> Dispatch {
    match action {
        MenuAction::DetailedStatus => Dispatch::Schedule(Task::DetailedStatus),
        MenuAction::UserInfo => Dispatch::Schedule(Task::UserInfo),
        MenuAction::Commit => Dispatch::EnterCommitInput,
        MenuAction::Pull => Dispatch::Schedule(Task::Pull),
        MenuAction::Push => Dispatch::Schedule(Task::Push),
        MenuAction::CreateRemoteRepo => Dispatch::Schedule(Task::CreateRemoteRepo),
    }
}

/// One unit of background work. Variants carry everything they need, so a
/// task is unaffected by later changes to the screen model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    DetailedStatus,
    RecentLog,
    UserInfo,
    Commit { message: String },
    Pull,
    Push,
    CreateRemoteRepo,
}

impl Task {
    /// Short human name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DetailedStatus => "status",
            Self::RecentLog => "log",
            Self::UserInfo => "user",
            Self::Commit { .. } => "commit",
            Self::Pull => "pull",
            Self::Push => "push",
            Self::CreateRemoteRepo => "create-repo",
        }
    }

    /// Run the task to completion. Blocking; call from a worker thread.
    pub fn execute(&self, runner: &dyn CommandRunner) -> CommandResult {
        match self {
            Self::DetailedStatus => {
                let out = runner.run(Program::Git, &["status", "--porcelain"]);
                if out.success {
                    CommandResult::ok(format_detailed_status(&out.output))
                } else {
                    CommandResult::from_output(out)
                }
            }
            Self::RecentLog => CommandResult::from_output(runner.run(
                Program::Git,
                &["log", "-n", "10", "--graph", LOG_FORMAT],
            )),
            Self::UserInfo => user_info(runner),
            Self::Commit { message } => commit(runner, message),
            Self::Pull => CommandResult::from_output(runner.run(Program::Git, &["pull", "--rebase"])),
            Self::Push => CommandResult::from_output(runner.run(Program::Git, &["push"])),
            Self::CreateRemoteRepo => create_remote_repo(runner),
        }
    }
}

fn user_info(runner: &dyn CommandRunner) -> CommandResult {
    let name = runner.query(Program::Git, &["config", "user.name"]);
    let email = runner.query(Program::Git, &["config", "user.email"]);
    let Some(remote_url) = runner.query(Program::Git, &["remote", "get-url", "origin"]) else {
        return CommandResult::ok(MISSING_ORIGIN_MESSAGE);
    };
    CommandResult::ok(format_user_info(
        name.as_deref().filter(|s| !s.is_empty()),
        email.as_deref().filter(|s| !s.is_empty()),
        &remote_url,
    ))
}

fn commit(runner: &dyn CommandRunner, message: &str) -> CommandResult {
    let staged = runner.run(Program::Git, &["add", "."]);
    if !staged.success {
        return CommandResult::failed(format!(
            "failed to run 'git add .': {}",
            staged.output.trim()
        ));
    }
    CommandResult::from_output(runner.run(Program::Git, &["commit", "-m", message]))
}

fn create_remote_repo(runner: &dyn CommandRunner) -> CommandResult {
    let toplevel = runner.run(Program::Git, &["rev-parse", "--show-toplevel"]);
    if !toplevel.success {
        return CommandResult::failed(format!(
            "failed to resolve the repository root: {}",
            toplevel.output.trim()
        ));
    }
    let Some(name) = Path::new(toplevel.output.trim())
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
    else {
        return CommandResult::failed("failed to resolve the repository name");
    };
    CommandResult::from_output(runner.run(
        Program::Gh,
        &[
            "repo",
            "create",
            &name,
            "--public",
            "--source=.",
            "--remote=origin",
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::MockCommandRunner;

    #[test]
    fn test_every_action_but_commit_schedules() {
        for action in MenuAction::ALL {
            match dispatch(action) {
                Dispatch::EnterCommitInput => assert_eq!(action, MenuAction::Commit),
                Dispatch::Schedule(_) => assert_ne!(action, MenuAction::Commit),
            }
        }
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), MenuAction::ALL.len());
    }

    #[test]
    fn test_status_uses_porcelain_and_formats() {
        let runner =
            MockCommandRunner::default().with_response("git status --porcelain", "?? a.txt\n", true);
        let result = Task::DetailedStatus.execute(&runner);
        assert_eq!(runner.calls(), vec!["git status --porcelain"]);
        assert!(result.display_text().contains("❓ Untracked: a.txt"));
    }

    #[test]
    fn test_status_failure_is_shown_raw() {
        let runner = MockCommandRunner::default().with_response(
            "git status --porcelain",
            "fatal: not a git repository",
            false,
        );
        let result = Task::DetailedStatus.execute(&runner);
        assert_eq!(result.error.as_deref(), Some("fatal: not a git repository"));
    }

    #[test]
    fn test_log_arguments() {
        let runner = MockCommandRunner::default();
        Task::RecentLog.execute(&runner);
        assert_eq!(
            runner.calls(),
            vec![format!("git log -n 10 --graph {LOG_FORMAT}")]
        );
    }

    #[test]
    fn test_pull_and_push_arguments() {
        let runner = MockCommandRunner::default();
        Task::Pull.execute(&runner);
        Task::Push.execute(&runner);
        assert_eq!(runner.calls(), vec!["git pull --rebase", "git push"]);
    }

    #[test]
    fn test_commit_stages_then_commits() {
        let runner = MockCommandRunner::default().with_response(
            "git commit -m fix bug",
            "[main 1a2b3c4] fix bug",
            true,
        );
        let result = Task::Commit {
            message: "fix bug".into(),
        }
        .execute(&runner);
        assert_eq!(runner.calls(), vec!["git add .", "git commit -m fix bug"]);
        assert_eq!(result.display_text(), "[main 1a2b3c4] fix bug");
    }

    #[test]
    fn test_commit_stops_when_staging_fails() {
        let runner = MockCommandRunner::default().with_response(
            "git add .",
            "fatal: not a git repository\n",
            false,
        );
        let result = Task::Commit {
            message: "fix bug".into(),
        }
        .execute(&runner);
        assert!(!runner.calls().iter().any(|c| c.starts_with("git commit")));
        let error = result.error.unwrap();
        assert!(error.contains("fatal: not a git repository"));
        assert!(error.starts_with("failed to run 'git add .'"));
    }

    #[test]
    fn test_user_info_with_origin() {
        let runner = MockCommandRunner::default()
            .with_response("git config user.name", "Ada Lovelace\n", true)
            .with_response("git config user.email", "ada@example.com\n", true)
            .with_response(
                "git remote get-url origin",
                "https://github.com/ada/engine.git\n",
                true,
            );
        let text = Task::UserInfo.execute(&runner).output;
        assert!(text.contains("Name:    Ada Lovelace"));
        assert!(text.contains("Email:   ada@example.com"));
        assert!(text.contains("Account: @ada"));
    }

    #[test]
    fn test_user_info_without_origin_is_not_an_error() {
        let runner = MockCommandRunner::default().with_response(
            "git remote get-url origin",
            "error: No such remote 'origin'",
            false,
        );
        let result = Task::UserInfo.execute(&runner);
        assert!(result.is_ok());
        assert_eq!(result.output, MISSING_ORIGIN_MESSAGE);
    }

    #[test]
    fn test_create_remote_repo_uses_toplevel_name() {
        let runner = MockCommandRunner::default().with_response(
            "git rev-parse --show-toplevel",
            "/home/ada/engine\n",
            true,
        );
        Task::CreateRemoteRepo.execute(&runner);
        assert_eq!(
            runner.calls(),
            vec![
                "git rev-parse --show-toplevel",
                "gh repo create engine --public --source=. --remote=origin",
            ]
        );
    }

    #[test]
    fn test_create_remote_repo_outside_repo_skips_gh() {
        let runner = MockCommandRunner::default().with_response(
            "git rev-parse --show-toplevel",
            "fatal: not a git repository",
            false,
        );
        let result = Task::CreateRemoteRepo.execute(&runner);
        assert!(!result.is_ok());
        assert!(!runner.calls().iter().any(|c| c.starts_with("gh")));
    }
}
