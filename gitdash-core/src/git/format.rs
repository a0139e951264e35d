use regex::Regex;
use std::{fmt::Write as _, sync::LazyLock};

pub const CLEAN_TREE_MESSAGE: &str = "✅  Working tree clean, nothing to commit.";
pub const MISSING_ORIGIN_MESSAGE: &str = "Remote 'origin' is not configured.";

static GITHUB_ACCOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com[:/]([^/]+)").expect("github account pattern is valid")
});

/// Annotate `git status --porcelain` output for display.
pub fn format_detailed_status(porcelain: &str) -> String {
    if porcelain.trim().is_empty() {
        return CLEAN_TREE_MESSAGE.to_string();
    }

    let mut out = String::from("Changes in working tree:\n");
    for line in porcelain.lines() {
        // "XY path", where X is the index status and Y the worktree status
        let (Some(code), Some(path)) = (line.get(..2), line.get(3..)) else {
            continue;
        };
        let _ = writeln!(out, "  {}", describe_entry(code, path));
    }
    out
}

fn describe_entry(code: &str, path: &str) -> String {
    let mut chars = code.chars();
    let (x, y) = (chars.next().unwrap_or(' '), chars.next().unwrap_or(' '));
    let staged = x != ' ' && x != '?';
    let suffix = if staged { " (staged)" } else { "" };

    match (x, y) {
        ('?', '?') => format!("❓ Untracked: {path}"),
        // ' A' is an intent-to-add entry (`git add -N`)
        ('A', _) | (_, 'A') => format!("➕ Added{suffix}: {path}"),
        ('R', _) => format!("🔀 Renamed{suffix}: {path}"),
        ('D', _) | (_, 'D') => format!("❌ Deleted{suffix}: {path}"),
        ('M', _) | (_, 'M') => format!("📝 Modified{suffix}: {path}"),
        _ => format!("{code} {path}"),
    }
}

/// Extract the GitHub account from a remote URL (https or scp-like ssh form).
pub fn github_account(remote_url: &str) -> Option<&str> {
    GITHUB_ACCOUNT
        .captures(remote_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn format_user_info(name: Option<&str>, email: Option<&str>, remote_url: &str) -> String {
    let account = github_account(remote_url).unwrap_or("not found");
    let mut out = String::new();
    out.push_str("👤 Git user info\n");
    out.push_str("----------------\n");
    let _ = writeln!(out, "Name:    {}", name.unwrap_or("(not set)"));
    let _ = writeln!(out, "Email:   {}", email.unwrap_or("(not set)"));
    let _ = writeln!(out, "Account: @{account}");
    out
}
