use anyhow::Context;
use std::{
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
};

const APP_NAME: &str = "gitdash";
const LOG_FILE_NAME: &str = "gitdash.log";
/// Filter directives in this variable override `--log-level`.
pub const LOG_ENV_VAR: &str = "GITDASH_LOG";

pub fn cache_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    {
        if let Ok(xdg_cache_home) = std::env::var("XDG_CACHE_HOME")
            && !xdg_cache_home.is_empty()
        {
            return Some(PathBuf::from(xdg_cache_home).join(APP_NAME));
        }
        dirs::home_dir().map(|home| home.join(".cache").join(APP_NAME))
    }
    #[cfg(not(unix))]
    {
        Some(
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_NAME),
        )
    }
}

pub fn default_log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating its directory first.
fn open_log_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Send log records to the log file. The terminal belongs to the dashboard,
/// so nothing is ever written to stderr. Callers treat an error here as a
/// warning and carry on without a logger.
pub fn setup_logging(level: log::LevelFilter) -> anyhow::Result<()> {
    let Some(log_file) = default_log_file() else {
        anyhow::bail!("Unable to determine a cache directory for the log file");
    };
    let file = open_log_file(&log_file)?;

    env_logger::Builder::new()
        .filter_level(level)
        .parse_env(LOG_ENV_VAR)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Failed to initialise logging")?;
    log::info!("gitdash logging initialised (level={level})");
    Ok(())
}
