// Snapshot adapter configuration (environment-driven)
use std::path::PathBuf;

use queuescope_core::{AppError, Result};

/// Default snapshot location (tilde-expanded)
pub const DEFAULT_SNAPSHOT_PATH: &str = "~/.queuescope/snapshot.json";

/// Default cap on work items pushed into one queue per population
pub const DEFAULT_MAX_PENDING_ITEMS: usize = 1000;

pub const ENV_SNAPSHOT_PATH: &str = "QUEUESCOPE_SNAPSHOT_PATH";
pub const ENV_MAX_PENDING_ITEMS: &str = "QUEUESCOPE_MAX_PENDING_ITEMS";
pub const ENV_LOG_FORMAT: &str = "QUEUESCOPE_LOG_FORMAT";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Development: pretty formatting with colors
    #[default]
    Pretty,
    /// Production: JSON structured logging
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("unknown log format: {}", other))),
        }
    }
}

/// Snapshot adapter settings
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    pub snapshot_path: PathBuf,
    pub max_pending_items: usize,
    pub log_format: LogFormat,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(shellexpand::tilde(DEFAULT_SNAPSHOT_PATH).into_owned()),
            max_pending_items: DEFAULT_MAX_PENDING_ITEMS,
            log_format: LogFormat::default(),
        }
    }
}

impl SnapshotConfig {
    /// Load from `QUEUESCOPE_*` environment variables, defaulting what is unset
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (environment in production)
    ///
    /// # Errors
    /// - AppError::Config if a set variable cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_SNAPSHOT_PATH) {
            config.snapshot_path = PathBuf::from(shellexpand::tilde(&path).into_owned());
        }

        if let Some(raw) = lookup(ENV_MAX_PENDING_ITEMS) {
            config.max_pending_items = raw.trim().parse().map_err(|_| {
                AppError::Config(format!(
                    "{} must be a non-negative integer, got {:?}",
                    ENV_MAX_PENDING_ITEMS, raw
                ))
            })?;
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = raw.parse()?;
        }

        Ok(config)
    }
}
