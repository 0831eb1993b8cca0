//! Playground configuration.

use std::path::PathBuf;

use simplelog::LevelFilter;

use crate::error::PlaygroundError;
use crate::paths;

/// Environment variable holding the log level filter.
pub const LOG_LEVEL_VAR: &str = "FLICK_LOG";

/// Environment variable overriding the log file path.
pub const LOG_FILE_VAR: &str = "FLICK_LOG_FILE";

/// Environment variable that, when set, keeps the rendered tree off stdout.
pub const QUIET_VAR: &str = "FLICK_QUIET";

/// Settings for one playground run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundConfig {
    /// Most verbose level written to the log file.
    pub log_level: LevelFilter,

    /// Where to write the log. `None` falls back to the cache directory.
    pub log_file: Option<PathBuf>,

    /// Print the rendered tree to stdout after each step.
    pub print_tree: bool,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Debug,
            log_file: None,
            print_tree: true,
        }
    }
}

impl PlaygroundConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, PlaygroundError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`, which maps a variable name to its
    /// value. Empty values are ignored.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, PlaygroundError> {
        let mut config = Self::new();
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(level) = present(LOG_LEVEL_VAR) {
            let level = level
                .trim()
                .parse::<LevelFilter>()
                .map_err(|_| PlaygroundError::InvalidLogLevel(level.clone()))?;
            config = config.log_level(level);
        }
        if let Some(path) = present(LOG_FILE_VAR) {
            config = config.log_file(path);
        }
        if present(QUIET_VAR).is_some() {
            config = config.quiet();
        }
        Ok(config)
    }

    /// Set the log level filter.
    pub fn log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Write the log to `path` instead of the cache directory.
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Keep the rendered tree off stdout.
    pub fn quiet(mut self) -> Self {
        self.print_tree = false;
        self
    }

    /// The log file to open: the configured one, or `<cache dir>/latest.log`.
    pub fn resolved_log_file(&self) -> Result<PathBuf, PlaygroundError> {
        self.log_file
            .clone()
            .or_else(paths::log_file)
            .ok_or(PlaygroundError::NoLogFile)
    }
}
