use std::io;
use std::path::PathBuf;

use flick::ComponentError;
use thiserror::Error;

/// Errors that stop the playground.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),

    #[error("no log file location: set FLICK_LOG_FILE or a home directory")]
    NoLogFile,

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("component error: {0}")]
    Component(#[from] ComponentError),
}
