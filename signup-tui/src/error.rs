use std::io;

use thiserror::Error;

/// Errors that stop the terminal front end.
#[derive(Debug, Error)]
pub enum TuiError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("could not determine a cache directory for the log file")]
    NoCacheDir,
}
