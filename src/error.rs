use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, warn};

/// Domain-specific errors for the plugin browser core.
///
/// The search pipeline itself is infallible: malformed queries degrade to a
/// best-effort parse and category resolution always falls back to the
/// configured default. These variants cover the edges that touch the
/// filesystem (config files, record sources).
#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("record source '{name}' failed: {message}")]
    RecordSource { name: String, message: String },
}

pub type Result<T> = std::result::Result<T, ShelfError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the caller degrades gracefully
/// (config falls back to defaults, a record source contributes nothing).
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
