use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type shared by every crate in the workspace.
///
/// Only the conditions that end a run live here. Per-field and per-device
/// problems are resolved to "unavailable" where they happen and never become
/// a `BattError`.
#[derive(Debug, Error)]
pub enum BattError {
    #[error("config error: {0}")]
    Config(String),

    #[error("unrecognised character -- '{0}'")]
    InvalidField(char),

    #[error("battery name must be a non-empty string for argument '-n'.")]
    EmptyName,

    #[error("couldn't open directory \"{}\": {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = BattError> = std::result::Result<T, E>;
