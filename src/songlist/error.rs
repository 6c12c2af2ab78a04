use crate::daemon::DaemonError;

/// Errors produced by songlist operations.
#[derive(Debug, thiserror::Error)]
pub enum SonglistError {
    #[error("index {index} out of bounds for songlist of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("cannot truncate songlist of length {len} to {requested}")]
    InvalidLength { requested: usize, len: usize },

    #[error("cannot find song in songlist '{name}'")]
    NotFound { name: String },

    #[error("cannot sort without sort criteria")]
    NoSortFields,

    #[error(transparent)]
    Daemon(#[from] DaemonError),
}
