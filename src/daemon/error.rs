use std::io;
use std::time::Duration;

use mpd_client::client::{CommandError, ConnectionError};

/// Errors reported by a daemon client.
#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot connect to daemon: {0}")]
    Connect(#[from] ConnectionError),

    #[error("daemon request failed: {0}")]
    Command(#[from] CommandError),

    #[error("daemon did not answer '{command}' within {after:?}")]
    Timeout {
        command: &'static str,
        after: Duration,
    },

    #[error("protocol error: {0}")]
    Protocol(String),
}
