//! Daemon client capability.
//!
//! Commands and the runtime only talk to the music daemon through the
//! `DaemonClient` trait. `mpd::MpdClient` implements it with `mpd_client`.

mod error;
pub mod mpd;

pub use error::DaemonError;

use crate::song::Attrs;

/// Semantic operations the client needs from the daemon.
///
/// Calls block until the daemon has answered. Implementations must be
/// shareable between the UI thread and background refresh.
pub trait DaemonClient: Send + Sync {
    /// Start playback at queue `position`, or resume from the current
    /// position when `None`.
    fn play(&self, position: Option<u32>) -> Result<(), DaemonError>;

    /// Start playback of the queued song with identifier `id`.
    fn play_id(&self, id: u32) -> Result<(), DaemonError>;

    /// Add `uri` to the queue (appended when `position` is `None`) and
    /// return the identifier the daemon assigned to it.
    fn add_id(&self, uri: &str, position: Option<u32>) -> Result<u32, DaemonError>;

    /// Current queue contents, one attribute set per song.
    fn queue(&self) -> Result<Vec<Attrs>, DaemonError>;

    /// Every song in the daemon database.
    fn library(&self) -> Result<Vec<Attrs>, DaemonError>;

    /// Names of the stored playlists.
    fn playlists(&self) -> Result<Vec<String>, DaemonError>;

    /// Contents of the stored playlist called `name`.
    fn playlist(&self, name: &str) -> Result<Vec<Attrs>, DaemonError>;

    /// Delete the stored playlist called `name`.
    fn remove_playlist(&self, name: &str) -> Result<(), DaemonError>;
}

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod tests;
