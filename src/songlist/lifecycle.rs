use std::sync::Arc;

use super::{Songlist, SonglistError};
use crate::daemon::DaemonClient;

/// A songlist variant with a destruction hook.
///
/// The app holds its open views as `Lifecycle` objects and calls
/// [`Lifecycle::delete`] when the user discards one.
pub trait Lifecycle: Send + Sync {
    fn songlist(&self) -> &Songlist;

    /// Notify whatever backs this list that it is being discarded.
    fn delete(&self) -> Result<(), SonglistError>;
}

/// Plain client-side lists have nothing to notify.
impl Lifecycle for Songlist {
    fn songlist(&self) -> &Songlist {
        self
    }

    fn delete(&self) -> Result<(), SonglistError> {
        Ok(())
    }
}

/// A stored playlist on the daemon.
///
/// Deleting the view removes the playlist from the daemon as well.
pub struct Playlist {
    list: Songlist,
    daemon: Arc<dyn DaemonClient>,
}

impl Playlist {
    pub fn new(list: Songlist, daemon: Arc<dyn DaemonClient>) -> Self {
        Self { list, daemon }
    }

    /// Load the stored playlist `name` from the daemon.
    pub fn load(name: &str, daemon: Arc<dyn DaemonClient>) -> Result<Self, SonglistError> {
        let attrs = daemon.playlist(name)?;
        Ok(Self::new(Songlist::from_attrs(name, &attrs), daemon))
    }
}

impl Lifecycle for Playlist {
    fn songlist(&self) -> &Songlist {
        &self.list
    }

    fn delete(&self) -> Result<(), SonglistError> {
        let name = self.list.name();
        self.daemon.remove_playlist(&name)?;
        log::info!("deleted stored playlist '{name}'");
        Ok(())
    }
}
