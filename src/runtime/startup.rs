use std::sync::Arc;
use std::time::Duration;

use crate::config::{DaemonSettings, SortSettings};
use crate::daemon::mpd::MpdClient;
use crate::daemon::{DaemonClient, DaemonError};
use crate::songlist::{Lifecycle, Playlist, Songlist};

pub const QUEUE_NAME: &str = "Queue";
pub const LIBRARY_NAME: &str = "Library";

/// Connect and authenticate. A failure leaves the app running offline.
pub fn connect(settings: &DaemonSettings) -> Result<Arc<MpdClient>, DaemonError> {
    let client = MpdClient::connect(
        &settings.host,
        settings.port,
        settings.password.as_deref(),
        Duration::from_millis(settings.timeout_ms),
    )?;
    log::info!("connected to {}:{}", settings.host, settings.port);
    Ok(Arc::new(client))
}

/// The lists shown at startup.
pub struct InitialLists {
    /// Refreshed in the background, hence shared separately.
    pub queue: Arc<Songlist>,
    pub views: Vec<Arc<dyn Lifecycle>>,
}

/// Build the queue, the sorted library and one view per stored playlist.
///
/// Every load failure is logged and degrades to an empty or missing list.
pub fn load_lists(daemon: Option<&Arc<dyn DaemonClient>>, sort: &SortSettings) -> InitialLists {
    let queue = Arc::new(Songlist::new(QUEUE_NAME));
    let library = Arc::new(Songlist::new(LIBRARY_NAME));
    let mut views: Vec<Arc<dyn Lifecycle>> = Vec::new();
    views.push(queue.clone());
    views.push(library.clone());

    let Some(daemon) = daemon else {
        return InitialLists { queue, views };
    };

    match daemon.queue() {
        Ok(attrs) => queue.add_from_attrs(&attrs),
        Err(e) => log::warn!("loading queue failed: {e}"),
    }

    match daemon.library() {
        Ok(attrs) => {
            library.add_from_attrs(&attrs);
            if let Err(e) = library.sort(&sort.default_fields) {
                log::warn!("sorting library failed: {e}");
            }
        }
        Err(e) => log::warn!("loading library failed: {e}"),
    }

    match daemon.playlists() {
        Ok(names) => {
            for name in names {
                match Playlist::load(&name, Arc::clone(daemon)) {
                    Ok(playlist) => views.push(Arc::new(playlist)),
                    Err(e) => log::warn!("loading playlist '{name}' failed: {e}"),
                }
            }
        }
        Err(e) => log::warn!("listing playlists failed: {e}"),
    }

    InitialLists { queue, views }
}
