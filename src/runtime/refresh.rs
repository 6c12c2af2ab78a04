use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::daemon::DaemonClient;
use crate::songlist::{Songlist, SonglistError};

/// Replace the contents of `queue` with the daemon's current queue.
///
/// The whole swap happens under one lock so readers never see a
/// half-filled list. A sort the user applied to the view is reapplied.
pub fn refresh_queue(queue: &Songlist, daemon: &dyn DaemonClient) -> Result<(), SonglistError> {
    let attrs = daemon.queue()?;
    let mut list = queue.lock();
    let fields = list.sort_fields().to_vec();
    list.clear();
    list.add_from_attrs(&attrs);
    if !fields.is_empty() {
        list.sort(&fields)?;
    }
    Ok(())
}

/// Background thread keeping the queue view in sync with the daemon.
pub struct QueueRefresher {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl QueueRefresher {
    pub fn spawn(queue: Arc<Songlist>, daemon: Arc<dyn DaemonClient>, interval: Duration) -> Self {
        let (stop, stopped) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            loop {
                match stopped.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if let Err(e) = refresh_queue(&queue, daemon.as_ref()) {
                            log::warn!("queue refresh failed: {e}");
                        }
                    }
                    // Stop requested or the refresher was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        Self {
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Ask the thread to exit and wait for it.
    pub fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for QueueRefresher {
    fn drop(&mut self) {
        self.stop();
    }
}
