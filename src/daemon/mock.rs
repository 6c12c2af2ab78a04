//! `mockall` double for `DaemonClient`, shared by unit tests.

use mockall::mock;

use super::{DaemonClient, DaemonError};
use crate::song::Attrs;

mock! {
    pub Daemon {}
    impl DaemonClient for Daemon {
        fn play(&self, position: Option<u32>) -> Result<(), DaemonError>;
        fn play_id(&self, id: u32) -> Result<(), DaemonError>;
        fn add_id(&self, uri: &str, position: Option<u32>) -> Result<u32, DaemonError>;
        fn queue(&self) -> Result<Vec<Attrs>, DaemonError>;
        fn library(&self) -> Result<Vec<Attrs>, DaemonError>;
        fn playlists(&self) -> Result<Vec<String>, DaemonError>;
        fn playlist(&self, name: &str) -> Result<Vec<Attrs>, DaemonError>;
        fn remove_playlist(&self, name: &str) -> Result<(), DaemonError>;
    }
}
