//! Ordered, lockable song collections.
//!
//! `Songlist` is the one concrete engine every view is built on. Variants
//! that need to tell the daemon about their destruction (stored playlists)
//! wrap it and implement `Lifecycle`.

mod error;
mod lifecycle;
mod model;

pub use error::SonglistError;
pub use lifecycle::{Lifecycle, Playlist};
pub use model::{Songlist, SonglistGuard};
