//! Song records: one playable item as seen by the client.
//!
//! A `Song` carries the daemon identifier (if the daemon knows about it) and
//! two tag maps, one for display and one derived for ordering.

mod model;
mod sort_tags;

pub use model::*;
