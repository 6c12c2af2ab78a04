//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the open songlists, the
//! cursor and the command line state.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
