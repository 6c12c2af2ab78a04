//! lento: a terminal client for the Music Player Daemon.
//!
//! The engine lives in [`songlist`] and [`song`]; [`commands`] runs typed
//! command lines against it and talks to the daemon through
//! [`daemon::DaemonClient`]. [`runtime::run`] wires everything to a
//! terminal UI.

pub mod app;
pub mod commands;
pub mod config;
pub mod daemon;
pub mod input;
pub mod runtime;
pub mod song;
pub mod songlist;
pub mod ui;
