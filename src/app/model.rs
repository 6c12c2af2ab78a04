//! Application model types: `App` and `InputMode`.
//!
//! The `App` struct holds the open songlists, the cursor, the command line
//! being typed and the daemon connection. It is the `Context` commands run
//! against.

use std::sync::Arc;

use crate::commands::{self, Context};
use crate::daemon::DaemonClient;
use crate::song::Song;
use crate::songlist::{Lifecycle, Songlist};

/// Whether keys move the cursor or edit the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Command,
}

/// One line of feedback shown in the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// The main application model.
pub struct App {
    lists: Vec<Arc<dyn Lifecycle>>,
    active: usize,
    pub cursor: usize,
    pub mode: InputMode,
    pub input: String,
    pub message: Option<StatusMessage>,
    daemon: Option<Arc<dyn DaemonClient>>,
}

impl App {
    /// Create a new `App` showing `lists`, the first one active.
    ///
    /// An empty `lists` gets a single empty list so there is always an
    /// active songlist.
    pub fn new(mut lists: Vec<Arc<dyn Lifecycle>>, daemon: Option<Arc<dyn DaemonClient>>) -> Self {
        if lists.is_empty() {
            lists.push(Arc::new(Songlist::new("Empty")));
        }
        Self {
            lists,
            active: 0,
            cursor: 0,
            mode: InputMode::Normal,
            input: String::new(),
            message: None,
            daemon,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.daemon.is_some()
    }

    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Zero-based position of the active list.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Switch to the next open list, wrapping around, and reset the cursor.
    pub fn next_list(&mut self) {
        self.active = (self.active + 1) % self.lists.len();
        self.cursor = 0;
    }

    /// Discard the active list, notifying whatever backs it.
    ///
    /// The last open list cannot be closed.
    pub fn close_active(&mut self) {
        if self.lists.len() < 2 {
            self.set_error("cannot close the last songlist");
            return;
        }
        let list = self.lists.remove(self.active);
        let name = list.songlist().name();
        if self.active >= self.lists.len() {
            self.active = 0;
        }
        self.cursor = 0;
        match list.delete() {
            Ok(()) => self.set_info(format!("closed '{name}'")),
            Err(e) => {
                log::warn!("closing '{name}' failed: {e}");
                self.set_error(format!("closing '{name}': {e}"));
            }
        }
    }

    /// Move the cursor down, wrapping to the top.
    pub fn next(&mut self) {
        let len = self.active_songlist().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn prev(&mut self) {
        let len = self.active_songlist().len();
        if len > 0 {
            self.cursor = if self.cursor == 0 {
                len - 1
            } else {
                self.cursor - 1
            };
        }
    }

    pub fn top(&mut self) {
        self.cursor = 0;
    }

    pub fn bottom(&mut self) {
        self.cursor = self.active_songlist().len().saturating_sub(1);
    }

    /// Keep the cursor inside the active list after it shrank.
    pub fn clamp_cursor(&mut self) {
        let len = self.active_songlist().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    /// Start typing a command line.
    pub fn enter_command_mode(&mut self) {
        self.mode = InputMode::Command;
        self.input.clear();
    }

    /// Abandon the command line being typed.
    pub fn cancel_command(&mut self) {
        self.mode = InputMode::Normal;
        self.input.clear();
    }

    pub fn push_input_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Delete the last character; leaves command mode when the line is empty.
    pub fn pop_input_char(&mut self) {
        if self.input.pop().is_none() {
            self.cancel_command();
        }
    }

    /// Run the typed command line and leave command mode.
    pub fn submit_command(&mut self) {
        let line = std::mem::take(&mut self.input);
        self.mode = InputMode::Normal;
        self.execute(&line);
    }

    /// Run `line` and report the outcome in the status bar.
    pub fn execute(&mut self, line: &str) {
        match commands::run(line, &*self) {
            Ok(()) => {
                if !line.trim().is_empty() {
                    self.set_info(line.trim().to_string());
                }
            }
            Err(e) => {
                log::warn!("'{}' failed: {e}", line.trim());
                self.set_error(format!("{}: {e}", line.trim()));
            }
        }
        self.clamp_cursor();
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.message = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.message = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }
}

impl Context for App {
    fn active_songlist(&self) -> &Songlist {
        self.lists[self.active].songlist()
    }

    fn cursor_song(&self) -> Option<Song> {
        self.active_songlist().song(self.cursor)
    }

    fn daemon(&self) -> Option<&dyn DaemonClient> {
        self.daemon.as_deref()
    }
}
