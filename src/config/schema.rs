use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/lento/config.toml` or `~/.config/lento/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `LENTO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub daemon: DaemonSettings,
    pub ui: UiSettings,
    pub sort: SortSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DaemonSettings {
    /// Host name or address of the MPD server.
    pub host: String,
    pub port: u16,
    /// Sent with `password` right after connecting, when set.
    pub password: Option<String>,
    /// How often the queue view is refreshed from the daemon (milliseconds).
    pub refresh_ms: u64,
    /// Give up on a daemon request after this long (milliseconds).
    pub timeout_ms: u64,
}

impl Default for DaemonSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6600,
            password: None,
            refresh_ms: 1000,
            timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Which song tags to show for each row, and in what order.
    ///
    /// Example: ["artist", "title", "album"]
    pub columns: Vec<String>,

    /// Separator used to join `columns`.
    pub column_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " lento ".to_string(),
            columns: vec!["artist".into(), "title".into(), "album".into()],
            column_separator: " | ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SortSettings {
    /// Tags the library is sorted by on startup.
    ///
    /// Each tag is applied as a stable pass over the previous one, so list
    /// the least significant tag first.
    pub default_fields: Vec<String>,
}

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            default_fields: ["file", "track", "disc", "album", "date", "artist"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// `env_logger` filter directives, e.g. `info` or `lento=debug`.
    pub level: String,
    /// Log file. The terminal belongs to the UI, so nothing is logged when
    /// this is unset.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
