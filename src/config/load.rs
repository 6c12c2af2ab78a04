use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then lets environment
/// variables (prefix `LENTO__`) override it, and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("LENTO")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("ui.columns")
                .with_list_parse_key("sort.default_fields")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.daemon.port == 0 {
            return Err("daemon.port must be non-zero".to_string());
        }
        if self.daemon.refresh_ms < 100 {
            return Err("daemon.refresh_ms must be >= 100".to_string());
        }
        if self.daemon.timeout_ms == 0 {
            return Err("daemon.timeout_ms must be non-zero".to_string());
        }
        if self.ui.columns.is_empty() {
            return Err("ui.columns must name at least one tag".to_string());
        }
        if self.sort.default_fields.is_empty() {
            return Err("sort.default_fields must name at least one tag".to_string());
        }
        Ok(())
    }

    /// Render these settings as a TOML document.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Resolve the config path from `LENTO_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("LENTO_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/lento/config.toml`
/// or `~/.config/lento/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("lento").join("config.toml"))
}
