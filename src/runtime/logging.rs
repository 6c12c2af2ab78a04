use std::fs::OpenOptions;

use env_logger::{Builder, Target};

use crate::config::LogSettings;

/// Route `log` output to the configured file.
///
/// Without a file nothing is logged: the terminal is owned by the UI.
pub fn init_logging(settings: &LogSettings) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &settings.file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Builder::new()
        .parse_filters(&settings.level)
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    log::info!("lento {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
