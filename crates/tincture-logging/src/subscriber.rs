// ABOUTME: Installs the global tracing subscriber from a LoggingConfig
// ABOUTME: Stacks console and file layers beneath a reloadable level filter

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;

use crate::config::LoggingConfig;
use crate::layers::{console_layer, file_layer, level_filter};
use crate::reload::LoggingReloadHandle;

/// Flushes the log file when dropped; hold it for the life of the process.
#[must_use = "dropping the guard stops file logging"]
#[derive(Default)]
pub struct LoggingGuard {
    file: Option<WorkerGuard>,
}

impl LoggingGuard {
    pub fn has_file_output(&self) -> bool {
        self.file.is_some()
    }
}

/// Install the global subscriber and return a handle for changing levels later.
///
/// Fails when a global subscriber is already set.
pub fn install(config: LoggingConfig) -> Result<(LoggingReloadHandle, LoggingGuard)> {
    let (filter, filter_handle) = reload::Layer::new(level_filter(&config)?);

    let (file, guard) = match &config.file {
        Some(file) => {
            let (layer, guard) = file_layer(file).context("Failed to set up file logging")?;
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer(config.console))
        .with(file)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    tracing::debug!(
        filter = %config.directives(),
        console = ?config.console,
        file = ?config.file.as_ref().map(|f| f.path.display().to_string()),
        "Logging initialized"
    );

    Ok((
        LoggingReloadHandle::new(filter_handle, config),
        LoggingGuard { file: guard },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_guard_has_no_file() {
        assert!(!LoggingGuard::default().has_file_output());
    }

    #[test]
    fn test_second_install_fails() {
        // Whichever install runs first in this process claims the global slot
        let first = install(LoggingConfig::default());
        let second = install(LoggingConfig::default());
        assert!(first.is_err() || second.is_err());
    }
}
