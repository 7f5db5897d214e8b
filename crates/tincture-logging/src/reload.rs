// ABOUTME: Changes log levels of a running process without reinstalling the subscriber
// ABOUTME: Tracks the active LoggingConfig behind a shared lock

use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::RwLock;
use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, reload};

use crate::config::{LogLevel, LoggingConfig};
use crate::layers::level_filter;

type FilterHandle = reload::Handle<EnvFilter, Registry>;

#[derive(Clone)]
pub struct LoggingReloadHandle {
    filter: FilterHandle,
    config: Arc<RwLock<LoggingConfig>>,
}

impl LoggingReloadHandle {
    pub fn new(filter: FilterHandle, config: LoggingConfig) -> Self {
        Self {
            filter,
            config: Arc::new(RwLock::new(config)),
        }
    }

    pub fn set_level(&self, level: Level) -> Result<()> {
        self.update(|config| config.level = LogLevel(level))?;
        tracing::info!(level = %level, "Log level changed");
        Ok(())
    }

    pub fn set_target_level(&self, target: &str, level: Level) -> Result<()> {
        self.update(|config| {
            config.targets.insert(target.to_string(), LogLevel(level));
        })?;
        tracing::info!(target_name = %target, level = %level, "Target log level changed");
        Ok(())
    }

    /// Re-read levels from the environment; outputs stay as installed.
    pub fn reload_from_env(&self) -> Result<()> {
        let fresh = LoggingConfig::from_env().context("Failed to read logging environment")?;
        self.update(|config| {
            config.level = fresh.level;
            config.targets = fresh.targets;
        })
    }

    /// Snapshot of the active configuration
    pub fn config(&self) -> LoggingConfig {
        self.config.read().clone()
    }

    /// Mutate the config and swap in the matching filter; the config is left
    /// untouched when the new filter is rejected.
    fn update(&self, change: impl FnOnce(&mut LoggingConfig)) -> Result<()> {
        let mut config = self.config.write();
        let mut next = config.clone();
        change(&mut next);
        self.filter
            .reload(level_filter(&next)?)
            .context("Failed to swap log filter")?;
        *config = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::prelude::*;

    #[test]
    fn test_levels_change_on_a_scoped_subscriber() {
        let (filter, handle) =
            reload::Layer::new(level_filter(&LoggingConfig::default()).unwrap());
        let subscriber = tracing_subscriber::registry().with(filter);
        let reload = LoggingReloadHandle::new(handle, LoggingConfig::default());

        tracing::subscriber::with_default(subscriber, || {
            reload.set_level(Level::DEBUG).unwrap();
            reload.set_target_level("tincture_core", Level::TRACE).unwrap();
        });

        let config = reload.config();
        assert_eq!(config.level, LogLevel(Level::DEBUG));
        assert_eq!(config.targets["tincture_core"], LogLevel(Level::TRACE));
    }
}
