// ABOUTME: Logging settings for the tincture tools and their environment overrides
// ABOUTME: Levels, per-target directives, stderr console format and optional log file

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Environment variable holding a global level, or a RUST_LOG style directive list
pub const ENV_LEVEL: &str = "TINCTURE_LOG";
/// Any value switches console output to JSON lines
pub const ENV_JSON: &str = "TINCTURE_LOG_JSON";
/// Any value silences console output
pub const ENV_NO_CONSOLE: &str = "TINCTURE_LOG_NO_CONSOLE";
/// Enables the log file; a non-empty value replaces its path
pub const ENV_FILE: &str = "TINCTURE_LOG_FILE";

/// A `tracing::Level` that reads and writes as a lowercase name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogLevel(pub Level);

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_log_level(s).map(LogLevel)
    }
}

impl TryFrom<String> for LogLevel {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_string()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.as_str().to_ascii_lowercase())
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        LogLevel(level)
    }
}

/// How records are rendered on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleFormat {
    Off,
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Daily-rotated log file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogFile {
    pub path: PathBuf,
    /// Rotated files kept on disk
    pub keep: usize,
}

impl Default for LogFile {
    fn default() -> Self {
        Self {
            path: default_log_path(),
            keep: 5,
        }
    }
}

/// `<config_dir>/tincture/tincture.log`, or the working directory when there is no config dir
pub fn default_log_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("tincture"))
        .unwrap_or_default()
        .join("tincture.log")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for every target without its own directive
    pub level: LogLevel,
    pub console: ConsoleFormat,
    /// Per-target levels, e.g. `tincture_core = "debug"`
    pub targets: BTreeMap<String, LogLevel>,
    /// Written only when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<LogFile>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(Level::WARN),
            console: ConsoleFormat::default(),
            targets: BTreeMap::new(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Defaults with the process environment applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = LogLevel(level);
        self
    }

    pub fn with_target(mut self, target: impl Into<String>, level: Level) -> Self {
        self.targets.insert(target.into(), LogLevel(level));
        self
    }

    /// Apply overrides read through `lookup`.
    ///
    /// `TINCTURE_LOG` wins over `RUST_LOG`; both accept `level` or
    /// `level,target=level,...`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(directives) = lookup(ENV_LEVEL) {
            self.apply_directives(&directives)
                .with_context(|| format!("Invalid {ENV_LEVEL} value `{directives}`"))?;
        } else if let Some(directives) = lookup("RUST_LOG") {
            self.apply_directives(&directives)
                .with_context(|| format!("Invalid RUST_LOG value `{directives}`"))?;
        }

        if lookup(ENV_JSON).is_some() {
            self.console = ConsoleFormat::Json;
        }
        if lookup(ENV_NO_CONSOLE).is_some() {
            self.console = ConsoleFormat::Off;
        }
        if let Some(path) = lookup(ENV_FILE) {
            let mut file = self.file.take().unwrap_or_default();
            if !path.trim().is_empty() {
                file.path = PathBuf::from(path.trim());
            }
            self.file = Some(file);
        }

        Ok(())
    }

    fn apply_directives(&mut self, directives: &str) -> Result<()> {
        for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((target, level)) => {
                    self.targets
                        .insert(target.trim().to_string(), level.parse()?);
                }
                None => self.level = directive.parse()?,
            }
        }
        Ok(())
    }

    /// The filter directive string, global level first
    pub fn directives(&self) -> String {
        std::iter::once(self.level.to_string())
            .chain(
                self.targets
                    .iter()
                    .map(|(target, level)| format!("{target}={level}")),
            )
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Parse a level name, case-insensitively; `warning` is accepted for `warn`.
pub fn parse_log_level(s: &str) -> Result<Level> {
    Ok(match s.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        other => bail!("unknown log level `{other}` (expected trace, debug, info, warn or error)"),
    })
}
