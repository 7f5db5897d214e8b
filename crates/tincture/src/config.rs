// ABOUTME: Loads tincture.toml from the user config directory or an explicit path
// ABOUTME: A missing default file means defaults; a malformed file is an error

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tincture_logging::debug;
use tincture_types::TinctureConfig;

const CONFIG_DIR: &str = "tincture";
const CONFIG_FILE: &str = "tincture.toml";

/// `<config_dir>/tincture/tincture.toml`, when the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration.
///
/// An explicit path must exist. The default location is optional.
pub fn load(explicit: Option<&Path>) -> Result<TinctureConfig> {
    match explicit {
        Some(path) => load_from_file(path),
        None => match default_config_path() {
            Some(path) if path.exists() => load_from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(TinctureConfig::default())
            }
        },
    }
}

pub fn load_from_file(path: &Path) -> Result<TinctureConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: TinctureConfig = toml::from_str(&contents)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    debug!(path = %path.display(), locks = config.locks.len(), "Loaded config");
    Ok(config)
}
