// ABOUTME: Configuration data types
// ABOUTME: Pure data structures deserialized from tincture.toml

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::harmony::HarmonyMode;
use crate::palette::LockedColors;

/// Per-role vibrancy overrides, each a fraction of the maximum in-gamut chroma
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VibrancyOverrides {
    pub text: Option<f64>,
    pub background: Option<f64>,
    pub primary: Option<f64>,
    pub container: Option<f64>,
    pub accent: Option<f64>,
    /// Shared by success, error and warning
    pub states: Option<f64>,
}

impl VibrancyOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TinctureConfig {
    pub generator: GeneratorConfig,
    /// Role name to hex color, honored by every derivation
    pub locks: LockedColors,
    pub export: ExportConfig,
}

/// Palette generator settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub harmony: HarmonyMode,
    pub dark_mode: bool,
    pub vibrancy: VibrancyOverrides,
}

/// Text export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Css,
    Scss,
    Tailwind,
    Json,
}

impl ExportFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "scss" | "sass" => Ok(ExportFormat::Scss),
            "tailwind" => Ok(ExportFormat::Tailwind),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ColorError::unknown_format(s)),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    /// CSS selector wrapping the custom properties
    pub selector: String,
    /// Variable name prefix, e.g. `color` for `--color-primary`
    pub prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            selector: default_selector(),
            prefix: default_prefix(),
        }
    }
}

fn default_selector() -> String {
    ":root".to_string()
}

fn default_prefix() -> String {
    "color".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::role::Role;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: TinctureConfig = toml::from_str("").unwrap();
        assert_eq!(config, TinctureConfig::default());
        assert_eq!(config.export.selector, ":root");
        assert_eq!(config.export.prefix, "color");
        assert!(config.generator.vibrancy.is_empty());
    }

    #[test]
    fn test_full_toml() {
        let config: TinctureConfig = toml::from_str(
            r##"
            [generator]
            harmony = "monochromatic"
            dark_mode = true

            [generator.vibrancy]
            primary = 0.6

            [locks]
            primary = "#3b82f6"
            onAccent = "#101010"

            [export]
            format = "scss"
            "##,
        )
        .unwrap();

        assert_eq!(config.generator.harmony, HarmonyMode::Monochromatic);
        assert!(config.generator.dark_mode);
        assert_eq!(config.generator.vibrancy.primary, Some(0.6));
        assert_eq!(config.generator.vibrancy.text, None);
        assert_eq!(
            config.locks.get(Role::Primary),
            Some(Rgb::new(0x3b, 0x82, 0xf6))
        );
        assert_eq!(config.locks.get(Role::OnAccent), Some(Rgb::new(16, 16, 16)));
        assert_eq!(config.export.format, ExportFormat::Scss);
        assert_eq!(config.export.selector, ":root");
    }

    #[test]
    fn test_invalid_lock_is_rejected() {
        let result = toml::from_str::<TinctureConfig>(
            r##"
            [locks]
            primary = "blue"
            "##,
        );
        assert!(result.is_err());

        let result = toml::from_str::<TinctureConfig>(
            r##"
            [locks]
            surface = "#ffffff"
            "##,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("Tailwind".parse::<ExportFormat>().unwrap(), ExportFormat::Tailwind);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
