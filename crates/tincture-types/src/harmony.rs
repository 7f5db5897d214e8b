// ABOUTME: Harmony modes relating the accent hue to the primary hue
// ABOUTME: Parsed from config files and command-line flags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyMode {
    /// Accent sits opposite the primary on the hue circle
    #[default]
    Complementary,
    /// Accent shares the primary hue
    Monochromatic,
}

impl HarmonyMode {
    /// Hue offset in degrees from primary to accent
    pub const fn offset_degrees(self) -> f64 {
        match self {
            HarmonyMode::Complementary => 180.0,
            HarmonyMode::Monochromatic => 0.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HarmonyMode::Complementary => "complementary",
            HarmonyMode::Monochromatic => "monochromatic",
        }
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "complementary" => Ok(HarmonyMode::Complementary),
            "monochromatic" | "mono" => Ok(HarmonyMode::Monochromatic),
            _ => Err(ColorError::unknown_harmony(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(HarmonyMode::Complementary.offset_degrees(), 180.0);
        assert_eq!(HarmonyMode::Monochromatic.offset_degrees(), 0.0);
        assert_eq!(HarmonyMode::default(), HarmonyMode::Complementary);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "Monochromatic".parse::<HarmonyMode>().unwrap(),
            HarmonyMode::Monochromatic
        );
        let err = "triadic".parse::<HarmonyMode>().unwrap_err();
        assert!(matches!(err, ColorError::UnknownHarmony { .. }));
    }
}
