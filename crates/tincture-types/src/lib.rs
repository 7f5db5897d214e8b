// ABOUTME: Pure data types with no cross-crate dependencies
// ABOUTME: Foundation layer for all other tincture crates

pub mod color;
pub mod config;
pub mod error;
pub mod harmony;
pub mod palette;
pub mod role;

// Re-export commonly used types
pub use color::{Hsl, Hsv, Rgb};
pub use config::{ExportConfig, ExportFormat, GeneratorConfig, TinctureConfig, VibrancyOverrides};
pub use error::{ColorError, Result};
pub use harmony::HarmonyMode;
pub use palette::{LockedColors, LockedRoles, Palette};
pub use role::Role;
