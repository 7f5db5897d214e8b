// ABOUTME: Theme domain updates and events for palette editing sessions
// ABOUTME: Updates name exactly one change; events are immutable facts about what happened

use serde::{Deserialize, Serialize};
use tincture_types::{HarmonyMode, Palette, Rgb, Role};

/// A single requested change to a theme session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ThemeUpdate {
    /// Set one role to a color; edited roles become locked
    SetRole { role: Role, color: Rgb },

    /// Lock a role at its current value
    Lock { role: Role },

    /// Release a role so derivation may overwrite it
    Unlock { role: Role },

    /// Switch between light and dark mode, adapting the palette
    SetDarkMode { is_dark: bool },

    /// Change how the accent hue relates to the primary hue
    SetHarmony { harmony: HarmonyMode },

    /// Rebuild the palette from locked colors, or a random hue when none carry one
    Regenerate { seed: Option<u64> },
}

impl ThemeUpdate {
    /// The role this update targets, if it targets exactly one
    pub fn role(&self) -> Option<Role> {
        match self {
            ThemeUpdate::SetRole { role, .. }
            | ThemeUpdate::Lock { role }
            | ThemeUpdate::Unlock { role } => Some(*role),
            _ => None,
        }
    }
}

/// Theme domain events
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    RoleChanged {
        role: Role,
        previous: Rgb,
        current: Rgb,
    },

    LockChanged {
        role: Role,
        locked: bool,
    },

    ModeChanged {
        is_dark: bool,
    },

    HarmonyChanged {
        harmony: HarmonyMode,
    },

    PaletteRegenerated {
        /// Seed color the new palette was derived from
        base: Rgb,
        palette: Box<Palette>,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::RoleChanged { .. } => "role_changed",
            Event::LockChanged { .. } => "lock_changed",
            Event::ModeChanged { .. } => "mode_changed",
            Event::HarmonyChanged { .. } => "harmony_changed",
            Event::PaletteRegenerated { .. } => "palette_regenerated",
        }
    }
}
