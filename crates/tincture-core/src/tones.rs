// ABOUTME: Per-mode target lightness and per-role vibrancy used to synthesize colors
// ABOUTME: Also holds the default hues for status colors

use tincture_types::{Role, VibrancyOverrides};

/// Target OKLCH lightness for each base role in one mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneTable {
    pub text: f64,
    pub background: f64,
    pub primary: f64,
    pub container: f64,
    pub accent: f64,
}

impl ToneTable {
    pub const LIGHT: ToneTable = ToneTable {
        text: 0.22,
        background: 0.98,
        primary: 0.50,
        container: 0.92,
        accent: 0.52,
    };

    pub const DARK: ToneTable = ToneTable {
        text: 0.93,
        background: 0.16,
        primary: 0.75,
        container: 0.26,
        accent: 0.78,
    };

    pub const fn for_mode(is_dark: bool) -> ToneTable {
        if is_dark { Self::DARK } else { Self::LIGHT }
    }

    /// Status colors share the primary lightness
    pub const fn states(&self) -> f64 {
        self.primary
    }

    /// Target lightness for a base or state role
    pub fn for_role(&self, role: Role) -> Option<f64> {
        match role {
            Role::Text => Some(self.text),
            Role::Background => Some(self.background),
            Role::Primary => Some(self.primary),
            Role::Container => Some(self.container),
            Role::Accent => Some(self.accent),
            Role::Success | Role::Error | Role::Warning => Some(self.states()),
            _ => None,
        }
    }
}

/// Fraction of the maximum in-gamut chroma each role is synthesized with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vibrancy {
    pub text: f64,
    pub background: f64,
    pub primary: f64,
    pub container: f64,
    pub accent: f64,
    pub states: f64,
}

impl Default for Vibrancy {
    fn default() -> Self {
        Self {
            text: 0.15,
            background: 0.08,
            primary: 0.85,
            container: 0.15,
            accent: 0.75,
            states: 0.75,
        }
    }
}

impl Vibrancy {
    /// Defaults with any provided overrides applied
    pub fn with_overrides(overrides: &VibrancyOverrides) -> Self {
        let defaults = Self::default();
        Self {
            text: overrides.text.unwrap_or(defaults.text),
            background: overrides.background.unwrap_or(defaults.background),
            primary: overrides.primary.unwrap_or(defaults.primary),
            container: overrides.container.unwrap_or(defaults.container),
            accent: overrides.accent.unwrap_or(defaults.accent),
            states: overrides.states.unwrap_or(defaults.states),
        }
    }

    pub fn for_role(&self, role: Role) -> Option<f64> {
        match role {
            Role::Text => Some(self.text),
            Role::Background => Some(self.background),
            Role::Primary => Some(self.primary),
            Role::Container => Some(self.container),
            Role::Accent => Some(self.accent),
            Role::Success | Role::Error | Role::Warning => Some(self.states),
            _ => None,
        }
    }
}

pub const SUCCESS_HUE: f64 = 155.0;
pub const ERROR_HUE: f64 = 25.0;
pub const WARNING_HUE: f64 = 70.0;

/// Hue a status role falls back to when no other hue is available
pub const fn default_state_hue(role: Role) -> Option<f64> {
    match role {
        Role::Success => Some(SUCCESS_HUE),
        Role::Error => Some(ERROR_HUE),
        Role::Warning => Some(WARNING_HUE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_tables() {
        assert_eq!(ToneTable::for_mode(false), ToneTable::LIGHT);
        assert_eq!(ToneTable::for_mode(true).background, 0.16);
        assert_eq!(ToneTable::DARK.for_role(Role::Warning), Some(0.75));
        assert_eq!(ToneTable::LIGHT.for_role(Role::Ring), None);
    }

    #[test]
    fn test_overrides_replace_only_given_roles() {
        let overrides = VibrancyOverrides {
            primary: Some(0.4),
            states: Some(0.2),
            ..Default::default()
        };
        let vibrancy = Vibrancy::with_overrides(&overrides);
        assert_eq!(vibrancy.primary, 0.4);
        assert_eq!(vibrancy.for_role(Role::Error), Some(0.2));
        assert_eq!(vibrancy.accent, Vibrancy::default().accent);
    }

    #[test]
    fn test_default_state_hues() {
        assert_eq!(default_state_hue(Role::Success), Some(155.0));
        assert_eq!(default_state_hue(Role::Primary), None);
    }
}
