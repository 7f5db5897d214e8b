// ABOUTME: The fixed set of semantic color roles a palette assigns
// ABOUTME: Provides name mapping, ordering and on-role pairing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// A semantic color slot in a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Text,
    Background,
    Primary,
    Container,
    Accent,
    Success,
    Error,
    Warning,
    OnPrimary,
    OnContainer,
    OnAccent,
    OnSuccess,
    OnError,
    OnWarning,
    Border,
    Muted,
    Ring,
}

impl Role {
    /// Every role, in canonical palette order
    pub const ALL: [Role; 17] = [
        Role::Text,
        Role::Background,
        Role::Primary,
        Role::Container,
        Role::Accent,
        Role::Success,
        Role::Error,
        Role::Warning,
        Role::OnPrimary,
        Role::OnContainer,
        Role::OnAccent,
        Role::OnSuccess,
        Role::OnError,
        Role::OnWarning,
        Role::Border,
        Role::Muted,
        Role::Ring,
    ];

    /// Roles synthesized directly from tone tables
    pub const BASE: [Role; 5] = [
        Role::Text,
        Role::Background,
        Role::Primary,
        Role::Container,
        Role::Accent,
    ];

    /// Status colors with fixed default hues
    pub const STATES: [Role; 3] = [Role::Success, Role::Error, Role::Warning];

    /// Surfaces that get a paired readable foreground
    pub const SURFACES: [Role; 6] = [
        Role::Primary,
        Role::Container,
        Role::Accent,
        Role::Success,
        Role::Error,
        Role::Warning,
    ];

    /// camelCase name used in palette maps
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Text => "text",
            Role::Background => "background",
            Role::Primary => "primary",
            Role::Container => "container",
            Role::Accent => "accent",
            Role::Success => "success",
            Role::Error => "error",
            Role::Warning => "warning",
            Role::OnPrimary => "onPrimary",
            Role::OnContainer => "onContainer",
            Role::OnAccent => "onAccent",
            Role::OnSuccess => "onSuccess",
            Role::OnError => "onError",
            Role::OnWarning => "onWarning",
            Role::Border => "border",
            Role::Muted => "muted",
            Role::Ring => "ring",
        }
    }

    /// kebab-case name used for CSS custom properties and SCSS variables
    pub fn kebab_name(self) -> String {
        let mut out = String::with_capacity(self.as_str().len() + 1);
        for ch in self.as_str().chars() {
            if ch.is_ascii_uppercase() {
                out.push('-');
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// The foreground role paired with this surface, if any
    pub const fn on_role(self) -> Option<Role> {
        match self {
            Role::Primary => Some(Role::OnPrimary),
            Role::Container => Some(Role::OnContainer),
            Role::Accent => Some(Role::OnAccent),
            Role::Success => Some(Role::OnSuccess),
            Role::Error => Some(Role::OnError),
            Role::Warning => Some(Role::OnWarning),
            _ => None,
        }
    }

    pub const fn is_on_role(self) -> bool {
        matches!(
            self,
            Role::OnPrimary
                | Role::OnContainer
                | Role::OnAccent
                | Role::OnSuccess
                | Role::OnError
                | Role::OnWarning
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ColorError;

    /// Accepts the camelCase, kebab-case or snake_case spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ColorError::unknown_role(s))
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Role, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
            assert_eq!(role.kebab_name().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_alternate_spellings() {
        assert_eq!("on-primary".parse::<Role>().unwrap(), Role::OnPrimary);
        assert_eq!("on_warning".parse::<Role>().unwrap(), Role::OnWarning);
        assert_eq!("RING".parse::<Role>().unwrap(), Role::Ring);
        assert!("surface".parse::<Role>().is_err());
    }

    #[test]
    fn test_kebab_name() {
        assert_eq!(Role::OnContainer.kebab_name(), "on-container");
        assert_eq!(Role::Background.kebab_name(), "background");
    }

    #[test]
    fn test_on_role_pairs() {
        for surface in Role::SURFACES {
            let on = surface.on_role().unwrap();
            assert!(on.is_on_role());
        }
        assert_eq!(Role::Text.on_role(), None);
        assert_eq!(Role::Ring.on_role(), None);
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&Role::OnAccent).unwrap();
        assert_eq!(json, "\"onAccent\"");
        let role: Role = serde_json::from_str("\"muted\"").unwrap();
        assert_eq!(role, Role::Muted);
    }
}
