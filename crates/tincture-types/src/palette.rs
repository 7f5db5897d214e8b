// ABOUTME: Complete role-to-color palette and the user lock collections
// ABOUTME: Serializes as a flat camelCase map of role names to hex strings

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::color::Rgb;
use crate::role::Role;

/// A full palette: one color for every [`Role`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub text: Rgb,
    pub background: Rgb,
    pub primary: Rgb,
    pub container: Rgb,
    pub accent: Rgb,
    pub success: Rgb,
    pub error: Rgb,
    pub warning: Rgb,
    pub on_primary: Rgb,
    pub on_container: Rgb,
    pub on_accent: Rgb,
    pub on_success: Rgb,
    pub on_error: Rgb,
    pub on_warning: Rgb,
    pub border: Rgb,
    pub muted: Rgb,
    pub ring: Rgb,
}

impl Palette {
    /// Build a palette by evaluating `f` once per role in canonical order
    pub fn from_fn(mut f: impl FnMut(Role) -> Rgb) -> Self {
        Self {
            text: f(Role::Text),
            background: f(Role::Background),
            primary: f(Role::Primary),
            container: f(Role::Container),
            accent: f(Role::Accent),
            success: f(Role::Success),
            error: f(Role::Error),
            warning: f(Role::Warning),
            on_primary: f(Role::OnPrimary),
            on_container: f(Role::OnContainer),
            on_accent: f(Role::OnAccent),
            on_success: f(Role::OnSuccess),
            on_error: f(Role::OnError),
            on_warning: f(Role::OnWarning),
            border: f(Role::Border),
            muted: f(Role::Muted),
            ring: f(Role::Ring),
        }
    }

    pub fn get(&self, role: Role) -> Rgb {
        *self.slot(role)
    }

    pub fn set(&mut self, role: Role, color: Rgb) {
        *self.slot_mut(role) = color;
    }

    /// Iterate `(role, color)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Role, Rgb)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// Role names mapped to `#rrggbb` strings
    pub fn to_hex_map(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(role, color)| (role.as_str(), color.to_hex()))
            .collect()
    }

    fn slot(&self, role: Role) -> &Rgb {
        match role {
            Role::Text => &self.text,
            Role::Background => &self.background,
            Role::Primary => &self.primary,
            Role::Container => &self.container,
            Role::Accent => &self.accent,
            Role::Success => &self.success,
            Role::Error => &self.error,
            Role::Warning => &self.warning,
            Role::OnPrimary => &self.on_primary,
            Role::OnContainer => &self.on_container,
            Role::OnAccent => &self.on_accent,
            Role::OnSuccess => &self.on_success,
            Role::OnError => &self.on_error,
            Role::OnWarning => &self.on_warning,
            Role::Border => &self.border,
            Role::Muted => &self.muted,
            Role::Ring => &self.ring,
        }
    }

    fn slot_mut(&mut self, role: Role) -> &mut Rgb {
        match role {
            Role::Text => &mut self.text,
            Role::Background => &mut self.background,
            Role::Primary => &mut self.primary,
            Role::Container => &mut self.container,
            Role::Accent => &mut self.accent,
            Role::Success => &mut self.success,
            Role::Error => &mut self.error,
            Role::Warning => &mut self.warning,
            Role::OnPrimary => &mut self.on_primary,
            Role::OnContainer => &mut self.on_container,
            Role::OnAccent => &mut self.on_accent,
            Role::OnSuccess => &mut self.on_success,
            Role::OnError => &mut self.on_error,
            Role::OnWarning => &mut self.on_warning,
            Role::Border => &mut self.border,
            Role::Muted => &mut self.muted,
            Role::Ring => &mut self.ring,
        }
    }
}

/// User overrides the engines must preserve verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockedColors(BTreeMap<Role, Rgb>);

/// Roles whose current palette value is locked in place
pub type LockedRoles = BTreeSet<Role>;

impl LockedColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, role: Role, color: Rgb) -> Self {
        self.0.insert(role, color);
        self
    }

    pub fn insert(&mut self, role: Role, color: Rgb) -> Option<Rgb> {
        self.0.insert(role, color)
    }

    pub fn remove(&mut self, role: Role) -> Option<Rgb> {
        self.0.remove(&role)
    }

    pub fn get(&self, role: Role) -> Option<Rgb> {
        self.0.get(&role).copied()
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains_key(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, Rgb)> + '_ {
        self.0.iter().map(|(role, color)| (*role, *color))
    }

    /// The set of locked role names
    pub fn roles(&self) -> LockedRoles {
        self.0.keys().copied().collect()
    }

    /// Lock each of `roles` at its current value in `palette`
    pub fn from_palette(palette: &Palette, roles: &LockedRoles) -> Self {
        Self(roles.iter().map(|role| (*role, palette.get(*role))).collect())
    }
}

impl FromIterator<(Role, Rgb)> for LockedColors {
    fn from_iter<I: IntoIterator<Item = (Role, Rgb)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
