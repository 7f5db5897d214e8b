// ABOUTME: Mode adaptation engine re-deriving an existing palette for light or dark mode
// ABOUTME: Keeps each role's hue and the locked roles while retargeting lightness

use tincture_types::{LockedColors, LockedRoles, Palette, Role};

use crate::derive::{PaletteGenerator, RoleHues};
use crate::perceptual::to_oklch;
use crate::tones::default_state_hue;

impl PaletteGenerator {
    /// Re-derive `current` for the target mode without its original base color.
    ///
    /// Roles in `locked_roles` keep their current value exactly. Neutral roles
    /// stay neutral; neutral status colors fall back to their default hues.
    pub fn adapt(
        &self,
        current: &Palette,
        target_is_dark: bool,
        locked_roles: &LockedRoles,
    ) -> Palette {
        let locked = LockedColors::from_palette(current, locked_roles);
        let hue = |role: Role| to_oklch(current.get(role)).h;
        let state_hue = |role: Role| hue(role).or(default_state_hue(role)).unwrap_or(0.0);

        let hues = RoleHues {
            text: hue(Role::Text),
            background: hue(Role::Background),
            primary: hue(Role::Primary),
            container: hue(Role::Container),
            accent: hue(Role::Accent),
            success: state_hue(Role::Success),
            error: state_hue(Role::Error),
            warning: state_hue(Role::Warning),
        };
        self.finish(&hues, target_is_dark, &locked)
    }
}

/// Adapt with default vibrancy and no diagnostics.
pub fn adapt_colors_for_mode(
    current: &Palette,
    target_is_dark: bool,
    locked_roles: &LockedRoles,
) -> Palette {
    PaletteGenerator::default().adapt(current, target_is_dark, locked_roles)
}
