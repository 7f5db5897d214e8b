// ABOUTME: Palette derivation engine turning a seed color into a full role palette
// ABOUTME: Honors locks, applies contrast nudges and reports diagnostics to an observer

use std::fmt;
use std::sync::Arc;

use rand::Rng;
use tincture_types::{
    GeneratorConfig, HarmonyMode, LockedColors, Palette, Rgb, Role, VibrancyOverrides,
};

use crate::contrast::{ContrastRatios, contrast_ratio};
use crate::gamut::safe_chroma;
use crate::harmony::{accent_hue, remap_hue};
use crate::inference::{base_color_for_hue, derive_base_color_from_locks};
use crate::nudge::nudge_with_outcome;
use crate::observer::{DerivationObserver, NoopObserver};
use crate::on_color::pick_on_color;
use crate::perceptual::{MixSpace, from_oklch, mix, to_oklch};
use crate::tones::{ERROR_HUE, SUCCESS_HUE, ToneTable, Vibrancy, WARNING_HUE};

/// Weight of the background when mixing `border` from text
pub const BORDER_MIX: f64 = 0.82;
/// Weight of the background when mixing `muted` from text
pub const MUTED_MIX: f64 = 0.55;

/// Hue assigned to each synthesized role; `None` yields a neutral color
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RoleHues {
    pub text: Option<f64>,
    pub background: Option<f64>,
    pub primary: Option<f64>,
    pub container: Option<f64>,
    pub accent: Option<f64>,
    pub success: f64,
    pub error: f64,
    pub warning: f64,
}

impl RoleHues {
    fn get(&self, role: Role) -> Option<f64> {
        match role {
            Role::Text => self.text,
            Role::Background => self.background,
            Role::Primary => self.primary,
            Role::Container => self.container,
            Role::Accent => self.accent,
            Role::Success => Some(self.success),
            Role::Error => Some(self.error),
            Role::Warning => Some(self.warning),
            _ => None,
        }
    }
}

/// Derives and adapts palettes.
///
/// Holds the vibrancy in effect and the observer that receives diagnostics.
/// Cheap to clone; the observer is shared.
#[derive(Clone)]
pub struct PaletteGenerator {
    vibrancy: Vibrancy,
    observer: Arc<dyn DerivationObserver>,
}

impl fmt::Debug for PaletteGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaletteGenerator")
            .field("vibrancy", &self.vibrancy)
            .finish_non_exhaustive()
    }
}

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteGenerator {
    pub fn new() -> Self {
        Self {
            vibrancy: Vibrancy::default(),
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new().with_vibrancy(&config.vibrancy)
    }

    pub fn with_vibrancy(mut self, overrides: &VibrancyOverrides) -> Self {
        self.vibrancy = Vibrancy::with_overrides(overrides);
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn DerivationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn vibrancy(&self) -> &Vibrancy {
        &self.vibrancy
    }

    /// Derive a complete palette from the hue of `base`.
    ///
    /// A neutral `base` has no hue to carry, so the base roles come out gray
    /// while the status colors keep their default hues.
    pub fn derive(
        &self,
        base: Rgb,
        is_dark: bool,
        locked: &LockedColors,
        harmony: HarmonyMode,
    ) -> Palette {
        let primary = to_oklch(base).h.map(remap_hue);
        let accent = primary.map(|h| accent_hue(h, harmony));

        let hues = RoleHues {
            text: primary,
            background: primary,
            primary,
            container: primary,
            accent,
            success: SUCCESS_HUE,
            error: ERROR_HUE,
            warning: WARNING_HUE,
        };
        self.finish(&hues, is_dark, locked)
    }

    /// Derive from a base inferred from `locked`, or from a random hue when no
    /// locked color carries one. Returns the base that was used.
    pub fn regenerate<R: Rng + ?Sized>(
        &self,
        is_dark: bool,
        locked: &LockedColors,
        harmony: HarmonyMode,
        rng: &mut R,
    ) -> (Rgb, Palette) {
        let base = derive_base_color_from_locks(locked, harmony, rng)
            .unwrap_or_else(|| base_color_for_hue(rng.gen_range(0.0..360.0)));
        (base, self.derive(base, is_dark, locked, harmony))
    }

    /// Shared tail of derivation and adaptation: synthesize, nudge, mix and pair.
    pub(crate) fn finish(&self, hues: &RoleHues, is_dark: bool, locked: &LockedColors) -> Palette {
        let tones = ToneTable::for_mode(is_dark);

        let synthesize = |role: Role| -> Rgb {
            if let Some(color) = locked.get(role) {
                return color;
            }
            let l = tones.for_role(role).unwrap_or(tones.primary);
            let vibrancy = self.vibrancy.for_role(role).unwrap_or(0.0);
            let hue = hues.get(role);
            from_oklch(l, safe_chroma(l, hue, vibrancy), hue)
        };

        let background = synthesize(Role::Background);
        let text = self.nudged(
            locked,
            Role::Text,
            synthesize(Role::Text),
            background,
            ContrastRatios::AAA_NORMAL,
        );
        let primary = self.nudged(
            locked,
            Role::Primary,
            synthesize(Role::Primary),
            background,
            ContrastRatios::AA_LARGE,
        );
        let container = synthesize(Role::Container);
        let accent = self.nudged(
            locked,
            Role::Accent,
            synthesize(Role::Accent),
            background,
            ContrastRatios::AA_LARGE,
        );

        let [success, error, warning] = Role::STATES.map(|role| {
            self.nudged(
                locked,
                role,
                synthesize(role),
                background,
                ContrastRatios::AA_LARGE,
            )
        });

        let border = locked
            .get(Role::Border)
            .unwrap_or_else(|| mix(text, background, BORDER_MIX, MixSpace::Oklab));
        let muted = locked
            .get(Role::Muted)
            .unwrap_or_else(|| mix(text, background, MUTED_MIX, MixSpace::Oklab));
        let ring = locked.get(Role::Ring).unwrap_or(primary);

        let mut palette = Palette {
            text,
            background,
            primary,
            container,
            accent,
            success,
            error,
            warning,
            on_primary: Rgb::WHITE,
            on_container: Rgb::WHITE,
            on_accent: Rgb::WHITE,
            on_success: Rgb::WHITE,
            on_error: Rgb::WHITE,
            on_warning: Rgb::WHITE,
            border,
            muted,
            ring,
        };

        for surface in Role::SURFACES {
            let Some(on_role) = surface.on_role() else {
                continue;
            };
            let color = match locked.get(on_role) {
                Some(color) => color,
                None => {
                    let bg = palette.get(surface);
                    let on = pick_on_color(bg);
                    let ratio = contrast_ratio(on, bg);
                    if ratio < ContrastRatios::AA_NORMAL {
                        self.observer.contrast_shortfall(
                            on_role,
                            surface,
                            ratio,
                            ContrastRatios::AA_NORMAL,
                        );
                    }
                    on
                }
            };
            palette.set(on_role, color);
        }

        for (role, color) in locked.iter() {
            self.observer.lock_applied(role, color);
        }
        self.observer.palette_derived(&palette, is_dark);

        palette
    }

    /// Nudge an unlocked role against the background, reporting any shortfall.
    fn nudged(
        &self,
        locked: &LockedColors,
        role: Role,
        color: Rgb,
        background: Rgb,
        min_ratio: f64,
    ) -> Rgb {
        if locked.contains(role) {
            return color;
        }
        let outcome = nudge_with_outcome(color, background, min_ratio);
        if !outcome.satisfied {
            self.observer
                .contrast_shortfall(role, Role::Background, outcome.ratio, min_ratio);
        }
        outcome.color
    }
}

/// Derive a palette with default vibrancy and no diagnostics.
pub fn derive_palette(
    base: Rgb,
    is_dark: bool,
    locked: &LockedColors,
    harmony: HarmonyMode,
) -> Palette {
    PaletteGenerator::default().derive(base, is_dark, locked, harmony)
}
