// ABOUTME: Infers a base color for regeneration from the user's locked colors
// ABOUTME: Jitters the inferred hue through an injected random source

use rand::Rng;
use tincture_types::{HarmonyMode, LockedColors, Rgb, Role};

use crate::gamut::safe_chroma;
use crate::harmony::normalize_hue;
use crate::perceptual::{from_oklch, to_oklch};

/// Minimum OKLCH chroma for a locked color to carry a usable hue
pub const CHROMATIC_THRESHOLD: f64 = 0.01;

const PRIMARY_JITTER: f64 = 15.0;
const SECONDARY_JITTER: f64 = 25.0;

const BASE_LIGHTNESS: f64 = 0.6;
const BASE_VIBRANCY: f64 = 0.9;

/// Roles consulted after primary and accent, in order
const FALLBACK_ROLES: [Role; 3] = [Role::Background, Role::Text, Role::Container];

fn chromatic_hue(color: Rgb) -> Option<f64> {
    let lch = to_oklch(color);
    if lch.c > CHROMATIC_THRESHOLD {
        lch.h
    } else {
        None
    }
}

fn jitter<R: Rng + ?Sized>(hue: f64, amount: f64, rng: &mut R) -> f64 {
    normalize_hue(hue + rng.gen_range(-amount..=amount))
}

/// A vivid, in-gamut representative color for `hue`.
pub fn base_color_for_hue(hue: f64) -> Rgb {
    let hue = Some(normalize_hue(hue));
    from_oklch(
        BASE_LIGHTNESS,
        safe_chroma(BASE_LIGHTNESS, hue, BASE_VIBRANCY),
        hue,
    )
}

/// Infer a base color from the locked roles.
///
/// Tries the locked primary, then the locked accent walked back through the
/// harmony offset, then the first chromatic background, text or container.
/// Returns `None` when no locked color carries a hue. Pass a seeded RNG for
/// reproducible results.
pub fn derive_base_color_from_locks<R: Rng + ?Sized>(
    locked: &LockedColors,
    harmony: HarmonyMode,
    rng: &mut R,
) -> Option<Rgb> {
    let hue_of = |role: Role| locked.get(role).and_then(chromatic_hue);

    let hue = if let Some(h) = hue_of(Role::Primary) {
        jitter(h, PRIMARY_JITTER, rng)
    } else if let Some(h) = hue_of(Role::Accent) {
        jitter(h - harmony.offset_degrees(), SECONDARY_JITTER, rng)
    } else {
        let h = FALLBACK_ROLES.into_iter().find_map(hue_of)?;
        jitter(h, SECONDARY_JITTER, rng)
    };

    Some(base_color_for_hue(hue))
}
