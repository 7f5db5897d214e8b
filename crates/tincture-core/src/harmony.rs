// ABOUTME: Hue arithmetic for palette derivation
// ABOUTME: Normalization, the muddy yellow-green remap and harmony offsets

use std::f64::consts::PI;

use tincture_types::HarmonyMode;

/// Center of the hue band pushed aside by [`remap_hue`]
pub const MUDDY_HUE_CENTER: f64 = 110.0;
/// Half-width of the remapped window; the full window spans 40°
pub const MUDDY_HUE_HALF_WIDTH: f64 = 20.0;
/// Largest displacement applied at the center of the window
pub const MUDDY_HUE_MAX_SHIFT: f64 = 25.0;

/// Wrap a hue into `[0,360)`.
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}

/// Signed shortest angular distance from `from` to `to`, in `(-180,180]`.
fn signed_delta(from: f64, to: f64) -> f64 {
    let d = normalize_hue(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Push hues near 110° outward with a raised-cosine falloff.
///
/// Hues outside the 40° window are returned normalized but otherwise unchanged.
pub fn remap_hue(h: f64) -> f64 {
    let h = normalize_hue(h);
    let d = signed_delta(MUDDY_HUE_CENTER, h);
    if d.abs() >= MUDDY_HUE_HALF_WIDTH {
        return h;
    }
    let weight = 0.5 * (1.0 + (PI * d / MUDDY_HUE_HALF_WIDTH).cos());
    let direction = if d >= 0.0 { 1.0 } else { -1.0 };
    normalize_hue(h + direction * MUDDY_HUE_MAX_SHIFT * weight)
}

/// Accent hue for a given primary hue and harmony rule.
pub fn accent_hue(primary_hue: f64, mode: HarmonyMode) -> f64 {
    remap_hue(primary_hue + mode.offset_degrees())
}
