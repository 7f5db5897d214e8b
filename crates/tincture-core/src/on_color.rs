// ABOUTME: Picks a legible foreground for a surface color
// ABOUTME: Tints the foreground with the surface hue instead of using flat black or white

use tincture_types::Rgb;

use crate::contrast::{ContrastRatios, contrast_ratio};
use crate::gamut::safe_chroma;
use crate::perceptual::{from_oklch, to_oklch};

const LIGHT_START: f64 = 0.98;
const DARK_START: f64 = 0.12;
const STEP: f64 = 0.02;
const MAX_STEPS: usize = 30;
const TINT_VIBRANCY: f64 = 0.25;

/// Foreground color with at least 4.5:1 contrast against `bg`.
///
/// Starts near whichever extreme contrasts better (ties go to light) and walks
/// lightness toward the middle, returning the first candidate that passes.
/// Falls back to pure white or black.
pub fn pick_on_color(bg: Rgb) -> Rgb {
    let prefer_light = contrast_ratio(Rgb::WHITE, bg) >= contrast_ratio(Rgb::BLACK, bg);
    let hue = to_oklch(bg).h;
    let (start, step, fallback) = if prefer_light {
        (LIGHT_START, -STEP, Rgb::WHITE)
    } else {
        (DARK_START, STEP, Rgb::BLACK)
    };

    (0..MAX_STEPS)
        .map(|i| {
            let l = (start + step * i as f64).clamp(0.0, 1.0);
            from_oklch(l, safe_chroma(l, hue, TINT_VIBRANCY), hue)
        })
        .find(|candidate| contrast_ratio(*candidate, bg) >= ContrastRatios::AA_NORMAL)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_surface_gets_near_white() {
        let on = pick_on_color(Rgb::BLACK);
        assert!(contrast_ratio(on, Rgb::BLACK) >= 4.5);
        assert!(to_oklch(on).l > 0.9);
    }

    #[test]
    fn test_white_surface_gets_near_black() {
        let on = pick_on_color(Rgb::WHITE);
        assert!(contrast_ratio(on, Rgb::WHITE) >= 4.5);
        assert!(to_oklch(on).l < 0.3);
    }

    #[test]
    fn test_dark_foreground_is_tinted_with_surface_hue() {
        let surface = Rgb::new(0xdb, 0xea, 0xfe);
        let on = pick_on_color(surface);
        assert!(contrast_ratio(on, surface) >= 4.5);

        let on_lch = to_oklch(on);
        assert!(on_lch.l < 0.3);
        assert!(on_lch.c > 5e-3, "chroma {}", on_lch.c);
        let delta = (on_lch.h.unwrap() - to_oklch(surface).h.unwrap()).abs();
        assert!(delta < 10.0 || delta > 350.0, "hue delta {delta}");
    }

    #[test]
    fn test_light_foreground_is_tinted_not_flat_white() {
        // Near-white tints hold too little chroma for an exact hue after rounding
        let surface = Rgb::new(0x1d, 0x4e, 0xd8);
        let on = pick_on_color(surface);
        assert!(contrast_ratio(on, surface) >= 4.5);
        assert_ne!(on, Rgb::WHITE);
        assert!(!to_oklch(on).is_achromatic());
    }

    #[test]
    fn test_mid_tones_pass() {
        for hex in ["#3b82f6", "#22c55e", "#ef4444", "#eab308", "#808080", "#6d28d9"] {
            let surface = Rgb::from_hex(hex).unwrap();
            let on = pick_on_color(surface);
            assert!(contrast_ratio(on, surface) >= 4.5, "{hex} -> {on}");
        }
    }
}
