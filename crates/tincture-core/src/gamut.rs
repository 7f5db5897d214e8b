// ABOUTME: Maximum in-gamut chroma search for a given OKLCH lightness and hue
// ABOUTME: Scales that maximum by a vibrancy factor so synthesized colors never clip

use crate::perceptual::is_clipped;

/// Upper bound of the chroma search interval
pub const MAX_SEARCH_CHROMA: f64 = 0.4;

/// Bisection steps; precision is `MAX_SEARCH_CHROMA / 2^20`
pub const SEARCH_ITERATIONS: u32 = 20;

/// Largest chroma at `(l, h)` that stays inside sRGB.
///
/// Undefined hues and the lightness endpoints have no displayable chroma.
pub fn max_chroma_in_gamut(l: f64, h: Option<f64>) -> f64 {
    let Some(h) = h else {
        return 0.0;
    };
    if !(l > 0.0 && l < 1.0) || h.is_nan() {
        return 0.0;
    }

    let mut low = 0.0;
    let mut high = MAX_SEARCH_CHROMA;
    for _ in 0..SEARCH_ITERATIONS {
        let mid = (low + high) / 2.0;
        if is_clipped(l, mid, h) {
            high = mid;
        } else {
            low = mid;
        }
    }
    low
}

/// `max_chroma_in_gamut` scaled by `vibrancy`, clamped to `[0,1]`.
pub fn safe_chroma(l: f64, h: Option<f64>, vibrancy: f64) -> f64 {
    let vibrancy = if vibrancy.is_nan() {
        0.0
    } else {
        vibrancy.clamp(0.0, 1.0)
    };
    max_chroma_in_gamut(l, h) * vibrancy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_have_no_chroma() {
        for h in [0.0, 110.0, 259.0] {
            assert_eq!(max_chroma_in_gamut(0.0, Some(h)), 0.0);
            assert_eq!(max_chroma_in_gamut(1.0, Some(h)), 0.0);
        }
        assert_eq!(max_chroma_in_gamut(0.5, None), 0.0);
    }

    #[test]
    fn test_interior_values_are_bounded_and_in_gamut() {
        for l in [0.05, 0.2, 0.5, 0.75, 0.95] {
            for h in [0.0, 25.0, 70.0, 155.0, 259.0, 330.0] {
                let c = max_chroma_in_gamut(l, Some(h));
                assert!((0.0..=MAX_SEARCH_CHROMA).contains(&c));
                assert!(!is_clipped(l, c, h), "l={l} h={h} c={c}");
            }
        }
    }

    #[test]
    fn test_search_finds_the_boundary() {
        let c = max_chroma_in_gamut(0.6, Some(259.0));
        assert!(c > 0.1, "blue at mid lightness should be saturated, got {c}");
        assert!(is_clipped(0.6, c + 0.002, 259.0));
    }

    #[test]
    fn test_safe_chroma_scales_and_clamps_vibrancy() {
        let max = max_chroma_in_gamut(0.5, Some(155.0));
        assert!((safe_chroma(0.5, Some(155.0), 0.5) - max * 0.5).abs() < 1e-12);
        assert_eq!(safe_chroma(0.5, Some(155.0), 2.0), max);
        assert_eq!(safe_chroma(0.5, Some(155.0), -1.0), 0.0);
        assert_eq!(safe_chroma(0.5, None, 1.0), 0.0);
    }
}
