// ABOUTME: Bridge between 8-bit sRGB colors and the OKLab/OKLCH perceptual models
// ABOUTME: Wraps the palette crate with hue-undefined handling, mixing and gamut-clip detection

use palette::convert::FromColorUnclamped;
use palette::{Oklab, OklabHue, Srgb};
use serde::Serialize;
use tincture_types::Rgb;

/// Chroma below which a color is treated as neutral and its hue as undefined.
///
/// Exact grays land near 1e-8 and the faintest 8-bit tint near 1e-3, so the
/// cutoff sits well inside that gap.
pub const ACHROMATIC_CHROMA: f64 = 1e-4;

/// Slack allowed on each sRGB channel before a coordinate counts as clipped
const GAMUT_EPSILON: f64 = 1e-6;

/// An OKLCH coordinate; `h` is `None` for neutral colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Oklch {
    /// Perceived lightness in `[0,1]`
    pub l: f64,
    /// Chroma, roughly `[0, 0.4]` inside sRGB
    pub c: f64,
    /// Hue in degrees `[0,360)`
    pub h: Option<f64>,
}

impl Oklch {
    pub fn new(l: f64, c: f64, h: Option<f64>) -> Self {
        Self { l, c, h }
    }

    /// Hue with the neutral sentinel replaced by 0
    pub fn hue_or_zero(&self) -> f64 {
        self.h.unwrap_or(0.0)
    }

    pub fn is_achromatic(&self) -> bool {
        self.h.is_none()
    }

    fn from_palette(lch: palette::Oklch<f64>) -> Self {
        let chroma = lch.chroma.max(0.0);
        let hue = (chroma >= ACHROMATIC_CHROMA).then(|| lch.hue.into_positive_degrees());
        Self::new(lch.l, chroma, hue)
    }
}

/// Interpolation space for [`mix`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MixSpace {
    #[default]
    Oklab,
    Oklch,
    Srgb,
}

fn to_srgb(color: Rgb) -> Srgb<f64> {
    Srgb::new(color.r, color.g, color.b).into_format()
}

fn from_srgb(srgb: Srgb<f64>) -> Rgb {
    Rgb::from_channels(srgb.red * 255.0, srgb.green * 255.0, srgb.blue * 255.0)
}

fn palette_oklch(l: f64, c: f64, h: f64) -> palette::Oklch<f64> {
    palette::Oklch::new(l, c, OklabHue::from_degrees(h))
}

pub fn to_oklab(color: Rgb) -> Oklab<f64> {
    Oklab::from_color_unclamped(to_srgb(color))
}

pub fn to_oklch(color: Rgb) -> Oklch {
    Oklch::from_palette(palette::Oklch::from_color_unclamped(to_srgb(color)))
}

/// Build an sRGB color from OKLCH, clamping out-of-gamut channels. A `None` hue is treated as 0.
pub fn from_oklch(l: f64, c: f64, h: Option<f64>) -> Rgb {
    let lch = palette_oklch(l.clamp(0.0, 1.0), c.max(0.0), h.unwrap_or(0.0));
    from_srgb(Srgb::from_color_unclamped(lch))
}

fn from_oklab(lab: Oklab<f64>) -> Rgb {
    from_srgb(Srgb::from_color_unclamped(lab))
}

/// Whether the OKLCH coordinate falls outside the sRGB gamut.
pub fn is_clipped(l: f64, c: f64, h: f64) -> bool {
    let srgb: Srgb<f64> = Srgb::from_color_unclamped(palette_oklch(l, c, h));
    [srgb.red, srgb.green, srgb.blue]
        .iter()
        .any(|v| v.is_nan() || *v < -GAMUT_EPSILON || *v > 1.0 + GAMUT_EPSILON)
}

/// Interpolate from `a` toward `b`; `ratio` is the weight of `b`.
pub fn mix(a: Rgb, b: Rgb, ratio: f64, space: MixSpace) -> Rgb {
    let t = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let lerp = |x: f64, y: f64| x + (y - x) * t;

    match space {
        MixSpace::Srgb => Rgb::from_channels(
            lerp(f64::from(a.r), f64::from(b.r)),
            lerp(f64::from(a.g), f64::from(b.g)),
            lerp(f64::from(a.b), f64::from(b.b)),
        ),
        MixSpace::Oklab => {
            let (x, y) = (to_oklab(a), to_oklab(b));
            from_oklab(Oklab::new(lerp(x.l, y.l), lerp(x.a, y.a), lerp(x.b, y.b)))
        }
        MixSpace::Oklch => {
            let (x, y) = (to_oklch(a), to_oklch(b));
            let hue = match (x.h, y.h) {
                (Some(hx), Some(hy)) => {
                    let mut delta = hy - hx;
                    if delta > 180.0 {
                        delta -= 360.0;
                    } else if delta < -180.0 {
                        delta += 360.0;
                    }
                    Some((hx + delta * t).rem_euclid(360.0))
                }
                (Some(h), None) | (None, Some(h)) => Some(h),
                (None, None) => None,
            };
            from_oklch(lerp(x.l, y.l), lerp(x.c, y.c), hue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_and_black_extremes() {
        let white = to_oklch(Rgb::WHITE);
        assert!((white.l - 1.0).abs() < 1e-3);
        assert!(white.is_achromatic());

        let black = to_oklch(Rgb::BLACK);
        assert!(black.l.abs() < 1e-3);
        assert_eq!(black.h, None);
    }

    #[test]
    fn test_grays_have_no_hue() {
        for v in 0..=u8::MAX {
            let lch = to_oklch(Rgb::new(v, v, v));
            assert!(lch.is_achromatic(), "gray {v:#x} reported hue {:?}", lch.h);
            assert_eq!(lch.hue_or_zero(), 0.0);
        }
    }

    #[test]
    fn test_faint_tints_keep_their_hue() {
        // Near-white and near-black surfaces derived from a blue seed
        let light = to_oklch(Rgb::new(0xf8, 0xf8, 0xf9));
        assert!(light.c > 1e-3 && light.c < 2e-3, "chroma {}", light.c);
        let hue = light.h.unwrap();
        assert!((hue - 286.4).abs() < 3.0, "hue {hue}");

        let dark = to_oklch(Rgb::new(0x0c, 0x0d, 0x10));
        let hue = dark.h.unwrap();
        assert!((hue - 271.0).abs() < 3.0, "hue {hue}");

        for tint in [Rgb::new(0xff, 0xff, 0xfe), Rgb::new(0x00, 0x00, 0x01)] {
            assert!(!to_oklch(tint).is_achromatic(), "{tint}");
        }
    }

    #[test]
    fn test_blue_seed_coordinates() {
        let lch = to_oklch(Rgb::new(0x3b, 0x82, 0xf6));
        let hue = lch.h.unwrap();
        assert!((hue - 259.8).abs() < 2.0, "hue was {hue}");
        assert!((lch.l - 0.623).abs() < 0.01, "lightness was {}", lch.l);
    }

    #[test]
    fn test_from_oklch_round_trips_in_gamut_colors() {
        for color in [
            Rgb::new(0x3b, 0x82, 0xf6),
            Rgb::new(0x22, 0xc5, 0x5e),
            Rgb::new(0xef, 0x44, 0x44),
            Rgb::new(0x80, 0x80, 0x80),
        ] {
            let lch = to_oklch(color);
            assert_eq!(from_oklch(lch.l, lch.c, lch.h), color);
        }
    }

    #[test]
    fn test_from_oklch_clamps_out_of_gamut() {
        let rgb = from_oklch(0.7, 0.4, Some(140.0));
        // Channels were clamped rather than wrapped
        assert!(rgb.g > 200);
        assert!(is_clipped(0.7, 0.4, 140.0));
    }

    #[test]
    fn test_neutral_axis_is_never_clipped() {
        for l in [0.01, 0.25, 0.5, 0.75, 0.99] {
            assert!(!is_clipped(l, 0.0, 0.0));
        }
        assert!(is_clipped(0.5, 0.4, 30.0));
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Rgb::new(0x10, 0x20, 0x30);
        let b = Rgb::new(0xf0, 0xe0, 0xd0);
        for space in [MixSpace::Oklab, MixSpace::Oklch, MixSpace::Srgb] {
            assert_eq!(mix(a, b, 0.0, space), a);
            assert_eq!(mix(a, b, 1.0, space), b);
        }
    }

    #[test]
    fn test_oklab_mix_lightness_is_monotonic() {
        let dark = Rgb::new(0x1f, 0x29, 0x37);
        let light = Rgb::new(0xf9, 0xfa, 0xfb);
        let mut previous = to_oklch(dark).l;
        for step in 1..=10 {
            let l = to_oklch(mix(dark, light, f64::from(step) / 10.0, MixSpace::Oklab)).l;
            assert!(l >= previous - 1e-3);
            previous = l;
        }
    }

    #[test]
    fn test_oklch_mix_takes_short_arc_and_borrows_hue() {
        let red = from_oklch(0.6, 0.1, Some(350.0));
        let orange = from_oklch(0.6, 0.1, Some(30.0));
        let hue = to_oklch(mix(red, orange, 0.5, MixSpace::Oklch)).h.unwrap();
        assert!(hue < 20.0 || hue > 340.0, "mixed hue was {hue}");

        let gray = Rgb::new(0x80, 0x80, 0x80);
        let blended = to_oklch(mix(gray, orange, 0.5, MixSpace::Oklch));
        assert!((blended.h.unwrap() - 30.0).abs() < 5.0);
    }
}
