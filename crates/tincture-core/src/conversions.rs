// ABOUTME: Conversions between hex strings and the RGB, HSL and HSV color models
// ABOUTME: Pure functions; hex parsing comes in a lenient and a strict flavor

use tincture_types::{ColorError, Hsl, Hsv, Rgb};

/// Parse `#rrggbb` (case-insensitive, `#` optional), falling back to black on malformed input.
///
/// Use [`parse_hex`] wherever a typo should be reported instead of silently becoming black.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or(Rgb::BLACK)
}

/// Strict hex parsing.
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    Rgb::from_hex(hex)
}

pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

fn unit_channels(rgb: Rgb) -> (f64, f64, f64) {
    (
        f64::from(rgb.r) / 255.0,
        f64::from(rgb.g) / 255.0,
        f64::from(rgb.b) / 255.0,
    )
}

/// Hue in degrees shared by the HSL and HSV models; 0 for neutral colors.
fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let hue = sector * 60.0;
    if hue >= 360.0 { hue - 360.0 } else { hue }
}

/// Map chroma and hue back onto RGB, adding `m` to each channel.
fn from_hue_chroma(h: f64, chroma: f64, m: f64) -> Rgb {
    let h = h.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());

    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Rgb::from_channels((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
}

/// Exact HSL value; call [`Hsl::rounded`] for integer presentation.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = unit_channels(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hsl::new(
        hue_degrees(r, g, b, max, delta),
        (s * 100.0).clamp(0.0, 100.0),
        l * 100.0,
    )
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let s = (hsl.s / 100.0).clamp(0.0, 1.0);
    let l = (hsl.l / 100.0).clamp(0.0, 1.0);
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    from_hue_chroma(hsl.h, chroma, l - chroma / 2.0)
}

/// Exact HSV value; call [`Hsv::rounded`] for integer presentation.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = unit_channels(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv::new(hue_degrees(r, g, b, max, delta), s * 100.0, max * 100.0)
}

pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let s = (hsv.s / 100.0).clamp(0.0, 1.0);
    let v = (hsv.v / 100.0).clamp(0.0, 1.0);
    let chroma = v * s;
    from_hue_chroma(hsv.h, chroma, v - chroma)
}
