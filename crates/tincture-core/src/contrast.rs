// ABOUTME: WCAG relative luminance and contrast ratio calculations
// ABOUTME: Classifies color pairs against the AA and AAA thresholds

use serde::Serialize;
use tincture_types::Rgb;

/// WCAG contrast ratios for accessibility compliance
pub struct ContrastRatios;

impl ContrastRatios {
    pub const AAA_NORMAL: f64 = 7.0;
    pub const AA_NORMAL: f64 = 4.5;
    pub const AA_LARGE: f64 = 3.0;
}

/// sRGB channel to linear light, using the WCAG 2.x 0.03928 knee.
pub fn channel_to_linear(v: u8) -> f64 {
    let c = f64::from(v) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * channel_to_linear(color.r)
        + 0.7152 * channel_to_linear(color.g)
        + 0.0722 * channel_to_linear(color.b)
}

/// Contrast ratio between two colors, rounded to two decimal places.
///
/// Symmetric in its arguments and bounded by `1.0..=21.0`.
pub fn contrast_ratio(fg: Rgb, bg: Rgb) -> f64 {
    let l1 = relative_luminance(fg);
    let l2 = relative_luminance(bg);
    let ratio = (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05);
    (ratio * 100.0).round() / 100.0
}

/// Highest WCAG level a pair satisfies for normal-size text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WcagLevel {
    Fail,
    /// Passes only for large text
    Large,
    AA,
    AAA,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WcagResult {
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl WcagResult {
    pub fn level(&self) -> WcagLevel {
        if self.aaa_normal {
            WcagLevel::AAA
        } else if self.aa_normal {
            WcagLevel::AA
        } else if self.aa_large {
            WcagLevel::Large
        } else {
            WcagLevel::Fail
        }
    }
}

pub fn wcag_result(fg: Rgb, bg: Rgb) -> WcagResult {
    let ratio = contrast_ratio(fg, bg);
    WcagResult {
        ratio,
        aa_normal: ratio >= ContrastRatios::AA_NORMAL,
        aa_large: ratio >= ContrastRatios::AA_LARGE,
        aaa_normal: ratio >= ContrastRatios::AAA_NORMAL,
        aaa_large: ratio >= ContrastRatios::AA_NORMAL,
    }
}
