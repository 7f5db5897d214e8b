// ABOUTME: Walks a color's OKLCH lightness until it meets a contrast target
// ABOUTME: Bounded best-effort search that holds chroma and hue fixed

use serde::Serialize;
use tincture_types::Rgb;

use crate::contrast::{contrast_ratio, relative_luminance};
use crate::perceptual::{from_oklch, to_oklch};

/// Lightness change per step
pub const NUDGE_STEP: f64 = 0.03;

/// Steps attempted before settling for the most extreme candidate
pub const NUDGE_MAX_STEPS: usize = 25;

/// Result of a contrast nudge, including whether the target was reached
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NudgeOutcome {
    pub color: Rgb,
    /// Contrast of `color` against the reference
    pub ratio: f64,
    pub satisfied: bool,
    /// Lightness steps taken; 0 when the input already passed
    pub steps: usize,
}

/// Adjust `color` until it reaches `min_ratio` against `against`, or return the last candidate.
pub fn nudge_for_contrast(color: Rgb, against: Rgb, min_ratio: f64) -> Rgb {
    nudge_with_outcome(color, against, min_ratio).color
}

pub fn nudge_with_outcome(color: Rgb, against: Rgb, min_ratio: f64) -> NudgeOutcome {
    let initial = contrast_ratio(color, against);
    if initial >= min_ratio {
        return NudgeOutcome {
            color,
            ratio: initial,
            satisfied: true,
            steps: 0,
        };
    }

    let lch = to_oklch(color);
    // Light references push the candidate darker, dark ones push it lighter
    let direction = if relative_luminance(against) > 0.5 {
        -1.0
    } else {
        1.0
    };

    let mut outcome = NudgeOutcome {
        color,
        ratio: initial,
        satisfied: false,
        steps: 0,
    };

    for step in 1..=NUDGE_MAX_STEPS {
        let l = (lch.l + direction * NUDGE_STEP * step as f64).clamp(0.0, 1.0);
        let candidate = from_oklch(l, lch.c, lch.h);
        let ratio = contrast_ratio(candidate, against);

        outcome = NudgeOutcome {
            color: candidate,
            ratio,
            satisfied: ratio >= min_ratio,
            steps: step,
        };
        if outcome.satisfied {
            break;
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_color_is_untouched() {
        let color = Rgb::new(0x11, 0x18, 0x27);
        let outcome = nudge_with_outcome(color, Rgb::WHITE, 7.0);
        assert_eq!(outcome.color, color);
        assert_eq!(outcome.steps, 0);
        assert!(outcome.satisfied);
    }

    #[test]
    fn test_gray_on_white_converges() {
        let result = nudge_for_contrast(Rgb::new(0xaa, 0xaa, 0xaa), Rgb::WHITE, 3.0);
        assert!(contrast_ratio(result, Rgb::WHITE) >= 3.0);
        // Darkened, not lightened
        assert!(result.r < 0xaa);
    }

    #[test]
    fn test_dark_reference_pushes_lighter() {
        let background = Rgb::new(0x12, 0x12, 0x1a);
        let outcome = nudge_with_outcome(Rgb::new(0x30, 0x40, 0x90), background, 4.5);
        assert!(outcome.satisfied);
        assert!(outcome.steps > 0);
        assert!(to_oklch(outcome.color).l > to_oklch(Rgb::new(0x30, 0x40, 0x90)).l);
    }

    #[test]
    fn test_unreachable_target_returns_last_candidate() {
        // Mid gray can never reach 21:1 against anything but its opposite extreme
        let outcome = nudge_with_outcome(Rgb::new(0x80, 0x80, 0x80), Rgb::new(0x80, 0x80, 0x80), 21.0);
        assert!(!outcome.satisfied);
        assert_eq!(outcome.steps, NUDGE_MAX_STEPS);
        assert!(outcome.ratio < 21.0);
    }

    #[test]
    fn test_hue_is_held() {
        let color = Rgb::new(0x3b, 0x82, 0xf6);
        let outcome = nudge_with_outcome(color, Rgb::WHITE, 4.5);
        assert!(outcome.satisfied);
        let before = to_oklch(color).h.unwrap();
        let after = to_oklch(outcome.color).h.unwrap();
        assert!((before - after).abs() < 6.0, "hue drifted {before} -> {after}");
    }
}
