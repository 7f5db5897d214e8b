// ABOUTME: After-the-fact contrast audit of a complete palette
// ABOUTME: Reports every foreground/background pair against its WCAG target

use serde::Serialize;
use tincture_types::{Palette, Role};

use crate::contrast::{ContrastRatios, contrast_ratio};

/// One measured foreground/background pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastCheck {
    pub foreground: Role,
    pub background: Role,
    pub ratio: f64,
    pub required: f64,
    pub passes: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditReport {
    pub checks: Vec<ContrastCheck>,
}

impl AuditReport {
    pub fn is_compliant(&self) -> bool {
        self.checks.iter().all(|check| check.passes)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ContrastCheck> {
        self.checks.iter().filter(|check| !check.passes)
    }
}

fn check(palette: &Palette, foreground: Role, background: Role, required: f64) -> ContrastCheck {
    let ratio = contrast_ratio(palette.get(foreground), palette.get(background));
    ContrastCheck {
        foreground,
        background,
        ratio,
        required,
        passes: ratio >= required,
    }
}

/// Measure every contrast goal a derived palette aims for.
///
/// Derivation is best effort, so locked or pathological inputs can produce
/// palettes that fail here.
pub fn audit_palette(palette: &Palette) -> AuditReport {
    let on_pairs = Role::SURFACES.into_iter().filter_map(|surface| {
        surface
            .on_role()
            .map(|on| check(palette, on, surface, ContrastRatios::AA_NORMAL))
    });

    let text = std::iter::once(check(
        palette,
        Role::Text,
        Role::Background,
        ContrastRatios::AAA_NORMAL,
    ));

    let accents = [
        Role::Primary,
        Role::Accent,
        Role::Success,
        Role::Error,
        Role::Warning,
    ]
    .into_iter()
    .map(|role| check(palette, role, Role::Background, ContrastRatios::AA_LARGE));

    AuditReport {
        checks: on_pairs.chain(text).chain(accents).collect(),
    }
}
