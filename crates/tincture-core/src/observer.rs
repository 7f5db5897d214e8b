// ABOUTME: Diagnostics collaborator injected into the palette generator
// ABOUTME: Keeps derivation free of logging; the tracing implementation lives here

use parking_lot::Mutex;
use tincture_types::{Palette, Rgb, Role};
use tracing::{debug, info, warn};

/// Receives diagnostics from derivation and adaptation.
///
/// Every method has a no-op default so implementors pick what they care about.
pub trait DerivationObserver: Send + Sync {
    /// A role could not reach its contrast target within the nudge budget
    fn contrast_shortfall(&self, _role: Role, _against: Role, _achieved: f64, _required: f64) {}

    /// A locked color was used verbatim
    fn lock_applied(&self, _role: Role, _color: Rgb) {}

    fn palette_derived(&self, _palette: &Palette, _is_dark: bool) {}
}

/// Discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl DerivationObserver for NoopObserver {}

/// Routes diagnostics through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DerivationObserver for TracingObserver {
    fn contrast_shortfall(&self, role: Role, against: Role, achieved: f64, required: f64) {
        warn!(
            role = %role,
            against = %against,
            achieved,
            required,
            "Contrast target not reached"
        );
    }

    fn lock_applied(&self, role: Role, color: Rgb) {
        debug!(role = %role, color = %color, "Using locked color");
    }

    fn palette_derived(&self, palette: &Palette, is_dark: bool) {
        info!(
            is_dark,
            primary = %palette.primary,
            background = %palette.background,
            "Palette derived"
        );
    }
}

/// A diagnostic captured by [`CollectingObserver`]
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    ContrastShortfall {
        role: Role,
        against: Role,
        achieved: f64,
        required: f64,
    },
    LockApplied {
        role: Role,
        color: Rgb,
    },
    PaletteDerived {
        is_dark: bool,
    },
}

/// Records diagnostics in memory for later inspection
#[derive(Debug, Default)]
pub struct CollectingObserver {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    pub fn shortfalls(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .iter()
            .filter(|d| matches!(d, Diagnostic::ContrastShortfall { .. }))
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.diagnostics.lock().clear();
    }
}

impl DerivationObserver for CollectingObserver {
    fn contrast_shortfall(&self, role: Role, against: Role, achieved: f64, required: f64) {
        self.diagnostics.lock().push(Diagnostic::ContrastShortfall {
            role,
            against,
            achieved,
            required,
        });
    }

    fn lock_applied(&self, role: Role, color: Rgb) {
        self.diagnostics
            .lock()
            .push(Diagnostic::LockApplied { role, color });
    }

    fn palette_derived(&self, _palette: &Palette, is_dark: bool) {
        self.diagnostics
            .lock()
            .push(Diagnostic::PaletteDerived { is_dark });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_mock::{expect, subscriber};

    #[test]
    fn test_tracing_observer_warns_on_shortfall() {
        let (subscriber, handle) = subscriber::mock()
            .event(
                expect::event()
                    .at_level(tracing::Level::WARN)
                    .with_fields(expect::msg("Contrast target not reached")),
            )
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            TracingObserver.contrast_shortfall(Role::Warning, Role::Background, 2.4, 3.0);
        });

        handle.assert_finished();
    }

    #[test]
    fn test_collecting_observer_records_in_order() {
        let observer = CollectingObserver::new();
        observer.lock_applied(Role::Primary, Rgb::new(1, 2, 3));
        observer.contrast_shortfall(Role::Accent, Role::Background, 2.0, 3.0);

        let diagnostics = observer.diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert!(matches!(
            diagnostics[0],
            Diagnostic::LockApplied {
                role: Role::Primary,
                ..
            }
        ));
        assert_eq!(observer.shortfalls().len(), 1);

        observer.clear();
        assert!(observer.diagnostics().is_empty());
    }
}
