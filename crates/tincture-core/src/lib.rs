// ABOUTME: Palette derivation and accessibility-aware color adaptation
// ABOUTME: Pure color engines; diagnostics flow through an injected observer

pub mod adapt;
pub mod audit;
pub mod contrast;
pub mod conversions;
pub mod derive;
pub mod export;
pub mod gamut;
pub mod harmony;
pub mod inference;
pub mod nudge;
pub mod observer;
pub mod on_color;
pub mod perceptual;
pub mod session;
pub mod tones;


// Engine exports
pub use adapt::adapt_colors_for_mode;
pub use derive::{PaletteGenerator, derive_palette};
pub use inference::derive_base_color_from_locks;
pub use nudge::{NudgeOutcome, nudge_for_contrast, nudge_with_outcome};
pub use on_color::pick_on_color;

// Measurement exports
pub use audit::{AuditReport, ContrastCheck, audit_palette};
pub use contrast::{ContrastRatios, WcagLevel, WcagResult, contrast_ratio, relative_luminance, wcag_result};
pub use gamut::{max_chroma_in_gamut, safe_chroma};
pub use perceptual::{MixSpace, Oklch, from_oklch, mix, to_oklch};

// Collaborators
pub use export::{ExportOptions, export_palette};
pub use observer::{CollectingObserver, DerivationObserver, Diagnostic, NoopObserver, TracingObserver};
pub use session::ThemeSession;

pub use tincture_types::{ColorError, Result};
