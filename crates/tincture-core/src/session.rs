// ABOUTME: Editing session owning a palette, its locks, mode and harmony
// ABOUTME: Applies typed theme updates and reports what changed as theme events

use rand::SeedableRng;
use rand::rngs::StdRng;
use tincture_events::{EventHandler, ThemeEvent, ThemeUpdate};
use tincture_types::{HarmonyMode, LockedColors, Palette, Rgb};
use tracing::debug;

use crate::derive::PaletteGenerator;

/// Mutable theme state driven by [`ThemeUpdate`]s
#[derive(Debug)]
pub struct ThemeSession {
    palette: Palette,
    locked: LockedColors,
    is_dark: bool,
    harmony: HarmonyMode,
    generator: PaletteGenerator,
    rng: StdRng,
}

impl ThemeSession {
    /// Start a session from a seed color.
    pub fn new(
        base: Rgb,
        is_dark: bool,
        locked: LockedColors,
        harmony: HarmonyMode,
        generator: PaletteGenerator,
    ) -> Self {
        let palette = generator.derive(base, is_dark, &locked, harmony);
        Self {
            palette,
            locked,
            is_dark,
            harmony,
            generator,
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a deterministic random source for regeneration
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn locked(&self) -> &LockedColors {
        &self.locked
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn harmony(&self) -> HarmonyMode {
        self.harmony
    }

    /// Apply one update and return the resulting events in order.
    pub fn apply(&mut self, update: ThemeUpdate) -> Vec<ThemeEvent> {
        let mut events = Vec::new();

        match update {
            ThemeUpdate::SetRole { role, color } => {
                let previous = self.palette.get(role);
                if previous != color {
                    self.palette.set(role, color);
                    events.push(ThemeEvent::RoleChanged {
                        role,
                        previous,
                        current: color,
                    });
                }
                if self.locked.insert(role, color).is_none() {
                    events.push(ThemeEvent::LockChanged { role, locked: true });
                }
            }
            ThemeUpdate::Lock { role } => {
                if !self.locked.contains(role) {
                    self.locked.insert(role, self.palette.get(role));
                    events.push(ThemeEvent::LockChanged { role, locked: true });
                }
            }
            ThemeUpdate::Unlock { role } => {
                if self.locked.remove(role).is_some() {
                    events.push(ThemeEvent::LockChanged {
                        role,
                        locked: false,
                    });
                }
            }
            ThemeUpdate::SetDarkMode { is_dark } => {
                if is_dark != self.is_dark {
                    let previous = self.palette;
                    self.palette = self
                        .generator
                        .adapt(&previous, is_dark, &self.locked.roles());
                    self.is_dark = is_dark;

                    events.push(ThemeEvent::ModeChanged { is_dark });
                    events.extend(role_changes(&previous, &self.palette));
                }
            }
            ThemeUpdate::SetHarmony { harmony } => {
                if harmony != self.harmony {
                    self.harmony = harmony;
                    events.push(ThemeEvent::HarmonyChanged { harmony });
                }
            }
            ThemeUpdate::Regenerate { seed } => {
                let (base, palette) = match seed {
                    Some(seed) => self.generator.regenerate(
                        self.is_dark,
                        &self.locked,
                        self.harmony,
                        &mut StdRng::seed_from_u64(seed),
                    ),
                    None => self.generator.regenerate(
                        self.is_dark,
                        &self.locked,
                        self.harmony,
                        &mut self.rng,
                    ),
                };
                self.palette = palette;
                events.push(ThemeEvent::PaletteRegenerated {
                    base,
                    palette: Box::new(palette),
                });
            }
        }

        debug!(?update, events = events.len(), "Applied theme update");
        events
    }

    /// Apply an update and forward each event to `handler`
    pub fn apply_with<H: EventHandler + ?Sized>(
        &mut self,
        update: ThemeUpdate,
        handler: &mut H,
    ) -> Vec<ThemeEvent> {
        let events = self.apply(update);
        for event in &events {
            handler.handle_theme(event);
        }
        events
    }
}

fn role_changes<'a>(
    previous: &'a Palette,
    current: &'a Palette,
) -> impl Iterator<Item = ThemeEvent> + 'a {
    previous
        .iter()
        .zip(current.iter())
        .filter(|((_, before), (_, after))| before != after)
        .map(|((role, before), (_, after))| ThemeEvent::RoleChanged {
            role,
            previous: before,
            current: after,
        })
}
