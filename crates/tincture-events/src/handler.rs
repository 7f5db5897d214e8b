// ABOUTME: Receiving side of theme events
// ABOUTME: Sessions push events into any EventHandler without knowing the consumer

use crate::theme::Event as ThemeEvent;

pub trait EventHandler {
    fn handle_theme(&mut self, _event: &ThemeEvent) {}
}

/// Collects every handled event in order
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<ThemeEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ThemeEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventHandler for EventLog {
    fn handle_theme(&mut self, event: &ThemeEvent) {
        self.events.push(event.clone());
    }
}
