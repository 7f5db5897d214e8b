// ABOUTME: Cross-crate event definitions for decoupled communication
// ABOUTME: Typed theme updates in, immutable theme events out

pub mod handler;
pub mod theme;

pub use handler::{EventHandler, EventLog};
pub use theme::{Event as ThemeEvent, ThemeUpdate};
