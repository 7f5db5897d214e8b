// ABOUTME: Structured logging for the tincture crates, built on tracing
// ABOUTME: One-call setup plus process-wide level changes after startup

pub mod config;
pub mod layers;
pub mod performance;
pub mod reload;
pub mod subscriber;

pub use tracing::{Level, Span, debug, error, field, info, instrument, span, trace, warn};

use std::sync::OnceLock;

use anyhow::{Result, bail};

pub use config::{ConsoleFormat, LogFile, LogLevel, LoggingConfig};
pub use performance::PerfTimer;
pub use reload::LoggingReloadHandle;
pub use subscriber::{LoggingGuard, install};

static RELOAD: OnceLock<LoggingReloadHandle> = OnceLock::new();

/// Install the global subscriber described by `config`.
///
/// Keep the returned guard alive until exit so file output is flushed.
pub fn init_logging(config: LoggingConfig) -> Result<LoggingGuard> {
    let (handle, guard) = install(config)?;
    // install refuses a second subscriber, so the slot is always empty here
    let _ = RELOAD.set(handle);
    Ok(guard)
}

fn reload_handle() -> Result<&'static LoggingReloadHandle> {
    match RELOAD.get() {
        Some(handle) => Ok(handle),
        None => bail!("Logging has not been initialized"),
    }
}

pub fn set_level(level: Level) -> Result<()> {
    reload_handle()?.set_level(level)
}

pub fn set_target_level(target: &str, level: Level) -> Result<()> {
    reload_handle()?.set_target_level(target, level)
}

pub fn reload_from_env() -> Result<()> {
    reload_handle()?.reload_from_env()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_mock::{expect, subscriber};
    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::prelude::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_structured_fields_reach_subscriber() {
        let (subscriber, handle) = subscriber::mock()
            .event(
                expect::event().at_level(Level::INFO).with_fields(
                    expect::field("base")
                        .with_value(&"#3b82f6")
                        .and(expect::msg("Palette derived")),
                ),
            )
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            info!(base = "#3b82f6", "Palette derived");
        });

        handle.assert_finished();
    }

    #[test]
    fn test_plain_text_output_has_no_ansi() {
        let sink = Captured::default();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(sink.clone()),
        );

        tracing::subscriber::with_default(subscriber, || {
            warn!(role = "text", ratio = 6.2, "Contrast target not reached");
        });

        let text = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("Contrast target not reached"));
        assert!(text.contains("role=\"text\""));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_log_file_receives_records() {
        let dir = tempfile::tempdir().unwrap();
        let file = LogFile {
            path: dir.path().join("tincture.log"),
            keep: 1,
        };
        let (layer, guard) = layers::file_layer(&file).unwrap();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            error!(format = "css", "Export failed");
        });
        drop(guard);

        let written: String = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| std::fs::read_to_string(entry.ok()?.path()).ok())
            .collect();
        assert!(written.contains("Export failed"));
    }

    #[test]
    fn test_level_changes_need_initialized_logging() {
        if RELOAD.get().is_none() {
            assert!(set_level(Level::DEBUG).is_err());
            assert!(set_target_level("tincture_core", Level::TRACE).is_err());
            assert!(reload_from_env().is_err());
        }
    }
}
