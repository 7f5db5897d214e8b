// ABOUTME: Builds the tracing layers behind each configured output
// ABOUTME: Console records go to stderr so palette output on stdout stays pipeable

use std::fs;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::config::{ConsoleFormat, LogFile, LoggingConfig};

pub type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Stderr layer for `format`, or `None` when console output is off.
pub fn console_layer<S>(format: ConsoleFormat) -> Option<BoxedLayer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let base = fmt::layer().with_writer(std::io::stderr).with_target(true);
    let layer = match format {
        ConsoleFormat::Off => return None,
        ConsoleFormat::Compact => base.compact().boxed(),
        ConsoleFormat::Pretty => base.pretty().with_span_events(FmtSpan::CLOSE).boxed(),
        ConsoleFormat::Json => base
            .json()
            .with_current_span(true)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
    };
    Some(layer)
}

/// Plain-text layer writing to a daily-rotated file.
///
/// Records are written on a background thread; keep the guard alive until exit.
pub fn file_layer<S>(file: &LogFile) -> Result<(BoxedLayer<S>, WorkerGuard)>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let name = file
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Log path {} has no file name", file.path.display()))?;
    let directory = match file.path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => std::env::current_dir().context("Failed to resolve working directory")?,
    };
    fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .max_log_files(file.keep.max(1))
        .build(&directory)
        .context("Failed to open rolling log file")?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .boxed();
    Ok((layer, guard))
}

/// Level filter built from the global level and per-target directives.
pub fn level_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directives = config.directives();
    EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter `{directives}`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::Registry;

    #[test]
    fn test_console_formats() {
        assert!(console_layer::<Registry>(ConsoleFormat::Off).is_none());
        for format in [
            ConsoleFormat::Compact,
            ConsoleFormat::Pretty,
            ConsoleFormat::Json,
        ] {
            assert!(console_layer::<Registry>(format).is_some());
        }
    }

    #[test]
    fn test_file_layer_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = LogFile {
            path: dir.path().join("logs").join("tincture.log"),
            keep: 2,
        };
        let (_layer, _guard) = file_layer::<Registry>(&file).unwrap();
        assert!(dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_level_filter_includes_targets() {
        let config = LoggingConfig::default()
            .with_level(Level::INFO)
            .with_target("tincture_core", Level::TRACE);
        let rendered = level_filter(&config).unwrap().to_string().to_lowercase();
        assert!(rendered.contains("tincture_core=trace"));
        assert!(rendered.contains("info"));
    }
}
