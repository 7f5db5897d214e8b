// ABOUTME: Timing helpers for palette work, reported through tracing spans
// ABOUTME: PerfTimer records elapsed_ms on drop and warns past an optional budget

use std::time::{Duration, Instant};

use tracing::Span;

/// Debug-level span named `perf` carrying an `operation` field and an empty
/// `elapsed_ms` slot; extra fields follow the operation name.
#[macro_export]
macro_rules! perf_span {
    ($operation:expr $(, $($fields:tt)+)?) => {
        $crate::span!(
            $crate::Level::DEBUG,
            "perf",
            operation = $operation,
            elapsed_ms = $crate::field::Empty
            $(, $($fields)+)?
        )
    };
}

/// Evaluate a block under a [`PerfTimer`], optionally with a warning budget.
#[macro_export]
macro_rules! timed {
    ($operation:expr, budget: $budget:expr, $body:block) => {{
        let _timer = $crate::PerfTimer::new($operation).with_warn_threshold($budget);
        $body
    }};
    ($operation:expr, $body:block) => {{
        let _timer = $crate::PerfTimer::new($operation);
        $body
    }};
}

#[derive(Debug)]
pub struct PerfTimer {
    operation: &'static str,
    started: Instant,
    budget: Option<Duration>,
    span: Span,
}

impl PerfTimer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            started: Instant::now(),
            budget: None,
            span: perf_span!(operation),
        }
    }

    /// Warn on drop when the timed work runs longer than `budget`
    pub fn with_warn_threshold(mut self, budget: Duration) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stop the timer now instead of at scope end.
    pub fn finish(self) -> Duration {
        self.elapsed()
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        let elapsed_ms = elapsed.as_secs_f64() * 1e3;
        self.span.record("elapsed_ms", elapsed_ms);

        let Some(budget) = self.budget else { return };
        if elapsed > budget {
            tracing::warn!(
                parent: &self.span,
                operation = self.operation,
                elapsed_ms,
                budget_ms = budget.as_secs_f64() * 1e3,
                "Slow operation detected"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tracing_mock::{expect, subscriber};

    #[test]
    fn test_elapsed_grows() {
        let timer = PerfTimer::new("sleep");
        thread::sleep(Duration::from_millis(5));
        assert!(timer.elapsed() >= Duration::from_millis(5));
        assert!(timer.finish() >= Duration::from_millis(5));
    }

    #[test]
    fn test_timer_opens_perf_span() {
        let (subscriber, handle) = subscriber::mock()
            .new_span(
                expect::span()
                    .named("perf")
                    .with_fields(expect::field("operation").with_value(&"derive")),
            )
            .drop_span(expect::span().named("perf"))
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            drop(PerfTimer::new("derive"));
        });

        handle.assert_finished();
    }

    #[test]
    fn test_budget_overrun_warns() {
        let (subscriber, handle) = subscriber::mock()
            .new_span(expect::span().named("perf"))
            .event(
                expect::event()
                    .at_level(tracing::Level::WARN)
                    .with_fields(expect::msg("Slow operation detected")),
            )
            .drop_span(expect::span().named("perf"))
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            let _timer = PerfTimer::new("adapt").with_warn_threshold(Duration::from_millis(1));
            thread::sleep(Duration::from_millis(10));
        });

        handle.assert_finished();
    }

    #[test]
    fn test_timed_returns_block_value() {
        let ratio = timed!("ratio", { 21.0_f64 / 3.0 });
        assert_eq!(ratio, 7.0);

        let budgeted = timed!("budgeted", budget: Duration::from_secs(1), { "ok" });
        assert_eq!(budgeted, "ok");
    }

    #[test]
    fn test_perf_span_extra_fields() {
        let (subscriber, handle) = subscriber::mock()
            .new_span(
                expect::span().named("perf").with_fields(
                    expect::field("operation")
                        .with_value(&"audit")
                        .and(expect::field("checks").with_value(&12_i64)),
                ),
            )
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            let _span = perf_span!("audit", checks = 12_i64);
        });

        handle.assert_finished();
    }
}
