use crate::metrics::backend::MetricsBackend;

/// Metrics backend that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_task_translated(&self, _: &str, _: u64) {}

    #[inline(always)]
    fn record_translation_failed(&self, _: &str, _: &str) {}
}
