use std::sync::Arc;

/// Metrics collection interface.
///
/// Labels passed by the factory are bounded:
/// - `container`: "mesos", "docker", "none"
/// - `error_kind`: see [`crate::TranslateError::kind`]
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record a launch message built successfully.
    ///
    /// `duration_us` covers the whole call, offer matching included.
    fn record_task_translated(&self, container: &str, duration_us: u64);

    /// Record a failed translation.
    fn record_translation_failed(&self, container: &str, error_kind: &str);
}

/// Shared handle to a metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
