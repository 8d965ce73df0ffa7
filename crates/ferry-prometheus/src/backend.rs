use std::sync::Arc;

use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
    proto::MetricFamily,
};

use ferry_core::MetricsBackend;

/// Prometheus implementation of [`MetricsBackend`].
///
/// Label cardinality is bounded:
/// - `container`: "mesos", "docker", "none"
/// - `error_kind`: "descriptor", "insufficient_resources", "encoding"
#[derive(Clone)]
pub struct PrometheusMetrics {
    translated: CounterVec,
    errors: CounterVec,
    duration: HistogramVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Register the translation metrics in `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let translated = CounterVec::new(
            Opts::new(
                "ferry_tasks_translated_total",
                "Launch messages built successfully",
            ),
            &["container"],
        )?;
        registry.register(Box::new(translated.clone()))?;

        let errors = CounterVec::new(
            Opts::new(
                "ferry_translation_errors_total",
                "Translation calls that produced no launch message",
            ),
            &["container", "error_kind"],
        )?;
        registry.register(Box::new(errors.clone()))?;

        // translation is CPU bound and normally finishes well under a millisecond
        let duration = HistogramVec::new(
            HistogramOpts::new(
                "ferry_translation_duration_seconds",
                "Time spent building one launch message",
            )
            .buckets(vec![0.000_05, 0.000_1, 0.000_5, 0.001, 0.005, 0.01, 0.05, 0.1]),
            &["container"],
        )?;
        registry.register(Box::new(duration.clone()))?;

        Ok(Self {
            translated,
            errors,
            duration,
            registry,
        })
    }

    /// Backend with a private registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Text exposition of everything in the registry.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_task_translated(&self, container: &str, duration_us: u64) {
        self.translated.with_label_values(&[container]).inc();
        self.duration
            .with_label_values(&[container])
            .observe(duration_us as f64 / 1_000_000.0);
    }

    fn record_translation_failed(&self, container: &str, error_kind: &str) {
        self.errors
            .with_label_values(&[container, error_kind])
            .inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferry_core::{
        FactoryContext, ServerInfo, TaskFactory, TranslateError, registry::ExecutorSettings,
    };
    use ferry_model::{
        AssignedTask, Container, DockerContainer, JobKey, ResourceRequest, TaskConfig,
    };
    use ferry_proto::{Offer, Resource, value};

    fn mk_offer(cpus: f64) -> Offer {
        let scalar = |name: &str, v: f64| Resource {
            name: name.into(),
            r#type: value::Type::Scalar as i32,
            scalar: Some(value::Scalar { value: v }),
            ..Default::default()
        };
        Offer {
            resources: vec![scalar("cpus", cpus), scalar("mem", 1024.0), scalar("disk", 1024.0)],
            ..Default::default()
        }
    }

    fn mk_task() -> AssignedTask {
        let cfg = TaskConfig::new(JobKey::new("r", "e", "n"), ResourceRequest::new(1.0, 64, 64))
            .with_container(Container::Docker(DockerContainer::new("nginx")));
        AssignedTask::new("t-1", 0, cfg)
    }

    #[test]
    fn records_successful_translation() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_task_translated("mesos", 120);
        metrics.record_task_translated("mesos", 80);
        metrics.record_task_translated("docker", 40);

        assert_eq!(metrics.translated.with_label_values(&["mesos"]).get(), 2.0);
        assert_eq!(metrics.translated.with_label_values(&["docker"]).get(), 1.0);
        assert_eq!(
            metrics
                .duration
                .with_label_values(&["mesos"])
                .get_sample_count(),
            2
        );
    }

    #[test]
    fn records_failures_by_kind() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_translation_failed("docker", "insufficient_resources");
        metrics.record_translation_failed("none", "descriptor");
        metrics.record_translation_failed("none", "descriptor");

        let families = metrics.gather();
        let errors = families
            .iter()
            .find(|f| f.name() == "ferry_translation_errors_total")
            .expect("errors counter not found");
        assert_eq!(errors.get_metric().len(), 2);
        assert_eq!(
            metrics
                .errors
                .with_label_values(&["none", "descriptor"])
                .get(),
            2.0
        );
    }

    #[test]
    fn render_contains_metric_names() {
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.record_task_translated("docker", 10);

        let text = metrics.render().unwrap();
        assert!(text.contains("ferry_tasks_translated_total{container=\"docker\"} 1"));
        assert!(text.contains("ferry_translation_duration_seconds_bucket"));
    }

    #[test]
    fn shared_registry_rejects_double_registration() {
        let registry = Arc::new(Registry::new());
        PrometheusMetrics::new_with_registry(registry.clone()).unwrap();
        assert!(PrometheusMetrics::new_with_registry(registry).is_err());
    }

    #[test]
    fn factory_reports_through_backend() {
        let metrics = PrometheusMetrics::new().unwrap();
        let ctx = FactoryContext::new(ServerInfo::new("devcluster"), Arc::new(metrics.clone()));
        let factory = TaskFactory::new(Arc::new(ExecutorSettings::new(false)), ctx);

        factory.create_from(&mk_task(), &mk_offer(2.0), false).unwrap();
        let err = factory
            .create_from(&mk_task(), &mk_offer(0.0), false)
            .unwrap_err();
        assert!(matches!(err, TranslateError::InsufficientResources(_)));

        assert_eq!(metrics.translated.with_label_values(&["docker"]).get(), 1.0);
        assert_eq!(
            metrics
                .errors
                .with_label_values(&["docker", "insufficient_resources"])
                .get(),
            1.0
        );
    }
}
