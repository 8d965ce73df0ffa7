//! Prometheus backend for translation metrics.
//!
//! ```rust
//! use std::sync::Arc;
//! use ferry_core::{FactoryContext, ServerInfo, TaskFactory, registry::ExecutorSettings};
//! use ferry_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let ctx = FactoryContext::new(ServerInfo::new("devcluster"), Arc::new(metrics.clone()));
//! let _factory = TaskFactory::new(Arc::new(ExecutorSettings::new(false)), ctx);
//!
//! // serve this from the scheduler's own /metrics endpoint
//! let _text = metrics.render()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `ferry_tasks_translated_total{container}` - Counter
//! - `ferry_translation_errors_total{container, error_kind}` - Counter
//! - `ferry_translation_duration_seconds{container}` - Histogram

mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
