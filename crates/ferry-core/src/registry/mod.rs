//! Executor settings lookup.
//!
//! Executors are configured once at startup and read concurrently by every translation call.
use ferry_model::ResourceBag;
use ferry_proto::{ExecutorInfo, Volume};

mod config;
pub use config::{
    CommandConfig, ExecutorEntryConfig, ExecutorSettingsConfig, ExecutorTemplateConfig,
    ScalarConfig, UriConfig,
};

mod settings;
pub use settings::ExecutorSettings;

/// Everything needed to launch one kind of executor.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorDescriptor {
    /// Template copied into every launch message; identity and resources are overwritten per task.
    pub executor: ExecutorInfo,
    /// Mounts added to every image-backed container run by this executor.
    pub volume_mounts: Vec<Volume>,
    /// Prefix of externally visible executor ids: `<prefix><task-id>`.
    pub task_prefix: String,
    /// Resources consumed by the executor process itself.
    pub overhead: ResourceBag,
}

/// Read-only view over configured executors.
pub trait ExecutorRegistry: Send + Sync {
    fn by_name(&self, name: &str) -> Option<&ExecutorDescriptor>;

    /// Executor for native containers that do not name one.
    fn default_executor(&self) -> Option<&ExecutorDescriptor> {
        None
    }

    fn overhead_by_name(&self, name: &str) -> Option<ResourceBag> {
        self.by_name(name).map(|d| d.overhead)
    }

    /// Whether launch messages carry a service-discovery record.
    fn discovery_enabled(&self) -> bool;
}
