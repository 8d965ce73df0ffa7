use serde::{Deserialize, Serialize};

use crate::{Container, ExecutorConfig, FetcherUri, JobKey, Metadata, ResourceRequest};

/// Resource-manager-agnostic description of what a task runs.
///
/// Shared by all instances of a job; the per-instance part lives in [`crate::AssignedTask`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskConfig {
    /// Owning job.
    pub job: JobKey,

    /// Executor selection and payload.
    ///
    /// Required for native containers. Legacy containers may run without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executor_config: Option<ExecutorConfig>,

    /// Container strategy.
    ///
    /// `None` only when the stored description predates container support or is corrupt;
    /// such tasks cannot be launched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,

    /// Requested resources.
    pub resources: ResourceRequest,

    /// Free-form metadata exported as labels.
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,

    /// Tier name (e.g. "preferred", "revocable").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,

    /// Artifacts fetched into the sandbox before launch.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fetcher_uris: Vec<FetcherUri>,

    /// Grace period between the polite and the forced kill, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kill_grace_period_ms: Option<u64>,
}

impl TaskConfig {
    /// Minimal config: no executor, no container, no metadata.
    pub fn new(job: JobKey, resources: ResourceRequest) -> Self {
        Self {
            job,
            executor_config: None,
            container: None,
            resources,
            metadata: Metadata::new(),
            tier: None,
            fetcher_uris: Vec::new(),
            kill_grace_period_ms: None,
        }
    }

    pub fn with_container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_executor(mut self, executor: ExecutorConfig) -> Self {
        self.executor_config = Some(executor);
        self
    }

    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    /// Name of the configured executor (if any).
    pub fn executor_name(&self) -> Option<&str> {
        self.executor_config.as_ref().map(|e| e.name.as_str())
    }

    /// Container kind as a static string; `"none"` when unset.
    pub fn container_kind(&self) -> &'static str {
        self.container.as_ref().map_or("none", Container::kind)
    }
}
