//! Per-instance command line resolution for legacy containers.
use ferry_model::{InstanceId, KeyValue, TaskConfig};

mod process;
pub use process::ProcessCommandResolver;

/// Command line and launch parameters with per-instance bindings applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedCommand {
    /// Empty when the task has no command of its own.
    pub command_line: String,
    /// Launch parameters in declaration order.
    pub parameters: Vec<KeyValue>,
}

/// Renders per-instance variable substitutions.
pub trait CommandResolver: Send + Sync {
    fn resolve(&self, task: &TaskConfig, instance: InstanceId) -> ResolvedCommand;
}
