use ferry_model::Volume;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TASK_PREFIX;

/// Executor settings document.
///
/// ```json
/// {
///   "populateDiscoveryInfo": true,
///   "executors": [{
///     "executor": {
///       "name": "thermos",
///       "command": {"value": "./thermos_executor.pex", "uris": [{"value": "/usr/share/thermos_executor.pex", "executable": true}]},
///       "resources": [{"name": "cpus", "value": 0.25}, {"name": "mem", "value": 128}]
///     },
///     "volumeMounts": [{"containerPath": "/etc/ssl", "hostPath": "/etc/ssl", "mode": "ro"}],
///     "taskPrefix": "thermos-"
///   }],
///   "defaultExecutor": "thermos"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorSettingsConfig {
    #[serde(default)]
    pub populate_discovery_info: bool,
    #[serde(default)]
    pub executors: Vec<ExecutorEntryConfig>,
    /// Executor attached to native containers whose task names none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_executor: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorEntryConfig {
    pub executor: ExecutorTemplateConfig,
    #[serde(default)]
    pub volume_mounts: Vec<Volume>,
    #[serde(default = "default_task_prefix")]
    pub task_prefix: String,
}

fn default_task_prefix() -> String {
    DEFAULT_TASK_PREFIX.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorTemplateConfig {
    pub name: String,
    pub command: CommandConfig,
    /// Executor overhead; only `cpus`, `mem` and `disk` are accepted.
    #[serde(default)]
    pub resources: Vec<ScalarConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub uris: Vec<UriConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<bool>,
    #[serde(default)]
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UriConfig {
    pub value: String,
    #[serde(default)]
    pub executable: bool,
    #[serde(default = "default_extract")]
    pub extract: bool,
    #[serde(default)]
    pub cache: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
}

fn default_extract() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarConfig {
    pub name: String,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_for_missing_fields() {
        let json = r#"{"executors":[{"executor":{"name":"x","command":{}}}]}"#;
        let cfg: ExecutorSettingsConfig = serde_json::from_str(json).unwrap();

        assert!(!cfg.populate_discovery_info);
        let entry = &cfg.executors[0];
        assert_eq!(entry.task_prefix, DEFAULT_TASK_PREFIX);
        assert!(entry.volume_mounts.is_empty());
        assert!(entry.executor.resources.is_empty());
        assert!(entry.executor.command.value.is_none());
    }

    #[test]
    fn uri_defaults() {
        let uri: UriConfig = serde_json::from_str(r#"{"value":"/bin/x"}"#).unwrap();
        assert!(!uri.executable);
        assert!(uri.extract);
        assert!(!uri.cache);
    }

    #[test]
    fn empty_document_is_valid() {
        let cfg: ExecutorSettingsConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.executors.is_empty());
    }
}
