use ferry_model::{Container, InstanceId, TaskConfig};
use serde_json::Value;
use tracing::{debug, warn};

use super::{CommandResolver, ResolvedCommand};
use crate::constants::INSTANCE_BINDING;

/// JSON pointer of the command line inside an executor payload.
const CMDLINE_POINTER: &str = "/task/processes/0/cmdline";

/// Resolves the command line of the first process declared in the executor payload.
///
/// The payload is expected to be a JSON document of the form
/// `{"task": {"processes": [{"cmdline": "..."}]}}`. Every occurrence of `{{mesos.instance}}`
/// in the command line and in launch parameter values is replaced with the instance index.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandResolver;

impl ProcessCommandResolver {
    fn cmdline(data: &str) -> Option<String> {
        let doc: Value = match serde_json::from_str(data) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(error = %e, "executor payload is not valid JSON, running without a command");
                return None;
            }
        };
        let cmdline = doc.pointer(CMDLINE_POINTER).and_then(Value::as_str);
        if cmdline.is_none() {
            debug!("executor payload declares no process command line");
        }
        cmdline.map(str::to_owned)
    }
}

impl CommandResolver for ProcessCommandResolver {
    fn resolve(&self, task: &TaskConfig, instance: InstanceId) -> ResolvedCommand {
        let binding = instance.to_string();

        let command_line = task
            .executor_config
            .as_ref()
            .and_then(|e| Self::cmdline(&e.data))
            .map(|c| c.replace(INSTANCE_BINDING, &binding))
            .unwrap_or_default();

        let parameters = match &task.container {
            Some(Container::Docker(docker)) => docker
                .parameters
                .iter()
                .map(|p| p.with_value(p.value().replace(INSTANCE_BINDING, &binding)))
                .collect(),
            _ => Vec::new(),
        };

        ResolvedCommand {
            command_line,
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferry_model::{DockerContainer, ExecutorConfig, JobKey, KeyValue, ResourceRequest};

    fn mk_config(data: &str) -> TaskConfig {
        TaskConfig::new(JobKey::new("r", "e", "n"), ResourceRequest::new(1.0, 8, 8))
            .with_executor(ExecutorConfig::new("thermos", data))
    }

    #[test]
    fn resolves_first_process_with_instance_binding() {
        let data = r#"{"task":{"processes":[
            {"name":"hello","cmdline":"echo {{mesos.instance}} && sleep {{mesos.instance}}"},
            {"name":"other","cmdline":"ignored"}
        ]}}"#;

        let resolved = ProcessCommandResolver.resolve(&mk_config(data), 4);
        assert_eq!(resolved.command_line, "echo 4 && sleep 4");
        assert!(resolved.parameters.is_empty());
    }

    #[test]
    fn malformed_payload_resolves_to_empty_command() {
        let resolved = ProcessCommandResolver.resolve(&mk_config("not json"), 0);
        assert_eq!(resolved.command_line, "");

        let resolved = ProcessCommandResolver.resolve(&mk_config(r#"{"task":{}}"#), 0);
        assert_eq!(resolved.command_line, "");
    }

    #[test]
    fn missing_executor_resolves_to_empty_command() {
        let cfg = TaskConfig::new(JobKey::new("r", "e", "n"), ResourceRequest::default());
        assert_eq!(ProcessCommandResolver.resolve(&cfg, 1), ResolvedCommand::default());
    }

    #[test]
    fn docker_parameters_are_bound_in_order() {
        let cfg = mk_config("").with_container(Container::Docker(
            DockerContainer::new("img")
                .with_parameter("hostname", "web-{{mesos.instance}}")
                .with_parameter("env", "PLAIN=1"),
        ));

        let resolved = ProcessCommandResolver.resolve(&cfg, 7);
        assert_eq!(
            resolved.parameters,
            [
                KeyValue::new("hostname", "web-7"),
                KeyValue::new("env", "PLAIN=1"),
            ]
        );
    }
}
